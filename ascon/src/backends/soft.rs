use crate::consts::{RC, ROT, STATE_WORDS};

/// The Ascon permutation, table-driven over the five words.
///
/// Runs round indices `12 - rounds ..= 11`, so `rounds = 6` applies the
/// final six constants `0x96..0x4b`, never the first six.
#[inline]
pub(crate) fn permutation(state: &mut [u64; STATE_WORDS], rounds: usize) {
    for &rc in &RC[super::first_round(rounds)..] {
        // 1. Round constant
        state[2] ^= rc;

        // 2. Substitution layer, bitsliced across all five words
        state[0] ^= state[4];
        state[4] ^= state[3];
        state[2] ^= state[1];

        let mut t = [0u64; STATE_WORDS];
        for i in 0..STATE_WORDS {
            t[i] = !state[i] & state[(i + 1) % STATE_WORDS];
        }
        for i in 0..STATE_WORDS {
            state[i] ^= t[(i + 1) % STATE_WORDS];
        }

        state[1] ^= state[0];
        state[0] ^= state[4];
        state[3] ^= state[2];
        state[2] = !state[2];

        // 3. Linear diffusion
        for (word, &(r0, r1)) in state.iter_mut().zip(ROT.iter()) {
            *word ^= word.rotate_right(r0) ^ word.rotate_right(r1);
        }
    }
}
