//======================================================================
// ascon/src/duplex.rs
// The AEAD duplex: initialize -> associated data -> message -> finalize.
//
// One parameterized engine serves Ascon-128, Ascon-128a and
// Ascon-AEAD128; rate, rounds, IV and byte order come from the
// `ParameterSet`.
//======================================================================

use crate::consts::{KEY_SIZE, NONCE_SIZE, STATE_BYTES, TAG_SIZE, WORD_BYTES};
use crate::padding::{absorb_full, absorb_last, lane_padding, lane_span};
use crate::state::State;
use crate::variant::ParameterSet;

/// Loads `IV || key || nonce`, runs `a` rounds, then XORs the zero-padded
/// key into the state (words 3 and 4).
pub fn initialize(params: &ParameterSet, key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE]) -> State {
    let order = params.byte_order;
    let mut bytes = [0u8; STATE_BYTES];
    bytes[..WORD_BYTES].copy_from_slice(&order.store(params.iv()));
    bytes[WORD_BYTES..WORD_BYTES + KEY_SIZE].copy_from_slice(key);
    bytes[WORD_BYTES + KEY_SIZE..].copy_from_slice(nonce);

    let mut state = State::from_bytes(&bytes, order);
    zeroize::Zeroize::zeroize(&mut bytes);
    state.permute(params.a);

    state[3] ^= order.load(&key[..8]);
    state[4] ^= order.load(&key[8..]);
    state
}

/// Absorbs associated data, then flips the domain-separation bit of word 4.
///
/// Empty AD skips the block loop but still gets the separator.
pub fn absorb_ad(state: &mut State, params: &ParameterSet, ad: &[u8]) {
    let order = params.byte_order;
    if !ad.is_empty() {
        let mut blocks = ad.chunks_exact(params.rate);
        for block in &mut blocks {
            absorb_full(state, block, order);
            state.permute(params.b);
        }
        absorb_last(state, blocks.remainder(), params.rate_words(), order);
        state.permute(params.b);
    }
    state[4] ^= order.domain_separator();
}

/// Encrypts `buffer` in place. The final (possibly empty) block is padded
/// and absorbed but not followed by a permutation.
pub fn absorb_and_squeeze(state: &mut State, params: &ParameterSet, buffer: &mut [u8]) {
    let order = params.byte_order;
    let mut blocks = buffer.chunks_exact_mut(params.rate);
    for block in &mut blocks {
        for (i, lane) in block.chunks_exact_mut(WORD_BYTES).enumerate() {
            state[i] ^= order.load(lane);
            lane.copy_from_slice(&order.store(state[i]));
        }
        state.permute(params.b);
    }

    let last = blocks.into_remainder();
    let len = last.len();
    for i in 0..params.rate_words() {
        let lane = &mut last[lane_span(i, len)];
        let n = lane.len();
        state[i] ^= order.load(lane) ^ lane_padding(order, i, len);
        lane.copy_from_slice(&order.store(state[i])[..n]);
    }
}

/// Decrypts `buffer` in place. Full blocks overwrite the rate words with the
/// ciphertext; the final block keeps the state bytes past the ciphertext and
/// adds the padding marker, so the state ends exactly as encryption left it.
pub fn absorb_ciphertext(state: &mut State, params: &ParameterSet, buffer: &mut [u8]) {
    let order = params.byte_order;
    let mut blocks = buffer.chunks_exact_mut(params.rate);
    for block in &mut blocks {
        for (i, lane) in block.chunks_exact_mut(WORD_BYTES).enumerate() {
            let c = order.load(lane);
            lane.copy_from_slice(&order.store(state[i] ^ c));
            state[i] = c;
        }
        state.permute(params.b);
    }

    let last = blocks.into_remainder();
    let len = last.len();
    for i in 0..params.rate_words() {
        let lane = &mut last[lane_span(i, len)];
        let n = lane.len();
        let c = order.load(lane);
        lane.copy_from_slice(&order.store(state[i] ^ c)[..n]);
        state[i] = (state[i] & !order.prefix_mask(n)) ^ c ^ lane_padding(order, i, len);
    }
}

/// Tag derivation: key into the two words after the rate, `a` rounds, key
/// into words 3 and 4, emit words 3 and 4.
pub fn finalize(state: &mut State, params: &ParameterSet, key: &[u8; KEY_SIZE]) -> [u8; TAG_SIZE] {
    let order = params.byte_order;
    let k0 = order.load(&key[..8]);
    let k1 = order.load(&key[8..]);
    let w = params.rate_words();

    state[w] ^= k0;
    state[w + 1] ^= k1;
    state.permute(params.a);
    state[3] ^= k0;
    state[4] ^= k1;

    let mut tag = [0u8; TAG_SIZE];
    tag[..8].copy_from_slice(&order.store(state[3]));
    tag[8..].copy_from_slice(&order.store(state[4]));
    tag
}
