use crate::consts::{RC, STATE_WORDS};

#[inline(always)]
fn round(s: &mut [u64; STATE_WORDS], rc: u64) {
    let [mut x0, mut x1, mut x2, mut x3, mut x4] = *s;

    x2 ^= rc;

    x0 ^= x4;
    x4 ^= x3;
    x2 ^= x1;

    let t0 = !x0 & x1;
    let t1 = !x1 & x2;
    let t2 = !x2 & x3;
    let t3 = !x3 & x4;
    let t4 = !x4 & x0;

    x0 ^= t1;
    x1 ^= t2;
    x2 ^= t3;
    x3 ^= t4;
    x4 ^= t0;

    x1 ^= x0;
    x0 ^= x4;
    x3 ^= x2;
    x2 = !x2;

    x0 ^= x0.rotate_right(19) ^ x0.rotate_right(28);
    x1 ^= x1.rotate_right(61) ^ x1.rotate_right(39);
    x2 ^= x2.rotate_right(1) ^ x2.rotate_right(6);
    x3 ^= x3.rotate_right(10) ^ x3.rotate_right(17);
    x4 ^= x4.rotate_right(7) ^ x4.rotate_right(41);

    *s = [x0, x1, x2, x3, x4];
}

/// Straight-line Ascon permutation, one register per word.
#[inline]
pub(crate) fn permutation(state: &mut [u64; STATE_WORDS], rounds: usize) {
    for &rc in &RC[super::first_round(rounds)..] {
        round(state, rc);
    }
}
