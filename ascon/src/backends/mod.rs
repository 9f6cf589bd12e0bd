use cfg_if::cfg_if;

#[cfg_attr(feature = "unrolled", allow(dead_code))]
pub(crate) mod soft;
#[cfg(any(feature = "unrolled", test))]
pub(crate) mod unrolled;

cfg_if! {
    if #[cfg(feature = "unrolled")] {
        pub(crate) use unrolled::permutation;
    } else {
        pub(crate) use soft::permutation;
    }
}

/// First round index of an `n`-round permutation within the 12-round schedule.
/// Counts above 12 saturate to the full schedule; 0 runs no rounds.
#[inline(always)]
pub(crate) fn first_round(rounds: usize) -> usize {
    crate::consts::MAX_ROUNDS - rounds.min(crate::consts::MAX_ROUNDS)
}
