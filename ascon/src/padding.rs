//======================================================================
// ascon/src/padding.rs
// The padding rule of AD, message and hash absorption. `pad` is the
// byte-level form; the engines apply it lane by lane through
// `absorb_last`, which must agree with it.
//======================================================================

use crate::consts::WORD_BYTES;
use crate::state::{ByteOrder, State};
use alloc::vec::Vec;
use core::ops::Range;

/// The byte that opens the padding: `0x80` for big-endian words, `0x01` for
/// little-endian words. Either way it is the first bit after the data.
pub const fn marker(order: ByteOrder) -> u8 {
    match order {
        ByteOrder::BigEndian => 0x80,
        ByteOrder::LittleEndian => 0x01,
    }
}

/// Length after padding: the next multiple of `rate` strictly above `len`.
#[inline]
pub const fn padded_len(len: usize, rate: usize) -> usize {
    (len / rate + 1) * rate
}

/// Appends the marker byte and then zeros up to [`padded_len`].
///
/// Aligned input, the empty input included, gains a whole extra block.
/// Absorbing the result block by block leaves the same state as the
/// in-place lane padding the duplex and sponge use.
pub fn pad(data: &[u8], rate: usize, order: ByteOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(data.len(), rate));
    out.extend_from_slice(data);
    out.push(marker(order));
    out.resize(padded_len(data.len(), rate), 0);
    out
}

/// Bytes of a `len`-byte final block that fall into rate word `lane`.
#[inline]
pub(crate) fn lane_span(lane: usize, len: usize) -> Range<usize> {
    let start = (lane * WORD_BYTES).min(len);
    let end = ((lane + 1) * WORD_BYTES).min(len);
    start..end
}

/// Padding bits that rate word `lane` receives when the final block holds
/// `len` bytes. Exactly one lane of the block gets the marker.
#[inline]
pub(crate) fn lane_padding(order: ByteOrder, lane: usize, len: usize) -> u64 {
    let start = lane * WORD_BYTES;
    if (start..start + WORD_BYTES).contains(&len) {
        order.pad_word(len - start)
    } else {
        0
    }
}

/// XORs a full block into the rate words.
#[inline]
pub(crate) fn absorb_full(state: &mut State, block: &[u8], order: ByteOrder) {
    for (i, lane) in block.chunks_exact(WORD_BYTES).enumerate() {
        state[i] ^= order.load(lane);
    }
}

/// XORs a final block of fewer than `rate` bytes, plus its padding, into the
/// rate words.
#[inline]
pub(crate) fn absorb_last(state: &mut State, block: &[u8], rate_words: usize, order: ByteOrder) {
    let len = block.len();
    debug_assert!(len < rate_words * WORD_BYTES);
    for lane in 0..rate_words {
        state[lane] ^= order.load(&block[lane_span(lane, len)]) ^ lane_padding(order, lane, len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_becomes_one_padding_block() {
        assert_eq!(pad(&[], 8, ByteOrder::LittleEndian), [1, 0, 0, 0, 0, 0, 0, 0]);
        let p = pad(&[], 16, ByteOrder::BigEndian);
        assert_eq!(p.len(), 16);
        assert_eq!(p[0], 0x80);
        assert!(p[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn aligned_input_gains_a_full_block() {
        let data = [0xaau8; 16];
        let p = pad(&data, 8, ByteOrder::LittleEndian);
        assert_eq!(p.len(), 24);
        assert_eq!(&p[..16], &data);
        assert_eq!(p[16], 0x01);
        assert_eq!(padded_len(16, 16), 32);
    }

    #[test]
    fn partial_input_fills_to_next_boundary() {
        let p = pad(&[1, 2, 3], 8, ByteOrder::BigEndian);
        assert_eq!(p, [1, 2, 3, 0x80, 0, 0, 0, 0]);
        assert_eq!(padded_len(7, 8), 8);
        assert_eq!(padded_len(9, 16), 16);
    }

    #[test]
    fn only_one_lane_carries_the_marker() {
        for len in 0..16 {
            let marked = (0..2)
                .filter(|&lane| lane_padding(ByteOrder::LittleEndian, lane, len) != 0)
                .count();
            assert_eq!(marked, 1, "len {len}");
        }
        assert_eq!(lane_span(1, 5), 5..5);
        assert_eq!(lane_span(1, 12), 8..12);
    }

    #[test]
    fn absorb_last_matches_padded_bytes() {
        let data: Vec<u8> = (1..=16u8).collect();
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            for rate in [8, 16] {
                for len in 0..rate {
                    let mut direct = State::default();
                    absorb_last(&mut direct, &data[..len], rate / WORD_BYTES, order);

                    let mut via_pad = State::default();
                    absorb_full(&mut via_pad, &pad(&data[..len], rate, order), order);
                    assert_eq!(direct, via_pad, "{order:?} rate {rate} len {len}");
                }
            }
        }
    }
}
