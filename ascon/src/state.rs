//======================================================================
// ascon/src/state.rs
// The 320-bit state and the byte <-> word conventions of each family.
//======================================================================

use crate::backends;
use crate::consts::{STATE_BYTES, STATE_WORDS, WORD_BYTES};
use core::ops::{Index, IndexMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// How bytes map onto state words.
///
/// The legacy Ascon v1.2 variants read words big-endian; the NIST SP 800-232
/// variants read them little-endian. The padding marker and the
/// domain-separation bit follow from the choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian,
    LittleEndian,
}

impl ByteOrder {
    /// Reads up to 8 bytes as a word; missing trailing bytes are zero.
    #[inline]
    pub fn load(self, bytes: &[u8]) -> u64 {
        debug_assert!(bytes.len() <= WORD_BYTES);
        let mut buf = [0u8; WORD_BYTES];
        buf[..bytes.len()].copy_from_slice(bytes);
        match self {
            Self::BigEndian => u64::from_be_bytes(buf),
            Self::LittleEndian => u64::from_le_bytes(buf),
        }
    }

    #[inline]
    pub fn store(self, word: u64) -> [u8; WORD_BYTES] {
        match self {
            Self::BigEndian => word.to_be_bytes(),
            Self::LittleEndian => word.to_le_bytes(),
        }
    }

    /// Word holding only the padding marker at byte position `pos` (< 8).
    #[inline]
    pub fn pad_word(self, pos: usize) -> u64 {
        debug_assert!(pos < WORD_BYTES);
        match self {
            Self::BigEndian => 0x80u64 << (56 - 8 * pos),
            Self::LittleEndian => 0x01u64 << (8 * pos),
        }
    }

    /// Word with `0xff` in the first `len` byte positions.
    #[inline]
    pub fn prefix_mask(self, len: usize) -> u64 {
        debug_assert!(len <= WORD_BYTES);
        if len == 0 {
            return 0;
        }
        match self {
            Self::BigEndian => u64::MAX << (64 - 8 * len),
            Self::LittleEndian => u64::MAX >> (64 - 8 * len),
        }
    }

    /// The bit XORed into word 4 between associated data and message.
    #[inline]
    pub fn domain_separator(self) -> u64 {
        match self {
            Self::BigEndian => 1,
            Self::LittleEndian => 1u64 << 63,
        }
    }
}

/// Five 64-bit words, owned by a single operation and wiped on drop.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct State([u64; STATE_WORDS]);

impl State {
    pub const fn new(words: [u64; STATE_WORDS]) -> Self {
        Self(words)
    }

    pub fn from_bytes(bytes: &[u8; STATE_BYTES], order: ByteOrder) -> Self {
        let mut words = [0u64; STATE_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(WORD_BYTES)) {
            *word = order.load(chunk);
        }
        Self(words)
    }

    pub fn to_bytes(&self, order: ByteOrder) -> [u8; STATE_BYTES] {
        let mut bytes = [0u8; STATE_BYTES];
        for (chunk, word) in bytes.chunks_exact_mut(WORD_BYTES).zip(self.0.iter()) {
            chunk.copy_from_slice(&order.store(*word));
        }
        bytes
    }

    /// Applies the last `rounds` rounds of the 12-round schedule.
    #[inline]
    pub fn permute(&mut self, rounds: usize) {
        backends::permutation(&mut self.0, rounds);
    }

    pub fn words(&self) -> &[u64; STATE_WORDS] {
        &self.0
    }
}

impl Index<usize> for State {
    type Output = u64;

    #[inline]
    fn index(&self, i: usize) -> &u64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for State {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut u64 {
        &mut self.0[i]
    }
}

impl core::fmt::Debug for State {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("State { .. }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_word_marks_the_byte_after_the_data() {
        let le = ByteOrder::LittleEndian;
        let be = ByteOrder::BigEndian;
        assert_eq!(le.store(le.pad_word(3)), [0, 0, 0, 0x01, 0, 0, 0, 0]);
        assert_eq!(be.store(be.pad_word(3)), [0, 0, 0, 0x80, 0, 0, 0, 0]);
        assert_eq!(le.store(le.pad_word(0))[0], 0x01);
        assert_eq!(be.store(be.pad_word(7))[7], 0x80);
    }

    #[test]
    fn prefix_mask_covers_leading_bytes() {
        for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
            for len in 0..=8 {
                let bytes = order.store(order.prefix_mask(len));
                assert!(bytes[..len].iter().all(|&b| b == 0xff));
                assert!(bytes[len..].iter().all(|&b| b == 0));
            }
        }
    }

    #[test]
    fn partial_load_zero_fills() {
        let le = ByteOrder::LittleEndian;
        assert_eq!(le.load(&[0xaa, 0xbb]), 0xbbaa);
        assert_eq!(ByteOrder::BigEndian.load(&[0xaa]), 0xaa00_0000_0000_0000);
        assert_eq!(le.load(&[]), 0);
    }

    #[test]
    fn state_bytes_roundtrip_per_order() {
        let mut bytes = [0u8; STATE_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let be = State::from_bytes(&bytes, ByteOrder::BigEndian);
        assert_eq!(be[0], 0x0001_0203_0405_0607);
        assert_eq!(be.to_bytes(ByteOrder::BigEndian), bytes);
        let le = State::from_bytes(&bytes, ByteOrder::LittleEndian);
        assert_eq!(le[0], 0x0706_0504_0302_0100);
    }
}
