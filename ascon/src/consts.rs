//======================================================================
// ascon/src/consts.rs
// Permutation and mode constants shared by every variant.
//======================================================================

/// The 320-bit state is five 64-bit words.
pub const STATE_WORDS: usize = 5;

/// The internal state size in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 8;

/// Bytes per state word.
pub const WORD_BYTES: usize = 8;

/// Length of the full round-constant schedule.
pub const MAX_ROUNDS: usize = 12;

/// Round constants. A permutation of `n` rounds runs the LAST `n` entries.
pub const RC: [u64; MAX_ROUNDS] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Linear diffusion rotation pairs, one per state word.
pub const ROT: [(u32, u32); STATE_WORDS] = [(19, 28), (61, 39), (1, 6), (10, 17), (7, 41)];

/// Key, nonce and tag sizes of every AEAD variant.
pub const KEY_SIZE: usize = 16;
pub const NONCE_SIZE: usize = 16;
pub const TAG_SIZE: usize = 16;

/// Output length of the fixed-digest variants.
pub const DIGEST_SIZE: usize = 32;

/// Upper bound on the CXOF customization string.
pub const MAX_CUSTOMIZATION_BYTES: usize = 256;
