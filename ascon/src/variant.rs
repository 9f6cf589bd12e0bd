//======================================================================
// ascon/src/variant.rs
// Parameter sets for every supported variant, selectable by name at
// runtime or by marker type at compile time.
//======================================================================

use crate::consts::{KEY_SIZE, WORD_BYTES};
use crate::error::{Error, Result};
use crate::state::ByteOrder;
use core::fmt;
use core::str::FromStr;

/// Which state machine a parameter set drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Aead,
    /// Fixed 256-bit digest.
    Hash,
    /// Caller-chosen output length.
    Xof,
}

/// How the 64-bit IV word is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IvRule {
    /// Ascon v1.2 AEAD: `[key bits, rate bits, a, b, 0, 0, 0, 0]`.
    LegacyAead,
    /// Ascon v1.2 hash/XOF: `[0, rate bits, a, a - b, digest bits (BE, 4 bytes)]`.
    LegacyHash,
    /// SP 800-232: `[version, 0, (b << 4) | a, tag bits (LE, 2 bytes), rate, 0, 0]`.
    Standard { version: u8 },
}

/// Immutable per-variant record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSet {
    pub name: &'static str,
    pub mode: Mode,
    /// Initialization/finalization rounds.
    pub a: usize,
    /// Intermediate rounds.
    pub b: usize,
    /// Bytes absorbed or squeezed per permutation call, 8 or 16.
    pub rate: usize,
    /// Tag bits for AEAD, digest bits for fixed hashes, 0 for XOFs.
    pub output_bits: usize,
    pub iv_rule: IvRule,
    pub byte_order: ByteOrder,
    pub customizable: bool,
}

impl ParameterSet {
    /// Number of state words covered by the rate.
    #[inline]
    pub const fn rate_words(&self) -> usize {
        self.rate / WORD_BYTES
    }

    /// The IV word, already in state-word form.
    pub fn iv(&self) -> u64 {
        let rounds = |x: usize| x as u8;
        let bytes: [u8; 8] = match self.iv_rule {
            IvRule::LegacyAead => [
                (KEY_SIZE * 8) as u8,
                (self.rate * 8) as u8,
                rounds(self.a),
                rounds(self.b),
                0,
                0,
                0,
                0,
            ],
            IvRule::LegacyHash => {
                let bits = (self.output_bits as u32).to_be_bytes();
                [
                    0,
                    (self.rate * 8) as u8,
                    rounds(self.a),
                    rounds(self.a - self.b),
                    bits[0],
                    bits[1],
                    bits[2],
                    bits[3],
                ]
            }
            IvRule::Standard { version } => {
                let bits = (self.output_bits as u16).to_le_bytes();
                [
                    version,
                    0,
                    (rounds(self.b) << 4) | rounds(self.a),
                    bits[0],
                    bits[1],
                    self.rate as u8,
                    0,
                    0,
                ]
            }
        };
        self.byte_order.load(&bytes)
    }

    /// Digest length in bytes for fixed-output hashes.
    pub const fn fixed_digest_len(&self) -> Option<usize> {
        match self.mode {
            Mode::Hash => Some(self.output_bits / 8),
            _ => None,
        }
    }
}

// --- Parameter table ---

pub const ASCON_128: ParameterSet = ParameterSet {
    name: "Ascon-128",
    mode: Mode::Aead,
    a: 12,
    b: 6,
    rate: 8,
    output_bits: 128,
    iv_rule: IvRule::LegacyAead,
    byte_order: ByteOrder::BigEndian,
    customizable: false,
};

pub const ASCON_128A: ParameterSet = ParameterSet {
    name: "Ascon-128a",
    b: 8,
    rate: 16,
    ..ASCON_128
};

pub const ASCON_AEAD128: ParameterSet = ParameterSet {
    name: "Ascon-AEAD128",
    mode: Mode::Aead,
    a: 12,
    b: 8,
    rate: 16,
    output_bits: 128,
    iv_rule: IvRule::Standard { version: 1 },
    byte_order: ByteOrder::LittleEndian,
    customizable: false,
};

pub const ASCON_HASH: ParameterSet = ParameterSet {
    name: "Ascon-Hash",
    mode: Mode::Hash,
    a: 12,
    b: 12,
    rate: 8,
    output_bits: 256,
    iv_rule: IvRule::LegacyHash,
    byte_order: ByteOrder::BigEndian,
    customizable: false,
};

pub const ASCON_HASHA: ParameterSet = ParameterSet {
    name: "Ascon-Hasha",
    b: 8,
    ..ASCON_HASH
};

pub const ASCON_XOF: ParameterSet = ParameterSet {
    name: "Ascon-XOF",
    mode: Mode::Xof,
    output_bits: 0,
    ..ASCON_HASH
};

pub const ASCON_XOFA: ParameterSet = ParameterSet {
    name: "Ascon-XOFa",
    b: 8,
    ..ASCON_XOF
};

pub const ASCON_HASH256: ParameterSet = ParameterSet {
    name: "Ascon-Hash256",
    mode: Mode::Hash,
    a: 12,
    b: 12,
    rate: 8,
    output_bits: 256,
    iv_rule: IvRule::Standard { version: 2 },
    byte_order: ByteOrder::LittleEndian,
    customizable: false,
};

pub const ASCON_XOF128: ParameterSet = ParameterSet {
    name: "Ascon-XOF128",
    mode: Mode::Xof,
    output_bits: 0,
    iv_rule: IvRule::Standard { version: 3 },
    ..ASCON_HASH256
};

pub const ASCON_CXOF128: ParameterSet = ParameterSet {
    name: "Ascon-CXOF128",
    iv_rule: IvRule::Standard { version: 4 },
    customizable: true,
    ..ASCON_XOF128
};

/// Every supported variant, by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Ascon128,
    Ascon128a,
    AsconAead128,
    AsconHash,
    AsconHasha,
    AsconXof,
    AsconXofa,
    AsconHash256,
    AsconXof128,
    AsconCxof128,
}

impl Variant {
    pub const ALL: [Variant; 10] = [
        Variant::Ascon128,
        Variant::Ascon128a,
        Variant::AsconAead128,
        Variant::AsconHash,
        Variant::AsconHasha,
        Variant::AsconXof,
        Variant::AsconXofa,
        Variant::AsconHash256,
        Variant::AsconXof128,
        Variant::AsconCxof128,
    ];

    pub const fn params(self) -> &'static ParameterSet {
        match self {
            Variant::Ascon128 => &ASCON_128,
            Variant::Ascon128a => &ASCON_128A,
            Variant::AsconAead128 => &ASCON_AEAD128,
            Variant::AsconHash => &ASCON_HASH,
            Variant::AsconHasha => &ASCON_HASHA,
            Variant::AsconXof => &ASCON_XOF,
            Variant::AsconXofa => &ASCON_XOFA,
            Variant::AsconHash256 => &ASCON_HASH256,
            Variant::AsconXof128 => &ASCON_XOF128,
            Variant::AsconCxof128 => &ASCON_CXOF128,
        }
    }

    pub const fn name(self) -> &'static str {
        self.params().name
    }

    pub const fn mode(self) -> Mode {
        self.params().mode
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or(Error::UnknownVariant)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// --- Compile-time variant selection ---

/// Marker for a variant usable through the typed AEAD API.
pub trait AeadVariant: Sized + Clone {
    const PARAMS: &'static ParameterSet;
}

/// Marker for a variant usable through the typed hash/XOF API.
pub trait SpongeVariant: Sized + Clone {
    const PARAMS: &'static ParameterSet;
}

/// Sponge variants with a fixed 32-byte digest.
pub trait FixedDigestVariant: SpongeVariant {}

macro_rules! marker {
    ($(#[$meta:meta])* $name:ident, $trait:ident, $params:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;
        impl $trait for $name {
            const PARAMS: &'static ParameterSet = &$params;
        }
    };
}

marker!(
    /// Ascon-128 (v1.2): rate 8, `b = 6`.
    Legacy128, AeadVariant, ASCON_128
);
marker!(
    /// Ascon-128a (v1.2): rate 16, `b = 8`.
    Legacy128a, AeadVariant, ASCON_128A
);
marker!(
    /// Ascon-AEAD128 (SP 800-232).
    Aead128, AeadVariant, ASCON_AEAD128
);
marker!(
    /// Ascon-Hash (v1.2): 256-bit digest, `b = 12`.
    LegacyHash, SpongeVariant, ASCON_HASH
);
marker!(
    /// Ascon-Hasha (v1.2): 256-bit digest, `b = 8`.
    LegacyHasha, SpongeVariant, ASCON_HASHA
);
marker!(
    /// Ascon-XOF (v1.2), `b = 12`.
    LegacyXof, SpongeVariant, ASCON_XOF
);
marker!(
    /// Ascon-XOFa (v1.2), `b = 8`.
    LegacyXofa, SpongeVariant, ASCON_XOFA
);
marker!(
    /// Ascon-Hash256 (SP 800-232).
    Hash256, SpongeVariant, ASCON_HASH256
);
marker!(
    /// Ascon-XOF128 (SP 800-232).
    Xof128, SpongeVariant, ASCON_XOF128
);
marker!(
    /// Ascon-CXOF128 (SP 800-232), customizable.
    Cxof128, SpongeVariant, ASCON_CXOF128
);

impl FixedDigestVariant for LegacyHash {}
impl FixedDigestVariant for LegacyHasha {}
impl FixedDigestVariant for Hash256 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_words_match_published_constants() {
        assert_eq!(ASCON_128.iv(), 0x8040_0c06_0000_0000);
        assert_eq!(ASCON_128A.iv(), 0x8080_0c08_0000_0000);
        assert_eq!(ASCON_AEAD128.iv(), 0x0000_1000_808c_0001);
        assert_eq!(ASCON_HASH.iv(), 0x0040_0c00_0000_0100);
        assert_eq!(ASCON_HASHA.iv(), 0x0040_0c04_0000_0100);
        assert_eq!(ASCON_XOF.iv(), 0x0040_0c00_0000_0000);
        assert_eq!(ASCON_XOFA.iv(), 0x0040_0c04_0000_0000);
        assert_eq!(ASCON_HASH256.iv(), 0x0000_0801_00cc_0002);
        assert_eq!(ASCON_XOF128.iv(), 0x0000_0800_00cc_0003);
        assert_eq!(ASCON_CXOF128.iv(), 0x0000_0800_00cc_0004);
    }

    #[test]
    fn names_roundtrip_through_from_str() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>(), Ok(v));
        }
        assert_eq!("ascon-128".parse::<Variant>(), Err(Error::UnknownVariant));
        assert_eq!("".parse::<Variant>(), Err(Error::UnknownVariant));
    }

    #[test]
    fn table_invariants() {
        for v in Variant::ALL {
            let p = v.params();
            assert!(p.rate == 8 || p.rate == 16, "{}", p.name);
            assert!((1..=12).contains(&p.a) && (1..=12).contains(&p.b));
            assert_eq!(p.customizable, v == Variant::AsconCxof128);
            if p.mode != Mode::Aead {
                assert_eq!(p.rate, 8);
            }
        }
        assert_eq!(ASCON_HASH256.fixed_digest_len(), Some(32));
        assert_eq!(ASCON_XOF128.fixed_digest_len(), None);
    }
}
