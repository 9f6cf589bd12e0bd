#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Ascon v1.2 and NIST SP 800-232 (Ascon-AEAD128, Ascon-Hash256,
//! Ascon-XOF128, Ascon-CXOF128) over one parameterized permutation and
//! duplex engine.
//!
//! Two ways in:
//! - by name at runtime: [`aead::encrypt`], [`aead::decrypt`], [`sponge::hash`]
//!   with a [`Variant`];
//! - by type through the RustCrypto traits: [`AsconAead128`] and friends
//!   implement `AeadInPlace`, [`AsconHash256`] implements `Digest`,
//!   [`AsconXof128`] implements `ExtendableOutput`.

//======================================================================
// ascon/src/lib.rs
// Crate entry point: module layout, re-exports and variant aliases.
//======================================================================

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// --- Module declarations ---
pub mod consts;
pub mod error;
pub mod log;
pub mod state;
mod backends;
pub mod variant;
pub mod padding;
pub mod duplex;
pub mod aead;
pub mod sponge;


pub use ::aead as aead_api;
pub use digest;

pub use crate::error::{Error, Result};
pub use crate::state::{ByteOrder, State};
pub use crate::variant::{Mode, ParameterSet, Variant};

use crate::variant::{
    Aead128, Cxof128, Hash256, Legacy128, Legacy128a, LegacyHash, LegacyHasha, LegacyXof,
    LegacyXofa, Xof128,
};
use ::digest::core_api::{CoreWrapper, XofReaderCoreWrapper};

/// Applies the last `rounds` rounds of the 12-round Ascon permutation to
/// raw state words.
///
/// `rounds` above 12 saturates to the full 12 rounds, in debug and release
/// builds alike; `rounds == 0` leaves the state unchanged.
#[inline]
pub fn permute(state: &mut [u64; consts::STATE_WORDS], rounds: usize) {
    backends::permutation(state, rounds);
}

// -- AEAD Aliases --
pub type Ascon128 = aead::AsconAead<Legacy128>;
pub type Ascon128a = aead::AsconAead<Legacy128a>;
pub type AsconAead128 = aead::AsconAead<Aead128>;

// -- Fixed Digest Aliases --
pub type AsconHash = CoreWrapper<sponge::FixedSpongeCore<LegacyHash>>;
pub type AsconHasha = CoreWrapper<sponge::FixedSpongeCore<LegacyHasha>>;
pub type AsconHash256 = CoreWrapper<sponge::FixedSpongeCore<Hash256>>;

// -- XOF Aliases --
pub type AsconXof = CoreWrapper<sponge::SpongeCore<LegacyXof>>;
pub type AsconXofa = CoreWrapper<sponge::SpongeCore<LegacyXofa>>;
pub type AsconXof128 = CoreWrapper<sponge::SpongeCore<Xof128>>;
/// Build a customized instance with [`sponge::cxof128`]; `Default` uses the
/// empty customization string.
pub type AsconCxof128 = CoreWrapper<sponge::SpongeCore<Cxof128>>;

pub type AsconXofReader = XofReaderCoreWrapper<sponge::SpongeReader<LegacyXof>>;
pub type AsconXofaReader = XofReaderCoreWrapper<sponge::SpongeReader<LegacyXofa>>;
pub type AsconXof128Reader = XofReaderCoreWrapper<sponge::SpongeReader<Xof128>>;
pub type AsconCxof128Reader = XofReaderCoreWrapper<sponge::SpongeReader<Cxof128>>;
