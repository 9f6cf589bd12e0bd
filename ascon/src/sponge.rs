//======================================================================
// ascon/src/sponge.rs
// Hash/XOF: one unkeyed sponge for every hashing variant. `Sponge` does
// the work; `SpongeCore`/`FixedSpongeCore` expose it through
// `digest::core_api::CoreWrapper`.
//======================================================================

use crate::consts::{DIGEST_SIZE, MAX_CUSTOMIZATION_BYTES, WORD_BYTES};
use crate::error::{Error, Result};
use crate::log::alog;
use crate::padding::{absorb_full, absorb_last};
use crate::state::State;
use crate::variant::{FixedDigestVariant, Mode, ParameterSet, SpongeVariant, Variant};
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use digest::{
    block_buffer::Eager,
    consts::{U32, U8},
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        ExtendableOutputCore, FixedOutputCore, OutputSizeUser, UpdateCore, XofReaderCore,
    },
    HashMarker, Output,
};

//======================================================================
// Sponge - absorb/squeeze over a ParameterSet
//======================================================================

/// Unkeyed sponge state for one hashing call.
#[derive(Clone)]
pub(crate) struct Sponge {
    state: State,
    params: &'static ParameterSet,
}

impl Sponge {
    /// IV word alone, then `a` rounds.
    pub(crate) fn new(params: &'static ParameterSet) -> Self {
        let mut state = State::new([params.iv(), 0, 0, 0, 0]);
        state.permute(params.a);
        Self { state, params }
    }

    /// Absorbs the 64-bit bit-length of `z`, then `z` itself padded. Every
    /// block is followed by `b` rounds. Callers check the length bound.
    pub(crate) fn customize(&mut self, z: &[u8]) {
        debug_assert!(z.len() <= MAX_CUSTOMIZATION_BYTES);
        let b = self.params.b;
        let order = self.params.byte_order;

        absorb_full(&mut self.state, &order.store((z.len() as u64) * 8), order);
        self.state.permute(b);

        let mut blocks = z.chunks_exact(WORD_BYTES);
        for block in &mut blocks {
            absorb_full(&mut self.state, block, order);
            self.state.permute(b);
        }
        absorb_last(&mut self.state, blocks.remainder(), 1, order);
        self.state.permute(b);
    }

    /// Absorbs one full 8-byte block.
    #[inline]
    pub(crate) fn absorb_block(&mut self, block: &[u8]) {
        absorb_full(&mut self.state, block, self.params.byte_order);
        self.state.permute(self.params.b);
    }

    /// Pads and absorbs the trailing `< 8` bytes, then runs `a` rounds.
    pub(crate) fn finish(&mut self, tail: &[u8]) {
        absorb_last(&mut self.state, tail, 1, self.params.byte_order);
        self.state.permute(self.params.a);
    }

    pub(crate) fn absorb(&mut self, message: &[u8]) {
        let mut blocks = message.chunks_exact(WORD_BYTES);
        for block in &mut blocks {
            self.absorb_block(block);
        }
        self.finish(blocks.remainder());
    }

    /// Emits word 0, then `b` rounds.
    #[inline]
    pub(crate) fn squeeze_block(&mut self) -> [u8; WORD_BYTES] {
        let out = self.params.byte_order.store(self.state[0]);
        self.state.permute(self.params.b);
        out
    }

    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(WORD_BYTES) {
            let block = self.squeeze_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }
}

fn sponge_params(variant: Variant) -> Result<&'static ParameterSet> {
    let params = variant.params();
    match params.mode {
        Mode::Hash | Mode::Xof => Ok(params),
        Mode::Aead => Err(Error::UnsupportedOperation {
            variant: params.name,
            operation: "hashing",
        }),
    }
}

fn check_customization(params: &ParameterSet, customization: &[u8]) -> Result<()> {
    if !params.customizable {
        return if customization.is_empty() {
            Ok(())
        } else {
            Err(Error::CustomizationUnsupported { variant: params.name })
        };
    }
    if customization.len() > MAX_CUSTOMIZATION_BYTES {
        return Err(Error::InvalidParameterLength {
            what: "customization",
            expected: "at most 256 bytes",
            actual: customization.len(),
        });
    }
    Ok(())
}

/// Hashes `message` into `digest_len` bytes under `variant`.
///
/// Fixed-digest variants only accept `digest_len == 32`. A non-empty
/// `customization` is accepted by Ascon-CXOF128 alone, up to 256 bytes.
pub fn hash(message: &[u8], digest_len: usize, variant: Variant, customization: &[u8]) -> Result<Vec<u8>> {
    let params = sponge_params(variant)?;
    if let Some(fixed) = params.fixed_digest_len() {
        if digest_len != fixed {
            return Err(Error::InvalidParameterLength {
                what: "digest",
                expected: "32 bytes",
                actual: digest_len,
            });
        }
    }
    check_customization(params, customization)?;
    alog!(
        "sponge: {} msg_len={} out_len={} z_len={}",
        params.name,
        message.len(),
        digest_len,
        customization.len()
    );

    let mut sponge = Sponge::new(params);
    if params.customizable {
        sponge.customize(customization);
    }
    sponge.absorb(message);
    let mut out = alloc::vec![0u8; digest_len];
    sponge.squeeze(&mut out);
    Ok(out)
}

//======================================================================
// SpongeCore - XOF core for CoreWrapper
//======================================================================

/// Extendable-output core for the variant `V`.
#[derive(Clone)]
pub struct SpongeCore<V: SpongeVariant> {
    sponge: Sponge,
    _variant: PhantomData<V>,
}

impl<V: SpongeVariant> SpongeCore<V> {
    /// A core with customization string `z` already absorbed.
    pub fn with_customization(z: &[u8]) -> Result<Self> {
        check_customization(V::PARAMS, z)?;
        let mut sponge = Sponge::new(V::PARAMS);
        if V::PARAMS.customizable {
            sponge.customize(z);
        }
        Ok(Self {
            sponge,
            _variant: PhantomData,
        })
    }
}

impl<V: SpongeVariant> Default for SpongeCore<V> {
    fn default() -> Self {
        let mut sponge = Sponge::new(V::PARAMS);
        if V::PARAMS.customizable {
            sponge.customize(&[]);
        }
        Self {
            sponge,
            _variant: PhantomData,
        }
    }
}

impl<V: SpongeVariant> HashMarker for SpongeCore<V> {}

impl<V: SpongeVariant> BlockSizeUser for SpongeCore<V> {
    type BlockSize = U8;
}

impl<V: SpongeVariant> BufferKindUser for SpongeCore<V> {
    type BufferKind = Eager;
}

impl<V: SpongeVariant> UpdateCore for SpongeCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.sponge.absorb_block(block);
        }
    }
}

impl<V: SpongeVariant> ExtendableOutputCore for SpongeCore<V> {
    type ReaderCore = SpongeReader<V>;

    #[inline]
    fn finalize_xof_core(&mut self, buffer: &mut Buffer<Self>) -> Self::ReaderCore {
        self.sponge.finish(buffer.get_data());
        SpongeReader {
            sponge: self.sponge.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: SpongeVariant> AlgorithmName for SpongeCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::PARAMS.name)
    }
}

impl<V: SpongeVariant> fmt::Debug for SpongeCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Core {{ .. }}", V::PARAMS.name)
    }
}

//======================================================================
// SpongeReader - squeezing
//======================================================================

/// XOF reader, produced by finalizing a [`SpongeCore`].
#[derive(Clone)]
pub struct SpongeReader<V: SpongeVariant> {
    sponge: Sponge,
    _variant: PhantomData<V>,
}

impl<V: SpongeVariant> BlockSizeUser for SpongeReader<V> {
    type BlockSize = U8;
}

impl<V: SpongeVariant> XofReaderCore for SpongeReader<V> {
    #[inline]
    fn read_block(&mut self) -> Block<Self> {
        let mut block = Block::<Self>::default();
        block.copy_from_slice(&self.sponge.squeeze_block());
        block
    }
}

impl<V: SpongeVariant> fmt::Debug for SpongeReader<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Reader {{ .. }}", V::PARAMS.name)
    }
}

//======================================================================
// FixedSpongeCore - 32-byte digests
//======================================================================

/// Fixed-output core for the 256-bit hash variants.
#[derive(Clone, Default)]
pub struct FixedSpongeCore<V: FixedDigestVariant>(SpongeCore<V>);

impl<V: FixedDigestVariant> HashMarker for FixedSpongeCore<V> {}

impl<V: FixedDigestVariant> BlockSizeUser for FixedSpongeCore<V> {
    type BlockSize = U8;
}

impl<V: FixedDigestVariant> BufferKindUser for FixedSpongeCore<V> {
    type BufferKind = Eager;
}

impl<V: FixedDigestVariant> OutputSizeUser for FixedSpongeCore<V> {
    type OutputSize = U32;
}

impl<V: FixedDigestVariant> UpdateCore for FixedSpongeCore<V> {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.0.update_blocks(blocks);
    }
}

impl<V: FixedDigestVariant> FixedOutputCore for FixedSpongeCore<V> {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        debug_assert_eq!(out.len(), DIGEST_SIZE);
        self.0.sponge.finish(buffer.get_data());
        self.0.sponge.squeeze(out);
    }
}

impl<V: FixedDigestVariant> AlgorithmName for FixedSpongeCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::PARAMS.name)
    }
}

impl<V: FixedDigestVariant> fmt::Debug for FixedSpongeCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Core {{ .. }}", V::PARAMS.name)
    }
}

/// Ascon-CXOF128 hasher with customization string `z` absorbed.
///
/// Fails when `z` exceeds 256 bytes.
pub fn cxof128(z: &[u8]) -> Result<CoreWrapper<SpongeCore<crate::variant::Cxof128>>> {
    SpongeCore::with_customization(z).map(CoreWrapper::from_core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{ASCON_CXOF128, ASCON_XOF128};

    #[test]
    fn empty_customization_differs_from_plain_xof() {
        let mut plain = Sponge::new(&ASCON_XOF128);
        plain.absorb(b"");
        let mut custom = Sponge::new(&ASCON_CXOF128);
        custom.customize(&[]);
        custom.absorb(b"");
        assert_ne!(plain.squeeze_block(), custom.squeeze_block());
    }

    #[test]
    fn incremental_blocks_match_one_shot() {
        let msg: Vec<u8> = (0..29u8).collect();
        let mut one = Sponge::new(&ASCON_XOF128);
        one.absorb(&msg);

        let mut inc = Sponge::new(&ASCON_XOF128);
        for block in msg.chunks_exact(8) {
            inc.absorb_block(block);
        }
        inc.finish(&msg[24..]);
        assert_eq!(one.state, inc.state);
    }

    #[test]
    fn customization_bounds() {
        assert!(check_customization(&ASCON_CXOF128, &[0; 256]).is_ok());
        assert_eq!(
            check_customization(&ASCON_CXOF128, &[0; 257]),
            Err(Error::InvalidParameterLength {
                what: "customization",
                expected: "at most 256 bytes",
                actual: 257,
            })
        );
        assert_eq!(
            check_customization(&ASCON_XOF128, b"z"),
            Err(Error::CustomizationUnsupported { variant: "Ascon-XOF128" })
        );
        assert!(check_customization(&ASCON_XOF128, b"").is_ok());
    }

    #[test]
    fn partial_squeeze_is_a_prefix() {
        let long = hash(b"abc", 19, Variant::AsconXof, b"").unwrap();
        let short = hash(b"abc", 5, Variant::AsconXof, b"").unwrap();
        assert_eq!(&long[..5], &short[..]);
        assert!(hash(b"abc", 0, Variant::AsconXof128, b"").unwrap().is_empty());
    }
}
