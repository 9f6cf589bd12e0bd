//======================================================================
// ascon/src/aead.rs
// Ascon AEAD: the RustCrypto `AeadInPlace` surface over the duplex, plus
// variant-by-name entry points.
//======================================================================

use crate::consts::{KEY_SIZE, NONCE_SIZE, TAG_SIZE};
use crate::duplex;
use crate::error::{Error, Result};
use crate::log::alog;
use crate::variant::{AeadVariant, Mode, ParameterSet, Variant};
use aead::{
    consts::{U0, U16},
    generic_array::GenericArray,
    AeadCore, AeadInPlace, Key, KeyInit, KeySizeUser, Nonce, Tag,
};
use alloc::vec::Vec;
use core::marker::PhantomData;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 128-bit key, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    fn from_slice(key: &[u8]) -> Result<Self> {
        let bytes = <[u8; KEY_SIZE]>::try_from(key).map_err(|_| Error::InvalidParameterLength {
            what: "key",
            expected: "16 bytes",
            actual: key.len(),
        })?;
        Ok(Self(bytes))
    }
}

fn nonce_array(nonce: &[u8]) -> Result<[u8; NONCE_SIZE]> {
    <[u8; NONCE_SIZE]>::try_from(nonce).map_err(|_| Error::InvalidParameterLength {
        what: "nonce",
        expected: "16 bytes",
        actual: nonce.len(),
    })
}

fn aead_params(variant: Variant, operation: &'static str) -> Result<&'static ParameterSet> {
    let params = variant.params();
    match params.mode {
        Mode::Aead => Ok(params),
        _ => Err(Error::UnsupportedOperation {
            variant: params.name,
            operation,
        }),
    }
}

/// Encrypts `buffer` in place and returns the tag.
fn seal_in_place(
    params: &ParameterSet,
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    associated_data: &[u8],
    buffer: &mut [u8],
) -> [u8; TAG_SIZE] {
    let mut state = duplex::initialize(params, key, nonce);
    duplex::absorb_ad(&mut state, params, associated_data);
    duplex::absorb_and_squeeze(&mut state, params, buffer);
    duplex::finalize(&mut state, params, key)
}

/// Decrypts `buffer` in place and checks `tag`. On mismatch the buffer is
/// zeroed before returning, so no unauthenticated plaintext escapes.
fn open_in_place(
    params: &ParameterSet,
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    associated_data: &[u8],
    buffer: &mut [u8],
    tag: &[u8],
) -> Result<()> {
    let mut state = duplex::initialize(params, key, nonce);
    duplex::absorb_ad(&mut state, params, associated_data);
    duplex::absorb_ciphertext(&mut state, params, buffer);
    let expected = duplex::finalize(&mut state, params, key);

    if bool::from(expected[..].ct_eq(tag)) {
        Ok(())
    } else {
        buffer.zeroize();
        alog!("aead: {} tag mismatch, ct_len={}", params.name, buffer.len());
        Err(Error::AuthenticationFailure)
    }
}

/// Encrypts `plaintext` under `variant` and returns `ciphertext || tag`.
///
/// Fails with [`Error::InvalidParameterLength`] unless key and nonce are
/// exactly 16 bytes, and with [`Error::UnsupportedOperation`] for hash
/// variants.
pub fn encrypt(
    variant: Variant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let params = aead_params(variant, "authenticated encryption")?;
    let key = SecretKey::from_slice(key)?;
    let nonce = nonce_array(nonce)?;
    alog!(
        "aead: encrypt {} ad_len={} pt_len={}",
        params.name,
        associated_data.len(),
        plaintext.len()
    );

    let mut out = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    out.extend_from_slice(plaintext);
    let tag = seal_in_place(params, &key.0, &nonce, associated_data, &mut out);
    out.extend_from_slice(&tag);
    Ok(out)
}

/// Decrypts `ciphertext || tag` under `variant`.
///
/// Returns [`Error::AuthenticationFailure`] and no plaintext when the tag
/// does not verify.
pub fn decrypt(
    variant: Variant,
    key: &[u8],
    nonce: &[u8],
    associated_data: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>> {
    let params = aead_params(variant, "authenticated decryption")?;
    let key = SecretKey::from_slice(key)?;
    let nonce = nonce_array(nonce)?;
    if ciphertext.len() < TAG_SIZE {
        return Err(Error::InvalidParameterLength {
            what: "ciphertext",
            expected: "at least the 16-byte tag",
            actual: ciphertext.len(),
        });
    }
    alog!(
        "aead: decrypt {} ad_len={} ct_len={}",
        params.name,
        associated_data.len(),
        ciphertext.len() - TAG_SIZE
    );

    let (body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);
    let mut out = body.to_vec();
    open_in_place(params, &key.0, &nonce, associated_data, &mut out, tag)?;
    Ok(out)
}

/// Ascon AEAD cipher for the variant `V`.
#[derive(Clone)]
pub struct AsconAead<V: AeadVariant> {
    key: SecretKey,
    _variant: PhantomData<V>,
}

impl<V: AeadVariant> KeySizeUser for AsconAead<V> {
    type KeySize = U16;
}

impl<V: AeadVariant> KeyInit for AsconAead<V> {
    fn new(key: &Key<Self>) -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        bytes.copy_from_slice(key);
        Self {
            key: SecretKey(bytes),
            _variant: PhantomData,
        }
    }
}

impl<V: AeadVariant> AeadCore for AsconAead<V> {
    type NonceSize = U16;
    type TagSize = U16; // 128-bit (16-byte) tag.
    type CiphertextOverhead = U0;
}

impl<V: AeadVariant> AeadInPlace for AsconAead<V> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let nonce = nonce_array(nonce)?;
        let tag = seal_in_place(V::PARAMS, &self.key.0, &nonce, associated_data, buffer);
        Ok(GenericArray::clone_from_slice(&tag))
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        let nonce = nonce_array(nonce)?;
        open_in_place(V::PARAMS, &self.key.0, &nonce, associated_data, buffer, tag)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_key_or_nonce_length_is_rejected_before_work() {
        let err = encrypt(Variant::AsconAead128, &[0; 15], &[0; 16], b"", b"").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameterLength { what: "key", expected: "16 bytes", actual: 15 }
        );
        let err = decrypt(Variant::Ascon128, &[0; 16], &[0; 17], b"", &[0; 16]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameterLength { what: "nonce", .. }));
    }

    #[test]
    fn truncated_input_is_a_length_error() {
        let err = decrypt(Variant::Ascon128a, &[0; 16], &[0; 16], b"", &[0; 15]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameterLength { what: "ciphertext", actual: 15, .. }));
    }

    #[test]
    fn hash_variants_do_not_encrypt() {
        let err = encrypt(Variant::AsconHash256, &[0; 16], &[0; 16], b"", b"").unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperation { variant: "Ascon-Hash256", .. }));
    }

    #[test]
    fn failed_open_wipes_buffer() {
        let key = [3u8; 16];
        let nonce = [4u8; 16];
        let mut buffer = *b"sixteen byte msg";
        let tag = seal_in_place(&crate::variant::ASCON_AEAD128, &key, &nonce, b"", &mut buffer);
        let mut bad = tag;
        bad[15] ^= 1;
        let res = open_in_place(&crate::variant::ASCON_AEAD128, &key, &nonce, b"", &mut buffer, &bad);
        assert_eq!(res, Err(Error::AuthenticationFailure));
        assert_eq!(buffer, [0u8; 16]);
    }
}
