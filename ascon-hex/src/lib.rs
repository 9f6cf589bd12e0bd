//======================================================================
// ascon-hex/src/lib.rs
// Hex-string entry points over the ascon core: key/nonce parsing,
// raw-or-hex data interpretation, text rendering of plaintext.
//======================================================================

//! String-in, string-out wrappers around [`ascon`].
//!
//! Keys, nonces and ciphertexts are always hex. Associated data, plaintext,
//! hash messages and customization strings are read according to
//! [`BoundaryConfig::input_format`].

use ascon::Variant;
use rand_core::CryptoRngCore;
use std::borrow::Cow;
use thiserror::Error;
use zeroize::Zeroizing;


/// Errors of the boundary layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error(transparent)]
    Core(#[from] ascon::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

/// How free-form data fields are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// UTF-8 text, used as its bytes. Decrypted plaintext is rendered as text.
    #[default]
    Raw,
    /// Hex-encoded bytes. Decrypted plaintext is rendered as hex.
    Hex,
}

/// Per-call settings. There is no process-wide state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryConfig {
    pub input_format: InputFormat,
}

impl BoundaryConfig {
    pub const fn hex() -> Self {
        Self {
            input_format: InputFormat::Hex,
        }
    }

    fn data<'a>(&self, field: &'a str) -> Result<Cow<'a, [u8]>> {
        match self.input_format {
            InputFormat::Raw => Ok(Cow::Borrowed(field.as_bytes())),
            InputFormat::Hex => Ok(Cow::Owned(decode_hex(field)?)),
        }
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(s.trim())?)
}

fn parse_variant(name: &str) -> Result<Variant> {
    Ok(name.trim().parse::<Variant>()?)
}

/// Encrypts and returns lowercase hex of `ciphertext || tag`.
pub fn authenticated_encrypt(
    key_hex: &str,
    nonce_hex: &str,
    associated_data: &str,
    plaintext: &str,
    variant: &str,
    config: &BoundaryConfig,
) -> Result<String> {
    let variant = parse_variant(variant)?;
    let key = Zeroizing::new(decode_hex(key_hex)?);
    let nonce = decode_hex(nonce_hex)?;
    let ad = config.data(associated_data)?;
    let pt = config.data(plaintext)?;
    let out = ascon::aead::encrypt(variant, &key, &nonce, &ad, &pt)?;
    Ok(hex::encode(out))
}

/// Decrypts hex `ciphertext || tag` and renders the plaintext as text
/// ([`InputFormat::Raw`]) or hex ([`InputFormat::Hex`]).
///
/// Raw rendering of plaintext that is not UTF-8 fails with
/// [`ascon::Error::DecodingFailure`].
pub fn authenticated_decrypt(
    key_hex: &str,
    nonce_hex: &str,
    associated_data: &str,
    ciphertext_hex: &str,
    variant: &str,
    config: &BoundaryConfig,
) -> Result<String> {
    let variant = parse_variant(variant)?;
    let key = Zeroizing::new(decode_hex(key_hex)?);
    let nonce = decode_hex(nonce_hex)?;
    let ad = config.data(associated_data)?;
    let ct = decode_hex(ciphertext_hex)?;
    let pt = Zeroizing::new(ascon::aead::decrypt(variant, &key, &nonce, &ad, &ct)?);
    match config.input_format {
        InputFormat::Raw => std::str::from_utf8(&pt)
            .map(str::to_owned)
            .map_err(|_| Error::Core(ascon::Error::DecodingFailure)),
        InputFormat::Hex => Ok(hex::encode(&*pt)),
    }
}

/// Hashes `message` and returns the digest as hex. `digest_len` defaults to 32.
pub fn hash(
    message: &str,
    digest_len: Option<usize>,
    variant: &str,
    customization: &str,
    config: &BoundaryConfig,
) -> Result<String> {
    let variant = parse_variant(variant)?;
    let message = config.data(message)?;
    let customization = config.data(customization)?;
    let digest = ascon::sponge::hash(
        &message,
        digest_len.unwrap_or(ascon::consts::DIGEST_SIZE),
        variant,
        &customization,
    )?;
    Ok(hex::encode(digest))
}

/// A fresh 16-byte nonce as hex.
pub fn random_nonce_hex(rng: &mut impl CryptoRngCore) -> String {
    let mut nonce = [0u8; ascon::consts::NONCE_SIZE];
    rng.fill_bytes(&mut nonce);
    hex::encode(nonce)
}
