//======================================================================
// ascon/src/error.rs
// Error taxonomy of the core. Every error is terminal for its call.
//======================================================================

use thiserror::Error;

/// Errors raised by the runtime (variant-by-name) entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A key, nonce, digest length, customization string or tag-bearing
    /// input has the wrong size. Raised before the state is touched.
    #[error("invalid {what} length: expected {expected}, got {actual} bytes")]
    InvalidParameterLength {
        what: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// A customization string was given to a variant that has none.
    #[error("customization string is only accepted by Ascon-CXOF128, not {variant}")]
    CustomizationUnsupported { variant: &'static str },

    /// The recomputed tag differs from the supplied one. No plaintext is released.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailure,

    /// Recovered plaintext could not be rendered in the caller's text encoding.
    #[error("decrypted plaintext is not valid text")]
    DecodingFailure,

    /// No variant carries the requested name.
    #[error("unknown Ascon variant")]
    UnknownVariant,

    /// The variant exists but belongs to the other mode (AEAD vs hash/XOF).
    #[error("{variant} does not support {operation}")]
    UnsupportedOperation {
        variant: &'static str,
        operation: &'static str,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for aead::Error {
    fn from(_: Error) -> Self {
        aead::Error
    }
}
