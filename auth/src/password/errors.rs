use thiserror::Error;

/// Error type for credential derivation.
///
/// Only raised by the low-level [`KeyDerivation`](super::KeyDerivation).
/// [`Credential`](super::Credential) converts every variant into an empty
/// credential or a failed verification.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Secure random source unavailable: {0}")]
    SaltUnavailable(String),

    #[error("Stored salt is not valid base64: {0}")]
    MalformedSalt(String),

    #[error("Key derivation unavailable: {0}")]
    DerivationUnavailable(String),
}
