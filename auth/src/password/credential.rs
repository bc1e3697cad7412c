use std::fmt;

use checker::StringChecker;
use serde::Deserialize;
use serde::Serialize;

use super::derivation::KeyDerivation;
use super::errors::CredentialError;

/// Value returned wherever a caller reads the password field.
pub const PLACEHOLDER: &str = "encrypted";

/// Salted password digest owned by the entity that authenticates.
///
/// Digest and salt are always replaced together. The plaintext is never
/// stored and the digest is never handed out; only the storage encoding
/// (serde) carries it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    digest: String,
    salt: String,
}

impl Credential {
    /// Create an empty credential that verifies nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a credential already set from a plaintext.
    pub fn from_plaintext(plaintext: &str) -> Self {
        let mut credential = Self::new();
        credential.set(plaintext);
        credential
    }

    /// Replace the stored digest with one derived from `plaintext`.
    ///
    /// A fresh salt is generated on every call. Blank plaintext, or a failure
    /// of the random source or derivation, leaves the credential empty.
    pub fn set(&mut self, plaintext: &str) {
        if !StringChecker::without_diagnostics().is_valid_string(plaintext) {
            *self = Self::new();
            return;
        }

        *self = match Self::derive_fresh(plaintext) {
            Ok(credential) => credential,
            Err(e) => {
                tracing::error!(error = %e, "Failed to derive credential, leaving it empty");
                Self::new()
            }
        };
    }

    fn derive_fresh(plaintext: &str) -> Result<Self, CredentialError> {
        let derivation = KeyDerivation::new();
        let salt = derivation.generate_salt()?;
        let digest = derivation.derive(plaintext, &salt)?;

        Ok(Self { digest, salt })
    }

    /// Check a candidate plaintext against the stored digest.
    ///
    /// Returns false for blank candidates, for an empty credential, and when
    /// derivation fails. The three cases are indistinguishable to the caller.
    pub fn verify(&self, candidate: &str) -> bool {
        if !self.is_set() || !StringChecker::without_diagnostics().is_valid_string(candidate) {
            return false;
        }

        match KeyDerivation::new().derive(candidate, &self.salt) {
            Ok(digest) => digest == self.digest,
            Err(e) => {
                tracing::error!(error = %e, "Failed to derive candidate digest");
                false
            }
        }
    }

    /// Whether a digest has been derived.
    pub fn is_set(&self) -> bool {
        !self.digest.is_empty() && !self.salt.is_empty()
    }

    /// Base64 salt of the current digest, empty when unset.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Readable password field. Always [`PLACEHOLDER`].
    pub fn password(&self) -> &'static str {
        PLACEHOLDER
    }
}

// Don't expose the digest in debug output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("digest", &"[REDACTED]")
            .field("salt", &self.salt)
            .finish()
    }
}
