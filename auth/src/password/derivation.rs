use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha1::Sha1;

use super::errors::CredentialError;

/// PBKDF2 round count. Raising it invalidates every stored digest.
pub const ITERATIONS: u32 = 20_000;

/// Length of the derived key in bits.
pub const DERIVED_KEY_BITS: usize = 160;

/// Random bytes per salt, before base64 encoding.
pub const SALT_BYTES: usize = 8;

/// Salted, iterated key derivation (PBKDF2 with HMAC-SHA1).
///
/// Parameters are fixed so a digest can always be reproduced from the
/// plaintext and its stored salt.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyDerivation;

impl KeyDerivation {
    /// Create a new key derivation instance.
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh salt from the operating system's secure random source.
    ///
    /// # Returns
    /// Base64 encoding of `SALT_BYTES` random bytes
    ///
    /// # Errors
    /// * `SaltUnavailable` - The random source could not be read
    pub fn generate_salt(&self) -> Result<String, CredentialError> {
        let mut salt = [0u8; SALT_BYTES];
        OsRng
            .try_fill_bytes(&mut salt)
            .map_err(|e| CredentialError::SaltUnavailable(e.to_string()))?;

        Ok(BASE64.encode(salt))
    }

    /// Derive the digest of a plaintext under a stored salt.
    ///
    /// Deterministic: the same plaintext and salt always give the same digest.
    ///
    /// # Arguments
    /// * `plaintext` - Credential as supplied by the user
    /// * `salt` - Base64 salt produced by [`generate_salt`](Self::generate_salt)
    ///
    /// # Returns
    /// Base64 encoding of the derived key
    ///
    /// # Errors
    /// * `MalformedSalt` - Salt is not valid base64
    /// * `DerivationUnavailable` - The PBKDF2 primitive rejected its inputs
    pub fn derive(&self, plaintext: &str, salt: &str) -> Result<String, CredentialError> {
        let salt = BASE64
            .decode(salt)
            .map_err(|e| CredentialError::MalformedSalt(e.to_string()))?;

        let key = derive_key(plaintext.as_bytes(), &salt, ITERATIONS)?;
        Ok(BASE64.encode(key))
    }
}

fn derive_key(
    plaintext: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<[u8; DERIVED_KEY_BITS / 8], CredentialError> {
    let mut key = [0u8; DERIVED_KEY_BITS / 8];
    pbkdf2::pbkdf2::<Hmac<Sha1>>(plaintext, salt, rounds, &mut key)
        .map_err(|e| CredentialError::DerivationUnavailable(e.to_string()))?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    #[test]
    fn test_rfc6070_vectors() {
        let one = derive_key(b"password", b"salt", 1).unwrap();
        assert_eq!(hex(&one), "0c60c80f961f0e71f3a9b524af6012062fe037a6");

        let many = derive_key(b"password", b"salt", 4096).unwrap();
        assert_eq!(hex(&many), "4b007901b765489abead49d926f721d065a429c1");
    }

    #[test]
    fn test_salt_is_eight_random_bytes() {
        let derivation = KeyDerivation::new();
        let salt = derivation.generate_salt().expect("Failed to generate salt");

        assert_eq!(BASE64.decode(&salt).unwrap().len(), SALT_BYTES);
        assert_ne!(salt, derivation.generate_salt().unwrap());
    }

    #[test]
    fn test_derive_is_deterministic_per_salt() {
        let derivation = KeyDerivation::new();
        let salt = derivation.generate_salt().unwrap();

        let first = derivation.derive("hunter2", &salt).unwrap();
        let second = derivation.derive("hunter2", &salt).unwrap();

        assert_eq!(first, second);
        assert_eq!(BASE64.decode(&first).unwrap().len(), DERIVED_KEY_BITS / 8);
    }

    #[test]
    fn test_derive_rejects_malformed_salt() {
        let result = KeyDerivation::new().derive("hunter2", "not base64!");
        assert!(matches!(result, Err(CredentialError::MalformedSalt(_))));
    }
}
