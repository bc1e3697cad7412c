//! Credential hashing library
//!
//! Provides salted password digests for services that authenticate users:
//! - PBKDF2 with HMAC-SHA1, 20 000 rounds, 160-bit derived key
//! - 8-byte salts from the operating system's secure random source
//! - A [`Credential`] value that never exposes its digest
//!
//! Derivation costs tens of milliseconds; callers on latency-sensitive paths may
//! want to run [`Credential::set`] and [`Credential::verify`] elsewhere.
//!
//! # Examples
//!
//! ```
//! use auth::Credential;
//!
//! let mut credential = Credential::new();
//! credential.set("password123");
//!
//! assert!(credential.verify("password123"));
//! assert!(!credential.verify("password1234"));
//! assert_eq!(credential.password(), "encrypted");
//! ```

pub mod password;

pub use password::Credential;
pub use password::CredentialError;
pub use password::KeyDerivation;
pub use password::PLACEHOLDER;
