pub mod credential;
pub mod derivation;
pub mod errors;

pub use credential::Credential;
pub use credential::PLACEHOLDER;
pub use derivation::KeyDerivation;
pub use errors::CredentialError;
