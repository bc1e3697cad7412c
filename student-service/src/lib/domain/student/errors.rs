use checker::CheckFailure;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(#[from] CheckFailure),
}

/// Error for turning a raw registration form into a command
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Invalid first name: {0}")]
    FirstName(CheckFailure),

    #[error("Invalid last name: {0}")]
    LastName(CheckFailure),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid age: {0}")]
    Age(CheckFailure),

    #[error("Invalid telephone: {0}")]
    Telephone(CheckFailure),
}

/// Top-level error for all student-related operations
#[derive(Debug, Clone, Error)]
pub enum StudentError {
    #[error("Invalid registration: {0}")]
    InvalidRegistration(#[from] RegistrationError),

    #[error("Student not found with email: {0}")]
    NotFoundByEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
