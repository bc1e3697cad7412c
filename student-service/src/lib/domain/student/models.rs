use std::fmt;

use auth::Credential;
use checker::StringChecker;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::student::errors::EmailError;
use crate::student::errors::RegistrationError;

/// Student aggregate entity.
///
/// Represents a registered student and the credential used to sign in.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub age: i32,
    pub telephone: i64,
    pub credential: Credential,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} years old.\nEmail: {} Phone: {}",
            self.first_name,
            self.last_name,
            self.age,
            self.email,
            format_telephone(self.telephone)
        )
    }
}

/// Render a telephone number as `(AAA) BBB-CCCC`.
///
/// Numbers with fewer than ten digits are zero-padded first. Longer numbers
/// are returned unformatted.
pub fn format_telephone(telephone: i64) -> String {
    let digits = format!("{:010}", telephone);

    if digits.len() == 10 && digits.chars().all(|c| c.is_ascii_digit()) {
        format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
    } else {
        digits
    }
}

/// Student unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StudentId(pub Uuid);

impl StudentId {
    /// Generate a new random student ID.
    ///
    /// # Returns
    /// StudentId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address type
///
/// Holds the trimmed text of an address accepted by [`StringChecker::parse_email`]:
/// one `@`, non-empty parts, and a `.` in the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `checker` - Checker used to validate, and to report diagnostics
    /// * `email` - Raw email string
    ///
    /// # Errors
    /// * `InvalidFormat` - The checker rejected the address
    pub fn new(checker: &StringChecker, email: String) -> Result<Self, EmailError> {
        Ok(Self(checker.parse_email(&email)?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Command to register a new student with domain types
#[derive(Debug)]
pub struct RegisterStudentCommand {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub age: i32,
    pub telephone: i64,
    /// Plain text password (will be hashed by service)
    pub password: String,
}

/// Raw registration fields as submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub telephone: String,
    pub password: String,
}

impl RegistrationForm {
    /// Validate every field through the checker.
    ///
    /// Names must be non-blank, the email must pass the email check, the age
    /// must be an integer and the telephone a long integer.
    ///
    /// # Errors
    /// * `RegistrationError` - Names the first field that failed
    pub fn try_into_command(
        self,
        checker: &StringChecker,
    ) -> Result<RegisterStudentCommand, RegistrationError> {
        let first_name = checker
            .parse_valid_string(&self.first_name)
            .map_err(RegistrationError::FirstName)?;
        let last_name = checker
            .parse_valid_string(&self.last_name)
            .map_err(RegistrationError::LastName)?;
        let email = EmailAddress::new(checker, self.email)?;
        let age = checker.parse_int(&self.age).map_err(RegistrationError::Age)?;
        let telephone = checker
            .parse_long(&self.telephone)
            .map_err(RegistrationError::Telephone)?;

        Ok(RegisterStudentCommand {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email,
            age,
            telephone,
            password: self.password,
        })
    }
}

/// Sign-in attempt: the e-mail used as user ID plus a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignIn {
    pub user_id: String,
    pub password: String,
}
