use async_trait::async_trait;

use crate::domain::student::models::RegisterStudentCommand;
use crate::domain::student::models::SignIn;
use crate::domain::student::models::Student;
use crate::student::errors::StudentError;

/// Port for student domain service operations.
#[async_trait]
pub trait StudentServicePort: Send + Sync + 'static {
    /// Register a new student, deriving a fresh credential from the password.
    ///
    /// # Arguments
    /// * `command` - Validated registration fields and plaintext password
    ///
    /// # Returns
    /// Created student entity
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn register(&self, command: RegisterStudentCommand) -> Result<Student, StudentError>;

    /// Authenticate a student by e-mail and password.
    ///
    /// # Arguments
    /// * `attempt` - E-mail used as user ID plus plaintext password
    ///
    /// # Returns
    /// The authenticated student
    ///
    /// # Errors
    /// * `InvalidCredentials` - Blank field, unknown e-mail or wrong password
    /// * `RepositoryError` - Storage operation failed
    async fn sign_in(&self, attempt: SignIn) -> Result<Student, StudentError>;

    /// Retrieve student by e-mail address.
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No student with this e-mail
    /// * `RepositoryError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Student, StudentError>;

    /// Retrieve every registered student.
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn list_students(&self) -> Result<Vec<Student>, StudentError>;
}

/// Persistence operations for student aggregate.
#[async_trait]
pub trait StudentRepository: Send + Sync + 'static {
    /// Persist new student to storage.
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn create(&self, student: Student) -> Result<Student, StudentError>;

    /// Retrieve student by e-mail address.
    ///
    /// # Returns
    /// Optional student entity (None if not found)
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentError>;

    /// Retrieve all students from storage.
    ///
    /// # Errors
    /// * `RepositoryError` - Storage operation failed
    async fn list_all(&self) -> Result<Vec<Student>, StudentError>;
}
