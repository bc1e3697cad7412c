use std::sync::Arc;

use async_trait::async_trait;
use auth::Credential;
use checker::StringChecker;
use chrono::Utc;

use crate::domain::student::models::RegisterStudentCommand;
use crate::domain::student::models::SignIn;
use crate::domain::student::models::Student;
use crate::domain::student::models::StudentId;
use crate::student::errors::StudentError;
use crate::student::ports::StudentRepository;
use crate::student::ports::StudentServicePort;

/// Domain service implementation for student operations.
///
/// Concrete implementation of StudentServicePort with dependency injection.
pub struct StudentService<SR>
where
    SR: StudentRepository,
{
    repository: Arc<SR>,
    checker: StringChecker,
}

impl<SR> StudentService<SR>
where
    SR: StudentRepository,
{
    /// Create a new student service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Student persistence implementation
    /// * `checker` - Validates sign-in fields before any lookup
    pub fn new(repository: Arc<SR>, checker: StringChecker) -> Self {
        Self {
            repository,
            checker,
        }
    }
}

#[async_trait]
impl<SR> StudentServicePort for StudentService<SR>
where
    SR: StudentRepository,
{
    async fn register(&self, command: RegisterStudentCommand) -> Result<Student, StudentError> {
        let credential = Credential::from_plaintext(&command.password);
        if !credential.is_set() {
            tracing::warn!(email = %command.email, "Registering student without a usable credential");
        }

        let student = Student {
            id: StudentId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            age: command.age,
            telephone: command.telephone,
            credential,
            created_at: Utc::now(),
        };

        let created = self.repository.create(student).await?;
        tracing::info!(student_id = %created.id, email = %created.email, "Student registered");

        Ok(created)
    }

    async fn sign_in(&self, attempt: SignIn) -> Result<Student, StudentError> {
        let quiet = self.checker.silent();
        if !quiet.is_valid_string(&attempt.user_id) || !quiet.is_valid_string(&attempt.password) {
            return Err(StudentError::InvalidCredentials);
        }

        let student = self
            .repository
            .find_by_email(attempt.user_id.trim())
            .await?
            .ok_or(StudentError::InvalidCredentials)?;

        if !student.credential.verify(&attempt.password) {
            tracing::info!(email = %student.email, "Sign-in rejected");
            return Err(StudentError::InvalidCredentials);
        }

        tracing::info!(student_id = %student.id, "Student signed in");
        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> Result<Student, StudentError> {
        self.repository
            .find_by_email(email.trim())
            .await?
            .ok_or(StudentError::NotFoundByEmail(email.to_string()))
    }

    async fn list_students(&self) -> Result<Vec<Student>, StudentError> {
        self.repository.list_all().await
    }
}
