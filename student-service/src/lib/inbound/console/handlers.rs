use std::fmt;

use checker::Captured;
use checker::Check;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use super::commands::ParseCommandError;
use super::commands::CHECK_USAGE;
use super::commands::LOGIN_USAGE;
use super::commands::REGISTER_USAGE;
use super::session::ConsoleState;
use crate::domain::student::models::RegistrationForm;
use crate::domain::student::models::SignIn;
use crate::domain::student::models::Student;
use crate::domain::student::ports::StudentServicePort;
use crate::student::errors::StudentError;

/// Successful outcome of one console command.
#[derive(Debug, Clone)]
pub enum ConsoleReply {
    Checked(Captured),
    Registered(Student),
    SignedIn(Student),
    Students(Vec<Student>),
    Export(String),
    Help,
    Goodbye,
}

impl fmt::Display for ConsoleReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleReply::Checked(captured) => write!(f, "{}", captured),
            ConsoleReply::Registered(student) => {
                write!(f, "Registered student {}\n{}", student.id, student)
            }
            ConsoleReply::SignedIn(student) => write!(f, "Welcome, {}!", student.first_name),
            ConsoleReply::Students(students) if students.is_empty() => {
                write!(f, "No students registered.")
            }
            ConsoleReply::Students(students) => {
                let rendered: Vec<String> = students.iter().map(Student::to_string).collect();
                write!(f, "{}", rendered.join("\n\n"))
            }
            ConsoleReply::Export(json) => write!(f, "{}", json),
            ConsoleReply::Help => write!(
                f,
                "Commands:\n  {}\n  {}\n  {}\n  list\n  export\n  help\n  quit",
                CHECK_USAGE, REGISTER_USAGE, LOGIN_USAGE
            ),
            ConsoleReply::Goodbye => write!(f, "Goodbye."),
        }
    }
}

/// Failed outcome of one console command, rendered as a single line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// A check rejected its input. Details go to the diagnostic sink.
    #[error("invalid")]
    Rejected,

    #[error("{0}")]
    BadCommand(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    SignInFailed(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParseCommandError> for ConsoleError {
    fn from(err: ParseCommandError) -> Self {
        ConsoleError::BadCommand(err.to_string())
    }
}

impl From<StudentError> for ConsoleError {
    fn from(err: StudentError) -> Self {
        match err {
            StudentError::NotFoundByEmail(_) => ConsoleError::NotFound(err.to_string()),
            StudentError::InvalidCredentials => ConsoleError::SignInFailed(err.to_string()),
            StudentError::InvalidRegistration(_) => ConsoleError::InvalidInput(err.to_string()),
            StudentError::RepositoryError(_) => ConsoleError::Internal(err.to_string()),
        }
    }
}

/// Exported view of a student. The credential is never exposed, only its
/// placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
    pub telephone: i64,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Student> for StudentData {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.to_string(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.as_str().to_string(),
            age: student.age,
            telephone: student.telephone,
            password: student.credential.password().to_string(),
            created_at: student.created_at,
        }
    }
}

pub fn check<S>(state: &ConsoleState<S>, check: &Check, input: &str) -> Result<ConsoleReply, ConsoleError>
where
    S: StudentServicePort,
{
    state
        .checker
        .check(check, input)
        .map(ConsoleReply::Checked)
        .map_err(|_| ConsoleError::Rejected)
}

pub async fn register<S>(
    state: &ConsoleState<S>,
    form: RegistrationForm,
) -> Result<ConsoleReply, ConsoleError>
where
    S: StudentServicePort,
{
    let command = form
        .try_into_command(&state.checker)
        .map_err(StudentError::from)?;

    state
        .student_service
        .register(command)
        .await
        .map_err(ConsoleError::from)
        .map(ConsoleReply::Registered)
}

pub async fn login<S>(state: &ConsoleState<S>, attempt: SignIn) -> Result<ConsoleReply, ConsoleError>
where
    S: StudentServicePort,
{
    state
        .student_service
        .sign_in(attempt)
        .await
        .map_err(ConsoleError::from)
        .map(ConsoleReply::SignedIn)
}

pub async fn list<S>(state: &ConsoleState<S>) -> Result<ConsoleReply, ConsoleError>
where
    S: StudentServicePort,
{
    state
        .student_service
        .list_students()
        .await
        .map_err(ConsoleError::from)
        .map(ConsoleReply::Students)
}

pub async fn export<S>(state: &ConsoleState<S>) -> Result<ConsoleReply, ConsoleError>
where
    S: StudentServicePort,
{
    let students = state.student_service.list_students().await?;
    let data: Vec<StudentData> = students.iter().map(StudentData::from).collect();

    serde_json::to_string_pretty(&data)
        .map(ConsoleReply::Export)
        .map_err(|e| ConsoleError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use auth::Credential;
    use checker::CollectingSink;
    use checker::StringChecker;
    use mockall::mock;

    use super::*;
    use crate::domain::student::models::EmailAddress;
    use crate::domain::student::models::RegisterStudentCommand;
    use crate::domain::student::models::StudentId;

    mock! {
        pub TestStudentService {}

        #[async_trait]
        impl StudentServicePort for TestStudentService {
            async fn register(&self, command: RegisterStudentCommand) -> Result<Student, StudentError>;
            async fn sign_in(&self, attempt: SignIn) -> Result<Student, StudentError>;
            async fn find_by_email(&self, email: &str) -> Result<Student, StudentError>;
            async fn list_students(&self) -> Result<Vec<Student>, StudentError>;
        }
    }

    fn student() -> Student {
        Student {
            id: StudentId::new(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: EmailAddress::new(
                &StringChecker::without_diagnostics(),
                "ada@example.com".to_string(),
            )
            .unwrap(),
            age: 36,
            telephone: 5551234567,
            credential: Credential::from_plaintext("analytical"),
            created_at: Utc::now(),
        }
    }

    fn state(service: MockTestStudentService, sink: Arc<CollectingSink>) -> ConsoleState<MockTestStudentService> {
        ConsoleState::new(Arc::new(service), StringChecker::with_sink(sink, false))
    }

    #[test]
    fn test_check_prints_captured_value() {
        let sink = Arc::new(CollectingSink::new());
        let state = state(MockTestStudentService::new(), sink.clone());

        let reply = check(&state, &"int:1..10".parse().unwrap(), " 7 ").unwrap();

        assert_eq!(reply.to_string(), "7");
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_check_rejection_reports_through_sink() {
        let sink = Arc::new(CollectingSink::new());
        let state = state(MockTestStudentService::new(), sink.clone());

        let result = check(&state, &"int:1..10".parse().unwrap(), "11");

        assert_eq!(result.unwrap_err(), ConsoleError::Rejected);
        assert_eq!(sink.messages().len(), 1);
        assert_eq!(ConsoleError::Rejected.to_string(), "invalid");
    }

    #[tokio::test]
    async fn test_register_invalid_form_skips_service() {
        let mut service = MockTestStudentService::new();
        service.expect_register().times(0);
        let state = state(service, Arc::new(CollectingSink::new()));

        let form = RegistrationForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: "old".to_string(),
            telephone: "5551234567".to_string(),
            password: "analytical".to_string(),
        };

        let result = register(&state, form).await;
        assert!(matches!(result, Err(ConsoleError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_login_maps_invalid_credentials() {
        let mut service = MockTestStudentService::new();
        service
            .expect_sign_in()
            .times(1)
            .returning(|_| Err(StudentError::InvalidCredentials));
        let state = state(service, Arc::new(CollectingSink::new()));

        let result = login(
            &state,
            SignIn {
                user_id: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await;

        assert_eq!(
            result.unwrap_err(),
            ConsoleError::SignInFailed("Invalid credentials".to_string())
        );
    }

    #[tokio::test]
    async fn test_export_hides_credential() {
        let mut service = MockTestStudentService::new();
        service
            .expect_list_students()
            .times(1)
            .returning(|| Ok(vec![student()]));
        let state = state(service, Arc::new(CollectingSink::new()));

        let reply = export(&state).await.unwrap();
        let json = reply.to_string();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["email"], "ada@example.com");
        assert_eq!(value[0]["password"], "encrypted");
        assert_eq!(value[0]["telephone"], 5551234567i64);
    }

    #[test]
    fn test_student_errors_map_to_console_errors() {
        assert_eq!(
            ConsoleError::from(StudentError::InvalidCredentials),
            ConsoleError::SignInFailed("Invalid credentials".to_string())
        );
        assert!(matches!(
            ConsoleError::from(StudentError::NotFoundByEmail("a@b.com".to_string())),
            ConsoleError::NotFound(_)
        ));
        assert!(matches!(
            ConsoleError::from(StudentError::RepositoryError("lock".to_string())),
            ConsoleError::Internal(_)
        ));
    }

    #[test]
    fn test_reply_rendering() {
        assert_eq!(ConsoleReply::Students(vec![]).to_string(), "No students registered.");
        assert_eq!(ConsoleReply::SignedIn(student()).to_string(), "Welcome, Ada!");
        assert!(ConsoleReply::Help.to_string().contains(REGISTER_USAGE));
    }
}
