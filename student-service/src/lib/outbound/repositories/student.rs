use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::student::models::Student;
use crate::domain::student::ports::StudentRepository;
use crate::student::errors::StudentError;

/// Process-local student storage backing the console host.
///
/// Students are kept in registration order. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<Vec<Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, student: Student) -> Result<Student, StudentError> {
        let mut students = self.students.write().await;
        students.push(student.clone());

        tracing::debug!(
            student_id = %student.id,
            stored = students.len(),
            "Student stored in memory"
        );

        Ok(student)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentError> {
        let students = self.students.read().await;

        Ok(students
            .iter()
            .find(|student| student.email.as_str() == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Student>, StudentError> {
        Ok(self.students.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use auth::Credential;
    use checker::StringChecker;
    use chrono::Utc;

    use super::*;
    use crate::domain::student::models::EmailAddress;
    use crate::domain::student::models::StudentId;

    fn student(first_name: &str, email: &str) -> Student {
        Student {
            id: StudentId::new(),
            first_name: first_name.to_string(),
            last_name: "Hopper".to_string(),
            email: EmailAddress::new(&StringChecker::without_diagnostics(), email.to_string())
                .unwrap(),
            age: 30,
            telephone: 5550000000,
            credential: Credential::new(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_after_create() {
        let repository = InMemoryStudentRepository::new();
        let created = repository
            .create(student("Grace", "grace@example.com"))
            .await
            .unwrap();

        let found = repository
            .find_by_email("grace@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, created.id);
        assert!(repository
            .find_by_email("other@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_registration_order() {
        let repository = InMemoryStudentRepository::new();
        repository.create(student("Grace", "grace@example.com")).await.unwrap();
        repository.create(student("Alan", "alan@example.com")).await.unwrap();

        let names: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|student| student.first_name)
            .collect();

        assert_eq!(names, vec!["Grace", "Alan"]);
    }

    #[tokio::test]
    async fn test_duplicate_emails_are_accepted() {
        let repository = InMemoryStudentRepository::new();
        repository.create(student("Grace", "same@example.com")).await.unwrap();
        repository.create(student("Alan", "same@example.com")).await.unwrap();

        let found = repository.find_by_email("same@example.com").await.unwrap().unwrap();

        assert_eq!(found.first_name, "Grace");
        assert_eq!(repository.list_all().await.unwrap().len(), 2);
    }
}
