use std::sync::Arc;

use checker::CollectingSink;
use checker::StringChecker;
use student_service::domain::student::service::StudentService;
use student_service::inbound::console::Console;
use student_service::outbound::repositories::InMemoryStudentRepository;

pub type TestService = StudentService<InMemoryStudentRepository>;

/// Test application wiring the console to an in-memory repository
pub struct TestApp {
    pub console: Console<TestService>,
    pub service: Arc<TestService>,
    pub diagnostics: Arc<CollectingSink>,
}

impl TestApp {
    /// Build the application with verbose diagnostics captured in memory
    pub fn spawn() -> Self {
        let diagnostics = Arc::new(CollectingSink::new());
        let checker = StringChecker::with_sink(diagnostics.clone(), false);

        let repository = Arc::new(InMemoryStudentRepository::new());
        let service = Arc::new(StudentService::new(repository, checker.clone()));
        let console = Console::new(Arc::clone(&service), checker);

        Self {
            console,
            service,
            diagnostics,
        }
    }

    /// Feed a whole script through the console and return what it printed
    pub async fn run_script(&self, script: &str) -> String {
        let mut output: Vec<u8> = Vec::new();

        self.console
            .run(script.as_bytes(), &mut output)
            .await
            .expect("Console run failed");

        String::from_utf8(output).expect("Console wrote invalid UTF-8")
    }
}
