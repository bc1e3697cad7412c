use std::sync::Arc;

use checker::StringChecker;
use student_service::config::Config;
use student_service::domain::student::service::StudentService;
use student_service::inbound::console::Console;
use student_service::outbound::repositories::InMemoryStudentRepository;
use tokio::io::BufReader;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_service=debug,auth=info,checker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        service = "student-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        silent_by_default = config.checker.silent_by_default,
        diagnostics = ?config.checker.diagnostics,
        "Configuration loaded"
    );

    let checker = StringChecker::new(&config.checker);
    let student_repository = Arc::new(InMemoryStudentRepository::new());
    let student_service = Arc::new(StudentService::new(student_repository, checker.clone()));

    let console = Console::new(student_service, checker);
    tracing::info!(interface = "stdin", "Console ready, type `help` for commands");

    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    tracing::info!("Console closed");
    Ok(())
}
