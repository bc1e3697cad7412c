use std::sync::Arc;

use checker::StringChecker;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;

use super::commands::Command;
use super::handlers;
use super::handlers::ConsoleError;
use super::handlers::ConsoleReply;
use crate::domain::student::ports::StudentServicePort;

/// Shared state handed to every console handler.
pub struct ConsoleState<S>
where
    S: StudentServicePort,
{
    pub student_service: Arc<S>,
    pub checker: StringChecker,
}

impl<S> ConsoleState<S>
where
    S: StudentServicePort,
{
    pub fn new(student_service: Arc<S>, checker: StringChecker) -> Self {
        Self {
            student_service,
            checker,
        }
    }
}

impl<S> Clone for ConsoleState<S>
where
    S: StudentServicePort,
{
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
            checker: self.checker.clone(),
        }
    }
}

/// Line-oriented host: reads one command per line and writes one reply.
pub struct Console<S>
where
    S: StudentServicePort,
{
    state: ConsoleState<S>,
}

impl<S> Console<S>
where
    S: StudentServicePort,
{
    pub fn new(student_service: Arc<S>, checker: StringChecker) -> Self {
        Self {
            state: ConsoleState::new(student_service, checker),
        }
    }

    /// Parse and execute a single line.
    pub async fn handle_line(&self, line: &str) -> Result<ConsoleReply, ConsoleError> {
        let command: Command = line.parse()?;
        self.dispatch(command).await
    }

    pub async fn dispatch(&self, command: Command) -> Result<ConsoleReply, ConsoleError> {
        match command {
            Command::Check { check, input } => handlers::check(&self.state, &check, &input),
            Command::Register(form) => handlers::register(&self.state, form).await,
            Command::Login(attempt) => handlers::login(&self.state, attempt).await,
            Command::List => handlers::list(&self.state).await,
            Command::Export => handlers::export(&self.state).await,
            Command::Help => Ok(ConsoleReply::Help),
            Command::Quit => Ok(ConsoleReply::Goodbye),
        }
    }

    /// Serve commands until `quit` or end of input.
    ///
    /// Blank lines are skipped. Every other line produces exactly one reply
    /// line (or block) on `writer`.
    ///
    /// # Errors
    /// * `std::io::Error` - Reading or writing failed
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let outcome = self.handle_line(&line).await;
            let rendered = match &outcome {
                Ok(reply) => reply.to_string(),
                Err(err) => {
                    tracing::debug!(error = %err, "Command failed");
                    err.to_string()
                }
            };

            writer.write_all(rendered.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;

            if matches!(outcome, Ok(ConsoleReply::Goodbye)) {
                break;
            }
        }

        Ok(())
    }
}
