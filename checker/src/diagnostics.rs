use std::sync::Mutex;

/// Message shown in place of a blank diagnostic.
pub const GENERIC_MESSAGE: &str = "You did not provide a valid input.";

/// Surface that renders check diagnostics.
///
/// The host decides where messages end up: a terminal, the log, or a UI.
/// Implementations must be shareable across threads since a checker can be
/// cloned freely.
pub trait DiagnosticSink: Send + Sync {
    /// Render one diagnostic message.
    fn show(&self, message: &str);
}

/// Route a message to a sink, substituting the generic message for blank text.
pub(crate) fn emit(sink: &dyn DiagnosticSink, message: &str) {
    if message.trim().is_empty() {
        sink.show(GENERIC_MESSAGE);
    } else {
        sink.show(message);
    }
}

/// Prints diagnostics to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn show(&self, message: &str) {
        println!("{}", message);
    }
}

/// Emits diagnostics as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn show(&self, message: &str) {
        tracing::warn!(diagnostic = %message, "Input rejected");
    }
}

/// Keeps diagnostics in memory so the host can render them later.
#[derive(Debug, Default)]
pub struct CollectingSink {
    messages: Mutex<Vec<String>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Remove and return every recorded message.
    pub fn drain(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn show(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_replaces_blank_message() {
        let sink = CollectingSink::new();

        emit(&sink, "   ");
        emit(&sink, "Your input was not a decimal number.");

        assert_eq!(
            sink.messages(),
            vec![
                GENERIC_MESSAGE.to_string(),
                "Your input was not a decimal number.".to_string()
            ]
        );
    }

    #[test]
    fn test_drain_empties_sink() {
        let sink = CollectingSink::new();
        sink.show("first");

        assert_eq!(sink.drain(), vec!["first".to_string()]);
        assert!(sink.messages().is_empty());
    }
}
