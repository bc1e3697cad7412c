use serde::Deserialize;

/// Where verbose diagnostics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticTarget {
    /// Print to standard output.
    #[default]
    Console,
    /// Emit through `tracing`.
    Log,
    /// Drop every diagnostic.
    Disabled,
}

/// Construction-time settings for a [`StringChecker`](crate::StringChecker).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckerConfig {
    /// When true, checks only report diagnostics if asked to run verbosely.
    pub silent_by_default: bool,
    pub diagnostics: DiagnosticTarget,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            silent_by_default: true,
            diagnostics: DiagnosticTarget::Console,
        }
    }
}
