//! Notification and diagnostic sinks
//!
//! The pipeline reports user-facing notices and diagnostic records through
//! these ports and never waits on them. Front ends plug in whatever surface
//! they have (terminal, log, test recorder).

use console::style;
use parking_lot::Mutex;
use std::fmt;

/// Kind of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation succeeded
    Success,
    /// Operation was rejected or failed
    Error,
    /// Informational notice
    Info,
    /// Operation continued with a caveat
    Warning,
}

/// A short user-facing notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Notification kind
    pub kind: NotificationKind,
    /// Message body
    pub message: String,
    /// Short title, e.g. "413 Payload Too Large"
    pub title: String,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            title: title.into(),
        }
    }
}

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Routine progress
    Info,
    /// Recoverable condition
    Warning,
    /// Operation failed
    Error,
    /// Unexpected internal failure
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

/// A diagnostic record for operators rather than end users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Short machine-friendly title, e.g. "BUFFER_OVERFLOW"
    pub title: String,
    /// Message body
    pub message: String,
    /// Severity
    pub severity: Severity,
    /// Optional status code
    pub code: Option<u16>,
}

impl Diagnostic {
    /// Create a diagnostic without a status code
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            code: None,
        }
    }

    /// Attach a status code
    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }
}

/// Consumer of user-facing notifications
pub trait NotificationSink: Send + Sync {
    /// Deliver a notification
    fn notify(&self, notification: Notification);
}

/// Consumer of diagnostic records
pub trait DiagnosticSink: Send + Sync {
    /// Record a diagnostic
    fn record(&self, diagnostic: Diagnostic);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, diagnostic: Diagnostic) {
        (**self).record(diagnostic)
    }
}

/// Sink that drops everything (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NotificationSink for NoOpSink {
    fn notify(&self, _notification: Notification) {}
}

impl DiagnosticSink for NoOpSink {
    fn record(&self, _diagnostic: Diagnostic) {}
}

/// In-memory sink for testing
#[derive(Debug, Default)]
pub struct MemorySink {
    notifications: Mutex<Vec<Notification>>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }

    /// All diagnostics received so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Clear all recorded data
    pub fn clear(&self) {
        self.notifications.lock().clear();
        self.diagnostics.lock().clear();
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}

/// Prints notifications as one styled line on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    /// Render a notification without printing it
    pub fn render(notification: &Notification) -> String {
        let tag = match notification.kind {
            NotificationKind::Success => style("ok:").green().bold(),
            NotificationKind::Error => style("error:").red().bold(),
            NotificationKind::Info => style("info:").cyan().bold(),
            NotificationKind::Warning => style("warning:").yellow().bold(),
        };
        format!(
            "{} {} {}",
            tag,
            notification.message,
            style(format!("[{}]", notification.title)).dim()
        )
    }
}

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::render(&notification));
    }
}

/// Forwards diagnostics to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl LogDiagnostics {
    fn level(severity: Severity) -> log::Level {
        match severity {
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Critical => log::Level::Error,
        }
    }
}

impl DiagnosticSink for LogDiagnostics {
    fn record(&self, diagnostic: Diagnostic) {
        let level = Self::level(diagnostic.severity);
        match diagnostic.code {
            Some(code) => log::log!(
                level,
                "[{}] {} ({}): {}",
                diagnostic.severity,
                diagnostic.title,
                code,
                diagnostic.message
            ),
            None => log::log!(
                level,
                "[{}] {}: {}",
                diagnostic.severity,
                diagnostic.title,
                diagnostic.message
            ),
        }
    }
}
