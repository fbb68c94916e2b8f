/// Visual severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A completed operation
    Success,
    /// A failed operation
    Error,
    /// Neutral information
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A transient user notification.
///
/// Destroyed either by explicit removal or automatically once `duration_ms`
/// elapses. A duration of 0 means the toast persists until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Short random identifier
    pub id: String,

    /// Text shown to the user
    pub message: String,

    /// Visual severity
    pub severity: Severity,

    /// Auto-dismiss delay in milliseconds; 0 disables auto-dismissal
    pub duration_ms: u64,
}
