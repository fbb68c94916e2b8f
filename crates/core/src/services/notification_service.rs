use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::ids;
use crate::models::toast::{Severity, Toast};

/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// The queue of active toast notifications.
///
/// A cheaply cloneable handle: clones share the same queue, so the UI layer
/// and the facade can each hold one. Auto-dismissal runs as a sleep task on
/// the ambient tokio runtime; all queue operations themselves are
/// synchronous and non-blocking.
#[derive(Clone, Default)]
pub struct NotificationCenter {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id immediately.
    ///
    /// When `duration_ms > 0` and a tokio runtime is present, removal is
    /// scheduled after the delay. Without a runtime the toast simply stays
    /// until dismissed. A `duration_ms` of 0 always means persist until
    /// dismissed.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration_ms: u64,
    ) -> String {
        let id = ids::short_id();
        self.lock().push(Toast {
            id: id.clone(),
            message: message.into(),
            severity,
            duration_ms,
        });

        if duration_ms > 0 {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let queue = self.clone();
                    let toast_id = id.clone();
                    handle.spawn(async move {
                        tokio::time::sleep(Duration::from_millis(duration_ms)).await;
                        // May race a manual dismissal; remove() tolerates that.
                        queue.remove(&toast_id);
                    });
                }
                Err(_) => {
                    log::debug!("No async runtime, toast {id} will not auto-dismiss");
                }
            }
        }

        id
    }

    /// Remove a toast by id. Idempotent: the id may already be gone, e.g.
    /// when the auto-dismiss timer fires after a manual removal.
    pub fn remove(&self, id: &str) {
        self.lock().retain(|toast| toast.id != id);
    }

    /// Show a success toast.
    pub fn success(&self, message: impl Into<String>, duration_ms: Option<u64>) -> String {
        self.show(
            message,
            Severity::Success,
            duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }

    /// Show an error toast.
    pub fn error(&self, message: impl Into<String>, duration_ms: Option<u64>) -> String {
        self.show(
            message,
            Severity::Error,
            duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }

    /// Show an info toast.
    pub fn info(&self, message: impl Into<String>, duration_ms: Option<u64>) -> String {
        self.show(
            message,
            Severity::Info,
            duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }

    /// Snapshot of the active toasts in insertion order.
    #[must_use]
    pub fn active(&self) -> Vec<Toast> {
        self.lock().clone()
    }

    /// Number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("active", &self.len())
            .finish()
    }
}
