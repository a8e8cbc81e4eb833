//! Consumer-lifetime release signal

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Marks the end of a consumer's interest in a collection
///
/// Cloned handles share one flag. Once released, in-flight fetches are
/// dropped without touching state and later operations are skipped.
#[derive(Debug, Clone, Default)]
pub struct ReleaseHandle {
    released: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ReleaseHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal release; idempotent
    pub fn release(&self) {
        if !self.released.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// Resolves once `release` has been called
    pub async fn released(&self) {
        // Register before checking the flag so a concurrent release cannot
        // slip in between the check and the await
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_released() {
            return;
        }
        notified.await;
    }
}
