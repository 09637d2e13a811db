use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;

/// Registry of per-file-name async locks.
///
/// Two concurrent uploads of the same file name would otherwise race between
/// the existence check and the artifact write; holding the file's lock for
/// the whole check-then-act sequence serializes them.
#[derive(Clone, Default)]
pub struct IngestLocks {
    inner: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl IngestLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for `file_name`, creating it on first use.
    /// The registry keeps one entry per distinct file name for the process
    /// lifetime.
    pub fn for_file(&self, file_name: &str) -> Arc<AsyncMutex<()>> {
        let mut locks = self.inner.lock().expect("lock registry poisoned");
        locks.entry(file_name.to_string()).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_file_name_shares_one_lock() {
        let locks = IngestLocks::new();
        let a = locks.for_file("resume.pdf");
        let b = locks.for_file("resume.pdf");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_different_file_names_get_different_locks() {
        let locks = IngestLocks::new();
        let a = locks.for_file("resume.pdf");
        let b = locks.for_file("other.pdf");
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[tokio::test]
    async fn test_held_lock_blocks_second_acquirer() {
        let locks = IngestLocks::new();
        let lock = locks.for_file("resume.pdf");
        let guard = lock.lock().await;

        assert!(locks.for_file("resume.pdf").try_lock().is_err());
        drop(guard);
        assert!(locks.for_file("resume.pdf").try_lock().is_ok());
    }
}
