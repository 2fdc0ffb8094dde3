//! Scoped loading indicators

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared loading indicator
///
/// Clones observe the same flag, so a renderer can hold one while the
/// owning component runs a request.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is currently in flight
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard is dropped
    #[must_use = "the flag is cleared as soon as the guard is dropped"]
    pub fn acquire(&self) -> LoadingGuard {
        self.0.store(true, Ordering::Release);
        LoadingGuard {
            flag: Arc::clone(&self.0),
        }
    }
}

/// Clears its [`LoadingFlag`] on drop, on every exit path
#[derive(Debug)]
pub struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
