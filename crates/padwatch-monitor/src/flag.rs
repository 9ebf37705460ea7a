use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared run/stop flag checked by the outer poll loop.
///
/// Clones share the same flag, so a handler or a signal handler can hold
/// one and stop the loop. Clearing it never interrupts a poll in progress.
#[derive(Debug, Clone)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    /// Creates a flag in the running state.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn set(&self, running: bool) {
        self.0.store(running, Ordering::Release);
    }

    #[inline]
    pub fn stop(&self) {
        self.set(false);
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}
