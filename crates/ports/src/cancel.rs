// crates/ports/src/cancel.rs
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use gostats_shared_kernel::{ApplicationError, ApplicationResult};

/// Shared flag checked between stages and before each file.
///
/// Clones observe the same flag, so a token handed to a signal handler or another
/// thread can stop a running gather.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// `Err(Cancelled)` once [`cancel`](Self::cancel) has been called on any clone.
    pub fn check(&self) -> ApplicationResult<()> {
        if self.is_cancelled() { Err(ApplicationError::Cancelled) } else { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(token.check().is_ok());

        handle.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(ApplicationError::Cancelled)));
    }
}
