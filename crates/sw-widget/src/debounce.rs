//! Trailing-edge debounce on top of the tokio timer.

use std::time::Duration;
use sw_core::{Result, SaltError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Owns at most one outstanding timer. Scheduling again cancels the pending
/// callback, so only the last call of a burst fires.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Bind to the current tokio runtime.
    pub fn new(delay: Duration) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| SaltError::NoRuntime)?;
        Ok(Self::with_handle(delay, runtime))
    }

    pub fn with_handle(delay: Duration, runtime: Handle) -> Self {
        Self { delay, runtime, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `f` once `delay` has passed without another `schedule`.
    pub fn schedule<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }

    /// Drop the pending callback. Returns whether one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
