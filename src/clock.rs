use std::future::Future;
use std::time::Duration;

/// Pacing seam for the nightly workflow. All waits between workflow steps
/// go through this trait so tests can substitute a recording implementation
/// and check the delay contract without wall-clock waits.
pub trait Clock: Send + Sync {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
