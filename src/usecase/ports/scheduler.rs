use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Single-threaded task spawning and timers for the current platform.
pub trait Scheduler {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
