//! Timing-related utilities for [`Future`]s.
//!
//! [`Future`]: std::future::Future

use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Sleep;

/// Extension trait to wrap any [`Future`] into a [`SubtleTiming`] without
/// declaring it with [`SubtleTiming::new`] explicitly.
pub trait SubtleTimingFutureExt: Future {
    fn subtle_timing(self, duration: Duration) -> SubtleTiming<Self>
    where
        Self: Sized;
}

impl<F: Future> SubtleTimingFutureExt for F {
    fn subtle_timing(self, duration: Duration) -> SubtleTiming<Self> {
        SubtleTiming::new(self, duration)
    }
}

/// Runs the inner future to completion but does not yield its output
/// before the given duration has elapsed, giving the wrapped operation a
/// flat execution time floor.
///
/// Used on the login path so that response timing does not reveal where
/// a credential check failed.
#[pin_project]
#[derive(Debug)]
#[must_use]
pub struct SubtleTiming<F: Future> {
    #[pin]
    future: F,
    // Holds the output while we're still waiting for the timer.
    result: Option<F::Output>,
    #[pin]
    sleep: Sleep,
}

impl<F: Future> SubtleTiming<F> {
    #[must_use]
    pub fn new(future: F, duration: Duration) -> Self {
        Self {
            future,
            result: None,
            sleep: tokio::time::sleep(duration),
        }
    }
}

impl<F: Future> Future for SubtleTiming<F> {
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut me = self.project();
        if me.result.is_none() {
            match me.future.poll(cx) {
                Poll::Ready(output) => *me.result = Some(output),
                Poll::Pending => return Poll::Pending,
            }
        }

        match me.sleep.as_mut().poll(cx) {
            Poll::Ready(..) => Poll::Ready(me.result.take().unwrap()),
            Poll::Pending => Poll::Pending,
        }
    }
}
