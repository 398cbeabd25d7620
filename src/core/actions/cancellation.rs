use std::sync::atomic::{AtomicBool, Ordering};

pub const CANCEL_CHECK_INTERVAL_STEPS: u64 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled {
    pub completed_steps: u64,
}

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "chaos game cancelled after {} steps", self.completed_steps)
    }
}

impl std::error::Error for Cancelled {}

pub trait CancelToken: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl CancelToken for AtomicBool {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> bool + Send + Sync,
{
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Asks a [`CancelToken`] about cancellation once every `interval` steps, starting at step 0.
#[derive(Debug, Clone, Copy)]
pub struct StepPoller<'a, C: ?Sized> {
    token: &'a C,
    interval: u64,
}

impl<'a, C: CancelToken + ?Sized> StepPoller<'a, C> {
    /// An `interval` of zero is treated as one, so every step polls.
    pub fn new(token: &'a C, interval: u64) -> Self {
        Self {
            token,
            interval: interval.max(1),
        }
    }

    pub fn every_check_interval(token: &'a C) -> Self {
        Self::new(token, CANCEL_CHECK_INTERVAL_STEPS)
    }

    #[must_use]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    #[inline]
    #[must_use]
    pub fn polls_at(&self, step: u64) -> bool {
        step % self.interval == 0
    }

    /// Call before running step `step` (0-based). On cancellation, `step` is the number of
    /// steps already completed.
    #[inline]
    pub fn check(&self, step: u64) -> Result<(), Cancelled> {
        if self.polls_at(step) && self.token.is_cancelled() {
            return Err(Cancelled {
                completed_steps: step,
            });
        }

        Ok(())
    }
}
