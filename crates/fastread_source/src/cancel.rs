//! Cooperative cancellation for long scans.
//!
//! The tokenizer polls an injected [`CancellationCheck`] at a fixed line
//! cadence. The host decides what "cancelled" means: a closure, a shared
//! [`CancelFlag`], or [`NeverCancel`] for scans that must run to the end.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// An externally controlled abort signal, polled during long scans.
pub trait CancellationCheck {
    /// Returns `true` if the current scan should stop.
    fn is_cancelled(&mut self) -> bool;
}

/// A check that never fires.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverCancel;

impl CancellationCheck for NeverCancel {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        false
    }
}

impl<F: FnMut() -> bool> CancellationCheck for F {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        self()
    }
}

/// Shared cancellation flag.
///
/// Clones observe the same flag, so a host thread (or signal handler)
/// can cancel a scan running elsewhere.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the flag can be reused.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl CancellationCheck for CancelFlag {
    #[inline]
    fn is_cancelled(&mut self) -> bool {
        self.is_set()
    }
}
