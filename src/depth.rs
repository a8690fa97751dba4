// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread scope depth.
//!
//! Depth counts the scopes on the calling thread that have been entered and
//! not yet exited; it drives the indentation of every line the thread
//! emits. The counter is thread-local, so no locking is involved and no
//! other thread can observe or disturb it.

use std::cell::Cell;

thread_local! {
    static DEPTH: Cell<u32> = const { Cell::new(0) };
}

/// The calling thread's current nesting depth.
#[inline]
pub fn depth() -> u32 {
    DEPTH.with(|d| d.get())
}

#[inline]
pub(crate) fn increment() {
    DEPTH.with(|d| d.set(d.get() + 1));
}

/// Saturating: an unmatched exit leaves the counter at zero.
#[inline]
pub(crate) fn decrement() {
    DEPTH.with(|d| {
        let current = d.get();
        if current > 0 {
            d.set(current - 1);
        }
    });
}
