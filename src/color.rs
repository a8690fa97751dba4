// SPDX-License-Identifier: MIT OR Apache-2.0

//! Round-robin thread color assignment.
//!
//! Every thread receives one color from a fixed palette the first time it
//! emits a line, and keeps that color for its whole lifetime. Assignment
//! advances a single shared counter under a lock and caches the resulting
//! palette index in thread-local storage, so the lock is taken at most once
//! per thread. Once more threads have been seen than the palette holds, the
//! counter wraps and two threads share a color; the collision is cosmetic
//! and accepted.

use std::cell::OnceCell;
use std::sync::Mutex;

/// Restores the terminal's default color.
pub(crate) const RESET: &str = "\x1b[0m";

const PALETTE: [&str; 10] = [
    "\x1b[31m", // red
    "\x1b[32m", // green
    "\x1b[33m", // yellow
    "\x1b[34m", // blue
    "\x1b[35m", // magenta
    "\x1b[36m", // cyan
    "\x1b[91m", // bright red
    "\x1b[92m", // bright green
    "\x1b[93m", // bright yellow
    "\x1b[94m", // bright blue
];

static NEXT_INDEX: Mutex<usize> = Mutex::new(0);

thread_local! {
    static ASSIGNED: OnceCell<usize> = const { OnceCell::new() };
}

fn advance(counter: &mut usize) -> usize {
    let index = *counter;
    *counter = (index + 1) % PALETTE.len();
    index
}

/// The color code assigned to the calling thread.
pub(crate) fn current_thread_color() -> &'static str {
    let index = ASSIGNED.with(|cell| {
        *cell.get_or_init(|| {
            let mut counter = NEXT_INDEX.lock().unwrap_or_else(|e| e.into_inner());
            advance(&mut counter)
        })
    });
    PALETTE[index]
}
