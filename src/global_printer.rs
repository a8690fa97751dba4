// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide printer slot.
//!
//! At most one printer is active at a time. The slot starts out holding a
//! [`StdoutPrinter`] and can be replaced at any point; the last writer
//! wins. Replacement is expected during single-threaded setup, before
//! worker threads start tracing; concurrent reconfiguration is not
//! guarded beyond the slot's own lock.
//!
//! The lock is held only long enough to clone or swap an `Arc`, so
//! emission from many threads contends only briefly.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tracewise::{InMemoryPrinter, global_printer, set_global_printer};
//!
//! // Route everything into memory instead of the console.
//! let printer = Arc::new(InMemoryPrinter::new());
//! set_global_printer(printer.clone());
//!
//! tracewise::warn!("kept in memory");
//! assert!(printer.drain_logs().contains("kept in memory"));
//!
//! // The slot always resolves to something; never configured means the
//! // console default.
//! let _active = global_printer();
//! ```

use crate::line::LogLine;
use crate::printer::{Printer, StdoutPrinter};
use std::sync::{Arc, Mutex, OnceLock};

static GLOBAL_PRINTER: OnceLock<Mutex<Arc<dyn Printer>>> = OnceLock::new();

fn slot() -> &'static Mutex<Arc<dyn Printer>> {
    GLOBAL_PRINTER.get_or_init(|| Mutex::new(Arc::new(StdoutPrinter::new())))
}

/// The active printer. Initializes the slot with the console default on
/// first use.
pub fn global_printer() -> Arc<dyn Printer> {
    slot().lock().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Replaces the active printer; the last writer wins.
///
/// The previous printer drops once every handle cloned out of the slot has
/// finished its in-flight line.
pub fn set_global_printer(printer: Arc<dyn Printer>) {
    *slot().lock().unwrap_or_else(|e| e.into_inner()) = printer;
}

/// Hands one finished line to the active printer.
pub(crate) fn emit(line: LogLine) {
    global_printer().print_line(line);
}

/// Serializes tests that reconfigure the process-wide slot.
#[cfg(test)]
pub(crate) static TEST_PRINTER_GUARD: Mutex<()> = Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;
    use crate::printer::{InMemoryPrinter, StdoutPrinter};

    #[test]
    fn slot_always_resolves() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let _printer = global_printer();
    }

    #[test]
    fn last_writer_wins() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let first = Arc::new(InMemoryPrinter::new());
        let second = Arc::new(InMemoryPrinter::new());
        set_global_printer(first.clone());
        set_global_printer(second.clone());

        let mut line = LogLine::new(Level::Info);
        line.push("routed");
        emit(line);

        assert_eq!(first.drain_logs(), "");
        assert!(second.drain_logs().contains("routed"));

        set_global_printer(Arc::new(StdoutPrinter::new()));
    }
}
