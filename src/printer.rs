// SPDX-License-Identifier: MIT OR Apache-2.0

//! The output seam: where finished lines leave the tracer.
//!
//! Exactly one [`Printer`] is active per process (see
//! [`global_printer()`](crate::global_printer())); everything else about
//! the destination, whether console, file, rotating backend, or test
//! capture, lives behind this trait.

use crate::line::LogLine;
use std::fmt::Debug;
use std::sync::Mutex;

pub trait Printer: Debug + Send + Sync {
    /**
    Delivers one finished line.

    Called concurrently from every traced thread. Implementations must not
    interleave one line's bytes with another's; interleaving between whole
    lines is fine.
    */
    fn print_line(&self, line: LogLine);

    /**
    The application may imminently exit. Ensure buffered lines are written.
    */
    fn flush(&self);
}

/**
The default printer: each line, followed by a newline, to stdout.
*/
#[derive(Debug, Clone)]
pub struct StdoutPrinter {}

// Boilerplate for the zero-sized default printer: all instances are
// interchangeable, so Copy/PartialEq/Eq/Hash are trivial.

impl Copy for StdoutPrinter {}

impl PartialEq for StdoutPrinter {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for StdoutPrinter {}

impl std::hash::Hash for StdoutPrinter {
    fn hash<H: std::hash::Hasher>(&self, _state: &mut H) {}
}

impl Default for StdoutPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutPrinter {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Printer for StdoutPrinter {
    fn print_line(&self, line: LogLine) {
        use std::io::Write;
        let mut lock = std::io::stdout().lock();
        // the stream lock is held across both writes, keeping the line's
        // bytes contiguous; write errors are discarded, not propagated
        let _ = lock.write_all(line.to_string().as_bytes());
        let _ = lock.write_all(b"\n");
    }

    fn flush(&self) {
        use std::io::Write;
        let _ = std::io::stdout().flush();
    }
}

/**
A printer that keeps every line in memory.

The capture device for tests, and for environments where the console is
unavailable. Lines accumulate until drained.

```
use std::sync::Arc;
use tracewise::{InMemoryPrinter, set_global_printer};

let printer = Arc::new(InMemoryPrinter::new());
set_global_printer(printer.clone());

tracewise::info!("captured");
assert!(printer.drain_logs().contains("captured"));
```
*/
#[derive(Debug)]
pub struct InMemoryPrinter {
    lines: Mutex<Vec<String>>,
}

impl Default for InMemoryPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPrinter {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Drains all captured lines into one newline-joined string, clearing
    /// the buffer.
    pub fn drain_logs(&self) -> String {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        let drained = lines.join("\n");
        lines.clear();
        drained
    }
}

impl Printer for InMemoryPrinter {
    fn print_line(&self, line: LogLine) {
        let rendered = line.to_string();
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(rendered);
    }

    fn flush(&self) {
        // nothing buffered beyond the vector itself
    }
}

/**
A printer backed by a plain callback.

The hook for routing output into an external backend such as a
rotating-file writer without implementing [`Printer`] by hand.
The callback receives each fully rendered line, without a trailing
newline.

```
use std::sync::Arc;
use tracewise::{FnPrinter, set_global_printer};

set_global_printer(Arc::new(FnPrinter::new(|line| {
    eprintln!("{}", line);
})));
```
*/
pub struct FnPrinter<F> {
    callback: F,
}

impl<F: Fn(&str) + Send + Sync> FnPrinter<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> Debug for FnPrinter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPrinter").finish_non_exhaustive()
    }
}

impl<F: Fn(&str) + Send + Sync> Printer for FnPrinter<F> {
    fn print_line(&self, line: LogLine) {
        (self.callback)(&line.to_string());
    }

    fn flush(&self) {}
}
