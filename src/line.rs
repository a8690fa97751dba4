// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line type for the tracewise call tracer.
//!
//! [`LogLine`] is the value that accumulates one log line's pieces
//! (header, indentation, body, tail) while it is being assembled. Lines are
//! ephemeral: they are built, handed to the active
//! [`Printer`](crate::Printer), and never stored by the tracer itself.

use crate::Level;
use std::fmt::Display;

/**
One log line under assembly.

Rather than concatenating into a single growing string, the line stores its
pieces separately and joins them only when the printer renders it. Pieces
are pushed in display order; static text is pushed borrowed, computed text
is pushed owned.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogLine {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogLine {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::new(),
            level,
        }
    }

    /// Appends a borrowed piece to the line.
    pub fn push(&mut self, part: &str) {
        self.parts.push(part.to_string());
    }

    /// Appends an already-owned piece to the line.
    pub fn push_owned(&mut self, part: String) {
        self.parts.push(part);
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogLine {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogLine:

- Debug/Clone/PartialEq/Eq/Hash: derived; records are plain data.
- Default: Info level, no parts.
- Display: joins the parts; this is what printers render.
- Copy: no, Vec<String> owns heap data.
- Ord/PartialOrd: no meaningful ordering between lines.
*/
