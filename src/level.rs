// SPDX-License-Identifier: MIT OR Apache-2.0

/// The severities a line can carry.
///
/// Each level owns a one-character marker with a color of its own; the rest
/// of a line renders in the emitting thread's color.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Ordinary control-flow tracing.  Scope enter/exit lines use this.
    Info,
    /// Suspicious condition.
    Warn,
    /// Runtime error.
    Error,
    /// Print-style debugging.
    Debug,
}

impl Level {
    /// The single-character marker shown in the line header.
    pub fn marker(self) -> char {
        match self {
            Level::Info => 'I',
            Level::Warn => 'W',
            Level::Error => 'E',
            Level::Debug => 'D',
        }
    }

    /// The marker's color, independent of the thread body color.
    pub(crate) fn color(self) -> &'static str {
        match self {
            Level::Info => "\x1b[92m",  // bright green
            Level::Warn => "\x1b[93m",  // bright yellow
            Level::Error => "\x1b[91m", // bright red
            Level::Debug => "\x1b[94m", // bright blue
        }
    }
}
