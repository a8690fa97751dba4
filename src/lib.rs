// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# tracewise

tracewise is a scope-tracing logger for multi-threaded Rust.

# The problem

Reading log output from a threaded program, two questions eat most of the
debugging time: *which thread printed this line*, and *where in the call
tree was it*? Conventional logging answers neither: every call site has
to spell out its own context, and interleaved output from a handful of
workers turns into soup.

tracewise answers both mechanically. Each traced scope (a function call
or a named block) emits a pair of enter/exit lines, nested output indents
with the thread's live call depth, and every line a thread emits renders
in that thread's own color with its name (or numeric id) in the header.
Control flow can be read back off the console.

# The API

```
fn load(count: usize) {
    tracewise::trace_call!(count);
    tracewise::info!("loaded {} items", count);
}

tracewise::set_current_thread_name("loader");
load(3);
```

produces (colors elided):

```text
[I][trace][loader]> load(count=3) --lib.rs:4
[I][trace][loader]   loaded 3 items --lib.rs:5
[I][trace][loader]< load()
```

A nested call indents one dash deeper per level. [`trace_call!`] captures
the enclosing function's name and its arguments' source text at compile
time; [`trace_call_format!`] substitutes one pre-formatted argument
string; [`trace_scope!`] traces an arbitrary block under a raw name; and
[`info!`]/[`warn!`]/[`error!`]/[`debug!`] emit plain leveled messages at
the current depth. The exit line intentionally repeats no location tail;
the enter line already recorded it.

# Multithreading

All bookkeeping (depth, color, name) is thread-local. The only shared
state is a color-assignment counter, locked at most once per thread, and
the printer slot below. Within one thread, lines appear in program order
and nest correctly; across threads, whole lines interleave arbitrarily but
never mix bytes.

# The sink

Finished lines go to the process-wide [`Printer`]. By default that is
[`StdoutPrinter`]; [`set_global_printer`] swaps in anything else, such as
an [`InMemoryPrinter`] for tests or an [`FnPrinter`] wrapping a callback
into a file or network backend.

# Failure policy

Tracing is incidental to the host program and is never allowed to take it
down: formatting failures degrade to empty text, sink write errors are
discarded, and a scope constructed from mismatched argument-name/value
lists is silently suppressed rather than reported.
*/

mod color;
mod depth;
mod formatter;
mod global_printer;
mod level;
mod line;
mod macros;
mod printer;
mod scope;
mod thread_name;

pub use depth::depth;
pub use formatter::refine_function_name;
pub use global_printer::{global_printer, set_global_printer};
pub use level::Level;
pub use line::LogLine;
pub use printer::{FnPrinter, InMemoryPrinter, Printer, StdoutPrinter};
pub use scope::ScopeGuard;
pub use thread_name::{get_current_thread_name, set_current_thread_name};

#[doc(hidden)]
pub mod hidden {
    pub use crate::formatter::{display_string, format_message, short_file};
    pub use crate::macros::log_message;
}
