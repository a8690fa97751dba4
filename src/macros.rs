// SPDX-License-Identifier: MIT OR Apache-2.0

//! The instrumentation surface: macros that trace calls, blocks, and
//! leveled messages.
//!
//! Argument names are captured from their source text with `stringify!`,
//! values through their `Display` impls, and the enclosing function's path
//! with a type-name probe. All of it lowers onto
//! [`ScopeGuard`](crate::ScopeGuard) and the hidden dispatch helpers, so
//! any code that produces the same (name, value) inputs can bypass the
//! macros entirely.

use crate::Level;
use crate::formatter;
use crate::global_printer;

/// Dispatches one leveled message at the calling thread's current depth.
///
/// Called by the leveled macros; not part of the public surface.
#[doc(hidden)]
pub fn log_message(file: &str, line: u32, level: Level, args: std::fmt::Arguments<'_>) {
    let message = formatter::format_message(args);
    global_printer::emit(formatter::message_line(file, line, level, &message));
}

/// Captures the path of the enclosing function, e.g. `my_crate::worker::run`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_path {
    () => {{
        fn probe() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(probe);
        // the probe itself contributes a trailing `::probe`
        &name[..name.len() - "::probe".len()]
    }};
}

/**
Traces the enclosing function as a scope.

Emits the scope-enter line immediately and binds a guard that emits the
matching exit line when the enclosing block ends, however it ends.
Arguments are optional; each one is rendered as `name=value` with the name
taken from the argument's source text and the value from its `Display`
impl.

```
fn transfer(amount: u32, dry_run: bool) {
    tracewise::trace_call!(amount, dry_run);
    // -> transfer(amount=250, dry_run=false)
}
transfer(250, false);
```
*/
#[macro_export]
macro_rules! trace_call {
    () => {
        let _scope = $crate::ScopeGuard::enter_formatted(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::__function_path!(),
            true,
            "",
        );
    };
    ($($arg:expr),+ $(,)?) => {
        let _scope = $crate::ScopeGuard::enter_args(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::__function_path!(),
            true,
            &[$(stringify!($arg)),+],
            &[$($crate::hidden::display_string(&$arg)),+],
        );
    };
}

/**
Traces the enclosing function as a scope, with one pre-formatted argument
string rendered verbatim between the parentheses.

```
fn resize(w: u32, h: u32) {
    tracewise::trace_call_format!("{}x{}", w, h);
    // -> resize(640x480)
}
resize(640, 480);
```
*/
#[macro_export]
macro_rules! trace_call_format {
    ($($fmt:tt)+) => {
        let _scope = $crate::ScopeGuard::enter_formatted(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::__function_path!(),
            true,
            &$crate::hidden::format_message(format_args!($($fmt)+)),
        );
    };
}

/**
Traces a block as a named scope.

The name is shown as given, with no parentheses or refinement.

```
fn rebuild() {
    {
        tracewise::trace_scope!("load phase");
        // ...
    }
    {
        tracewise::trace_scope!("index phase");
        // ...
    }
}
rebuild();
```
*/
#[macro_export]
macro_rules! trace_scope {
    ($name:expr) => {
        let _scope = $crate::ScopeGuard::enter_formatted(
            $crate::hidden::short_file(file!()),
            line!(),
            $name,
            false,
            "",
        );
    };
}

/**
Emits an info-level message at the current depth.

```
tracewise::info!("loaded {} entries", 3);
```
*/
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::hidden::log_message(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::Level::Info,
            format_args!($($arg)+),
        )
    };
}

/**
Emits a warn-level message at the current depth.

```
tracewise::warn!("queue depth {} exceeds soft limit", 120);
```
*/
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::hidden::log_message(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::Level::Warn,
            format_args!($($arg)+),
        )
    };
}

/**
Emits an error-level message at the current depth.

```
tracewise::error!("write failed: {}", "disk full");
```
*/
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::hidden::log_message(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::Level::Error,
            format_args!($($arg)+),
        )
    };
}

/**
Emits a debug-level message at the current depth.

```
tracewise::debug!("cursor at {}", 17);
```
*/
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::hidden::log_message(
            $crate::hidden::short_file(file!()),
            line!(),
            $crate::Level::Debug,
            format_args!($($arg)+),
        )
    };
}
