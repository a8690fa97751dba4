// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scope guards: the enter/exit pair behind every traced call or block.

use crate::depth;
use crate::formatter;
use crate::global_printer;

/**
Ties one traced scope to the calling thread's depth counter.

Creating the guard increments the thread's depth and emits the scope-enter
line; dropping it emits the matching exit line and restores the depth.
Because the exit runs in `Drop`, the pair stays balanced on every path out
of the scope: fallthrough, early return, `?`, or panic unwinding.

Usually constructed by [`trace_call!`](crate::trace_call),
[`trace_call_format!`](crate::trace_call_format), or
[`trace_scope!`](crate::trace_scope) rather than directly; anything that
can produce the same name/value inputs may call the constructors itself.

```
use std::sync::Arc;
use tracewise::{InMemoryPrinter, ScopeGuard, set_global_printer};

let printer = Arc::new(InMemoryPrinter::new());
set_global_printer(printer.clone());

{
    let _scope = ScopeGuard::enter_args(
        "demo.rs", 10, "load", true,
        &["n"], &["4".to_string()],
    );
}

let logs = printer.drain_logs();
assert!(logs.contains("> load(n=4)"));
assert!(logs.contains("< load()"));
```
*/
#[derive(Debug)]
pub struct ScopeGuard {
    scope_name: String,
    is_function: bool,
    active: bool,
}

impl ScopeGuard {
    /**
    Begins a traced scope from paired argument names and values.

    The two lists must be the same length. On a mismatch the guard comes
    back inert: depth is untouched and neither the enter nor the exit line
    is ever emitted.
    */
    pub fn enter_args(
        file: &str,
        line: u32,
        scope_name: &str,
        is_function: bool,
        arg_names: &[&str],
        arg_values: &[String],
    ) -> Self {
        if arg_names.len() != arg_values.len() {
            return Self {
                scope_name: String::new(),
                is_function,
                active: false,
            };
        }
        Self::enter_formatted(
            file,
            line,
            scope_name,
            is_function,
            &formatter::paired_args(arg_names, arg_values),
        )
    }

    /// Begins a traced scope with one pre-formatted argument string, used
    /// verbatim between the parentheses of a function scope.
    pub fn enter_formatted(
        file: &str,
        line: u32,
        scope_name: &str,
        is_function: bool,
        args: &str,
    ) -> Self {
        depth::increment();
        global_printer::emit(formatter::scope_enter_line(
            file,
            line,
            scope_name,
            is_function,
            args,
        ));
        Self {
            scope_name: scope_name.to_string(),
            is_function,
            active: true,
        }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        // exit renders at the depth the scope entered with; the decrement
        // comes after
        global_printer::emit(formatter::scope_exit_line(
            &self.scope_name,
            self.is_function,
        ));
        depth::decrement();
    }
}

/*
boilerplate notes.

1.  Copy/Clone, no.  A guard owns exactly one depth increment.
2.  PartialEq/Ord/Hash, no.  Guards are not data.
3.  Default, no.  A guard without a scope name makes no sense.
4.  Send/Sync, deliberately not asserted: the guard must drop on the
    thread whose depth it incremented, and keeping it !Send by content
    (it is Send as written) is not worth a phantom; the macros bind it
    locally so it never migrates.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_printer::{TEST_PRINTER_GUARD, set_global_printer};
    use crate::printer::InMemoryPrinter;
    use std::sync::Arc;

    fn capture() -> Arc<InMemoryPrinter> {
        let printer = Arc::new(InMemoryPrinter::new());
        set_global_printer(printer.clone());
        printer
    }

    #[test]
    fn depth_follows_nesting() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let _printer = capture();

        assert_eq!(depth::depth(), 0);
        {
            let _outer = ScopeGuard::enter_formatted("t.rs", 1, "outer", true, "");
            assert_eq!(depth::depth(), 1);
            {
                let _inner = ScopeGuard::enter_formatted("t.rs", 2, "inner", true, "");
                assert_eq!(depth::depth(), 2);
            }
            assert_eq!(depth::depth(), 1);
        }
        assert_eq!(depth::depth(), 0);
    }

    #[test]
    fn nested_scopes_indent_with_dashes() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let printer = capture();

        {
            let _outer = ScopeGuard::enter_formatted("t.rs", 1, "outer", true, "");
            let _inner = ScopeGuard::enter_formatted("t.rs", 2, "inner", true, "");
        }

        let logs = printer.drain_logs();
        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("> outer()"));
        assert!(lines[1].contains("-> inner()"));
        assert!(lines[2].contains("<- inner()"));
        assert!(lines[3].contains("< outer()"));
    }

    #[test]
    fn mismatched_args_suppress_the_scope() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let printer = capture();

        {
            let scope =
                ScopeGuard::enter_args("t.rs", 1, "bad", true, &["a", "b"], &["1".to_string()]);
            assert_eq!(depth::depth(), 0);
            drop(scope);
        }

        assert_eq!(printer.drain_logs(), "");
        assert_eq!(depth::depth(), 0);
    }

    #[test]
    fn exit_emitted_even_on_unwind() {
        let _guard = TEST_PRINTER_GUARD.lock().unwrap();
        let printer = capture();

        let unwound = std::panic::catch_unwind(|| {
            let _scope = ScopeGuard::enter_formatted("t.rs", 1, "doomed", true, "");
            panic!("unwind out of the scope");
        });
        assert!(unwound.is_err());

        let logs = printer.drain_logs();
        assert!(logs.contains("> doomed()"));
        assert!(logs.contains("< doomed()"));
        assert_eq!(depth::depth(), 0);
    }
}
