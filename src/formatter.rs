// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assembly of log lines.
//!
//! Every line has three conceptual parts: a header carrying the level
//! marker and the emitting thread's identity, a body indented by the
//! thread's current scope depth, and (except on scope-exit lines) a
//! `--file:line` location tail. The level marker gets its own color and an
//! immediate reset; everything from the thread color code onward renders in
//! the thread's assigned color, so one thread's output is distinguishable
//! end to end.
//!
//! Scope-exit lines deliberately end at the color reset with no tail; the
//! enter line already recorded the location.

use crate::Level;
use crate::color;
use crate::depth;
use crate::line::LogLine;
use crate::thread_name;
use std::fmt::{self, Display, Write};

/// Module tag shown in every header.
pub(crate) const MODULE_TAG: &str = "trace";

/// `[<level-colored marker>][module][thread]`, then the thread color takes
/// over for the rest of the line.
pub(crate) fn write_head(line: &mut LogLine, level: Level) {
    line.push("[");
    line.push(level.color());
    line.push_owned(level.marker().to_string());
    line.push(color::RESET);
    line.push("]");
    line.push(color::current_thread_color());
    line.push("[");
    line.push(MODULE_TAG);
    line.push("][");
    line.push_owned(thread_name::display_name());
    line.push("]");
}

pub(crate) fn write_tail(line: &mut LogLine, file: &str, line_no: u32) {
    line.push(" --");
    line.push(file);
    line.push_owned(format!(":{}", line_no));
    line.push(color::RESET);
}

/// One dash per nesting level above the first.
fn scope_indent(current_depth: u32) -> String {
    "-".repeat(current_depth.saturating_sub(1) as usize)
}

pub(crate) fn scope_enter_line(
    file: &str,
    line_no: u32,
    scope_name: &str,
    is_function: bool,
    args: &str,
) -> LogLine {
    let mut line = LogLine::new(Level::Info);
    write_head(&mut line, Level::Info);
    line.push_owned(scope_indent(depth::depth()));
    line.push("> ");
    if is_function {
        line.push_owned(refine_function_name(scope_name));
        line.push("(");
        line.push(args);
        line.push(")");
    } else {
        line.push(scope_name);
    }
    write_tail(&mut line, file, line_no);
    line
}

pub(crate) fn scope_exit_line(scope_name: &str, is_function: bool) -> LogLine {
    let mut line = LogLine::new(Level::Info);
    write_head(&mut line, Level::Info);
    line.push("<");
    line.push_owned(scope_indent(depth::depth()));
    line.push(" ");
    if is_function {
        line.push_owned(refine_function_name(scope_name));
        line.push("()");
    } else {
        line.push(scope_name);
    }
    line.push(color::RESET);
    line
}

pub(crate) fn message_line(file: &str, line_no: u32, level: Level, message: &str) -> LogLine {
    let mut line = LogLine::new(level);
    write_head(&mut line, level);
    line.push_owned(" ".repeat(depth::depth() as usize));
    line.push("  ");
    line.push(message);
    write_tail(&mut line, file, line_no);
    line
}

/// Reduces a signature-like string to the bare function name.
///
/// Drops the argument list (everything from the first `(`), any
/// space-separated return type or qualifiers before it, and the leading
/// `::`-qualified path. An empty input yields `"[empty_func]"`; an input
/// that refines away to nothing yields `"[invalid_func]"`.
///
/// ```
/// use tracewise::refine_function_name;
///
/// assert_eq!(refine_function_name("void ns::Foo::bar(int, char)"), "bar");
/// assert_eq!(refine_function_name("my_crate::worker::run"), "run");
/// assert_eq!(refine_function_name(""), "[empty_func]");
/// ```
pub fn refine_function_name(raw: &str) -> String {
    if raw.is_empty() {
        return "[empty_func]".to_string();
    }

    let mut refined = raw;
    if let Some(pos) = refined.find('(') {
        refined = &refined[..pos];
    }
    if let Some(pos) = refined.rfind(' ') {
        refined = &refined[pos + 1..];
    }
    if let Some(pos) = refined.rfind("::") {
        refined = &refined[pos + 2..];
    }
    let refined = refined.trim();

    if refined.is_empty() {
        return "[invalid_func]".to_string();
    }
    refined.to_string()
}

/// Renders paired argument names and values as `name=value, name=value`.
///
/// Callers must have checked that the slices are the same length.
pub(crate) fn paired_args(arg_names: &[&str], arg_values: &[String]) -> String {
    let mut rendered = String::new();
    for (i, (name, value)) in arg_names.iter().zip(arg_values).enumerate() {
        if i > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str(name);
        rendered.push('=');
        rendered.push_str(value);
    }
    rendered
}

/// `Display`-renders one value. A failing `Display` impl yields an empty
/// string rather than a panic.
pub fn display_string<V: Display>(value: &V) -> String {
    let mut rendered = String::new();
    if write!(rendered, "{}", value).is_err() {
        rendered.clear();
    }
    rendered
}

/// Expands a `format_args!` body. Failure degrades to an empty message.
pub fn format_message(args: fmt::Arguments<'_>) -> String {
    let mut rendered = String::new();
    if rendered.write_fmt(args).is_err() {
        rendered.clear();
    }
    rendered
}

/// Basename of a call-site path; `file!()` yields a path from the crate
/// root and only the file itself belongs in the tail.
pub fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refine_strips_signature_noise() {
        assert_eq!(refine_function_name("void ns::Foo::bar(int, char)"), "bar");
        assert_eq!(refine_function_name("int main(void)"), "main");
        assert_eq!(refine_function_name("my_crate::worker::run"), "run");
        assert_eq!(refine_function_name("plain"), "plain");
    }

    #[test]
    fn refine_sentinels() {
        assert_eq!(refine_function_name(""), "[empty_func]");
        assert_eq!(refine_function_name("("), "[invalid_func]");
        assert_eq!(refine_function_name("void ("), "[invalid_func]");
    }

    #[test]
    fn paired_args_renders_name_value_pairs() {
        assert_eq!(
            paired_args(&["x", "y"], &["1".to_string(), "two".to_string()]),
            "x=1, y=two"
        );
        assert_eq!(paired_args(&[], &[]), "");
    }

    #[test]
    fn display_string_renders_via_display() {
        assert_eq!(display_string(&42), "42");
        assert_eq!(display_string(&"text"), "text");
    }

    #[test]
    fn display_string_swallows_failing_impls() {
        struct Broken;
        impl Display for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }
        assert_eq!(display_string(&Broken), "");
    }

    #[test]
    fn short_file_drops_directories() {
        assert_eq!(short_file("src/worker/pool.rs"), "pool.rs");
        assert_eq!(short_file("pool.rs"), "pool.rs");
        assert_eq!(short_file("src\\worker\\pool.rs"), "pool.rs");
    }

    #[test]
    fn head_colors_marker_then_thread() {
        let rendered = message_line("demo.rs", 7, Level::Warn, "careful").to_string();
        assert!(rendered.starts_with("[\x1b[93mW\x1b[0m]"));
        assert!(rendered.contains("[trace]["));
        assert!(rendered.contains("careful"));
        assert!(rendered.ends_with("\x1b[0m"));
    }

    #[test]
    fn message_indents_by_depth() {
        let rendered = message_line("demo.rs", 7, Level::Info, "msg").to_string();
        // depth 0: just the fixed two-space gap before the body
        assert!(rendered.contains("]  msg --demo.rs:7"));
    }

    #[test]
    fn enter_line_carries_args_and_tail() {
        let rendered = scope_enter_line("demo.rs", 3, "ns::load", true, "n=4").to_string();
        assert!(rendered.contains("> load(n=4)"));
        assert!(rendered.contains(" --demo.rs:3"));
    }

    #[test]
    fn exit_line_has_no_tail() {
        let rendered = scope_exit_line("ns::load", true).to_string();
        assert!(rendered.contains("< load()"));
        assert!(!rendered.contains(" --"));
        assert!(rendered.ends_with(color::RESET));
    }

    #[test]
    fn block_scopes_use_the_raw_name() {
        let entered = scope_enter_line("demo.rs", 9, "setup phase", false, "").to_string();
        assert!(entered.contains("> setup phase"));
        assert!(!entered.contains("setup phase("));
        let exited = scope_exit_line("setup phase", false).to_string();
        assert!(exited.contains("< setup phase"));
    }
}
