// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-thread display names.
//!
//! A thread may give itself a human-readable name; unnamed threads show a
//! numeric thread id instead. Names are purely thread-local: setting one
//! never affects another thread, and only the owning thread can change it.

use std::cell::RefCell;

thread_local! {
    static NAME: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Sets the calling thread's display name.
///
/// May be called repeatedly; the latest value wins.
///
/// ```
/// tracewise::set_current_thread_name("worker_1");
/// assert_eq!(tracewise::get_current_thread_name(), "worker_1");
/// ```
pub fn set_current_thread_name(name: impl Into<String>) {
    NAME.with(|n| *n.borrow_mut() = name.into());
}

/// The calling thread's display name, empty if never set.
pub fn get_current_thread_name() -> String {
    NAME.with(|n| n.borrow().clone())
}

/// What line headers show: the name if set, the numeric id otherwise.
pub(crate) fn display_name() -> String {
    let name = get_current_thread_name();
    if name.is_empty() {
        numeric_thread_id().to_string()
    } else {
        name
    }
}

#[cfg(target_os = "linux")]
fn numeric_thread_id() -> u64 {
    //safety: gettid has no preconditions and cannot fail
    (unsafe { libc::gettid() }) as u64
}

/// Sequential process-local id, assigned on the thread's first line.
#[cfg(not(target_os = "linux"))]
fn numeric_thread_id() -> u64 {
    use std::cell::OnceCell;
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    thread_local! {
        static ID: OnceCell<u64> = const { OnceCell::new() };
    }
    ID.with(|cell| *cell.get_or_init(|| NEXT_ID.fetch_add(1, Ordering::Relaxed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_name_is_empty() {
        assert_eq!(get_current_thread_name(), "");
    }

    #[test]
    fn latest_name_wins() {
        set_current_thread_name("first");
        set_current_thread_name("second");
        assert_eq!(get_current_thread_name(), "second");
    }

    #[test]
    fn names_are_thread_local() {
        set_current_thread_name("parent");
        let observed = std::thread::spawn(get_current_thread_name).join().unwrap();
        assert_eq!(observed, "");
        assert_eq!(get_current_thread_name(), "parent");
    }

    #[test]
    fn display_name_falls_back_to_digits() {
        let shown = std::thread::spawn(display_name).join().unwrap();
        assert!(!shown.is_empty());
        assert!(shown.chars().all(|c| c.is_ascii_digit()));
    }
}
