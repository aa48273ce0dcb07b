//! Thread-local compatibility-check mode with scoped overrides.
//!
//! Checks are enabled by default. The mode can only be changed through a
//! [`CheckGuard`], which restores the previous mode when dropped (including
//! during unwinding), so an override always covers a dynamic extent rather
//! than becoming a permanent setting. The mode is per thread: an override
//! on one thread is never observed by another.
//!
//! # Example
//!
//! ```
//! use qbases::{checks_enabled, without_checks, CheckMode};
//!
//! assert!(checks_enabled());
//! without_checks(|| {
//!     assert_eq!(CheckMode::current(), CheckMode::Disabled);
//! });
//! assert!(checks_enabled());
//! ```

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static CHECK_MODE: Cell<CheckMode> = const { Cell::new(CheckMode::Enabled) };
}

/// Whether `check_*` functions verify compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckMode {
    /// Compatibility predicates are evaluated and failures are errors.
    #[default]
    Enabled,
    /// `check_*` functions succeed without evaluating anything.
    Disabled,
}

impl CheckMode {
    /// The mode in effect on the current thread.
    #[must_use]
    pub fn current() -> Self {
        CHECK_MODE.with(Cell::get)
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == CheckMode::Enabled
    }
}

impl From<bool> for CheckMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            CheckMode::Enabled
        } else {
            CheckMode::Disabled
        }
    }
}

/// Shorthand for `CheckMode::current().is_enabled()`.
#[must_use]
pub fn checks_enabled() -> bool {
    CheckMode::current().is_enabled()
}

/// Restores the previous check mode on drop.
///
/// Not `Send`: the guard must be dropped on the thread whose mode it
/// changed.
#[must_use = "the previous check mode is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct CheckGuard {
    previous: CheckMode,
    _not_send: PhantomData<*const ()>,
}

impl CheckGuard {
    /// The mode that will be restored.
    pub fn previous(&self) -> CheckMode {
        self.previous
    }
}

impl Drop for CheckGuard {
    fn drop(&mut self) {
        CHECK_MODE.with(|mode| mode.set(self.previous));
    }
}

/// Set the check mode for the current thread until the guard is dropped.
pub fn set_check_mode(mode: CheckMode) -> CheckGuard {
    let previous = CHECK_MODE.with(|cell| cell.replace(mode));
    CheckGuard {
        previous,
        _not_send: PhantomData,
    }
}

/// Run `f` with the given check mode, restoring the previous one afterwards.
pub fn with_check_mode<R>(mode: CheckMode, f: impl FnOnce() -> R) -> R {
    let _guard = set_check_mode(mode);
    f()
}

/// Run `f` with compatibility checks disabled.
pub fn without_checks<R>(f: impl FnOnce() -> R) -> R {
    with_check_mode(CheckMode::Disabled, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enabled() {
        assert_eq!(CheckMode::current(), CheckMode::Enabled);
        assert_eq!(CheckMode::default(), CheckMode::Enabled);
    }

    #[test]
    fn test_guard_restores() {
        {
            let guard = set_check_mode(CheckMode::Disabled);
            assert_eq!(guard.previous(), CheckMode::Enabled);
            assert!(!checks_enabled());
            {
                let _inner = set_check_mode(CheckMode::Enabled);
                assert!(checks_enabled());
            }
            assert!(!checks_enabled());
        }
        assert!(checks_enabled());
    }

    #[test]
    fn test_restored_after_panic() {
        let result = std::panic::catch_unwind(|| {
            without_checks(|| {
                assert!(!checks_enabled());
                panic!("boom");
            })
        });
        assert!(result.is_err());
        assert!(checks_enabled());
    }

    #[test]
    fn test_override_is_thread_local() {
        let _guard = set_check_mode(CheckMode::Disabled);
        let other = std::thread::spawn(checks_enabled).join().unwrap();
        assert!(other);
        assert!(!checks_enabled());
    }

    #[test]
    fn test_with_check_mode_returns_value() {
        let v = with_check_mode(false.into(), || 42);
        assert_eq!(v, 42);
    }
}
