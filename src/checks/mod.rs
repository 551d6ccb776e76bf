//! Built-in checks.

mod covariant_equals;

pub use covariant_equals::{CovariantEqualsCheck, MSG_COVARIANT_EQUALS};

use crate::check::Check;

/// Fresh instances of all built-in checks.
pub fn builtin_checks() -> Vec<Box<dyn Check>> {
    vec![Box::new(CovariantEqualsCheck::new())]
}
