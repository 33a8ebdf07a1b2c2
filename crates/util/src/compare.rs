//! Strict comparisons.
//!
//! These are thin generic wrappers over `PartialEq` / `PartialOrd`; nothing is
//! coerced. For [`Value`], ordering is defined only between two numbers, two
//! strings (by code point), two booleans (`false < true`), or two equal
//! values. Every other pair is unordered, and an unordered pair makes all four
//! ordering predicates return `false`, the same way `NaN` does.

use crate::value::Value;
use std::cmp::Ordering;

/// `a == b`, with no coercion between kinds.
///
/// # Examples
///
/// ```
/// use poly_util::{equals, Value};
///
/// assert!(equals(&Value::from(1), &Value::from(1.0)));
/// assert!(!equals(&Value::from(1), &Value::from("1")));
/// ```
pub fn equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// `a > b`; `false` for an unordered pair.
pub fn greater_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

/// `a >= b`; `false` for an unordered pair.
pub fn greater_or_equal<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a >= b
}

/// `a < b`; `false` for an unordered pair.
pub fn less_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// `a <= b`; `false` for an unordered pair.
pub fn less_or_equal<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a <= b
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ if self == other => Some(Ordering::Equal),
            _ => None,
        }
    }
}
