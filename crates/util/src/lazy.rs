//! Aggregate predicates.
//!
//! [`any`] forces function items before testing them, so candidates can be
//! passed as thunks and only computed while the scan is still looking.
//! [`all_true`] and [`all_false`] never call anything.

use crate::predicates::{is_false, is_true};
use crate::value::Value;

/// Tests items left to right and stops at the first match.
///
/// A function item is called with no arguments and its result is tested in
/// its place.
///
/// # Examples
///
/// ```
/// use poly_util::{any, is_true, Value};
///
/// let items = [Value::from(false), Value::thunk(|| Value::from(true))];
/// assert!(any(is_true, &items));
/// ```
pub fn any<P>(mut predicate: P, items: &[Value]) -> bool
where
    P: FnMut(&Value) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        let hit = match item {
            Value::Function(f) => predicate(&f.call(&[])),
            other => predicate(other),
        };
        if hit {
            tracing::trace!(index, remaining = items.len() - index - 1, "any: matched");
            return true;
        }
    }
    false
}

pub fn any_true(items: &[Value]) -> bool {
    any(is_true, items)
}

pub fn any_false(items: &[Value]) -> bool {
    any(is_false, items)
}

pub fn all_true(items: &[Value]) -> bool {
    items.iter().all(is_true)
}

pub fn all_false(items: &[Value]) -> bool {
    items.iter().all(is_false)
}
