//! Deferred twins of the crate's functions.
//!
//! `deferred::f(args)` returns a [`Thunk`] that calls `f(args)` when invoked.
//! Building the thunk evaluates nothing, calling it re-evaluates every time,
//! and any error is reported by the call rather than by the constructor.
//!
//! # Examples
//!
//! ```
//! use poly_util::{deferred, Value};
//!
//! let items = Value::Sequence(vec![Value::from(1), Value::from(2)]);
//! let last = deferred::last(&items);
//! assert_eq!(last.call(), Some(Value::from(2)));
//! ```

use crate::error::Result;
use crate::merge::{self as merging, Merge};
use crate::thunk::{make_thunk, Thunk};
use crate::value::{Mapping, Value};
use crate::{collection, compare, mapping, predicates};

macro_rules! deferred {
    (
        $lt:lifetime;
        $($(#[$meta:meta])* fn $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty = $target:expr;)*
    ) => {
        $(
            $(#[$meta])*
            pub fn $name<$lt>($($arg: $ty),*) -> Thunk<$lt, $ret> {
                make_thunk($target, ($($arg,)*))
            }
        )*
    };
}

deferred! { 'a;
    fn equals(a: &'a Value, b: &'a Value) -> bool = compare::equals::<Value>;
    fn greater_than(a: &'a Value, b: &'a Value) -> bool = compare::greater_than::<Value>;
    fn greater_or_equal(a: &'a Value, b: &'a Value) -> bool = compare::greater_or_equal::<Value>;
    fn less_than(a: &'a Value, b: &'a Value) -> bool = compare::less_than::<Value>;
    fn less_or_equal(a: &'a Value, b: &'a Value) -> bool = compare::less_or_equal::<Value>;

    fn keys(map: &'a Mapping) -> Vec<String> = mapping::keys;
    fn values(map: &'a Mapping) -> Vec<Value> = mapping::values;
    fn entries(map: &'a Mapping) -> Vec<Value> = mapping::entries;
    fn from_entries(seq: &'a [Value]) -> Result<Mapping> = mapping::from_entries;

    fn is_true(value: &'a Value) -> bool = predicates::is_true;
    fn is_false(value: &'a Value) -> bool = predicates::is_false;
    fn is_boolean(value: &'a Value) -> bool = predicates::is_boolean;
    fn is_function(value: &'a Value) -> bool = predicates::is_function;
    fn is_sequence(value: &'a Value) -> bool = predicates::is_sequence;
    fn is_not_sequence(value: &'a Value) -> bool = predicates::is_not_sequence;
    fn is_string(value: &'a Value) -> bool = predicates::is_string;
    fn is_number(value: &'a Value) -> bool = predicates::is_number;
    fn is_null(value: &'a Value) -> bool = predicates::is_null;
    fn is_mapping(value: &'a Value) -> bool = predicates::is_mapping;
    fn is_symbol(value: &'a Value) -> bool = predicates::is_symbol;
    fn is_undefined(value: &'a Value) -> bool = predicates::is_undefined;
    fn is_defined(value: &'a Value) -> bool = predicates::is_defined;
    fn is_primitive(value: &'a Value) -> bool = predicates::is_primitive;
    fn is_not_primitive(value: &'a Value) -> bool = predicates::is_not_primitive;

    fn length(x: &'a Value) -> usize = collection::length::<Value>;
    fn is_empty(x: &'a Value) -> bool = collection::is_empty::<Value>;
    fn is_not_empty(x: &'a Value) -> bool = collection::is_not_empty::<Value>;
    fn first(x: &'a Value) -> Option<Value> = collection::first::<Value>;
    fn last(x: &'a Value) -> Option<Value> = collection::last::<Value>;
    fn key_in(key: &'a Value, x: &'a Value) -> Option<bool> = collection::key_in::<Value>;
    fn key_not_in(key: &'a Value, x: &'a Value) -> bool = collection::key_not_in::<Value>;

    /// Non-mutating merge of the borrowed arguments.
    fn pure_merge(args: &'a [Value]) -> Result<Value> = merging::pure_merge;
}

pub use self::entries as pairs;
pub use self::entries as to_entries;
pub use self::entries as to_pairs;
pub use self::from_entries as from_pairs;

/// Deferred [`assign`](crate::merge::assign).
///
/// Every call assigns into a fresh copy of `target` and returns it.
pub fn assign(target: Mapping, sources: Vec<Mapping>) -> Thunk<'static, Mapping> {
    Thunk::new(move || {
        let mut out = target.clone();
        merging::assign(&mut out, &sources);
        out
    })
}

/// Deferred mutating merge over owned arguments.
pub fn merge(args: Vec<Value>) -> Thunk<'static, Result<Value>> {
    Merge::new(true).deferred(args)
}

pub use self::merge as impure_merge;

/// Deferred [`make_merge`](crate::merge::make_merge): the returned function
/// takes the arguments and hands back the thunk.
pub fn make_merge(mutate: bool) -> impl Fn(Vec<Value>) -> Thunk<'static, Result<Value>> {
    move |args| Merge::new(mutate).deferred(args)
}
