//! poly-util - Polymorphic helpers over a dynamic value model
//!
//! Values are classified into primitives, sequences and mappings
//! ([`kind`]), compared without coercion ([`compare`]), inspected through
//! the [`Collection`] trait, merged ([`merge`]) and scanned lazily
//! ([`lazy`]). Most functions also have a deferred twin in [`deferred`]
//! that returns a [`Thunk`] instead of a result.
//!
//! # Example
//!
//! ```
//! use poly_util::{first, pure_merge, Value};
//! use serde_json::json;
//!
//! let merged = pure_merge(&[
//!     Value::from(json!({"a": 1})),
//!     Value::from(json!({"b": 2})),
//! ])
//! .unwrap();
//!
//! assert_eq!(merged, Value::from(json!({"a": 1, "b": 2})));
//! assert_eq!(first(&merged), Some(Value::from(json!(["a", 1]))));
//! ```

pub mod base;
pub mod collection;
pub mod compare;
pub mod deferred;
pub mod error;
pub mod kind;
pub mod lazy;
pub mod mapping;
pub mod merge;
pub mod predicates;
pub mod thunk;
pub mod value;

// Re-exports for convenience
pub use base::{identity, noop};
pub use collection::{
    first, for_each, is_empty, is_not_empty, key_in, key_not_in, last, length, Collection,
};
pub use compare::{equals, greater_or_equal, greater_than, less_or_equal, less_than};
pub use error::{Error, Result};
pub use kind::{classify, kind_of, Kind, Shape};
pub use lazy::{all_false, all_true, any, any_false, any_true};
pub use mapping::{entries, from_entries, from_pairs, keys, pairs, to_entries, to_pairs, values};
pub use merge::{
    assign, impure_merge, make_merge, merge, pure_merge, Merge, MergeOptions, MixedPolicy,
};
pub use predicates::{
    is_boolean, is_defined, is_false, is_function, is_kind, is_mapping, is_not_primitive,
    is_not_sequence, is_null, is_number, is_primitive, is_sequence, is_string, is_symbol, is_true,
    is_undefined,
};
pub use thunk::{make_thunk, Callable, Thunk};
pub use value::{Func, Mapping, Sequence, Symbol, Value};
