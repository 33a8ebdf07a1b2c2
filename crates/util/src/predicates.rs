//! Classification predicates. All are total and constant time.

use crate::kind::{kind_of, Kind};
use crate::value::Value;

/// True only for the boolean `true`; truthy values do not count.
pub fn is_true(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// True only for the boolean `false`.
pub fn is_false(value: &Value) -> bool {
    matches!(value, Value::Bool(false))
}

/// Either boolean.
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Callable values, thunks included.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Ordered lists.
pub fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Sequence(_))
}

pub fn is_not_sequence(value: &Value) -> bool {
    !is_sequence(value)
}

/// Strings, the empty string included.
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// Any number, `NaN` and the infinities included.
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

/// True for key/value records only; `null` and sequences are not mappings.
pub fn is_mapping(value: &Value) -> bool {
    matches!(value, Value::Mapping(_))
}

/// Unique symbols.
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// The absent value. `null` is defined.
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// Anything but `undefined`; `null` counts as defined.
pub fn is_defined(value: &Value) -> bool {
    !is_undefined(value)
}

/// Negation of "mapping, sequence or function".
pub fn is_primitive(value: &Value) -> bool {
    kind_of(value).is_primitive()
}

pub fn is_not_primitive(value: &Value) -> bool {
    !is_primitive(value)
}

/// True when `value` is exactly of kind `kind`.
pub fn is_kind(value: &Value, kind: Kind) -> bool {
    kind_of(value) == kind
}
