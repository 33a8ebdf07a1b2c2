use crate::value::Value;

/// Returns its argument unchanged.
pub fn identity<T>(x: T) -> T {
    x
}

/// Accepts anything and returns `undefined`.
pub fn noop<A>(_args: A) -> Value {
    Value::Undefined
}
