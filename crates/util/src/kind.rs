//! Value classification.
//!
//! Every value belongs to exactly one [`Kind`]. Consumers that only care
//! about containers switch on the coarser [`Shape`] instead, computed once
//! per call by [`classify`].

use crate::value::{Mapping, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    Function,
    Sequence,
    Mapping,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Function => "function",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }

    /// Functions and containers are never primitive.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, Kind::Function | Kind::Sequence | Kind::Mapping)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind tag of a value. Same as [`Value::kind`].
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Undefined => Kind::Undefined,
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Symbol(_) => Kind::Symbol,
        Value::Function(_) => Kind::Function,
        Value::Sequence(_) => Kind::Sequence,
        Value::Mapping(_) => Kind::Mapping,
    }
}

/// Container view of a value.
///
/// `Primitive` covers everything that is not a sequence or a mapping,
/// functions included, since no container operation applies to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    Primitive(&'a Value),
    Sequence(&'a [Value]),
    Mapping(&'a Mapping),
}

/// Splits a value into the container view that collection operations use.
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Sequence(seq) => Shape::Sequence(seq),
        Value::Mapping(map) => Shape::Mapping(map),
        other => Shape::Primitive(other),
    }
}
