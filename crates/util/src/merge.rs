//! Shallow merge of mappings and concatenation of sequences.
//!
//! A [`Merge`] dispatches on its arguments: all mappings are overlaid left to
//! right (later keys win), all sequences are concatenated in order. A mutating
//! merge writes into the first argument and returns a copy of it; a pure merge
//! builds a new value and leaves every argument untouched.
//!
//! Any other mix of arguments is handled by [`MixedPolicy`].

use crate::error::{Error, Result};
use crate::kind::{classify, Kind, Shape};
use crate::thunk::Thunk;
use crate::value::{Mapping, Value};

/// Writes every key of every source into `target`, left to right.
///
/// Returns `target` itself. An existing key keeps its position and takes the
/// newer value.
pub fn assign<'a, 'b, I>(target: &'a mut Mapping, sources: I) -> &'a mut Mapping
where
    I: IntoIterator<Item = &'b Mapping>,
{
    for source in sources {
        for (key, value) in source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// What a merge does with arguments that are neither all mappings nor all
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixedPolicy {
    /// Fail with [`Error::InvalidArgumentKind`].
    #[default]
    Reject,
    /// Return `undefined` and leave the arguments alone.
    Undefined,
}

/// Knobs for a [`Merge`]. The default is a pure merge that rejects mixed kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeOptions {
    pub mutate: bool,
    pub on_mixed: MixedPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Merge {
    options: MergeOptions,
}

enum Plan {
    Mappings,
    Sequences,
    Mixed(Vec<Kind>),
}

fn plan(args: &[Value]) -> Plan {
    let shapes: Vec<Shape<'_>> = args.iter().map(classify).collect();
    if shapes.iter().all(|s| matches!(s, Shape::Mapping(_))) {
        Plan::Mappings
    } else if shapes.iter().all(|s| matches!(s, Shape::Sequence(_))) {
        Plan::Sequences
    } else {
        Plan::Mixed(args.iter().map(Value::kind).collect())
    }
}

impl Merge {
    /// A merge with the default [`MixedPolicy`].
    pub fn new(mutate: bool) -> Self {
        Self::with_options(MergeOptions {
            mutate,
            ..MergeOptions::default()
        })
    }

    /// A merge with explicit options.
    pub fn with_options(options: MergeOptions) -> Self {
        Self { options }
    }

    /// Options this merge was built with.
    pub fn options(&self) -> MergeOptions {
        self.options
    }

    /// Merges `args`.
    ///
    /// With no arguments the result is an empty mapping.
    pub fn merge(&self, args: &mut [Value]) -> Result<Value> {
        if !self.options.mutate {
            return self.merge_copy(args);
        }
        match plan(args) {
            Plan::Mixed(kinds) => self.mixed(kinds),
            Plan::Mappings => Ok(merge_mappings_into(args)),
            Plan::Sequences => Ok(merge_sequences_into(args)),
        }
    }

    /// Merges `args` into a new value.
    ///
    /// The arguments are only borrowed, so nothing is written back whatever
    /// `mutate` says. [`MixedPolicy`] still applies.
    pub fn merge_copy(&self, args: &[Value]) -> Result<Value> {
        match plan(args) {
            Plan::Mixed(kinds) => self.mixed(kinds),
            Plan::Mappings => Ok(Value::Mapping(overlay(args))),
            Plan::Sequences => Ok(Value::Sequence(concat(args))),
        }
    }

    /// Defers a merge over owned arguments.
    ///
    /// Each call merges a fresh copy of `args`, so a mutating merge never
    /// leaks state from one call into the next.
    pub fn deferred(&self, args: Vec<Value>) -> Thunk<'static, Result<Value>> {
        let merge = *self;
        Thunk::new(move || merge.merge(&mut args.clone()))
    }

    fn mixed(&self, kinds: Vec<Kind>) -> Result<Value> {
        tracing::debug!(?kinds, policy = ?self.options.on_mixed, "merge: mixed argument kinds");
        match self.options.on_mixed {
            MixedPolicy::Reject => Err(Error::InvalidArgumentKind(kinds)),
            MixedPolicy::Undefined => Ok(Value::Undefined),
        }
    }
}

fn overlay(args: &[Value]) -> Mapping {
    let mut out = Mapping::new();
    assign(&mut out, args.iter().filter_map(Value::as_mapping));
    out
}

fn concat(args: &[Value]) -> Vec<Value> {
    args.iter()
        .filter_map(Value::as_sequence)
        .flat_map(|seq| seq.iter().cloned())
        .collect()
}

fn merge_mappings_into(args: &mut [Value]) -> Value {
    match args.split_first_mut() {
        Some((Value::Mapping(head), tail)) => {
            assign(head, tail.iter().filter_map(Value::as_mapping));
            Value::Mapping(head.clone())
        }
        _ => Value::Mapping(Mapping::new()),
    }
}

fn merge_sequences_into(args: &mut [Value]) -> Value {
    match args.split_first_mut() {
        Some((Value::Sequence(head), tail)) => {
            head.extend(concat(tail));
            Value::Sequence(head.clone())
        }
        _ => Value::Sequence(Vec::new()),
    }
}

/// Builds a [`Merge`]: mutating when `mutate` is `true`, pure otherwise.
pub fn make_merge(mutate: bool) -> Merge {
    Merge::new(mutate)
}

/// Mutating merge: the first argument receives the result.
pub fn merge(args: &mut [Value]) -> Result<Value> {
    make_merge(true).merge(args)
}

pub use self::merge as impure_merge;

/// Non-mutating merge.
pub fn pure_merge(args: &[Value]) -> Result<Value> {
    make_merge(false).merge_copy(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(j: serde_json::Value) -> Value {
        Value::from(j)
    }

    fn mapping(j: serde_json::Value) -> Mapping {
        match Value::from(j) {
            Value::Mapping(map) => map,
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_assign_mutates_and_returns_target() {
        let mut target = mapping(json!({"a": 1}));
        let source = mapping(json!({"b": 2}));
        let out = assign(&mut target, [&source]).clone();
        assert_eq!(out, mapping(json!({"a": 1, "b": 2})));
        assert!(target.contains_key("b"));
    }

    #[test]
    fn test_assign_later_wins() {
        let mut target = mapping(json!({"a": 1, "b": 1}));
        let s1 = mapping(json!({"a": 2}));
        let s2 = mapping(json!({"a": 3, "c": 3}));
        assign(&mut target, [&s1, &s2]);
        assert_eq!(target, mapping(json!({"a": 3, "b": 1, "c": 3})));
        let keys: Vec<&str> = target.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }

    #[test]
    fn test_pure_merge_mappings() {
        let args = [v(json!({"a": 1})), v(json!({"b": 2}))];
        assert_eq!(pure_merge(&args), Ok(v(json!({"a": 1, "b": 2}))));
        assert_eq!(args[0], v(json!({"a": 1})));

        let mut args = [v(json!({"a": 1})), v(json!({"b": 2}))];
        assert_eq!(make_merge(false).merge(&mut args), Ok(v(json!({"a": 1, "b": 2}))));
        assert_eq!(args[0], v(json!({"a": 1})));
    }

    #[test]
    fn test_impure_merge_mappings() {
        let mut args = [v(json!({"a": 1})), v(json!({"a": 5, "b": 2}))];
        assert_eq!(merge(&mut args), Ok(v(json!({"a": 5, "b": 2}))));
        assert_eq!(args[0], v(json!({"a": 5, "b": 2})));
        assert_eq!(args[1], v(json!({"a": 5, "b": 2})));
    }

    #[test]
    fn test_pure_merge_sequences() {
        let args = [v(json!([1])), v(json!([2, 3])), v(json!([]))];
        assert_eq!(pure_merge(&args), Ok(v(json!([1, 2, 3]))));
        assert_eq!(args[0], v(json!([1])));
    }

    #[test]
    fn test_impure_merge_sequences() {
        let mut args = [v(json!([1])), v(json!([2])), v(json!([3]))];
        assert_eq!(impure_merge(&mut args), Ok(v(json!([1, 2, 3]))));
        assert_eq!(args[0], v(json!([1, 2, 3])));
    }

    #[test]
    fn test_nested_sequences_are_not_flattened() {
        let args = [v(json!([1])), v(json!([[2, 3]]))];
        assert_eq!(pure_merge(&args), Ok(v(json!([1, [2, 3]]))));
    }

    #[test]
    fn test_mixed_is_rejected() {
        let mut args = [v(json!({"a": 1})), v(json!([1]))];
        assert_eq!(
            merge(&mut args),
            Err(Error::InvalidArgumentKind(vec![Kind::Mapping, Kind::Sequence]))
        );
        assert_eq!(args[0], v(json!({"a": 1})));
        assert_eq!(
            pure_merge(&[v(json!([1])), Value::from(3)]),
            Err(Error::InvalidArgumentKind(vec![Kind::Sequence, Kind::Number]))
        );
        assert!(pure_merge(&[Value::Null]).is_err());
    }

    #[test]
    fn test_mixed_lenient_policy() {
        let lenient = Merge::with_options(MergeOptions {
            mutate: true,
            on_mixed: MixedPolicy::Undefined,
        });
        let mut args = [v(json!([1])), v(json!({"b": 2}))];
        assert_eq!(lenient.merge(&mut args), Ok(Value::Undefined));
        assert_eq!(args[0], v(json!([1])));
        assert!(lenient.options().mutate);
    }

    #[test]
    fn test_merge_copy_borrows_arguments() {
        let args = vec![v(json!({"a": 1})), v(json!({"b": 2}))];
        let want = Ok(v(json!({"a": 1, "b": 2})));
        assert_eq!(make_merge(false).merge_copy(&args), want);
        assert_eq!(make_merge(true).merge_copy(&args), want);
        assert_eq!(args[0], v(json!({"a": 1})));

        let lenient = Merge::with_options(MergeOptions {
            mutate: false,
            on_mixed: MixedPolicy::Undefined,
        });
        assert_eq!(lenient.merge_copy(&[v(json!([1])), Value::Null]), Ok(Value::Undefined));
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(pure_merge(&[]), Ok(Value::Mapping(Mapping::new())));
        assert_eq!(merge(&mut []), Ok(Value::Mapping(Mapping::new())));
    }

    #[test]
    fn test_deferred_merge() {
        let thunk = make_merge(true).deferred(vec![v(json!([1])), v(json!([2]))]);
        assert_eq!(thunk.call(), Ok(v(json!([1, 2]))));
        // every call starts from the bound arguments
        assert_eq!(thunk.call(), Ok(v(json!([1, 2]))));
    }
}
