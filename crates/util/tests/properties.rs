//! Property tests for the container invariants.

use poly_util::{
    deferred, entries, first, from_entries, is_empty, is_not_empty, keys, last, length,
    pure_merge, values, Mapping, Value,
};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::from),
        (-1_000i64..1_000).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::vec(("[a-d]{1,2}", inner), 0..4)
                .prop_map(|kvs| Value::Mapping(kvs.into_iter().collect())),
        ]
    })
}

fn mapping() -> impl Strategy<Value = Mapping> {
    prop::collection::vec(("[a-e]{1,3}", value()), 0..6).prop_map(|kvs| kvs.into_iter().collect())
}

fn sequence() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(value(), 0..6)
}

proptest! {
    #[test]
    fn accessors_agree_on_length(map in mapping()) {
        let n = length(&Value::Mapping(map.clone()));
        prop_assert_eq!(keys(&map).len(), n);
        prop_assert_eq!(values(&map).len(), n);
        prop_assert_eq!(entries(&map).len(), n);
    }

    #[test]
    fn emptiness_follows_length(x in value()) {
        prop_assert_eq!(is_empty(&x), !is_not_empty(&x));
        prop_assert_eq!(is_empty(&x), length(&x) == 0);
    }

    #[test]
    fn entries_round_trip(map in mapping()) {
        prop_assert_eq!(from_entries(&entries(&map)), Ok(map));
    }

    #[test]
    fn ends_of_sequences(seq in sequence()) {
        let x = Value::Sequence(seq.clone());
        prop_assert_eq!(first(&x), seq.first().cloned());
        prop_assert_eq!(last(&x), seq.last().cloned());
        if length(&x) > 0 {
            prop_assert_eq!(last(&x), Some(seq[length(&x) - 1].clone()));
        }
    }

    #[test]
    fn pure_merge_concatenates(a in sequence(), b in sequence()) {
        let args = [Value::Sequence(a.clone()), Value::Sequence(b.clone())];
        let mut want = a.clone();
        want.extend(b);
        prop_assert_eq!(pure_merge(&args), Ok(Value::Sequence(want)));
        prop_assert_eq!(&args[0], &Value::Sequence(a));
    }

    #[test]
    fn deferred_equals_eager(x in value()) {
        prop_assert_eq!(deferred::length(&x).call(), length(&x));
        prop_assert_eq!(deferred::first(&x).call(), first(&x));
        prop_assert_eq!(deferred::last(&x).call(), last(&x));
        prop_assert_eq!(deferred::is_not_empty(&x).call(), is_not_empty(&x));
    }
}
