//! Length, ends, key membership and iteration over anything list- or map-like.
//!
//! [`Collection`] is implemented for [`Value`], slices, `Vec`, the standard
//! and `indexmap` maps, and `serde_json::Value`. Map-likes yield their
//! `(key, value)` entries wherever a sequence yields its elements.
//!
//! None of these operations fail. A non-container [`Value`] has length zero,
//! no ends (`None`), no key answer (`None`) and iterates nothing.

use crate::kind::{classify, Shape};
use crate::mapping::{entries, number_key, pair, property_key};
use crate::value::Value;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

pub trait Collection {
    /// Element yielded by `first`, `last` and `for_each`.
    type Item;
    /// What `key_in` looks for: an element of a sequence, a key of a map.
    type Key: ?Sized;

    fn length(&self) -> usize;

    fn first(&self) -> Option<Self::Item>;

    fn last(&self) -> Option<Self::Item>;

    /// `None` when the receiver is not a container at all.
    fn key_in(&self, key: &Self::Key) -> Option<bool>;

    /// Calls `f(item, index, all_items)` for every item in order.
    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Self::Item, usize, &[Self::Item]);
}

/// Element count of a sequence, key count of a map, zero for anything else.
pub fn length<C: Collection + ?Sized>(c: &C) -> usize {
    c.length()
}

/// `length(c) == 0`.
pub fn is_empty<C: Collection + ?Sized>(c: &C) -> bool {
    c.length() == 0
}

/// Negation of [`is_empty`].
pub fn is_not_empty<C: Collection + ?Sized>(c: &C) -> bool {
    !is_empty(c)
}

/// First element, or first `(key, value)` entry of a map.
///
/// # Examples
///
/// ```
/// use poly_util::{first, Value};
/// use serde_json::json;
///
/// assert_eq!(first(&Value::from(json!({"a": 1}))), Some(Value::from(json!(["a", 1]))));
/// assert_eq!(first(&Value::from(json!([]))), None);
/// ```
pub fn first<C: Collection + ?Sized>(c: &C) -> Option<C::Item> {
    c.first()
}

/// Last element, or last `(key, value)` entry of a map.
pub fn last<C: Collection + ?Sized>(c: &C) -> Option<C::Item> {
    c.last()
}

/// Element membership for sequences, own-key membership for maps.
pub fn key_in<C: Collection + ?Sized>(key: &C::Key, c: &C) -> Option<bool> {
    c.key_in(key)
}

/// Negation of [`key_in`]. A non-container holds nothing, so the answer is `true`.
pub fn key_not_in<C: Collection + ?Sized>(key: &C::Key, c: &C) -> bool {
    !c.key_in(key).unwrap_or(false)
}

/// Calls `f(item, index, all_items)` for every item; maps iterate their entries.
pub fn for_each<C, F>(c: &C, f: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, usize, &[C::Item]),
{
    c.for_each(f)
}

fn each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, item) in items.iter().enumerate() {
        f(item, index, items);
    }
}

// ------------------------------------------------------------------- Value

/// `includes` semantics: like `==`, except `NaN` is found.
fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_nan() && y.is_nan() => true,
        _ => a == b,
    }
}

impl Collection for Value {
    type Item = Value;
    type Key = Value;

    fn length(&self) -> usize {
        match classify(self) {
            Shape::Sequence(seq) => seq.len(),
            Shape::Mapping(map) => map.len(),
            Shape::Primitive(_) => 0,
        }
    }

    fn first(&self) -> Option<Value> {
        match classify(self) {
            Shape::Sequence(seq) => seq.first().cloned(),
            Shape::Mapping(map) => map.first().map(|(k, v)| pair(k, v)),
            Shape::Primitive(_) => None,
        }
    }

    fn last(&self) -> Option<Value> {
        match classify(self) {
            Shape::Sequence(seq) => seq.last().cloned(),
            Shape::Mapping(map) => map.last().map(|(k, v)| pair(k, v)),
            Shape::Primitive(_) => None,
        }
    }

    fn key_in(&self, key: &Value) -> Option<bool> {
        match classify(self) {
            Shape::Sequence(seq) => Some(seq.iter().any(|item| same_value_zero(item, key))),
            Shape::Mapping(map) => {
                Some(property_key(key).is_ok_and(|k| map.contains_key(&k)))
            }
            Shape::Primitive(_) => None,
        }
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Value, usize, &[Value]),
    {
        match classify(self) {
            Shape::Sequence(seq) => each(seq, f),
            Shape::Mapping(map) => each(&entries(map), f),
            Shape::Primitive(_) => {}
        }
    }
}

// ------------------------------------------------------------- Sequences

impl<T: Clone + PartialEq> Collection for [T] {
    type Item = T;
    type Key = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn first(&self) -> Option<T> {
        <[T]>::first(self).cloned()
    }

    fn last(&self) -> Option<T> {
        <[T]>::last(self).cloned()
    }

    fn key_in(&self, key: &T) -> Option<bool> {
        Some(self.contains(key))
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        each(self, f)
    }
}

impl<T: Clone + PartialEq> Collection for Vec<T> {
    type Item = T;
    type Key = T;

    fn length(&self) -> usize {
        self.len()
    }

    fn first(&self) -> Option<T> {
        self.as_slice().first().cloned()
    }

    fn last(&self) -> Option<T> {
        self.as_slice().last().cloned()
    }

    fn key_in(&self, key: &T) -> Option<bool> {
        Some(self.contains(key))
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T, usize, &[T]),
    {
        each(self, f)
    }
}

// ------------------------------------------------------------------ Maps

impl<K, V, S> Collection for IndexMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    type Key = K;

    fn length(&self) -> usize {
        self.len()
    }

    fn first(&self) -> Option<(K, V)> {
        IndexMap::first(self).map(|(k, v)| (k.clone(), v.clone()))
    }

    fn last(&self) -> Option<(K, V)> {
        IndexMap::last(self).map(|(k, v)| (k.clone(), v.clone()))
    }

    fn key_in(&self, key: &K) -> Option<bool> {
        Some(self.contains_key(key))
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&(K, V), usize, &[(K, V)]),
    {
        let items: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        each(&items, f)
    }
}

impl<K, V> Collection for BTreeMap<K, V>
where
    K: Clone + Ord,
    V: Clone,
{
    type Item = (K, V);
    type Key = K;

    fn length(&self) -> usize {
        self.len()
    }

    fn first(&self) -> Option<(K, V)> {
        self.iter().next().map(|(k, v)| (k.clone(), v.clone()))
    }

    fn last(&self) -> Option<(K, V)> {
        self.iter().next_back().map(|(k, v)| (k.clone(), v.clone()))
    }

    fn key_in(&self, key: &K) -> Option<bool> {
        Some(self.contains_key(key))
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&(K, V), usize, &[(K, V)]),
    {
        let items: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        each(&items, f)
    }
}

/// Iteration order, and therefore `first` / `last`, is the map's own
/// unspecified order.
impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: BuildHasher,
{
    type Item = (K, V);
    type Key = K;

    fn length(&self) -> usize {
        self.len()
    }

    fn first(&self) -> Option<(K, V)> {
        self.iter().next().map(|(k, v)| (k.clone(), v.clone()))
    }

    fn last(&self) -> Option<(K, V)> {
        self.iter().last().map(|(k, v)| (k.clone(), v.clone()))
    }

    fn key_in(&self, key: &K) -> Option<bool> {
        Some(self.contains_key(key))
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&(K, V), usize, &[(K, V)]),
    {
        let items: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        each(&items, f)
    }
}

// -------------------------------------------------------------- serde_json

fn json_pair(key: &str, value: &serde_json::Value) -> serde_json::Value {
    serde_json::Value::Array(vec![serde_json::Value::String(key.to_string()), value.clone()])
}

impl Collection for serde_json::Value {
    type Item = serde_json::Value;
    type Key = serde_json::Value;

    fn length(&self) -> usize {
        match self {
            serde_json::Value::Array(arr) => arr.len(),
            serde_json::Value::Object(obj) => obj.len(),
            _ => 0,
        }
    }

    fn first(&self) -> Option<serde_json::Value> {
        match self {
            serde_json::Value::Array(arr) => arr.as_slice().first().cloned(),
            serde_json::Value::Object(obj) => obj.iter().next().map(|(k, v)| json_pair(k, v)),
            _ => None,
        }
    }

    fn last(&self) -> Option<serde_json::Value> {
        match self {
            serde_json::Value::Array(arr) => arr.as_slice().last().cloned(),
            serde_json::Value::Object(obj) => {
                obj.iter().next_back().map(|(k, v)| json_pair(k, v))
            }
            _ => None,
        }
    }

    fn key_in(&self, key: &serde_json::Value) -> Option<bool> {
        match self {
            serde_json::Value::Array(arr) => Some(arr.contains(key)),
            serde_json::Value::Object(obj) => Some(match key {
                serde_json::Value::String(k) => obj.contains_key(k),
                serde_json::Value::Number(n) => {
                    n.as_f64().is_some_and(|n| obj.contains_key(&number_key(n)))
                }
                _ => false,
            }),
            _ => None,
        }
    }

    fn for_each<F>(&self, f: F)
    where
        F: FnMut(&serde_json::Value, usize, &[serde_json::Value]),
    {
        match self {
            serde_json::Value::Array(arr) => each(arr, f),
            serde_json::Value::Object(obj) => {
                let items: Vec<serde_json::Value> =
                    obj.iter().map(|(k, v)| json_pair(k, v)).collect();
                each(&items, f)
            }
            _ => {}
        }
    }
}
