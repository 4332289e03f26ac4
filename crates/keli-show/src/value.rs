//! Keli runtime values as a closed sum type.
//!
//! Every value belongs to exactly one [`Shape`]. Tagged variants carry their
//! case name and an optional field map, so "is this a variant" is a matter of
//! the enum case rather than of a conventionally-named field.

use std::fmt;

/// A Keli runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Ordered, possibly heterogeneous list.
    Sequence(Vec<Value>),
    /// One case of a sum type.
    Variant(Variant),
    /// Named fields without a case tag.
    Record(Fields),
}

/// The structural category a [`Value`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Primitive,
    Text,
    Sequence,
    Variant,
    Record,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Primitive => "primitive",
            Shape::Text => "text",
            Shape::Sequence => "sequence",
            Shape::Variant => "variant",
            Shape::Record => "record",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Classify the value. Every value has exactly one shape.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Null
            | Value::Undefined
            | Value::Bool(_)
            | Value::Integer(_)
            | Value::Float(_) => Shape::Primitive,
            Value::Text(_) => Shape::Text,
            Value::Sequence(_) => Shape::Sequence,
            Value::Variant(_) => Shape::Variant,
            Value::Record(_) => Shape::Record,
        }
    }

    /// Build a plain record from key/value pairs, in iteration order.
    ///
    /// ```
    /// use keli_show::{render, Value};
    ///
    /// let point = Value::record([("x", 1), ("y", 2)]);
    /// assert_eq!(render(&point), "object.x(1) y(2)");
    /// ```
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(fields.into_iter().collect())
    }
}

/// A tagged variant: the case name plus an optional carry map.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub tag: String,
    pub carry: Option<Fields>,
}

impl Variant {
    /// A variant with no carry, e.g. `None`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            carry: None,
        }
    }

    /// Add one field to the carry, creating the carry if it is absent.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.carry.get_or_insert_with(Fields::new).insert(key, value);
        self
    }

    /// Replace the whole carry map.
    pub fn with_carry(mut self, carry: Fields) -> Self {
        self.carry = Some(carry);
        self
    }

    /// The carry map if present and non-empty. An empty carry is treated as absent.
    pub fn carried(&self) -> Option<&Fields> {
        self.carry.as_ref().filter(|carry| !carry.is_empty())
    }
}

/// Field map with unique keys, kept in insertion order.
///
/// Backed by `Vec<(String, Value)>` rather than a hash map: field counts are
/// small and order is part of the rendered output.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields {
    entries: Vec<(String, Value)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. Re-inserting an existing key replaces its value but keeps
    /// its original position, and returns the old value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Build from entries whose keys are already unique (e.g. a JSON object),
    /// skipping the per-key duplicate scan of [`Fields::insert`].
    pub(crate) fn from_unique(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        fields.extend(iter);
        fields
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Fields {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Variant> for Value {
    fn from(variant: Variant) -> Self {
        Value::Variant(variant)
    }
}

impl From<Fields> for Value {
    fn from(fields: Fields) -> Self {
        Value::Record(fields)
    }
}
