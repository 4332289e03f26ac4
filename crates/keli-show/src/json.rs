//! Bridge between host JSON values and [`Value`].
//!
//! The host represents sum-type instances as plain objects with a `__tag`
//! field and an optional `__carry` object:
//!
//! ```json
//! {"__tag": "Some", "__carry": {"value": 5}}
//! ```
//!
//! Objects whose `__tag` is missing or falsy (`null`, `false`, `0`, `""`) are
//! plain records, matching the host's truthiness check. Key order follows the
//! document (`serde_json` is built with `preserve_order`).
//!
//! The [`Serialize`] impl on [`Value`] goes the other way, writing the same
//! host representation. `Undefined` and non-finite floats serialize as `null`.

use crate::error::{Result, ShowError};
use crate::render::Renderer;
use crate::value::{Fields, Value, Variant};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Number, Value as Json};
use tracing::{debug, trace};

/// Field holding the case name of a tagged variant.
pub const TAG_KEY: &str = "__tag";
/// Field holding the carry map of a tagged variant.
pub const CARRY_KEY: &str = "__carry";
/// Deepest nesting accepted by [`from_json`].
pub const MAX_DEPTH: usize = 256;

/// Parse a JSON document in host representation and render it.
///
/// ```
/// let out = keli_show::show(r#"{"__tag":"Point","__carry":{"x":1,"y":2}}"#).unwrap();
/// assert_eq!(out, "Point.x(1) y(2)");
/// ```
pub fn show(json: &str) -> Result<String> {
    show_with(json, &Renderer::default())
}

/// Like [`show`], with an explicit renderer configuration.
pub fn show_with(json: &str, renderer: &Renderer) -> Result<String> {
    let parsed: Json = serde_json::from_str(json)?;
    let value = from_json(&parsed)?;
    Ok(renderer.render(&value))
}

/// Render newline-delimited JSON, one output per non-blank line.
///
/// Errors carry the 1-based line number of the offending input line.
pub fn show_lines(ndjson: &str, renderer: &Renderer) -> Result<Vec<String>> {
    ndjson
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            trace!(line = i + 1, "rendering NDJSON line");
            show_with(line, renderer).map_err(|e| ShowError::Line {
                line: i + 1,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Recover a [`Value`] from its host JSON representation.
pub fn from_json(json: &Json) -> Result<Value> {
    convert(json, 0)
}

/// Write a [`Value`] back out in host JSON representation.
pub fn to_json(value: &Value) -> Result<Json> {
    Ok(serde_json::to_value(value)?)
}

fn convert(json: &Json, depth: usize) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(ShowError::TooDeep { limit: MAX_DEPTH });
    }
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => Ok(convert_number(n)),
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Array(items) => items
            .iter()
            .map(|item| convert(item, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(Value::Sequence),
        Json::Object(map) => convert_object(map, depth),
    }
}

/// Integers that fit `i64` stay exact; everything else is a float.
fn convert_number(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Integer(i),
        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
    }
}

fn convert_object(map: &Map<String, Json>, depth: usize) -> Result<Value> {
    match map.get(TAG_KEY) {
        Some(tag) if is_truthy(tag) => {
            let Json::String(tag) = tag else {
                return Err(ShowError::InvalidTag { found: kind(tag) });
            };
            let carry = match map.get(CARRY_KEY) {
                Some(Json::Object(fields)) => Some(convert_fields(fields, depth)?),
                Some(other) if is_truthy(other) => {
                    return Err(ShowError::InvalidCarry {
                        tag: tag.clone(),
                        found: kind(other),
                    });
                }
                _ => None,
            };
            Ok(Value::Variant(Variant {
                tag: tag.clone(),
                carry,
            }))
        }
        tag => {
            if let Some(tag) = tag {
                debug!(tag = %tag, "falsy variant tag, treating object as a plain record");
            }
            convert_fields(map, depth).map(Value::Record)
        }
    }
}

/// Object keys are already unique, so entries are taken in order without re-checking.
fn convert_fields(map: &Map<String, Json>, depth: usize) -> Result<Fields> {
    map.iter()
        .map(|(key, value)| convert(value, depth + 1).map(|value| (key.clone(), value)))
        .collect::<Result<Vec<_>>>()
        .map(Fields::from_unique)
}

/// Host truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(json: &Json) -> bool {
    match json {
        Json::Null => false,
        Json::Bool(b) => *b,
        Json::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Json::String(s) => !s.is_empty(),
        Json::Array(_) | Json::Object(_) => true,
    }
}

fn kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null | Value::Undefined => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items),
            Value::Variant(variant) => variant.serialize(serializer),
            Value::Record(fields) => fields.serialize(serializer),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.carry.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(TAG_KEY, &self.tag)?;
        if let Some(carry) = &self.carry {
            map.serialize_entry(CARRY_KEY, carry)?;
        }
        map.end()
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
