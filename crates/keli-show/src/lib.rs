//! # keli-show
//!
//! Deterministic debug rendering for Keli runtime values.
//!
//! `show` turns any value (a primitive, a string, a sequence, a tagged
//! variant or a plain record) into a single-line, human-readable string.
//! Tagged variants print as `Tag.field(value) other(value)`, plain records as
//! `object.field(value)`, sequences as `[a,b,c]` and strings in double quotes.
//!
//! ## Quick start
//!
//! ```rust
//! use keli_show::{render, show, Value, Variant};
//!
//! // Build values directly...
//! let some = Variant::new("Some").with_field("value", 5);
//! assert_eq!(render(&some.into()), "Some.value(5)");
//!
//! let record = Value::record([("a", Value::from(1)), ("b", Value::from("hi"))]);
//! assert_eq!(record.to_string(), r#"object.a(1) b("hi")"#);
//!
//! // ...or from the host's JSON representation.
//! let out = show(r#"{"__tag":"Wrap","__carry":{"inner":[1,2]}}"#).unwrap();
//! assert_eq!(out, "Wrap.inner([1,2])");
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` sum type, `Variant`, ordered `Fields`, `Shape`
//! - [`render`](mod@render): the renderer and its text quoting policy
//! - [`json`]: host JSON (`__tag` / `__carry`) to `Value` and back
//! - [`error`]: errors raised while bridging host values

pub mod error;
pub mod json;
pub mod render;
pub mod value;

pub use error::{Result, ShowError};
pub use json::{from_json, show, show_lines, show_with, to_json};
pub use render::{render, Renderer, TextQuoting};
pub use value::{Fields, Shape, Value, Variant};
