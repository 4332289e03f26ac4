//! The `show` renderer: turns any [`Value`] into a deterministic debug string.
//!
//! Output rules, by shape:
//!
//! - **Sequence**: `[e0,e1,...]`, elements rendered recursively, bare comma
//! - **Variant**: the tag name, then `.key(value) key(value)` when the carry
//!   is non-empty
//! - **Record**: `object.` followed by `key(value)` pairs separated by spaces
//! - **Text**: wrapped in double quotes
//! - **Primitive**: host default textual form (`null`, `true`, `42`, `NaN`, `1e+21`)
//!
//! # Example
//! ```
//! use keli_show::{render, Value, Variant};
//!
//! let wrapped = Variant::new("Wrap").with_field("inner", vec![1, 2]);
//! assert_eq!(render(&wrapped.into()), "Wrap.inner([1,2])");
//! ```

use crate::value::{Fields, Value};
use std::fmt;

/// How text values are written between their quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextQuoting {
    /// Copy the text as-is. Embedded quotes and newlines are not escaped.
    #[default]
    Verbatim,
    /// Escape backslash, double quote and control characters
    /// (`\n`, `\r`, `\t`, otherwise `\u001b` style).
    Escaped,
}

/// Configurable renderer. `Renderer::default()` behaves exactly like [`render`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    quoting: TextQuoting,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quoting policy for text values at every depth.
    pub fn quoting(mut self, quoting: TextQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        self.render_into(value, &mut out);
        out
    }

    /// Append the rendering of `value` to `out`.
    pub fn render_into(&self, value: &Value, out: &mut String) {
        match value {
            Value::Sequence(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.render_into(item, out);
                }
                out.push(']');
            }
            Value::Variant(variant) => {
                out.push_str(&variant.tag);
                if let Some(carry) = variant.carried() {
                    out.push('.');
                    self.render_fields(carry, out);
                }
            }
            Value::Record(fields) => {
                out.push_str("object.");
                self.render_fields(fields, out);
            }
            Value::Text(s) => self.render_text(s, out),
            Value::Null => out.push_str("null"),
            Value::Undefined => out.push_str("undefined"),
            Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Integer(n) => out.push_str(&n.to_string()),
            Value::Float(f) => out.push_str(&format_float(*f)),
        }
    }

    /// Emit `key(value)` pairs joined by a single space.
    fn render_fields(&self, fields: &Fields, out: &mut String) {
        for (i, (key, value)) in fields.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(key);
            out.push('(');
            self.render_into(value, out);
            out.push(')');
        }
    }

    fn render_text(&self, s: &str, out: &mut String) {
        out.push('"');
        match self.quoting {
            TextQuoting::Verbatim => out.push_str(s),
            TextQuoting::Escaped => {
                for ch in s.chars() {
                    match ch {
                        '\\' => out.push_str("\\\\"),
                        '"' => out.push_str("\\\""),
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\t' => out.push_str("\\t"),
                        c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
                        _ => out.push(ch),
                    }
                }
            }
        }
        out.push('"');
    }
}

/// Render a value with the default (verbatim) renderer.
pub fn render(value: &Value) -> String {
    Renderer::default().render(value)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

/// Format a float the way the host prints numbers:
/// - `NaN`, `Infinity`, `-Infinity`
/// - `-0` prints as `0`
/// - whole numbers drop the fractional part (`2.0` → `2`)
/// - magnitudes at or above 1e21, or below 1e-6, use signed exponent form
fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if !(1e-6..1e21).contains(&abs) {
        return format_exponent(f);
    }
    // Display for f64 is shortest round-trip and never uses an exponent
    format!("{}", f)
}

/// `1e21` → `1e+21`, `1.5e-7` stays as is.
fn format_exponent(f: f64) -> String {
    let s = format!("{:e}", f);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_whole_numbers_drop_fraction() {
        assert_eq!(format_float(2.0), "2");
        assert_eq!(format_float(-7.0), "-7");
        assert_eq!(format_float(1e20), "100000000000000000000");
    }

    #[test]
    fn float_fractions_are_shortest() {
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(2.75), "2.75");
        assert_eq!(format_float(0.000001), "0.000001");
    }

    #[test]
    fn float_exponent_form() {
        assert_eq!(format_float(1e21), "1e+21");
        assert_eq!(format_float(-2.5e30), "-2.5e+30");
        assert_eq!(format_float(1.5e-7), "1.5e-7");
    }

    #[test]
    fn float_special_values() {
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::INFINITY), "Infinity");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_float(-0.0), "0");
    }
}
