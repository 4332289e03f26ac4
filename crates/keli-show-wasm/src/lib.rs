//! WASM bindings for keli-show.
//!
//! Exposes `show` and `show_escaped` as `#[wasm_bindgen]` functions so a JS
//! host can render its runtime values. The host passes the value as a JSON
//! string in its own representation (`__tag` / `__carry` objects).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p keli-show-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/keli_show_wasm.wasm
//! ```

use keli_show::{Renderer, TextQuoting};
use wasm_bindgen::prelude::*;

/// Render a host value given as JSON.
///
/// Returns the rendered text, or throws a JS error if the input is not valid
/// JSON or carries a malformed variant.
#[wasm_bindgen]
pub fn show(json: &str) -> std::result::Result<String, JsValue> {
    keli_show::show(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Like `show`, but escapes quotes, backslashes and control characters
/// inside strings.
#[wasm_bindgen(js_name = showEscaped)]
pub fn show_escaped(json: &str) -> std::result::Result<String, JsValue> {
    let renderer = Renderer::new().quoting(TextQuoting::Escaped);
    keli_show::show_with(json, &renderer).map_err(|e| JsValue::from_str(&e.to_string()))
}
