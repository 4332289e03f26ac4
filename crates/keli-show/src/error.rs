//! Error types for bridging host JSON values into the renderer.
//!
//! Rendering itself is total; errors only arise while recovering a [`Value`]
//! from the host representation.
//!
//! [`Value`]: crate::Value

use thiserror::Error;

/// Errors that can occur while parsing or bridging a host value.
#[derive(Error, Debug)]
pub enum ShowError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A `__tag` field was truthy but not a string.
    #[error("Invalid variant tag: expected a string, found {found}")]
    InvalidTag { found: &'static str },

    /// A `__carry` field was truthy but not an object.
    #[error("Invalid carry for variant '{tag}': expected an object, found {found}")]
    InvalidCarry { tag: String, found: &'static str },

    /// The host value nests deeper than the bridge accepts.
    #[error("Value nesting exceeds the depth limit of {limit}")]
    TooDeep { limit: usize },

    /// A failure on one line of newline-delimited input (1-based).
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ShowError>,
    },
}

/// Convenience alias used throughout keli-show.
pub type Result<T> = std::result::Result<T, ShowError>;
