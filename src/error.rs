//! Error types for parsing and configuration.
//!
//! Rendering itself never fails; malformed points simply render degenerate
//! marks. Errors only arise when textual input is parsed.

use thiserror::Error;

/// A color string could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    /// The hex body has an unsupported length.
    #[error("color `{0}` must have 3, 4, 6 or 8 hex digits")]
    InvalidLength(String),
    /// The hex body contains a non-hex character.
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// A symbol name is not one of the built-in kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown symbol `{0}`, expected one of circle, cross, diamond, square, star, triangle, wye")]
pub struct ParseSymbolError(pub String);

/// A legend type name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown legend type `{0}`")]
pub struct ParseLegendTypeError(pub String);

/// A scatter configuration document could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON input was malformed or did not match the schema.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// TOML input was malformed or did not match the schema.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
