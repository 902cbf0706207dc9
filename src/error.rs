//! Error types for the writetable crate.
//!
//! The grid itself never fails: every runtime path degrades to a default.
//! The only fallible surface is loading [`Options`](crate::options::Options)
//! from a serialized configuration document.

use thiserror::Error;

/// Errors raised while loading grid configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The options document was not valid JSON or did not match the options shape.
    #[error("JSON options error: {0}")]
    Json(#[from] serde_json::Error),

    /// The options document was not valid TOML or did not match the options shape.
    #[error("TOML options error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A specialized `Result` type for configuration loading.
pub type Result<T> = std::result::Result<T, Error>;
