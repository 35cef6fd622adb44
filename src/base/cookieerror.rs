use thiserror::Error;

/// Errors surfaced by the fallible helpers around the cookie codec.
///
/// The codec operations themselves (`set`, `get`, `erase`, `all`) never
/// return these; they fail open. Only strict date parsing and defaults
/// loading report them.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    #[error("Invalid expiry date: {input:?}")]
    InvalidExpiry { input: String },

    #[error("Expiry out of range")]
    ExpiryOutOfRange,

    #[error("Failed to parse cookie defaults: {message}")]
    ConfigParse { message: String },

    #[error("Failed to read cookie defaults from {path}: {message}")]
    ConfigIo { path: String, message: String },
}

impl CookieError {
    pub fn invalid_expiry(input: impl Into<String>) -> Self {
        CookieError::InvalidExpiry {
            input: input.into(),
        }
    }

    pub fn config_parse(err: impl std::fmt::Display) -> Self {
        CookieError::ConfigParse {
            message: err.to_string(),
        }
    }

    pub fn config_io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        CookieError::ConfigIo {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Whether the error came from loading configuration rather than
    /// from interpreting an attribute value.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CookieError::ConfigParse { .. } | CookieError::ConfigIo { .. }
        )
    }
}

impl From<serde_json::Error> for CookieError {
    fn from(err: serde_json::Error) -> Self {
        CookieError::config_parse(err)
    }
}
