//! Cookie attributes, the defaults merge, and defaults loading.
//!
//! A [`CookieAttributes`] value is used both for per-call options and for
//! the defaults registry a [`CookieCodec`](crate::cookies::codec::CookieCodec)
//! owns. Every field is optional; [`CookieAttributes::resolve`] merges call
//! options over defaults without touching either.
//!
//! # Configuration
//!
//! Defaults can be kept in a JSON file:
//!
//! ```json
//! { "expires": 7, "domain": "example.org", "path": "/app", "secure": true }
//! ```
//!
//! `expires` accepts a number of days, an RFC 3339 timestamp, or any other
//! date text (parsed when a cookie is written).

use crate::base::cookieerror::CookieError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use time::OffsetDateTime;

/// Path used when neither the call nor the defaults specify one.
pub const DEFAULT_PATH: &str = "/";

/// Cookie lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expires {
    /// Days from now; fractional values allowed, negative values lie in the past.
    Days(f64),
    /// An absolute point in time.
    At(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
    /// Free-form date text, parsed best-effort when the cookie is written.
    Text(String),
}

impl Expires {
    /// Whether this value takes part in the merge at all.
    ///
    /// Zero or NaN days and empty text count as unset, so a default expiry
    /// still applies.
    pub fn is_set(&self) -> bool {
        match self {
            Expires::Days(days) => *days != 0.0 && !days.is_nan(),
            Expires::At(_) => true,
            Expires::Text(text) => !text.is_empty(),
        }
    }
}

impl From<f64> for Expires {
    fn from(days: f64) -> Self {
        Expires::Days(days)
    }
}

impl From<i32> for Expires {
    fn from(days: i32) -> Self {
        Expires::Days(f64::from(days))
    }
}

impl From<OffsetDateTime> for Expires {
    fn from(at: OffsetDateTime) -> Self {
        Expires::At(at)
    }
}

impl From<time::Duration> for Expires {
    fn from(duration: time::Duration) -> Self {
        Expires::Days(duration.as_seconds_f64() / 86_400.0)
    }
}

impl From<&str> for Expires {
    fn from(text: &str) -> Self {
        Expires::Text(text.to_string())
    }
}

impl From<String> for Expires {
    fn from(text: String) -> Self {
        Expires::Text(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => write!(f, "Strict"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::None => write!(f, "None"),
        }
    }
}

/// Attributes for a cookie write.
///
/// `path: Some("")` is not the same as `path: None`: the empty path leaves
/// the attribute out so the host scopes the cookie to the current path,
/// while `None` falls back to the defaults and finally to `/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<Expires>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub httponly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samesite: Option<SameSite>,
}

impl CookieAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expires(mut self, expires: impl Into<Expires>) -> Self {
        self.expires = Some(expires.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn httponly(mut self, httponly: bool) -> Self {
        self.httponly = Some(httponly);
        self
    }

    pub fn samesite(mut self, samesite: SameSite) -> Self {
        self.samesite = Some(samesite);
        self
    }

    /// Merge these call options over `defaults`.
    ///
    /// Per attribute the first present value wins: call option, then default,
    /// then the hard fallback (`/` for the path, nothing for the rest).
    /// Neither input is modified.
    pub fn resolve(&self, defaults: &CookieAttributes) -> ResolvedAttributes {
        let expires = self
            .expires
            .as_ref()
            .filter(|e| e.is_set())
            .or_else(|| defaults.expires.as_ref().filter(|e| e.is_set()))
            .cloned();

        ResolvedAttributes {
            expires,
            domain: pick_domain(self.domain.as_deref(), defaults.domain.as_deref()),
            path: pick_path(self.path.as_deref(), defaults.path.as_deref()),
            secure: self.secure.or(defaults.secure).unwrap_or(false),
            httponly: self.httponly.or(defaults.httponly).unwrap_or(false),
            samesite: self.samesite.or(defaults.samesite),
        }
    }

    /// Parse a defaults record from JSON.
    pub fn from_json(json: &str) -> Result<Self, CookieError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a defaults record from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CookieError> {
        let json = fs::read_to_string(path)
            .map_err(|e| CookieError::config_io(path.display().to_string(), e))?;
        let attributes = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded cookie defaults");
        Ok(attributes)
    }

    pub fn to_json(&self) -> Result<String, CookieError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Options accepted by [`CookieCodec::erase`](crate::cookies::codec::CookieCodec::erase).
///
/// Only the scope of the cookie matters for deletion; lifetime and security
/// flags are never forwarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EraseOptions {
    pub domain: Option<String>,
    pub path: Option<String>,
}

impl EraseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl From<&CookieAttributes> for EraseOptions {
    fn from(attributes: &CookieAttributes) -> Self {
        Self {
            domain: attributes.domain.clone(),
            path: attributes.path.clone(),
        }
    }
}

/// The fully merged attribute set of a single write.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttributes {
    pub expires: Option<Expires>,
    pub domain: Option<String>,
    /// Empty means "omit the attribute".
    pub path: String,
    pub secure: bool,
    pub httponly: bool,
    pub samesite: Option<SameSite>,
}

impl ResolvedAttributes {
    /// Attributes of a deletion: expiry one day in the past, no security
    /// flags, and only the domain and path scope from `options` or `defaults`.
    pub fn for_erase(options: &EraseOptions, defaults: &CookieAttributes) -> Self {
        Self {
            expires: Some(Expires::Days(-1.0)),
            domain: pick_domain(options.domain.as_deref(), defaults.domain.as_deref()),
            path: pick_path(options.path.as_deref(), defaults.path.as_deref()),
            secure: false,
            httponly: false,
            samesite: None,
        }
    }
}

fn pick_domain(option: Option<&str>, default: Option<&str>) -> Option<String> {
    option
        .filter(|d| !d.is_empty())
        .or_else(|| default.filter(|d| !d.is_empty()))
        .map(str::to_string)
}

fn pick_path(option: Option<&str>, default: Option<&str>) -> String {
    option.or(default).unwrap_or(DEFAULT_PATH).to_string()
}
