//! # browsercookies
//!
//! Read, write, enumerate and delete browser cookies through the single
//! string property a host exposes for them (`document.cookie`).
//!
//! ## Features
//!
//! - **Codec**: structured name/value/attributes to and from the slot string
//! - **Defaults**: per-codec defaults registry with snapshot/restore
//! - **Encoding**: RFC 6265 compliant value escaping, HTTP token names
//! - **Expiry**: days, absolute times, or free-form date text, failing open
//! - **Host emulation**: a browser-like jar for tests and non-browser hosts
//!
//! ## Quick Start
//!
//! ```rust
//! use browsercookies::cookies::attributes::CookieAttributes;
//! use browsercookies::cookies::codec::CookieCodec;
//! use browsercookies::cookies::jar::EmulatedCookieJar;
//!
//! let cookies = CookieCodec::new(EmulatedCookieJar::new());
//! cookies.set("theme", "dark", Some(&CookieAttributes::new().expires(30)));
//! assert_eq!(cookies.get("theme").as_deref(), Some("dark"));
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Codec, attributes, encoding, storage ports and host emulation

pub mod base;
pub mod cookies;

pub use base::cookieerror::CookieError;
pub use cookies::attributes::{CookieAttributes, EraseOptions, Expires, SameSite};
pub use cookies::codec::CookieCodec;
pub use cookies::storage::{CookieStorage, InMemoryStorage};
