//! Cookie codec over a single string storage slot.
//!
//! This module provides:
//!
//! - **Codec**: set / get / erase / all ([`CookieCodec`](codec::CookieCodec))
//! - **Attributes**: per-call options, the defaults registry and their merge
//!   ([`CookieAttributes`](attributes::CookieAttributes))
//! - **Encoding**: RFC 6265 value and HTTP token name percent-encoding
//! - **Ports**: the storage slot ([`CookieStorage`](storage::CookieStorage))
//!   and the time source ([`Clock`](clock::Clock))
//! - **Host emulation**: a browser-like jar behind the slot
//!   ([`EmulatedCookieJar`](jar::EmulatedCookieJar))
//!
//! # Wire format
//!
//! | Direction | Format |
//! |-----------|--------|
//! | read  | `name1=value1; name2=value2` |
//! | write | `name=value[;expires=Www, dd Mon yyyy HH:MM:SS GMT][;domain=d][;path=p][;secure][;httponly][;samesite=s]` |
//!
//! # Example
//!
//! ```rust
//! use browsercookies::cookies::attributes::{CookieAttributes, EraseOptions};
//! use browsercookies::cookies::codec::CookieCodec;
//! use browsercookies::cookies::storage::InMemoryStorage;
//!
//! let cookies = CookieCodec::new(InMemoryStorage::new());
//!
//! let options = CookieAttributes::new().domain("www.test.com").path("/app");
//! cookies.set("banana", "yellow", Some(&options));
//! assert_eq!(
//!     cookies.storage().contents(),
//!     "banana=yellow;domain=www.test.com;path=/app"
//! );
//!
//! cookies.erase("banana", Some(&EraseOptions::from(&options)));
//! assert!(cookies.storage().contents().starts_with("banana=;expires="));
//! ```

pub mod attributes;
pub mod clock;
pub mod codec;
pub mod encoding;
pub mod expiry;
pub mod jar;
pub mod parser;
pub mod storage;
