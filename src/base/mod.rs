//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): errors from strict date
//!   parsing and defaults loading

pub mod cookieerror;
