//! An in-process emulation of the host's cookie jar behind the storage slot.
//!
//! Writes are parsed like a browser parses `document.cookie = "..."`:
//! an assignment replaces the stored cookie with the same name, domain and
//! path; an expiry at or before "now" deletes it; `httponly` cookies are
//! kept but never show up in [`read`](CookieStorage::read) and cannot be
//! overwritten from the slot. Domain and path matching against a document
//! URL is not modelled: every stored cookie is visible.

use crate::cookies::clock::{Clock, SystemClock};
use crate::cookies::storage::CookieStorage;
use cookie::Cookie;
use std::cell::RefCell;
use time::OffsetDateTime;

/// A cookie as the host stores it; name and value stay percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCookie {
    pub name: String,
    pub value: String,
    /// Empty for host-only cookies.
    pub domain: String,
    pub path: String,
    pub expires: Option<OffsetDateTime>,
    pub secure: bool,
    pub http_only: bool,
}

impl HostCookie {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires.is_some_and(|expiry| expiry <= now)
    }

    fn same_key(&self, other: &HostCookie) -> bool {
        self.name == other.name && self.domain == other.domain && self.path == other.path
    }
}

pub struct EmulatedCookieJar<C: Clock = SystemClock> {
    cookies: RefCell<Vec<HostCookie>>,
    document_path: String,
    clock: C,
}

impl Default for EmulatedCookieJar<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl EmulatedCookieJar<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> EmulatedCookieJar<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            cookies: RefCell::new(Vec::new()),
            document_path: "/".to_string(),
            clock,
        }
    }

    /// Path given to cookies written without a `path` attribute.
    pub fn with_document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = path.into();
        self
    }

    /// Every stored, unexpired cookie, `httponly` ones included.
    pub fn cookies(&self) -> Vec<HostCookie> {
        let now = self.clock.now();
        self.cookies
            .borrow()
            .iter()
            .filter(|c| !c.is_expired(now))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cookies().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cookies.borrow_mut().clear();
    }

    fn parse_assignment(&self, assignment: &str) -> Option<HostCookie> {
        let parsed = match Cookie::parse(assignment) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "host rejected cookie assignment");
                return None;
            }
        };

        let domain = parsed
            .domain()
            .map(|d| d.trim_start_matches('.').to_ascii_lowercase())
            .unwrap_or_default();
        let path = parsed
            .path()
            .filter(|p| p.starts_with('/'))
            .unwrap_or(self.document_path.as_str())
            .to_string();

        Some(HostCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain,
            path,
            expires: parsed.expires().and_then(|e| e.datetime()),
            secure: parsed.secure().unwrap_or(false),
            http_only: parsed.http_only().unwrap_or(false),
        })
    }
}

impl<C: Clock> CookieStorage for EmulatedCookieJar<C> {
    fn read(&self) -> String {
        let mut visible: Vec<HostCookie> = self
            .cookies()
            .into_iter()
            .filter(|c| !c.http_only)
            .collect();

        // Longest path first; the sort is stable so ties keep creation order.
        visible.sort_by(|a, b| b.path.len().cmp(&a.path.len()));

        visible
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, assignment: &str) {
        let Some(cookie) = self.parse_assignment(assignment) else {
            return;
        };
        let now = self.clock.now();
        let mut cookies = self.cookies.borrow_mut();

        if cookies.iter().any(|c| c.same_key(&cookie) && c.http_only && !c.is_expired(now)) {
            tracing::debug!(name = %cookie.name, "httponly cookie cannot be replaced from the slot");
            return;
        }

        cookies.retain(|c| !c.same_key(&cookie) && !c.is_expired(now));

        if cookie.is_expired(now) {
            tracing::trace!(name = %cookie.name, "cookie deleted by past expiry");
            return;
        }

        cookies.push(cookie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::clock::FixedClock;
    use time::macros::datetime;

    fn jar() -> EmulatedCookieJar<FixedClock> {
        EmulatedCookieJar::with_clock(FixedClock(datetime!(2030-12-20 23:15:30 UTC)))
    }

    #[test]
    fn test_write_and_read() {
        let jar = jar();
        jar.write("a=1;path=/");
        jar.write("b=2;path=/");
        assert_eq!(jar.read(), "a=1; b=2");
    }

    #[test]
    fn test_same_key_replaces() {
        let jar = jar();
        jar.write("a=1;path=/");
        jar.write("a=2;path=/");
        assert_eq!(jar.read(), "a=2");
        assert_eq!(jar.len(), 1);
    }

    #[test]
    fn test_different_path_is_distinct() {
        let jar = jar();
        jar.write("a=1;path=/");
        jar.write("a=2;path=/sub");
        assert_eq!(jar.read(), "a=2; a=1");
    }

    #[test]
    fn test_past_expiry_deletes() {
        let jar = jar();
        jar.write("a=1;path=/");
        jar.write("a=;expires=Thu, 19 Dec 2030 23:15:30 GMT;path=/");
        assert_eq!(jar.read(), "");
        assert!(jar.is_empty());
    }

    #[test]
    fn test_deletion_needs_matching_scope() {
        let jar = jar();
        jar.write("a=1;domain=example.org;path=/app");
        jar.write("a=;expires=Thu, 19 Dec 2030 23:15:30 GMT;path=/");
        assert_eq!(jar.read(), "a=1");

        jar.write("a=;expires=Thu, 19 Dec 2030 23:15:30 GMT;domain=example.org;path=/app");
        assert_eq!(jar.read(), "");
    }

    #[test]
    fn test_httponly_is_hidden_and_sticky() {
        let jar = jar();
        jar.write("secret=1;path=/;httponly");
        assert_eq!(jar.read(), "");
        assert_eq!(jar.cookies().len(), 1);

        jar.write("secret=;expires=Thu, 19 Dec 2030 23:15:30 GMT;path=/");
        assert_eq!(jar.cookies().len(), 1);
    }

    #[test]
    fn test_missing_path_uses_document_path() {
        let jar = jar().with_document_path("/docs");
        jar.write("a=1");
        assert_eq!(jar.cookies()[0].path, "/docs");
    }

    #[test]
    fn test_unparseable_assignment_ignored() {
        let jar = jar();
        jar.write("no-equals-sign");
        assert!(jar.is_empty());
    }
}
