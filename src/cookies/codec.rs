use crate::cookies::attributes::{CookieAttributes, EraseOptions, ResolvedAttributes};
use crate::cookies::clock::{Clock, SystemClock};
use crate::cookies::encoding::{encode_name, encode_value};
use crate::cookies::expiry::{format_http_date, resolve_expiry};
use crate::cookies::parser;
use crate::cookies::storage::CookieStorage;
use std::collections::HashMap;
use time::OffsetDateTime;

/// Reads and writes cookies through a single storage slot.
///
/// Each codec owns its defaults registry, consulted on every call for any
/// attribute the call leaves out. No operation fails: unparseable expiry
/// values are dropped, missing cookies read as `None`, and erasing a missing
/// cookie is a no-op.
///
/// # Example
///
/// ```rust
/// use browsercookies::cookies::attributes::CookieAttributes;
/// use browsercookies::cookies::codec::CookieCodec;
/// use browsercookies::cookies::jar::EmulatedCookieJar;
///
/// let mut cookies = CookieCodec::new(EmulatedCookieJar::new());
/// cookies.defaults_mut().secure = Some(true);
///
/// cookies.set("banana", "yellow", Some(&CookieAttributes::new().expires(7)));
/// assert_eq!(cookies.get("banana").as_deref(), Some("yellow"));
///
/// cookies.erase("banana", None);
/// assert_eq!(cookies.get("banana"), None);
/// ```
pub struct CookieCodec<S: CookieStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    defaults: CookieAttributes,
}

impl<S: CookieStorage> CookieCodec<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: CookieStorage, C: Clock> CookieCodec<S, C> {
    pub fn with_clock(storage: S, clock: C) -> Self {
        Self {
            storage,
            clock,
            defaults: CookieAttributes::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: CookieAttributes) -> Self {
        self.defaults = defaults;
        self
    }

    /// Write `name=value` with `options` merged over the defaults.
    pub fn set(&self, name: &str, value: &str, options: Option<&CookieAttributes>) {
        let resolved = match options {
            Some(options) => options.resolve(&self.defaults),
            None => CookieAttributes::default().resolve(&self.defaults),
        };
        self.write(name, value, &resolved);
    }

    /// Value of the first cookie named `name`, if any.
    pub fn get(&self, name: &str) -> Option<String> {
        let slot = self.storage.read();
        let value = parser::find(&slot, name);
        tracing::trace!(name, found = value.is_some(), "cookie lookup");
        value
    }

    /// Delete `name` by writing it empty with an expiry in the past.
    ///
    /// Only `domain` and `path` are taken from `options`, falling back to the
    /// defaults registry; its expiry and security flags are ignored.
    pub fn erase(&self, name: &str, options: Option<&EraseOptions>) {
        let options = options.cloned().unwrap_or_default();
        let resolved = ResolvedAttributes::for_erase(&options, &self.defaults);
        self.write(name, "", &resolved);
    }

    /// Every visible cookie; for a repeated name the last one in the slot wins.
    pub fn all(&self) -> HashMap<String, String> {
        let slot = self.storage.read();
        parser::pairs(&slot).collect()
    }

    /// The live defaults registry.
    pub fn defaults(&self) -> &CookieAttributes {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut CookieAttributes {
        &mut self.defaults
    }

    pub fn snapshot_defaults(&self) -> CookieAttributes {
        self.defaults.clone()
    }

    pub fn restore_defaults(&mut self, snapshot: CookieAttributes) {
        self.defaults = snapshot;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn write(&self, name: &str, value: &str, resolved: &ResolvedAttributes) {
        let assignment = format_assignment(name, value, resolved, self.clock.now());
        tracing::debug!(name, "writing cookie");
        self.storage.write(&assignment);
    }
}

/// Render one assignment for the storage slot.
///
/// Attribute order is fixed: `expires`, `domain`, `path`, `secure`,
/// `httponly`, `samesite`. An empty path is left out.
pub fn format_assignment(
    name: &str,
    value: &str,
    resolved: &ResolvedAttributes,
    now: OffsetDateTime,
) -> String {
    let mut assignment = format!("{}={}", encode_name(name), encode_value(value));

    if let Some(at) = resolve_expiry(resolved.expires.as_ref(), now) {
        match format_http_date(at) {
            Ok(date) => {
                assignment.push_str(";expires=");
                assignment.push_str(&date);
            }
            Err(e) => tracing::debug!(error = %e, "dropping cookie expiry"),
        }
    }

    if let Some(domain) = &resolved.domain {
        assignment.push_str(";domain=");
        assignment.push_str(domain);
    }

    if !resolved.path.is_empty() {
        assignment.push_str(";path=");
        assignment.push_str(&resolved.path);
    }

    if resolved.secure {
        assignment.push_str(";secure");
    }

    if resolved.httponly {
        assignment.push_str(";httponly");
    }

    if let Some(samesite) = resolved.samesite {
        assignment.push_str(&format!(";samesite={}", samesite));
    }

    assignment
}
