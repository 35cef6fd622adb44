//! The storage slot port.
//!
//! A host exposes cookies as one string property: reading it yields every
//! visible cookie as `name=value` pairs joined by `; `, writing it submits a
//! single assignment that the host merges into its own jar. [`CookieStorage`]
//! abstracts that property so the codec runs against a browser binding, an
//! in-memory fake, or the [`EmulatedCookieJar`](crate::cookies::jar::EmulatedCookieJar).

use std::cell::RefCell;
use std::rc::Rc;

pub trait CookieStorage {
    /// Current contents of the slot.
    fn read(&self) -> String;

    /// Submit one assignment (`name=value;attr...`) to the slot.
    fn write(&self, assignment: &str);
}

impl<S: CookieStorage + ?Sized> CookieStorage for &S {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, assignment: &str) {
        (**self).write(assignment)
    }
}

impl<S: CookieStorage + ?Sized> CookieStorage for Rc<S> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, assignment: &str) {
        (**self).write(assignment)
    }
}

/// A slot that simply holds the last string written to it.
///
/// No merge semantics: after `write(x)`, `read()` returns `x`. Useful for
/// asserting the exact assignment a codec produced, or for seeding a slot
/// with a fixed string before reading.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStorage {
    slot: RefCell<String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(contents.into()),
        }
    }

    /// Replace the slot contents, as a host would after external changes.
    pub fn replace(&self, contents: impl Into<String>) {
        *self.slot.borrow_mut() = contents.into();
    }

    pub fn contents(&self) -> String {
        self.slot.borrow().clone()
    }
}

impl CookieStorage for InMemoryStorage {
    fn read(&self) -> String {
        self.contents()
    }

    fn write(&self, assignment: &str) {
        self.replace(assignment);
    }
}
