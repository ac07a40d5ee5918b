//! Entry types: anything with a stable string key can be stored.

use core::fmt;

/// A value identified by a unique string key.
///
/// The key must not change while the value is stored in a table; the table
/// reads it during every probe that passes the entry's slot.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for String {
    #[inline]
    fn key(&self) -> &str {
        self.as_str()
    }
}

impl Keyed for &str {
    #[inline]
    fn key(&self) -> &str {
        self
    }
}

impl<T: Keyed + ?Sized> Keyed for Box<T> {
    #[inline]
    fn key(&self) -> &str {
        (**self).key()
    }
}

/// A user profile keyed by its user name (a fixed-length digit string in the
/// data files the report driver consumes).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Profile {
    user_name: String,
}

impl Profile {
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }
}

impl Keyed for Profile {
    #[inline]
    fn key(&self) -> &str {
        &self.user_name
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_name)
    }
}
