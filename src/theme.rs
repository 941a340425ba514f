use std::collections::BTreeSet;

use crate::error::Error;
use crate::util;

/// Marker class the style sheet keys light styling on.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Page presentation.
///
/// `Dark` is what the style sheet renders when `<body>` carries no marker
/// class, so applying it never touches the page. `Light` is expressed by
/// adding [`LIGHT_MODE_CLASS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// A set of class tokens on an element.
pub trait ClassList {
    /// Adding a token that is already present is a no-op.
    fn add(&mut self, token: &str) -> Result<(), Error>;

    fn contains(&self, token: &str) -> bool;
}

impl ClassList for web_sys::DomTokenList {
    fn add(&mut self, token: &str) -> Result<(), Error> {
        self.add_1(token).map_err(|err| Error::ClassList {
            token: token.to_owned(),
            reason: util::describe(&err),
        })
    }

    fn contains(&self, token: &str) -> bool {
        web_sys::DomTokenList::contains(self, token)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        ClassSet(iter.into_iter().map(str::to_owned).collect())
    }
}

impl ClassList for ClassSet {
    fn add(&mut self, token: &str) -> Result<(), Error> {
        self.0.insert(token.to_owned());
        Ok(())
    }

    fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}
