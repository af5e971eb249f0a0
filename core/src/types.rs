//! Shared type definitions for flag parsing.
//!
//! The parser's results are plain collections; this module names them and
//! defines [`Expected`], which selects between the two admission modes.

use std::collections::BTreeMap;

/// Parsed flags keyed by name (leading dashes stripped).
///
/// Values keep the order in which they appeared. A flag given more than once
/// gets one entry per occurrence.
pub type FlagTable = BTreeMap<String, Vec<String>>;

/// Tokens that were not admitted as flags or flag values, in input order.
pub type Leftovers = Vec<String>;

/// Which flag names a [`FlagSet`](crate::FlagSet) admits into its table.
///
/// # Examples
///
/// ```
/// use genericflag_core::Expected;
///
/// assert_eq!(Expected::from_names(Vec::<String>::new()), Expected::Unrestricted);
///
/// let only_name = Expected::from_names(["name"]);
/// assert!(only_name.admits("name"));
/// assert!(!only_name.admits("Name"));
/// assert!(Expected::Unrestricted.admits("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Expected {
    /// Every flag name is admitted (the default).
    #[default]
    Unrestricted,
    /// Only these exact, case-sensitive names are admitted.
    Restricted(Vec<String>),
}

impl Expected {
    /// Builds the admission mode from a list of names.
    ///
    /// An empty list means [`Expected::Unrestricted`].
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            Self::Unrestricted
        } else {
            Self::Restricted(names)
        }
    }

    /// Returns `true` if `name` may be stored in the flag table.
    pub fn admits(&self, name: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Restricted(names) => names.iter().any(|expected| expected == name),
        }
    }

    /// Expected names, empty when unrestricted.
    pub fn names(&self) -> &[String] {
        match self {
            Self::Unrestricted => &[],
            Self::Restricted(names) => names,
        }
    }
}
