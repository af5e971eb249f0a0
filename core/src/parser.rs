//! Tokenizing flag parser.
//!
//! [`FlagSet`] walks an argument vector once, left to right, and sorts each
//! token into either its flag table or its leftovers. Flags do not need to be
//! declared up front: any token that starts with one or two dashes names a
//! flag, and its value is taken from an embedded `=` or from the following
//! token.
//!
//! Tokens without a leading dash are not exempt. Their first character is
//! dropped like a dash would be, so with no expected names `hello world`
//! records flag `ello` with value `world`. Restrict the flag set with
//! [`Expected`] to keep positionals in the leftovers.
//!
//! # Examples
//!
//! ```
//! use genericflag_core::FlagSet;
//!
//! let mut flags = FlagSet::new("build");
//! flags
//!     .parse(["--target=release", "-j", "8", "-v", "src"])
//!     .expect("parsing never fails");
//!
//! assert_eq!(flags.values("target"), Some(&["release".to_string()][..]));
//! assert_eq!(flags.values("j"), Some(&["8".to_string()][..]));
//! assert_eq!(flags.values("v"), Some(&["src".to_string()][..]));
//! assert!(flags.args().is_empty());
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::ParseError;
use crate::quote::quote_value;
use crate::types::{Expected, FlagTable, Leftovers};

/// Where a flag's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueSource {
    /// Embedded after `=` in the flag token itself.
    Inline,
    /// Consumed from the token following the flag.
    Lookahead,
    /// No value was available; the flag is boolean-style.
    Absent,
}

/// A named, accumulating flag parser.
///
/// Results accumulate across calls to [`parse`](FlagSet::parse): neither the
/// flag table nor the leftovers are cleared between calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlagSet {
    name: String,
    #[serde(skip)]
    expected: Expected,
    flags: FlagTable,
    args: Leftovers,
}

impl FlagSet {
    /// Creates an unrestricted flag set with empty results.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the admission mode, builder style.
    ///
    /// # Examples
    ///
    /// ```
    /// use genericflag_core::{Expected, FlagSet};
    ///
    /// let flags = FlagSet::new("deploy").with_expected(Expected::from_names(["env"]));
    /// assert!(flags.expected().admits("env"));
    /// assert!(!flags.expected().admits("force"));
    /// ```
    pub fn with_expected(mut self, expected: Expected) -> Self {
        self.expected = expected;
        self
    }

    /// Replaces the admission mode. Already parsed results are kept.
    pub fn set_expected(&mut self, expected: Expected) {
        self.expected = expected;
    }

    /// Label given at construction. Not used by parsing.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn expected(&self) -> &Expected {
        &self.expected
    }

    /// Every admitted flag with its values.
    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    /// Values recorded for `name`, if the flag was seen.
    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.flags.get(name).map(Vec::as_slice)
    }

    /// Tokens that were not parsed into flags, in input order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Consumes the flag set, returning its flag table and leftovers.
    pub fn into_parts(self) -> (FlagTable, Leftovers) {
        (self.flags, self.args)
    }

    /// Parses `args` into the flag table and leftovers.
    ///
    /// The program name must not be included. A token that follows a flag
    /// and does not start with `-` is taken as that flag's value unless the
    /// flag carries an `=value` of its own.
    ///
    /// # Errors
    ///
    /// None at present; every input has a defined outcome. The `Result` is
    /// kept so new failure modes do not change the signature.
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = args.into_iter().peekable();
        let mut seen = 0usize;

        while let Some(owned) = tokens.next() {
            let token = owned.as_ref();
            if token.is_empty() {
                continue;
            }
            seen += 1;

            let mut chars = token.chars();
            chars.next();
            let rest = chars.as_str();
            let rest = rest.strip_prefix('-').unwrap_or(rest);
            // `-` and `--` carry no name.
            if rest.is_empty() {
                self.args.push(token.to_string());
                continue;
            }

            let (name, value, source) = match rest.split_once('=') {
                Some((name, value)) => (name, value.to_string(), ValueSource::Inline),
                None => match tokens.next_if(|next| !next.as_ref().starts_with('-')) {
                    Some(next) => {
                        seen += 1;
                        (rest, next.as_ref().to_string(), ValueSource::Lookahead)
                    }
                    None => (rest, String::new(), ValueSource::Absent),
                },
            };

            if !name.is_empty() && self.expected.admits(name) {
                self.flags
                    .entry(name.to_string())
                    .or_default()
                    .push(quote_value(&value));
                continue;
            }

            debug!(flag_set = %self.name, token, "flag not admitted");
            self.args.push(token.to_string());
            if source == ValueSource::Lookahead && !value.is_empty() {
                self.args.push(quote_value(&value));
            }
        }

        trace!(
            flag_set = %self.name,
            tokens = seen,
            flags = self.flags.len(),
            leftovers = self.args.len(),
            "parsed arguments"
        );
        Ok(())
    }
}
