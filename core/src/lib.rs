//! Permissive command-line flag tokenizer.
//!
//! Unlike declarative argument parsers, this crate needs no flag
//! definitions. [`FlagSet`] accepts any `-name` or `--name` token, takes its
//! value from `--name=value` or from the following token, and hands back
//! everything it did not parse as leftovers:
//!
//! - [`FlagSet`] — the accumulating parser and its results.
//! - [`Expected`] — admit every flag, or only an allow-list of names.
//! - [`FlagSetConfig`] — YAML/JSON configuration for a flag set.
//! - [`format_flag_set`] — render results as plain text, JSON, YAML or a
//!   table.
//!
//! Every value is a string. Values containing a space are stored wrapped in
//! double quotes (see [`quote_value`]).
//!
//! # Example
//!
//! ```
//! use genericflag_core::*;
//!
//! let mut flags = FlagSet::new("build").with_expected(Expected::from_names(["name", "v"]));
//! flags.parse(["--name=John Smith", "-v", "--color", "auto", "main.rs"]).unwrap();
//!
//! assert_eq!(flags.values("name"), Some(&["\"John Smith\"".to_string()][..]));
//! assert_eq!(flags.values("v"), Some(&["".to_string()][..]));
//! assert_eq!(flags.args(), &["--color", "auto", "main.rs"]);
//! ```

mod config;
mod error;
mod output;
mod parser;
mod quote;
mod types;

pub use config::FlagSetConfig;
pub use error::{ConfigError, ParseError};
pub use output::{OutputFormat, format_flag_set};
pub use parser::FlagSet;
pub use quote::quote_value;
pub use types::{Expected, FlagTable, Leftovers};
