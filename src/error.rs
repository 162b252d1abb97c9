//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Subpattern size {0} is unsupported; transforms exist for sizes 3 to 5.
    SubpatternSizeError(u32),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// B0 rules are not supported; an empty region must stay empty.
    B0Error,
    /// Transform table artifact does not match its declared size {0}.
    TableArtifactError(u32),
    /// Transform table was generated for size {table}, not size {requested}.
    TableMismatchError {
        /// The size the table was generated for.
        table: u32,
        /// The size of the lookup that was attempted.
        requested: u32,
    },
}
