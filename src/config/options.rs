//! Enumerated option values accepted by the `omit` and `sort` inputs.
//!
//! Both inputs are newline-delimited lists of tokens. Tokens are matched
//! case-sensitively against a closed set of members; anything else is
//! silently dropped by [`parse_option_set`].

use std::{
    collections::BTreeSet,
    error::Error,
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A closed set of symbolic tokens with a total, reversible string mapping.
pub trait InputOption: Copy + Ord + 'static {
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The token this member is written as in workflow inputs.
    fn as_str(self) -> &'static str;

    /// Look up the member spelled exactly as `token`.
    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|opt| opt.as_str() == token)
    }
}

/// Report content that can be suppressed from the rendered summary.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OmitOption {
    /// Packages that have no test files
    Untested,

    /// Packages in which every test passed
    Successful,

    /// The pie chart summarizing results
    Pie,
}

/// Criteria the rendered summary can be ordered by.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Order packages and tests by name
    Name,

    /// Order packages and tests by elapsed time
    Elapsed,
}

impl InputOption for OmitOption {
    const ALL: &'static [Self] = &[Self::Untested, Self::Successful, Self::Pie];

    fn as_str(self) -> &'static str {
        match self {
            Self::Untested => "untested",
            Self::Successful => "successful",
            Self::Pie => "pie",
        }
    }
}

impl InputOption for SortOption {
    const ALL: &'static [Self] = &[Self::Name, Self::Elapsed];

    fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Elapsed => "elapsed",
        }
    }
}

/// Returned by [`FromStr`] when a token names no member of the option set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    /// The token as it was given
    pub token: String,

    /// Which input the token was meant for
    pub kind: &'static str,
}

impl Display for UnknownOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "unknown {} option `{}`", self.kind, self.token)
    }
}

impl Error for UnknownOption {}

macro_rules! impl_option_traits {
    ($ty:ty, $kind:literal) => {
        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownOption;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::from_token(s).ok_or_else(|| UnknownOption {
                    token: s.to_string(),
                    kind: $kind,
                })
            }
        }
    };
}

impl_option_traits!(OmitOption, "omit");
impl_option_traits!(SortOption, "sort");

/// Parse a newline-delimited list into the set of recognized members.
///
/// The value is split on `\n` only and each piece is compared exactly, so a
/// token carrying a stray `\r` or surrounding spaces does not match. Blank
/// lines and unrecognized tokens are skipped, so this never fails.
///
/// # Examples
///
/// ```
/// # use go_test_inputs::config::{OmitOption, parse_option_set};
/// let omit = parse_option_set::<OmitOption>("pie\nfoo\nuntested");
/// assert_eq!(omit.len(), 2);
/// ```
#[must_use]
pub fn parse_option_set<T: InputOption>(raw: &str) -> BTreeSet<T> {
    raw.split('\n').filter_map(T::from_token).collect()
}
