//! Precision resolution.
//!
//! The number of fractional digits is chosen by the `precision` parameter of a
//! query string. Resolution is lenient: anything that is missing, empty, negative
//! or not understood resolves to [`Precision::DEFAULT`] instead of an error.
//!
//! | value          | digits |
//! |----------------|--------|
//! | `seconds`      | 0      |
//! | `milliseconds` | 3      |
//! | `microseconds` | 6      |
//! | `nanoseconds`  | 9      |
//! | `N` (N >= 0)   | N      |
//! | anything else  | 3      |
//!
//! Literal integers are not capped; see [`Precision::clamp`] for callers that
//! want a bound.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::query::QueryString;

/// Query parameter that selects the precision.
pub const PRECISION_PARAM: &str = "precision";

/// Named aliases accepted in place of a digit count.
const ALIASES: &[(&str, Precision)] = &[
    ("seconds", Precision::SECONDS),
    ("milliseconds", Precision::MILLISECONDS),
    ("microseconds", Precision::MICROSECONDS),
    ("nanoseconds", Precision::NANOSECONDS),
];

/// Digits rendered after the decimal point. Zero means whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

/// A precision value that is neither an alias nor a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrecisionError {
    #[error("precision is empty")]
    Empty,

    #[error("negative precision: {0}")]
    Negative(i32),

    #[error("unrecognized precision: {0:?}")]
    Unrecognized(String),
}

impl Precision {
    pub const SECONDS: Precision = Precision(0);
    pub const MILLISECONDS: Precision = Precision(3);
    pub const MICROSECONDS: Precision = Precision(6);
    pub const NANOSECONDS: Precision = Precision(9);

    /// Used whenever the query does not select a usable precision.
    pub const DEFAULT: Precision = Precision::MILLISECONDS;

    /// Precision of exactly `digits` fractional digits.
    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    /// Number of fractional digits.
    pub const fn digits(&self) -> u32 {
        self.0
    }

    /// Whole seconds, rendered without a decimal point.
    pub const fn is_whole_seconds(&self) -> bool {
        self.0 == 0
    }

    /// Cap the digit count at `max`.
    ///
    /// Resolution itself is uncapped and each rendered line holds every digit,
    /// so `precision=2147483647` costs about 2 GiB per record. Clamp when the
    /// query comes from an untrusted caller.
    pub fn clamp(self, max: u32) -> Self {
        Self(self.0.min(max))
    }

    /// Resolve the precision selected by a raw query string.
    ///
    /// `None` behaves like an empty string. Only the first `precision`
    /// parameter is considered.
    pub fn resolve(query: Option<&str>) -> Self {
        Self::from_query(&QueryString::parse_opt(query))
    }

    /// Resolve the precision selected by an already parsed query.
    pub fn from_query(query: &QueryString) -> Self {
        match query.first(PRECISION_PARAM) {
            None => {
                debug!("no {} parameter, using default {}", PRECISION_PARAM, Self::DEFAULT);
                Self::DEFAULT
            }
            Some(value) => Self::from_value(value),
        }
    }

    /// Lenient parse of a single parameter value.
    pub fn from_value(value: &str) -> Self {
        match value.parse() {
            Ok(precision) => {
                debug!("resolved precision {} from {:?}", precision, value);
                precision
            }
            Err(e) => {
                debug!("{}, using default {}", e, Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Precision {
    type Err = PrecisionError;

    /// Strict parse: an alias or a non-negative 32-bit integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PrecisionError::Empty);
        }

        if let Some((_, precision)) = ALIASES.iter().find(|(name, _)| *name == s) {
            return Ok(*precision);
        }

        match s.parse::<i32>() {
            Ok(n) if n < 0 => Err(PrecisionError::Negative(n)),
            Ok(n) => Ok(Self(n.unsigned_abs())),
            Err(_) => Err(PrecisionError::Unrecognized(s.to_string())),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
