//! # stampline-types
//!
//! The timestamp record passed from sources to the stampline formatter.
//!
//! A [`Timestamp`] measures elapsed time since a fixed reference point (for
//! example the start of a build) in whole milliseconds. Producers own the
//! records; consumers only read them.
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `serde`: Serialization via serde, used for newline-delimited JSON input
//!
//! ## Example
//!
//! ```rust
//! use stampline_types::Timestamp;
//!
//! let ts = Timestamp::new(1_500, 250);
//! assert_eq!(ts.elapsed_millis(), 1_500);
//! assert_eq!(ts.whole_seconds(), 1);
//! assert_eq!(ts.sub_second_millis(), 500);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod timestamp;

pub use timestamp::*;

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: u64 = 1_000;
