//! # stampline
//!
//! Renders elapsed-time timestamps as decimal-second text lines, with the
//! number of fractional digits chosen by a query string such as
//! `precision=microseconds`.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      TimestampsOutput                         │
//! │  ┌──────────┐    ┌────────────┐    ┌──────────┐    ┌───────┐  │
//! │  │  query   │───▶│ precision  │───▶│  render  │───▶│ sink  │  │
//! │  │ (parse)  │    │ (resolve)  │    │ (format) │    │(Write)│  │
//! │  └──────────┘    └────────────┘    └────▲─────┘    └───────┘  │
//! │                                         │                     │
//! │                                    ┌────┴─────┐               │
//! │                                    │  source  │◀── Iter |     │
//! │                                    │  (pull)  │    Reader |   │
//! │                                    └──────────┘    Channel    │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`query`]**: parses `key=value&...` into ordered pairs; the first
//!   occurrence of a key wins
//! - **[`precision`]**: turns the `precision` parameter into a digit count,
//!   falling back to milliseconds for anything missing or invalid
//! - **[`render`]**: exact integer rendering of milliseconds as seconds
//! - **[`source`]**: the [`TimestampSource`] trait and its adapters
//! - **[`output`]**: the streaming loop tying them together
//! - **[`config`]**: [`Settings`] loaded from a file and the environment
//!
//! ## Precision
//!
//! | query                     | 1500ms renders as |
//! |---------------------------|-------------------|
//! | `precision=seconds`, `=0` | `1`               |
//! | `precision=2`             | `1.50`            |
//! | *(unset)*, `=3`, `=milliseconds` | `1.500`    |
//! | `precision=microseconds`, `=6` | `1.500000`   |
//! | `precision=nanoseconds`, `=9`  | `1.500000000`|
//!
//! ## Usage
//!
//! ```
//! use stampline::{IterSource, Timestamp};
//!
//! let mut source = IterSource::from(vec![
//!     Timestamp::from_elapsed(0),
//!     Timestamp::from_elapsed(1_500),
//! ]);
//! let mut sink = Vec::new();
//!
//! stampline::write(&mut source, &mut sink, Some("precision=seconds")).unwrap();
//! assert_eq!(String::from_utf8(sink).unwrap(), "0\n1\n");
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod precision;
pub mod query;
pub mod render;
pub mod source;

// Re-export main types for convenience
pub use config::Settings;
pub use error::Error;
pub use output::{write, TimestampsOutput};
pub use precision::{Precision, PrecisionError};
pub use query::QueryString;
pub use source::{ChannelSource, IterSource, ReaderSource, TimestampSource};
pub use stampline_types::Timestamp;
