//! Timestamp source abstraction.
//!
//! The formatter pulls records one at a time through [`TimestampSource`].
//! Sources are forward-only: once a record has been returned it is gone, and
//! `None` means the sequence is exhausted.
//!
//! Implementations:
//!
//! - [`IterSource`]: any iterator of records (in-memory sequences, tests)
//! - [`ReaderSource`]: newline-delimited records from a file, stdin or any `BufRead`
//! - [`ChannelSource`]: records pushed by a producer on another thread

mod channel;
mod iter;
mod reader;

pub use channel::ChannelSource;
pub use iter::IterSource;
pub use reader::ReaderSource;

use stampline_types::Timestamp;

/// Sequential supplier of timestamp records.
///
/// # Example
///
/// ```
/// use stampline::{IterSource, Timestamp, TimestampSource};
///
/// let mut source = IterSource::from_millis([0, 250, 1_000]);
/// while let Some(ts) = source.read() {
///     println!("{}ms", ts.elapsed_millis());
/// }
/// ```
pub trait TimestampSource {
    /// Read the next record.
    ///
    /// Returns `None` once the source is exhausted. This call may block until
    /// a record is available.
    fn read(&mut self) -> Option<Timestamp>;
}

impl<S: TimestampSource + ?Sized> TimestampSource for &mut S {
    fn read(&mut self) -> Option<Timestamp> {
        (**self).read()
    }
}

impl<S: TimestampSource + ?Sized> TimestampSource for Box<S> {
    fn read(&mut self) -> Option<Timestamp> {
        (**self).read()
    }
}
