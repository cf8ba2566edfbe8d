//! Elapsed-time record.
//!
//! Both fields are whole milliseconds. Seconds are derived with integer
//! division so no precision is lost at the millisecond boundary.

use core::time::Duration;

use crate::MILLIS_PER_SECOND;

/// One elapsed-time measurement.
///
/// `elapsed_millis` is measured from the reference point shared by every
/// record in a sequence; `millis_since_previous` is the gap to the record
/// before it (zero for the first record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    /// Milliseconds since the reference point.
    pub elapsed_millis: u64,

    /// Milliseconds since the previous record.
    #[cfg_attr(feature = "serde", serde(default))]
    pub millis_since_previous: u64,
}

impl Timestamp {
    /// Create a record from both millisecond fields.
    pub const fn new(elapsed_millis: u64, millis_since_previous: u64) -> Self {
        Self {
            elapsed_millis,
            millis_since_previous,
        }
    }

    /// Create a record with no gap information.
    pub const fn from_elapsed(elapsed_millis: u64) -> Self {
        Self::new(elapsed_millis, 0)
    }

    /// Create the record that follows `previous` at `elapsed_millis`.
    ///
    /// The gap saturates at zero if the clock went backwards.
    pub const fn following(previous: &Timestamp, elapsed_millis: u64) -> Self {
        Self::new(
            elapsed_millis,
            elapsed_millis.saturating_sub(previous.elapsed_millis),
        )
    }

    /// Milliseconds since the reference point.
    pub const fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    /// Milliseconds since the previous record.
    pub const fn millis_since_previous(&self) -> u64 {
        self.millis_since_previous
    }

    /// Whole seconds since the reference point (truncated).
    pub const fn whole_seconds(&self) -> u64 {
        self.elapsed_millis / MILLIS_PER_SECOND
    }

    /// Millisecond remainder after [`whole_seconds`](Self::whole_seconds), in `0..1000`.
    pub const fn sub_second_millis(&self) -> u64 {
        self.elapsed_millis % MILLIS_PER_SECOND
    }

    /// Elapsed time as a standard Duration.
    pub const fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_millis)
    }
}

impl From<Duration> for Timestamp {
    /// Sub-millisecond parts are truncated; durations beyond `u64::MAX`
    /// milliseconds saturate.
    fn from(d: Duration) -> Self {
        Self::from_elapsed(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
