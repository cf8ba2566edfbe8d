//! Fixed-point rendering of elapsed milliseconds as seconds.
//!
//! Everything is integer arithmetic: whole seconds are `millis / 1000` and the
//! fraction is the three-digit millisecond remainder. Fewer than three digits
//! truncates the remainder (never rounds); more than three pads it with zeros.
//!
//! ```
//! use stampline::render::format_seconds;
//! use stampline::Precision;
//!
//! assert_eq!(format_seconds(1_999, Precision::SECONDS), "1");
//! assert_eq!(format_seconds(1_999, Precision::new(2)), "1.99");
//! assert_eq!(format_seconds(1_999, Precision::MICROSECONDS), "1.999000");
//! ```

use std::fmt::{self, Write};

use stampline_types::MILLIS_PER_SECOND;

use crate::precision::Precision;

/// Digits carried by a millisecond remainder.
const MILLIS_DIGITS: u32 = 3;

const ZEROS: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Elapsed milliseconds displayed as seconds at a given precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seconds {
    pub millis: u64,
    pub precision: Precision,
}

impl Seconds {
    pub fn new(millis: u64, precision: Precision) -> Self {
        Self { millis, precision }
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.millis / MILLIS_PER_SECOND;
        let digits = self.precision.digits();
        if digits == 0 {
            return write!(f, "{}", whole);
        }

        let remainder = self.millis % MILLIS_PER_SECOND;
        if digits < MILLIS_DIGITS {
            let truncated = remainder / 10u64.pow(MILLIS_DIGITS - digits);
            write!(f, "{}.{:0width$}", whole, truncated, width = digits as usize)
        } else {
            write!(f, "{}.{:03}", whole, remainder)?;
            write_zeros(f, (digits - MILLIS_DIGITS) as usize)
        }
    }
}

fn write_zeros(f: &mut fmt::Formatter<'_>, mut count: usize) -> fmt::Result {
    while count > 0 {
        let chunk = count.min(ZEROS.len());
        f.write_str(&ZEROS[..chunk])?;
        count -= chunk;
    }
    Ok(())
}

/// Render `millis` at `precision` into a new string, without a terminator.
pub fn format_seconds(millis: u64, precision: Precision) -> String {
    Seconds::new(millis, precision).to_string()
}

/// Replace the contents of `buf` with one rendered line, terminator included.
pub fn render_line(buf: &mut String, millis: u64, precision: Precision) {
    buf.clear();
    // writing to a String cannot fail
    let _ = write!(buf, "{}", Seconds::new(millis, precision));
    buf.push('\n');
}
