//! Streaming timestamp output.
//!
//! [`TimestampsOutput`] resolves the precision once, then pulls records from a
//! [`TimestampSource`] until it is exhausted, writing one line per record:
//!
//! ```text
//! precision=2          precision=seconds
//! 0.00                 0
//! 0.01                 0
//! 1.00                 1
//! 10.00                10
//! ```
//!
//! Each line, terminator included, goes to the sink in a single `write_all`
//! as soon as it is rendered. The sink is never flushed or closed here, and a
//! sink error stops the loop and is returned as-is.

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::precision::Precision;
use crate::render::render_line;
use crate::source::TimestampSource;

/// Writes timestamp records as decimal seconds.
///
/// # Example
///
/// ```
/// use stampline::{IterSource, TimestampsOutput};
///
/// let mut source = IterSource::from_millis([0, 1, 10, 100, 1_000, 10_000]);
/// let mut sink = Vec::new();
///
/// TimestampsOutput::new()
///     .write(&mut source, &mut sink, Some("precision=2"))
///     .unwrap();
///
/// assert_eq!(sink, b"0.00\n0.00\n0.01\n0.10\n1.00\n10.00\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimestampsOutput {
    max_precision: Option<u32>,
}

impl TimestampsOutput {
    /// A formatter that honors whatever precision the query resolves to.
    pub const fn new() -> Self {
        Self {
            max_precision: None,
        }
    }

    /// A formatter that caps resolved precision at `max` digits.
    ///
    /// Without a cap a query like `precision=2000000000` renders lines of
    /// gigabytes each; see [`Precision::clamp`].
    pub const fn with_max_precision(max: u32) -> Self {
        Self {
            max_precision: Some(max),
        }
    }

    pub const fn max_precision(&self) -> Option<u32> {
        self.max_precision
    }

    /// Resolve the precision for `query`, applying the cap if one is set.
    pub fn precision(&self, query: Option<&str>) -> Precision {
        let precision = Precision::resolve(query);
        match self.max_precision {
            Some(max) if precision.digits() > max => {
                debug!("capping precision {} at {}", precision, max);
                precision.clamp(max)
            }
            _ => precision,
        }
    }

    /// Write every remaining record of `source` to `sink`.
    ///
    /// `query` is a raw query string such as `precision=6`; `None` is the same
    /// as an empty string.
    pub fn write<S, W>(&self, source: &mut S, sink: &mut W, query: Option<&str>) -> io::Result<()>
    where
        S: TimestampSource + ?Sized,
        W: Write + ?Sized,
    {
        self.write_with_precision(source, sink, self.precision(query))
    }

    /// Write every remaining record of `source` to `sink` at a fixed precision.
    pub fn write_with_precision<S, W>(
        &self,
        source: &mut S,
        sink: &mut W,
        precision: Precision,
    ) -> io::Result<()>
    where
        S: TimestampSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut line = String::new();
        let mut written: u64 = 0;

        while let Some(ts) = source.read() {
            render_line(&mut line, ts.elapsed_millis(), precision);
            if let Err(e) = sink.write_all(line.as_bytes()) {
                warn!("write failed after {} lines: {}", written, e);
                return Err(e);
            }
            written += 1;
        }

        debug!("wrote {} timestamps at precision {}", written, precision);
        Ok(())
    }
}

/// Write every remaining record of `source` to `sink` with the default formatter.
///
/// Shorthand for [`TimestampsOutput::new().write(..)`](TimestampsOutput::write).
pub fn write<S, W>(source: &mut S, sink: &mut W, query: Option<&str>) -> io::Result<()>
where
    S: TimestampSource + ?Sized,
    W: Write + ?Sized,
{
    TimestampsOutput::new().write(source, sink, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::IterSource;
    use stampline_types::Timestamp;

    const MILLIS: [u64; 6] = [0, 1, 10, 100, 1_000, 10_000];

    const THREE_DIGITS: &str = "0.000\n0.001\n0.010\n0.100\n1.000\n10.000\n";
    const WHOLE_SECONDS: &str = "0\n0\n0\n0\n1\n10\n";
    const SIX_DIGITS: &str = "0.000000\n0.001000\n0.010000\n0.100000\n1.000000\n10.000000\n";
    const NINE_DIGITS: &str = "0.000000000\n0.001000000\n0.010000000\n0.100000000\n1.000000000\n10.000000000\n";

    /// Sink that records every `write` call separately.
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<String>,
        fail_on: Option<usize>,
    }

    impl RecordingSink {
        fn failing_on(call: usize) -> Self {
            Self {
                writes: Vec::new(),
                fail_on: Some(call),
            }
        }

        fn written(&self) -> String {
            self.writes.concat()
        }
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_on == Some(self.writes.len() + 1) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes.push(String::from_utf8(buf.to_vec()).unwrap());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Source that counts how many times it was read.
    struct CountingSource {
        inner: IterSource<std::vec::IntoIter<Timestamp>>,
        reads: usize,
    }

    impl TimestampSource for CountingSource {
        fn read(&mut self) -> Option<Timestamp> {
            self.reads += 1;
            self.inner.read()
        }
    }

    fn output_for(query: Option<&str>) -> String {
        let mut source = IterSource::from_millis(MILLIS);
        let mut sink = Vec::new();
        write(&mut source, &mut sink, query).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_write_empty_query_string() {
        assert_eq!(output_for(Some("")), THREE_DIGITS);
    }

    #[test]
    fn test_write_absent_query_string() {
        assert_eq!(output_for(None), THREE_DIGITS);
    }

    #[test]
    fn test_write_unrelated_parameters() {
        assert_eq!(output_for(Some("format=text&lines=all")), THREE_DIGITS);
    }

    #[test]
    fn test_write_zero_precision() {
        assert_eq!(output_for(Some("precision=0")), WHOLE_SECONDS);
    }

    #[test]
    fn test_write_first_precision_wins() {
        assert_eq!(output_for(Some("precision=0&precision=1")), WHOLE_SECONDS);
    }

    #[test]
    fn test_write_seconds_precision() {
        assert_eq!(output_for(Some("precision=seconds")), WHOLE_SECONDS);
    }

    #[test]
    fn test_write_one_precision() {
        assert_eq!(
            output_for(Some("precision=1")),
            "0.0\n0.0\n0.0\n0.1\n1.0\n10.0\n"
        );
    }

    #[test]
    fn test_write_two_precision() {
        assert_eq!(
            output_for(Some("precision=2")),
            "0.00\n0.00\n0.01\n0.10\n1.00\n10.00\n"
        );
    }

    #[test]
    fn test_write_three_and_milliseconds_precision() {
        assert_eq!(output_for(Some("precision=3")), THREE_DIGITS);
        assert_eq!(output_for(Some("precision=milliseconds")), THREE_DIGITS);
    }

    #[test]
    fn test_write_six_and_microseconds_precision() {
        assert_eq!(output_for(Some("precision=6")), SIX_DIGITS);
        assert_eq!(output_for(Some("precision=microseconds")), SIX_DIGITS);
    }

    #[test]
    fn test_write_nine_and_nanoseconds_precision() {
        assert_eq!(output_for(Some("precision=9")), NINE_DIGITS);
        assert_eq!(output_for(Some("precision=nanoseconds")), NINE_DIGITS);
    }

    #[test]
    fn test_write_invalid_precision_uses_default() {
        assert_eq!(output_for(Some("precision=")), THREE_DIGITS);
        assert_eq!(output_for(Some("precision=-1")), THREE_DIGITS);
        assert_eq!(output_for(Some("precision=invalid")), THREE_DIGITS);
    }

    #[test]
    fn test_write_no_timestamps() {
        for query in [None, Some(""), Some("precision=9")] {
            let mut source = IterSource::from_millis(Vec::new());
            let mut sink = RecordingSink::default();
            write(&mut source, &mut sink, query).unwrap();
            assert!(sink.writes.is_empty());
        }
    }

    #[test]
    fn test_one_sink_write_per_line() {
        let mut source = IterSource::from_millis(MILLIS);
        let mut sink = RecordingSink::default();
        write(&mut source, &mut sink, Some("precision=1")).unwrap();

        assert_eq!(
            sink.writes,
            vec!["0.0\n", "0.0\n", "0.0\n", "0.1\n", "1.0\n", "10.0\n"]
        );
    }

    #[test]
    fn test_sink_failure_stops_immediately() {
        let mut source = CountingSource {
            inner: IterSource::from_millis(MILLIS),
            reads: 0,
        };
        let mut sink = RecordingSink::failing_on(3);

        let err = write(&mut source, &mut sink, Some("precision=0")).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(err.to_string(), "sink closed");
        assert_eq!(sink.written(), "0\n0\n");
        assert_eq!(source.reads, 3);
    }

    #[test]
    fn test_source_position_owned_by_caller() {
        let mut source = IterSource::from_millis(MILLIS);
        source.read();
        source.read();

        let mut sink = Vec::new();
        write(&mut source, &mut sink, Some("precision=1")).unwrap();
        assert_eq!(sink, b"0.0\n0.1\n1.0\n10.0\n");

        // exhausted source writes nothing on a second call
        let mut again = Vec::new();
        write(&mut source, &mut again, None).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_uncapped_large_precision() {
        let mut source = IterSource::from_millis([1_500]);
        let mut sink = Vec::new();
        write(&mut source, &mut sink, Some("precision=12")).unwrap();
        assert_eq!(sink, b"1.500000000000\n");
    }

    #[test]
    fn test_max_precision_caps_resolved_value() {
        let output = TimestampsOutput::with_max_precision(9);
        assert_eq!(output.precision(Some("precision=42")), Precision::NANOSECONDS);
        assert_eq!(output.precision(Some("precision=2")).digits(), 2);
        assert_eq!(output.precision(None), Precision::DEFAULT);

        let mut source = IterSource::from_millis([1_500]);
        let mut sink = Vec::new();
        output.write(&mut source, &mut sink, Some("precision=42")).unwrap();
        assert_eq!(sink, b"1.500000000\n");
    }

    #[test]
    fn test_write_with_precision() {
        let mut source = IterSource::from_millis([999, 1_000]);
        let mut sink = Vec::new();
        TimestampsOutput::new()
            .write_with_precision(&mut source, &mut sink, Precision::SECONDS)
            .unwrap();
        assert_eq!(sink, b"0\n1\n");
    }

    #[test]
    fn test_dyn_source_and_sink() {
        let mut source: Box<dyn TimestampSource> = Box::new(IterSource::from_millis([250]));
        let mut buf = Vec::new();
        {
            let sink: &mut dyn Write = &mut buf;
            write(source.as_mut(), sink, Some("precision=2")).unwrap();
        }
        assert_eq!(buf, b"0.25\n");
    }
}
