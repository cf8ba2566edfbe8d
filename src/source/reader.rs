//! Reader-based source.
//!
//! Reads newline-delimited timestamp records from any buffered reader. Each
//! non-blank line is either a JSON object or a bare integer of elapsed
//! milliseconds:
//!
//! ```text
//! {"elapsed_millis": 0, "millis_since_previous": 0}
//! {"elapsed_millis": 1500}
//! 2750
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

use stampline_types::Timestamp;
use tracing::warn;

use super::TimestampSource;
use crate::error::Error;

/// A source that parses timestamp records line by line.
///
/// Lines that cannot be parsed are skipped and remembered in
/// [`last_error`](Self::last_error). A read error ends the sequence.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    description: String,
    line: String,
    line_number: u64,
    previous: Option<Timestamp>,
    last_error: Option<String>,
    finished: bool,
}

impl ReaderSource<BufReader<File>> {
    /// Open a file of timestamp records.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(
            BufReader::new(file),
            &format!("file: {}", path.display()),
        ))
    }
}

impl ReaderSource<StdinLock<'static>> {
    /// Read timestamp records from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), "stdin")
    }
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, description: &str) -> Self {
        Self {
            reader,
            description: description.to_string(),
            line: String::new(),
            line_number: 0,
            previous: None,
            last_error: None,
            finished: false,
        }
    }

    /// Returns a human-readable description of the source.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The most recent parse or read error, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn parse_line(&self, line: &str) -> Result<Timestamp, String> {
        if line.starts_with('{') {
            return serde_json::from_str(line).map_err(|e| format!("Parse error: {}", e));
        }

        let millis: u64 = line
            .parse()
            .map_err(|e| format!("Parse error: {}: {:?}", e, line))?;
        Ok(match &self.previous {
            Some(prev) => Timestamp::following(prev, millis),
            None => Timestamp::from_elapsed(millis),
        })
    }
}

impl<R: BufRead> TimestampSource for ReaderSource<R> {
    fn read(&mut self) -> Option<Timestamp> {
        while !self.finished {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => self.finished = true,
                Ok(_) => {
                    self.line_number += 1;
                    let line = self.line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    match self.parse_line(line) {
                        Ok(ts) => {
                            self.previous = Some(ts);
                            return Some(ts);
                        }
                        Err(e) => {
                            warn!(
                                "{} line {}: skipping record: {}",
                                self.description, self.line_number, e
                            );
                            self.last_error = Some(format!("line {}: {}", self.line_number, e));
                        }
                    }
                }
                Err(e) => {
                    warn!("{}: read failed: {}", self.description, e);
                    self.last_error = Some(format!("Read error: {}", e));
                    self.finished = true;
                }
            }
        }
        None
    }
}
