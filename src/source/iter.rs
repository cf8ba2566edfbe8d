//! Iterator-backed source.

use stampline_types::Timestamp;

use super::TimestampSource;

/// A source that yields the records of an iterator.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    inner: I,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = Timestamp>,
{
    pub fn new<T>(records: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: records.into_iter(),
        }
    }

    /// Consume the source and return the remaining records.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl IterSource<std::vec::IntoIter<Timestamp>> {
    /// Build records from elapsed milliseconds, filling in the gap to the
    /// preceding value.
    pub fn from_millis<T>(millis: T) -> Self
    where
        T: IntoIterator<Item = u64>,
    {
        let mut previous: Option<Timestamp> = None;
        let records: Vec<Timestamp> = millis
            .into_iter()
            .map(|ms| {
                let ts = match &previous {
                    Some(prev) => Timestamp::following(prev, ms),
                    None => Timestamp::from_elapsed(ms),
                };
                previous = Some(ts);
                ts
            })
            .collect();
        Self::new(records)
    }
}

impl From<Vec<Timestamp>> for IterSource<std::vec::IntoIter<Timestamp>> {
    fn from(records: Vec<Timestamp>) -> Self {
        Self::new(records)
    }
}

impl<I> TimestampSource for IterSource<I>
where
    I: Iterator<Item = Timestamp>,
{
    fn read(&mut self) -> Option<Timestamp> {
        self.inner.next()
    }
}
