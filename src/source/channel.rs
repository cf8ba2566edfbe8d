//! Channel-based source.
//!
//! Receives timestamp records pushed by a producer, typically running on
//! another thread or inside an async runtime. Reads block until a record
//! arrives; the sequence ends once every sender has been dropped.

use stampline_types::Timestamp;
use tokio::sync::mpsc;

use super::TimestampSource;

/// A source fed through a tokio mpsc channel.
///
/// Reading uses [`mpsc::Receiver::blocking_recv`], so this source must not be
/// read from an async runtime worker thread.
///
/// # Example
///
/// ```
/// use stampline::{ChannelSource, Timestamp, TimestampSource};
///
/// let (tx, mut source) = ChannelSource::create(16);
/// std::thread::spawn(move || {
///     tx.blocking_send(Timestamp::from_elapsed(1_000)).ok();
/// });
///
/// assert_eq!(source.read(), Some(Timestamp::from_elapsed(1_000)));
/// assert_eq!(source.read(), None);
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::Receiver<Timestamp>,
}

impl ChannelSource {
    pub fn new(receiver: mpsc::Receiver<Timestamp>) -> Self {
        Self { receiver }
    }

    /// Create a channel pair with room for `buffer` pending records.
    ///
    /// Returns (sender, source); drop every sender to end the sequence.
    pub fn create(buffer: usize) -> (mpsc::Sender<Timestamp>, Self) {
        let (tx, rx) = mpsc::channel(buffer);
        (tx, Self::new(rx))
    }
}

impl TimestampSource for ChannelSource {
    fn read(&mut self) -> Option<Timestamp> {
        self.receiver.blocking_recv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_channel_source_reads_until_senders_dropped() {
        let (tx, mut source) = ChannelSource::create(2);

        let producer = thread::spawn(move || {
            for ms in [0, 1, 10, 100, 1_000] {
                tx.blocking_send(Timestamp::from_elapsed(ms)).unwrap();
            }
        });

        let received: Vec<u64> = std::iter::from_fn(|| source.read())
            .map(|ts| ts.elapsed_millis())
            .collect();
        producer.join().unwrap();

        assert_eq!(received, vec![0, 1, 10, 100, 1_000]);
    }

    #[test]
    fn test_channel_source_already_closed() {
        let (tx, mut source) = ChannelSource::create(1);
        drop(tx);
        assert!(source.read().is_none());
    }

    #[test]
    fn test_buffered_records_survive_sender_drop() {
        let (tx, mut source) = ChannelSource::create(4);
        tx.try_send(Timestamp::from_elapsed(5)).unwrap();
        drop(tx);
        assert_eq!(source.read(), Some(Timestamp::from_elapsed(5)));
        assert!(source.read().is_none());
    }
}
