//! UUIDv7 generator and related types.

use tracing::{trace, warn};

use crate::layout::{
    pack_counter, set_version_and_variant, unpack_counter, write_timestamp, MAX_TIMESTAMP,
};
use crate::{Error, Identifier, Result, MAX_COUNTER};

pub mod with_rand08;


/// A trait that defines the random byte source interface for [`V7Generator`].
///
/// Implementations are expected to be cryptographically strong.
pub trait RandSource {
    /// Fills `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the source
    /// cannot synchronously supply `dest.len()` bytes.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// A trait that defines the system clock interface for [`V7Generator`].
///
/// The clock need not be monotonic; the generator tolerates backward jumps.
pub trait TimeSource {
    /// Returns the current Unix time in milliseconds.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads [`std::time::SystemTime`].
///
/// A system clock set before the Unix epoch is reported as `0`, which the generator handles like
/// any other backward jump.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        use std::time;
        match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_millis() as u64,
            Err(err) => {
                warn!(
                    behind_ms = err.duration().as_millis() as u64,
                    "system clock is set before the Unix epoch"
                );
                0
            }
        }
    }
}

/// Default lead of the logical timestamp over the clock beyond which counter overflows are
/// reported at `warn` level.
pub const DEFAULT_DRIFT_WARNING: u64 = 10_000;

/// Represents a UUIDv7 generator that encapsulates an 18-bit counter and guarantees the monotonic
/// order of identifiers generated by the same instance.
///
/// The generator state consists of the timestamp of the last identifier and the dedicated
/// counter. Whenever the clock moves forward, the counter is reseeded from the random source with
/// its most significant bit cleared. Otherwise the counter is incremented, and when it overflows
/// the stored timestamp is advanced by one millisecond regardless of the clock. Clock readings
/// smaller than the stored timestamp are never encoded.
///
/// A generator takes `&mut self` and is meant to be owned by a single thread. Wrap it in a mutex
/// to share it; the whole call to [`generate`](V7Generator::generate) is then the critical
/// section.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuid7seq::V7Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V7Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let id = g.lock().unwrap().generate().unwrap();
///                 println!("{:?} by thread {}", id.as_bytes(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct V7Generator<R, T> {
    timestamp: u64,
    counter: u32,
    drift_warning: u64,

    /// The random number generator used by the generator.
    rng: R,

    /// The system clock used by the generator.
    time: T,
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rng: R, time: T) -> Self {
        Self::from_state(0, 0, rng, time)
    }

    /// Creates a generator object that resumes from the given timestamp and counter.
    ///
    /// Counter bits above the 18-bit range are discarded and the timestamp is capped at the largest
    /// 48-bit value.
    pub const fn from_state(timestamp: u64, counter: u32, rng: R, time: T) -> Self {
        Self {
            timestamp: if timestamp < MAX_TIMESTAMP {
                timestamp
            } else {
                MAX_TIMESTAMP
            },
            counter: counter & MAX_COUNTER,
            drift_warning: DEFAULT_DRIFT_WARNING,
            rng,
            time,
        }
    }

    /// Sets the lead (in milliseconds) of the logical timestamp over the clock beyond which a
    /// counter overflow is logged as a warning.
    pub const fn with_drift_warning(mut self, drift_warning: u64) -> Self {
        self.drift_warning = drift_warning;
        self
    }

    /// Returns the timestamp of the last generated identifier and the current counter value.
    pub const fn state(&self) -> (u64, u32) {
        (self.timestamp, self.counter)
    }

    /// Generates a new identifier from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the random
    /// source fails, or [`Error::TimestampExhausted`](crate::Error::TimestampExhausted) if the
    /// counter overflows at the largest 48-bit timestamp. Either leaves the generator state
    /// untouched.
    pub fn generate(&mut self) -> Result<Identifier> {
        let unix_ts_ms = self.time.unix_ts_ms();
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new identifier from the `unix_ts_ms` passed.
    ///
    /// Readings above the largest 48-bit value are treated as that value, so they never advance
    /// the timestamp past the encodable range.
    ///
    /// # Errors
    ///
    /// Same as [`generate`](V7Generator::generate).
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Result<Identifier> {
        let unix_ts_ms = unix_ts_ms.min(MAX_TIMESTAMP);
        let mut bytes = [0u8; 16];

        let timestamp = if unix_ts_ms > self.timestamp {
            self.fill_random(&mut bytes[6..])?;

            // leftmost counter bit starts at zero to leave room before rollover
            bytes[6] &= 0xf7;

            self.counter = unpack_counter(bytes[6], bytes[7], bytes[8]);
            self.timestamp = unix_ts_ms;
            unix_ts_ms
        } else {
            let (timestamp, counter) = if self.counter < MAX_COUNTER {
                (self.timestamp, self.counter + 1)
            } else if self.timestamp < MAX_TIMESTAMP {
                // increment timestamp at counter overflow
                (self.timestamp + 1, 0)
            } else {
                warn!(timestamp = self.timestamp, "counter overflow at largest timestamp");
                return Err(Error::TimestampExhausted);
            };

            self.fill_random(&mut bytes[9..])?;

            if counter == 0 {
                self.report_overflow(timestamp, unix_ts_ms);
            }
            self.timestamp = timestamp;
            self.counter = counter;

            (bytes[6], bytes[7], bytes[8]) = pack_counter(counter);
            timestamp
        };

        write_timestamp(&mut bytes, timestamp);
        set_version_and_variant(&mut bytes);
        Ok(Identifier::from(bytes))
    }

    fn fill_random(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng
            .try_fill(dest)
            .inspect_err(|err| warn!(requested = dest.len(), %err, "random source failed"))
    }

    /// Returns the lead of `timestamp` over `unix_ts_ms` if it exceeds the drift warning threshold.
    fn excessive_drift(&self, timestamp: u64, unix_ts_ms: u64) -> Option<u64> {
        let lead = timestamp.saturating_sub(unix_ts_ms);
        (lead > self.drift_warning).then_some(lead)
    }

    fn report_overflow(&self, timestamp: u64, unix_ts_ms: u64) {
        if let Some(lead) = self.excessive_drift(timestamp, unix_ts_ms) {
            warn!(
                timestamp,
                unix_ts_ms, lead, "counter overflow pushed timestamp ahead of clock"
            );
        } else {
            trace!(timestamp, unix_ts_ms, "counter overflow advanced timestamp");
        }
    }
}

impl<R: RandSource + Default, T: TimeSource + Default> Default for V7Generator<R, T> {
    fn default() -> Self {
        Self::with_rand_and_time_sources(R::default(), T::default())
    }
}

/// Supports operations as an infinite iterator that produces a new identifier for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid7seq::V7Generator;
///
/// V7Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {:?}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V7Generator<R, T> {
    type Item = Result<Identifier>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> core::iter::FusedIterator for V7Generator<R, T> {}
