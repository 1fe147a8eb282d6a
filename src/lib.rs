//! UUID version 7 generator with an 18-bit dedicated monotonic counter
//!
//! ```rust
//! let id = uuid7seq::uuid7()?;
//! println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuid7seq::Error>(())
//! ```
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |    counter (17..6)    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|counter (5..0)|                   rand                     |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 18-bit `counter` field accommodates the sequence counter that ensures the
//!   monotonic order of IDs generated within the same millisecond. The counter is
//!   incremented by one for each new ID generated within the same timestamp and is
//!   randomly initialized, with its most significant bit cleared, whenever the
//!   `unix_ts_ms` changes.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 56 `rand` bits are filled with a cryptographically strong random
//!   number.
//!
//! When the counter reaches its maximum value within the same timestamp, this
//! library increments the `unix_ts_ms`; therefore, the `unix_ts_ms` may have a
//! larger value than that of the real-time clock when more than roughly 131 072
//! identifiers are generated per millisecond. When the clock moves backwards, the
//! previous `unix_ts_ms` is reused, no matter how large the rollback is, so that the
//! monotonic order within a generator instance is never broken.
//!
//! The generator state lives only in memory. Ordering is guaranteed per
//! [`V7Generator`] instance (or per process for [`uuid7`]) and does not survive a
//! restart.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

mod id;
pub use id::Identifier;

pub mod layout;
pub use layout::{pack_counter, unpack_counter, MAX_COUNTER, MAX_TIMESTAMP};

pub mod generator;
pub use generator::{RandSource, TimeSource, V7Generator};

#[cfg(feature = "std")]
pub use generator::StdSystemTime;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid7;
