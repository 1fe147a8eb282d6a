//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V7Generator};
use crate::Result;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// Bytes are drawn through [`RngCore::try_fill_bytes`], so a failing source such as an
/// unavailable [`OsRng`](rand::rngs::OsRng) surfaces as
/// [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) instead of a panic.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.try_fill_bytes(dest).map_err(Into::into)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> V7Generator<Adapter<T>, super::StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate and the system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid7seq::V7Generator;
    ///
    /// let mut g = V7Generator::with_rand08(rand::rngs::OsRng);
    /// let id = g.generate()?;
    /// assert_eq!(id.version(), 7);
    /// # Ok::<(), uuid7seq::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_and_time_sources(Adapter(rng), super::StdSystemTime)
    }
}
