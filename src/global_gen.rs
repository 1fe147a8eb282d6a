//! Default generator and entry point function.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::sync;

use crate::{Identifier, Result};
use inner::GlobalGenInner;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// A poisoned lock is recovered because the generator commits its state only after a call
/// succeeds.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates an identifier from the process-wide global generator.
///
/// The whole generation runs under one lock, so identifiers are strictly increasing across all
/// threads of the process. On Unix, the generator is recreated when the process ID changes (i.e.,
/// upon process forks) so that parent and child do not share counter state.
///
/// # Errors
///
/// Returns [`Error::EntropyUnavailable`](crate::Error::EntropyUnavailable) if the operating
/// system random source cannot be read.
///
/// # Examples
///
/// ```rust
/// let id = uuid7seq::uuid7()?;
/// println!("{:?}", id.as_bytes()); // as 16-byte big-endian array
/// assert_eq!(id.version(), 7);
/// # Ok::<(), uuid7seq::Error>(())
/// ```
pub fn uuid7() -> Result<Identifier> {
    lock_global_gen().get_mut()?.generate()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::generator::{with_rand08::Adapter, StdSystemTime, V7Generator};
    use crate::Result;

    /// The random number generator of the global generator.
    ///
    /// [`ChaCha12Core`] with [`ReseedingRng`] wrapper emulates the strategy used by
    /// [`rand::rngs::ThreadRng`].
    type GlobalGenRng = Adapter<ReseedingRng<ChaCha12Core, OsRng>>;

    type GlobalGen = V7Generator<GlobalGenRng, StdSystemTime>;

    /// A thin wrapper that creates the generator lazily and resets it when the process ID
    /// changes (i.e., upon Unix forks).
    #[derive(Debug, Default)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: Option<GlobalGen>,
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`V7Generator`] instance, seeding a fresh one
        /// on first use and, on Unix, whenever the process ID has changed.
        pub fn get_mut(&mut self) -> Result<&mut GlobalGen> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                self.pid = std::process::id();
                self.generator = None;
            }

            match &mut self.generator {
                Some(generator) => Ok(generator),
                slot => {
                    let core = ChaCha12Core::from_rng(OsRng)?;
                    let rng = ReseedingRng::new(core, 1024 * 64, OsRng);
                    tracing::debug!("seeded global generator");
                    Ok(slot.insert(V7Generator::with_rand08(rng)))
                }
            }
        }
    }
}
