//! Process-wide generator and entry point functions.

use std::sync;

use crate::{GenerationOptions, SupportedVersion, Uuid};
use inner::GlobalGenInner;

/// Returns the lock handle of the process-wide generator, creating one if
/// none exists.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .expect("uuidkit: could not lock global generator")
}

/// Generates a UUIDv1 object.
///
/// The clock sequence and node id are freshly random per call; the node's
/// multicast bit is set so the value is never mistaken for a hardware MAC
/// address.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid1();
/// println!("{uuid}"); // e.g., "8c4f6d24-1f7a-11ef-94b2-c74d3f29a301"
/// ```
pub fn uuid1() -> Uuid {
    lock_global_gen().get_mut().generate_v1()
}

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn uuid4() -> Uuid {
    lock_global_gen().get_mut().generate_v4()
}

/// Generates a UUIDv7 object.
///
/// This function employs a process-wide generator behind a mutex and
/// guarantees the process-wide monotonic order of UUIDs generated within the
/// same millisecond. On Unix, the generator is rebuilt when the process ID
/// changes (i.e., upon process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidkit::uuid7();
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid7() -> Uuid {
    lock_global_gen().get_mut().generate_v7()
}

/// Generates one UUID of the requested version and applies the formatting
/// options.
///
/// # Examples
///
/// ```rust
/// use uuidkit::{generate, GenerationOptions, SupportedVersion};
///
/// let opts = GenerationOptions {
///     uppercase: true,
///     ..Default::default()
/// };
/// let text = generate(SupportedVersion::V7, &opts);
/// assert_eq!(text.len(), 36);
/// ```
pub fn generate(version: SupportedVersion, options: &GenerationOptions) -> String {
    let uuid = match version {
        SupportedVersion::V1 => uuid1(),
        SupportedVersion::V4 => uuid4(),
        SupportedVersion::V7 => uuid7(),
    };
    options.apply(&uuid.encode())
}

/// Generates `count` UUIDs, each an independent [`generate`] call.
///
/// The only state shared across batch elements is the v7 session/counter
/// state, which is exactly what keeps a batch of v7 values in generation
/// order.
pub fn generate_many(
    version: SupportedVersion,
    count: u32,
    options: &GenerationOptions,
) -> Vec<String> {
    (0..count).map(|_| generate(version, options)).collect()
}

mod inner {
    use rand::rngs::{adapter::ReseedingRng, OsRng};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Core;

    use crate::UuidGenerator;

    /// The random number generator behind the process-wide generator: a
    /// periodically reseeded ChaCha12 stream, emulating the strategy of
    /// [`rand::rngs::ThreadRng`].
    type GlobalRng = ReseedingRng<ChaCha12Core, OsRng>;

    /// A thin wrapper that rebuilds the state when the process ID changes
    /// (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: UuidGenerator<GlobalRng>,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator: UuidGenerator::new(ReseedingRng::new(
                    ChaCha12Core::from_entropy(),
                    1024 * 64,
                    OsRng,
                )),
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner generator, rebuilding the
        /// state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut UuidGenerator<GlobalRng> {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}
