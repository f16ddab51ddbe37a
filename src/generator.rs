//! Stateful UUID generation over a caller-supplied random number generator.

use rand::RngCore;

use crate::{v1, Uuid};

/// Generates v1, v4, and v7 UUIDs from one random source, encapsulating the
/// v7 session id and monotonic counter.
///
/// v7 values produced by one instance sort lexicographically in generation
/// order even within the same millisecond; v1 and v4 draw fresh randomness
/// per call and keep no state. The instance itself is single-threaded; wrap
/// it in a mutex to share the monotonicity scope across threads, as the
/// process-wide entry points do:
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuidkit::UuidGenerator;
///
/// let g = sync::Arc::new(sync::Mutex::new(UuidGenerator::new(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v7(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct UuidGenerator<R> {
    session_id: Option<[u8; 6]>,
    timestamp: u64,
    counter: u16,

    /// The random number generator used by the generator.
    rng: R,
}

const MAX_COUNTER: u16 = (1 << 12) - 1;

impl<R: RngCore> UuidGenerator<R> {
    /// Creates a generator instance.
    ///
    /// The session id is drawn lazily on the first v7 generation and then
    /// stays fixed for the lifetime of the instance.
    pub const fn new(rng: R) -> Self {
        Self {
            session_id: None,
            timestamp: 0,
            counter: 0,
            rng,
        }
    }

    /// Clears the session id, last timestamp, and counter, as if the instance
    /// were freshly created. Intended for tests that need a cold generator.
    pub fn reset(&mut self) {
        self.session_id = None;
        self.timestamp = 0;
        self.counter = 0;
    }

    fn session_id(&mut self) -> [u8; 6] {
        match self.session_id {
            Some(session) => session,
            None => {
                let mut session = [0u8; 6];
                self.rng.fill_bytes(&mut session);
                self.session_id = Some(session);
                session
            }
        }
    }

    /// Generates a new UUIDv7 object from the current system time.
    pub fn generate_v7(&mut self) -> Uuid {
        self.generate_v7_core(now_unix_ms())
    }

    /// Generates a new UUIDv7 object from a given `unix_ts_ms`.
    ///
    /// Within one millisecond the 12-bit counter increments; when it
    /// overflows, the timestamp advances artificially by one millisecond and
    /// the counter restarts. A timestamp smaller than the previous call's is
    /// pinned to the previous one, so output stays monotonic even when the
    /// wall clock moves backward.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit integer.
    pub fn generate_v7_core(&mut self, unix_ts_ms: u64) -> Uuid {
        assert!(
            unix_ts_ms < 1 << 48,
            "`unix_ts_ms` must be a 48-bit integer"
        );

        // pin a regressed clock to the last-seen timestamp
        let mut now = unix_ts_ms.max(self.timestamp);
        if now == self.timestamp {
            if self.counter == MAX_COUNTER {
                // artificial millisecond advance at counter overflow
                now = self.timestamp + 1;
                self.counter = 0;
            } else {
                self.counter += 1;
            }
        } else {
            self.counter = 0;
        }
        self.timestamp = now;

        let session = self.session_id();
        let extra = self.rng.next_u32() as u16;
        Uuid::from_fields_v7(now, self.counter, session, extra)
    }

    /// Generates a new UUIDv4 object from the random source.
    pub fn generate_v4(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes);
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Uuid::from(bytes)
    }

    /// Generates a new UUIDv1 object from the current system time.
    pub fn generate_v1(&mut self) -> Uuid {
        self.generate_v1_core(now_unix_ms())
    }

    /// Generates a new UUIDv1 object from a given `unix_ts_ms`.
    ///
    /// The clock sequence is freshly random on every call and the node id is
    /// six fresh random bytes with the multicast bit forced, so no hardware
    /// address ever leaks; same-millisecond uniqueness rests on the random
    /// node rather than on clock-sequence bookkeeping.
    pub fn generate_v1_core(&mut self, unix_ts_ms: u64) -> Uuid {
        let clock_seq = (self.rng.next_u32() as u16) & 0x3fff;
        let mut node = [0u8; 6];
        self.rng.fill_bytes(&mut node);
        node[0] |= 0x01;
        Uuid::from_fields_v1(v1::ticks_from_unix_ms(unix_ts_ms), clock_seq, node)
    }
}

fn now_unix_ms() -> u64 {
    use std::time;
    time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .expect("clock may have gone backwards")
        .as_millis() as u64
}

/// Supports operations as an infinite iterator that produces a new UUIDv7
/// object for each call of `next()`.
///
/// # Examples
///
/// ```rust
/// use uuidkit::UuidGenerator;
///
/// UuidGenerator::new(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RngCore> Iterator for UuidGenerator<R> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v7())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RngCore> std::iter::FusedIterator for UuidGenerator<R> {}
