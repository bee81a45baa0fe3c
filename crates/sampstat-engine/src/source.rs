use std::fmt;

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    rngs::{StdRng, ThreadRng},
};
use rand_pcg::Pcg32;

/// A provider of uniformly distributed floats in `[0, 1)`.
///
/// The three sources selectable by [`SourceId`] implement this trait and are
/// interchangeable from the caller's side; they differ only in where their
/// state lives.
pub trait UniformSource {
    /// Draws the next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Selects which [`UniformSource`] a sample set is drawn from.
///
/// # Example
///
/// ```
/// use sampstat_engine::SourceId;
///
/// assert_eq!(SourceId::try_from(1_i64).unwrap(), SourceId::ThreadLocal);
/// assert!(SourceId::try_from(3_i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    /// The generator owned by the analyzer (index 0).
    Owned = 0,
    /// The thread-local generator (index 1).
    ThreadLocal = 1,
    /// A generator freshly seeded from OS entropy (index 2).
    Entropy = 2,
}

impl SourceId {
    pub const LEN: usize = 3;
    pub const ALL: [Self; Self::LEN] = [Self::Owned, Self::ThreadLocal, Self::Entropy];

    /// Returns the integer code of this source.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns a short name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Owned => "owned-pcg32",
            Self::ThreadLocal => "thread-local",
            Self::Entropy => "os-entropy",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display(
    "invalid random number generator index: {index}. Valid values are 0 (owned generator), 1 (thread-local generator) and 2 (OS-seeded generator)"
)]
pub struct InvalidSourceError {
    pub index: i64,
}

impl TryFrom<i64> for SourceId {
    type Error = InvalidSourceError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Owned),
            1 => Ok(Self::ThreadLocal),
            2 => Ok(Self::Entropy),
            _ => Err(InvalidSourceError { index }),
        }
    }
}

/// Seed for the analyzer-owned generator.
///
/// Two analyzers built with the same seed draw identical sample sets from
/// [`SourceId::Owned`].
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use sampstat_engine::SourceSeed;
///
/// let seed: SourceSeed = rand::rng().random();
/// let fixed = SourceSeed::from_u128(42);
/// # let _ = (seed, fixed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSeed([u8; 16]);

impl SourceSeed {
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

/// Allows generating random `SourceSeed` values with `rng.random()`.
impl Distribution<SourceSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SourceSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SourceSeed(seed)
    }
}

/// Source 0: a PCG32 generator seeded once and advanced in place.
#[derive(Debug, Clone)]
pub struct OwnedSource {
    rng: Pcg32,
}

impl Default for OwnedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OwnedSource {
    /// Creates a source seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: SourceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.0),
        }
    }
}

impl UniformSource for OwnedSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Source 1: draws from the lazily-initialized thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct ThreadLocalSource {
    rng: ThreadRng,
}

impl ThreadLocalSource {
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl UniformSource for ThreadLocalSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }
}

/// Source 2: a standard generator seeded from the operating system.
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl UniformSource for EntropySource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random()
    }
}
