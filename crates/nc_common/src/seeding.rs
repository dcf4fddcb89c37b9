//! Build-time selection of how the per-thread generators are seeded.
//!
//! The mode is chosen with the cargo features `random-device` (default) and
//! `deterministic`. Exactly one of them has to be enabled, anything else is
//! rejected at compile time.

use std::fmt;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::sync::PoisonError;

use log::{debug, info};
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::NumericError;

#[cfg(not(any(feature = "random-device", feature = "deterministic")))]
compile_error!(
    "nc_common: no seeding mode selected, enable exactly one of the features \
     \"random-device\" or \"deterministic\""
);

#[cfg(all(feature = "random-device", feature = "deterministic"))]
compile_error!(
    "nc_common: features \"random-device\" and \"deterministic\" are mutually \
     exclusive (use --no-default-features --features deterministic)"
);

/// Default seed of the Mersenne twister, reused as the fixed initial state
/// of all generators in deterministic builds.
pub const DEFAULT_SEED: u64 = 5489;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedingMode {
    /// Every thread starts from the same fixed state.
    Deterministic,
    /// Every thread is seeded once from the process-wide entropy device.
    EntropyBacked,
}

#[cfg(feature = "random-device")]
pub const SEEDING_MODE: SeedingMode = SeedingMode::EntropyBacked;

#[cfg(feature = "deterministic")]
pub const SEEDING_MODE: SeedingMode = SeedingMode::Deterministic;

impl fmt::Display for SeedingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeedingMode::Deterministic => "deterministic",
            SeedingMode::EntropyBacked => "random-device",
        };
        write!(f, "{}", s)
    }
}

impl SeedingMode {
    /// A fresh generator in the initial state of this mode.
    ///
    /// For [`SeedingMode::EntropyBacked`] this opens the entropy device on
    /// first use and fails if the operating system cannot provide entropy.
    pub fn generator(self) -> Result<StdRng, NumericError> {
        match self {
            SeedingMode::Deterministic => Ok(StdRng::seed_from_u64(DEFAULT_SEED)),
            SeedingMode::EntropyBacked => entropy_device().map(EntropyDevice::generator),
        }
    }
}

/// The single source of true entropy of this process.
struct EntropyDevice {
    seeder: Mutex<StdRng>,
    process_seed: u64,
}

impl EntropyDevice {
    fn open() -> Result<Self, NumericError> {
        let mut seeder = StdRng::try_from_os_rng()
            .map_err(|e| NumericError::EntropyUnavailable(e.to_string()))?;
        let process_seed = seeder.next_u64();
        info!("Opened entropy device (process seed {:#018x})", process_seed);
        Ok(EntropyDevice {
            seeder: Mutex::new(seeder),
            process_seed,
        })
    }

    /// Locked once per thread lifetime, never per draw.
    fn generator(&self) -> StdRng {
        let mut seeder = self.seeder.lock().unwrap_or_else(PoisonError::into_inner);
        StdRng::from_rng(&mut *seeder)
    }
}

static ENTROPY_DEVICE: OnceLock<Result<EntropyDevice, NumericError>> = OnceLock::new();

fn entropy_device() -> Result<&'static EntropyDevice, NumericError> {
    ENTROPY_DEVICE
        .get_or_init(EntropyDevice::open)
        .as_ref()
        .map_err(Clone::clone)
}

/// Validate the seeding configuration of this build.
///
/// Meant to be the first call of a program: in `random-device` builds the
/// entropy device is opened right away, so an unusable entropy source is
/// reported at startup rather than at the first random draw.
pub fn init() -> Result<SeedingMode, NumericError> {
    if SEEDING_MODE == SeedingMode::EntropyBacked {
        entropy_device()?;
    }
    debug!("Seeding mode: {}", SEEDING_MODE);
    Ok(SEEDING_MODE)
}

/// A process-global seed for numeric libraries that keep their own random
/// state. Drawn once from the entropy device, or [`DEFAULT_SEED`] in
/// deterministic builds.
pub fn process_seed() -> Result<u64, NumericError> {
    match SEEDING_MODE {
        SeedingMode::Deterministic => Ok(DEFAULT_SEED),
        SeedingMode::EntropyBacked => entropy_device().map(|d| d.process_seed),
    }
}
