//! # nc_common
//!
//! Process-wide numeric infrastructure of nacore:
//!  - per-thread random generators, seeded according to the build,
//!  - salt and solvent corrections for free energy evaluation,
//!  - a fixed reference sequence for tests and benchmarks.
//!

/// Per-thread state for development and serialization code.
pub mod context;

/// NumericError.
mod error;

/// Build-time seeding mode and the entropy device.
mod seeding;

/// The thread-local generator.
mod random;

/// Water molarity, salt corrections & temperature constants.
mod thermo;

mod reference;

pub use error::*;
pub use seeding::*;
pub use random::*;
pub use thermo::*;
pub use reference::*;
