//! # nacore
//!
//! Unified API for the numeric core: random sources, salt corrections and
//! reference data.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod salt_parsers;
pub mod logging;

pub mod common {
    pub use ::nc_common::*;
}
