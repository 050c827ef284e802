//! eventdb-rs
//! ==========
//!
//! Umbrella crate for the workspace. Re-exports [`eventdb_core`] so demos and
//! downstream users can depend on a single crate.

pub use eventdb_core::*;
