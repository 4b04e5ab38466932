//! Test utilities for the notes crates
//!
//! A controllable clock, note fixtures and assertions shared by unit tests,
//! the integration suite and the HTTP crate's tests.

pub mod assertions;
pub mod clock;
pub mod fixtures;

pub use assertions::*;
pub use clock::*;
pub use fixtures::*;
