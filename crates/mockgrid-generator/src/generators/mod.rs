//! Individual value generators for the record payload fields.
//!
//! Each generator is a free function generic over `R: Rng` so callers can
//! pass a seeded RNG for deterministic output or an entropy-seeded one for
//! the default non-reproducible behavior.

pub mod choice;
pub mod identity;
pub mod numeric;
pub mod person;
pub mod temporal;
