//! Integration test crate for SubCue Studio.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on subcue-core and subcue-pts to verify they work
//! together the way the command layer uses them.


#[cfg(test)]
mod snapshot;
