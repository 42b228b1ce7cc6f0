//! Integration test crate for cmcrameri.
//!
//! This crate exists solely to hold cross-crate integration tests run
//! against a synthetic copy of the full shipped data set.


#[cfg(test)]
mod catalog;

#[cfg(test)]
mod global;
