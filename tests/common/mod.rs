//! Shared fixtures for integration tests.
//!
//! Reuses the in-crate fixture builders so unit and integration tests agree on
//! what a well-formed signature response looks like.

#[path = "../../src/test_support.rs"]
mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
