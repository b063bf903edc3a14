//! Infrastructure layer for cross-cutting concerns.
//!
//! Provides foundational infrastructure including:
//! - Error handling and result types
//! - Configuration management and validation
//! - Serde helpers for base64-carried byte fields

pub mod base64;
pub mod config;
pub mod error;
