//! Certificate domain types.
//!
//! Provides strongly-typed wrappers for the certificate material found in
//! signature containers:
//! - Decoded certificates with their issuer, subject and serial pre-rendered
//! - Serial numbers normalized to their positive integer value
//!
//! Decoding itself is delegated to the ASN.1 adapter; these types only carry
//! the results.

mod cert;
mod serial;

pub use cert::EmbeddedCertificate;
pub use serial::PositiveSerial;
