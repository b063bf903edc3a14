//! Signer Resolver Library
//!
//! Identifies who signed a mobile signature response. Given a PKCS#7
//! `SignedData` container it locates the embedded certificate referenced by the
//! single signer info (issuer DN + serial number) and derives the signer's
//! Common Name. PKCS#1 responses, which carry their certificate directly, share
//! the identity step.
//!
//! Only signer identification is performed; signature values and certificate
//! chains are not verified.

pub mod adapters;
pub mod domain;
pub mod infra;
pub mod pipelines;
pub mod services;

#[cfg(test)]
mod test_support;

pub use adapters::asn1::{Asn1Decoder, DerDecoder};
pub use domain::crypto::{EmbeddedCertificate, PositiveSerial};
pub use domain::dn::{canonical_equals, DistinguishedName, DnParseError, Rdn};
pub use domain::identity::{common_name, ResolvedSigner, SignerSummary};
pub use domain::pkcs7::{
    read_issuer, read_serial, RawEntry, SignatureContainer, SignerDescriptor, SignerReference,
};
pub use infra::config;
pub use infra::error::{self, ResolveError, ResolveResult};
pub use pipelines::{Pkcs1Signature, Pkcs1Value, Pkcs7Signature};
pub use services::{
    extract_certificates, extract_signer_descriptors, match_all, resolve_container,
    resolve_signer_certificates, Extraction, SignerMatch, SkippedEntry,
};
