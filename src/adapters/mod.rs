//! Adapter layer modules for external system integration.
//!
//! Provides adapters for:
//! - ASN.1/DER decoding of PKCS#7 containers, signer infos and X.509 certificates

pub mod asn1;
