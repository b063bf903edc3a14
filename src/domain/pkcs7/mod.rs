//! PKCS#7 `SignedData` domain types.
//! The container keeps its entries as raw DER; descriptors are the decoded
//! signer infos used as certificate lookup keys.

pub mod container;
pub mod signer;

pub use container::{RawEntry, SignatureContainer, SignedDataEntries};
pub use signer::{read_issuer, read_serial, SignerDescriptor, SignerReference};
