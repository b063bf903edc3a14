//! Service layer module root.
//! Stateless extraction, matching and resolution steps over parsed containers.

pub mod extraction;
pub mod matcher;
pub mod resolver;

pub use extraction::{extract_certificates, extract_signer_descriptors, Extraction, SkippedEntry};
pub use matcher::{is_match, match_all, SignerMatch};
pub use resolver::{expect_single_signer, resolve_container, resolve_signer_certificates};
