//! Forgiving per-entry extraction of certificates and signer descriptors.
//!
//! A container may carry intermediate or otherwise irrelevant entries that the
//! decoder cannot handle. Those are dropped and reported in
//! [`Extraction::skipped`] instead of failing the whole container; whether what
//! remains is enough is decided later by the resolver.

use crate::adapters::asn1::Asn1Decoder;
use crate::domain::crypto::EmbeddedCertificate;
use crate::domain::pkcs7::{RawEntry, SignerDescriptor};
use crate::infra::error::ResolveResult;

/// An entry that failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position of the entry inside its `SET OF`.
    pub index: usize,
    pub reason: String,
}

/// Successfully decoded items plus diagnostics for the ones dropped.
#[derive(Debug, Clone)]
pub struct Extraction<T> {
    pub items: Vec<T>,
    pub skipped: Vec<SkippedEntry>,
}

impl<T> Extraction<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

fn extract_each<T>(
    entries: &[RawEntry],
    kind: &str,
    mut decode: impl FnMut(&RawEntry) -> ResolveResult<T>,
) -> Extraction<T> {
    let mut items = Vec::with_capacity(entries.len());
    let mut skipped = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match decode(entry) {
            Ok(item) => items.push(item),
            Err(e) => {
                log::debug!("Failed to read {kind} entry #{index}: {e}");
                skipped.push(SkippedEntry {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    Extraction { items, skipped }
}

/// Decode every certificate entry, dropping the ones that fail.
pub fn extract_certificates<D: Asn1Decoder + ?Sized>(
    entries: &[RawEntry],
    decoder: &D,
) -> Extraction<EmbeddedCertificate> {
    log::debug!("Read all certs");
    extract_each(entries, "certificate", |entry| {
        let x509 = decoder.decode_certificate(entry.as_der())?;
        Ok(EmbeddedCertificate::new(&x509, entry.as_der().to_vec()))
    })
}

/// Decode every signer info entry, dropping the ones that fail.
pub fn extract_signer_descriptors<D: Asn1Decoder + ?Sized>(
    entries: &[RawEntry],
    decoder: &D,
) -> Extraction<SignerDescriptor> {
    log::debug!("Read SignerInfo");
    extract_each(entries, "SignerInfo", |entry| {
        let info = decoder.decode_signer_info(entry.as_der())?;
        Ok(SignerDescriptor::from_signer_info(&info))
    })
}
