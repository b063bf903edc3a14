//! PKCS#7 `SignedData` container as handed over by the signing service.
//!
//! Parsing stops at the entry level: certificates and signer infos stay opaque
//! DER until an extractor decodes them one by one, so a single broken entry
//! cannot invalidate the whole container.

use std::fmt;

use der::asn1::ObjectIdentifier;

use crate::adapters::asn1::Asn1Decoder;
use crate::domain::constants::PKCS7_SIGNED_DATA_OID;
use crate::infra::error::{ResolveError, ResolveResult};

/// One undecoded element of a `SET OF` inside `SignedData`.
#[derive(Clone, PartialEq, Eq)]
pub struct RawEntry {
    der: Vec<u8>,
}

impl RawEntry {
    #[must_use]
    pub fn from_der(der: Vec<u8>) -> Self {
        Self { der }
    }
    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl fmt::Debug for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawEntry(len={})", self.der.len())
    }
}

/// Entry lists split out of a `SignedData` body.
#[derive(Debug, Clone, Default)]
pub struct SignedDataEntries {
    pub certificates: Vec<RawEntry>,
    pub signer_infos: Vec<RawEntry>,
}

/// Parsed outer structure of a PKCS#7 signature.
///
/// Invariant: `content_type` is always the `signedData` OID.
#[derive(Clone)]
pub struct SignatureContainer {
    content_type: ObjectIdentifier,
    certificates: Vec<RawEntry>,
    signer_infos: Vec<RawEntry>,
}

impl SignatureContainer {
    /// Parse a DER `ContentInfo` wrapping `SignedData`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the bytes are not a `ContentInfo`, the content
    /// type is not `signedData`, or the `SignedData` body cannot be split into
    /// its certificate and signer info sets.
    pub fn parse<D: Asn1Decoder + ?Sized>(bytes: &[u8], decoder: &D) -> ResolveResult<Self> {
        let content_info = decoder.decode_content_info(bytes)?;

        if content_info.content_type != PKCS7_SIGNED_DATA_OID {
            log::debug!(
                "Rejecting container with content type {}",
                content_info.content_type
            );
            return Err(ResolveError::InvalidFormat(format!(
                "not a pkcs7 signature (content type {})",
                content_info.content_type
            )));
        }

        let entries = decoder.decode_signed_data(&content_info.content)?;
        log::debug!(
            "Parsed SignedData: {} certificate entries, {} signer info entries",
            entries.certificates.len(),
            entries.signer_infos.len()
        );

        Ok(Self {
            content_type: content_info.content_type,
            certificates: entries.certificates,
            signer_infos: entries.signer_infos,
        })
    }

    #[must_use]
    pub fn content_type(&self) -> ObjectIdentifier {
        self.content_type
    }
    #[must_use]
    pub fn certificate_entries(&self) -> &[RawEntry] {
        &self.certificates
    }
    #[must_use]
    pub fn signer_info_entries(&self) -> &[RawEntry] {
        &self.signer_infos
    }
}

impl fmt::Debug for SignatureContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SignatureContainer(certificates={}, signer_infos={})",
            self.certificates.len(),
            self.signer_infos.len()
        )
    }
}
