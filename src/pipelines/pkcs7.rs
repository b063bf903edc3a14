//! `Pkcs7Signature`: high-level facade over a PKCS#7 signature response.
//!
//! Two gates guard resolution. Construction checks the container shape (one
//! signer info, signedData content) and fails fast. Matching the signer against
//! the embedded certificates only happens when a certificate or identity is
//! requested.

use std::slice;

use base64::prelude::*;

use crate::adapters::asn1::{Asn1Decoder, DerDecoder};
use crate::domain::crypto::EmbeddedCertificate;
use crate::domain::identity::{common_name, ResolvedSigner};
use crate::domain::pkcs7::{SignatureContainer, SignerDescriptor};
use crate::infra::error::{ResolveError, ResolveResult};
use crate::services::extraction::{extract_certificates, extract_signer_descriptors};
use crate::services::resolver::{expect_single_signer, resolve_signer_certificates};

/// A single-signer PKCS#7 `SignedData` signature.
#[derive(Debug, Clone)]
pub struct Pkcs7Signature<D: Asn1Decoder = DerDecoder> {
    container: SignatureContainer,
    signer: SignerDescriptor,
    decoder: D,
}

impl Pkcs7Signature<DerDecoder> {
    /// Parse a DER `ContentInfo` as returned in a signature response.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `bytes` is empty
    /// - `InvalidFormat` if the bytes are not a PKCS#7 signedData container
    /// - `UnsupportedFormat` unless exactly one signer info decodes
    pub fn new(bytes: &[u8]) -> ResolveResult<Self> {
        Self::with_decoder(bytes, DerDecoder::new())
    }
}

impl<D: Asn1Decoder> Pkcs7Signature<D> {
    /// Same as [`Pkcs7Signature::new`] with a caller-supplied decoder.
    ///
    /// # Errors
    ///
    /// See [`Pkcs7Signature::new`].
    pub fn with_decoder(bytes: &[u8], decoder: D) -> ResolveResult<Self> {
        if bytes.is_empty() {
            return Err(ResolveError::InvalidArgument(
                "can't construct a PKCS7 SignedData element from empty input".to_string(),
            ));
        }

        let container = SignatureContainer::parse(bytes, &decoder)?;
        let mut descriptors =
            extract_signer_descriptors(container.signer_info_entries(), &decoder).into_items();

        if descriptors.len() != 1 {
            return Err(ResolveError::UnsupportedFormat(format!(
                "this only works with exactly one SignerInfo, found {}",
                descriptors.len()
            )));
        }
        let signer = descriptors.remove(0);
        log::debug!("Accepted PKCS#7 container with signer {signer:?}");

        Ok(Self {
            container,
            signer,
            decoder,
        })
    }

    #[must_use]
    pub fn container(&self) -> &SignatureContainer {
        &self.container
    }

    #[must_use]
    pub fn signer_descriptor(&self) -> &SignerDescriptor {
        &self.signer
    }

    /// The signer's signature value, base64 encoded.
    #[must_use]
    pub fn signature_value_base64(&self) -> String {
        BASE64_STANDARD.encode(self.signer.signature_value())
    }

    /// All embedded certificates matching the signer descriptor.
    ///
    /// # Errors
    ///
    /// `MissingCertificate` if no certificate entry decodes.
    pub fn signer_certificates(&self) -> ResolveResult<Vec<EmbeddedCertificate>> {
        let certificates = extract_certificates(self.container.certificate_entries(), &self.decoder);
        resolve_signer_certificates(slice::from_ref(&self.signer), &certificates.items)
    }

    /// The certificate that produced the signature.
    ///
    /// # Errors
    ///
    /// - `MissingCertificate` if no certificate entry decodes
    /// - `SignerNotFound` if no certificate matches the signer
    /// - `AmbiguousSigner` if more than one does
    pub fn signer_certificate(&self) -> ResolveResult<EmbeddedCertificate> {
        expect_single_signer(self.signer_certificates()?)
    }

    /// Signer certificate together with its Common Name.
    ///
    /// # Errors
    ///
    /// See [`Pkcs7Signature::signer_certificate`].
    pub fn resolve(&self) -> ResolveResult<ResolvedSigner> {
        self.signer_certificate().map(ResolvedSigner::new)
    }

    /// Common Name of the signer, or `None` if it cannot be determined.
    #[must_use]
    pub fn signer_common_name(&self) -> Option<String> {
        match self.signer_certificate() {
            Ok(certificate) => common_name(&certificate),
            Err(e) => {
                log::error!("Failed to get signer CN: {e}");
                None
            }
        }
    }
}
