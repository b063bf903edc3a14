//! `Pkcs1Signature`: signature value plus one directly embedded certificate.
//!
//! The protocol client delivers this shape already split into its two parts, so
//! there is nothing to match: the single certificate is the signer.

use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::adapters::asn1::{Asn1Decoder, DerDecoder};
use crate::domain::crypto::EmbeddedCertificate;
use crate::domain::identity::{common_name, ResolvedSigner};
use crate::infra::error::{ResolveError, ResolveResult};

/// Raw PKCS#1 signature response content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pkcs1Value {
    #[serde(with = "crate::infra::base64")]
    pub signature_value: Vec<u8>,
    #[serde(with = "crate::infra::base64")]
    pub x509_certificate: Vec<u8>,
}

impl Pkcs1Value {
    #[must_use]
    pub fn new(signature_value: Vec<u8>, x509_certificate: Vec<u8>) -> Self {
        Self {
            signature_value,
            x509_certificate,
        }
    }
}

/// A PKCS#1 signature with its signer certificate.
#[derive(Debug, Clone)]
pub struct Pkcs1Signature<D: Asn1Decoder = DerDecoder> {
    value: Pkcs1Value,
    decoder: D,
}

impl Pkcs1Signature<DerDecoder> {
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is absent.
    pub fn new(value: Option<Pkcs1Value>) -> ResolveResult<Self> {
        Self::with_decoder(value, DerDecoder::new())
    }
}

impl<D: Asn1Decoder> Pkcs1Signature<D> {
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is absent.
    pub fn with_decoder(value: Option<Pkcs1Value>, decoder: D) -> ResolveResult<Self> {
        let value = value.ok_or_else(|| {
            ResolveError::InvalidArgument(
                "can't construct a PKCS1 signature from absent input".to_string(),
            )
        })?;
        Ok(Self { value, decoder })
    }

    #[must_use]
    pub fn signature_value(&self) -> &[u8] {
        &self.value.signature_value
    }

    /// Signature value as base64 ASCII.
    #[must_use]
    pub fn signature_value_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.value.signature_value)
    }

    /// Decode the embedded certificate.
    ///
    /// # Errors
    ///
    /// `InvalidCertificate` if the certificate bytes do not decode.
    pub fn signer_certificate(&self) -> ResolveResult<EmbeddedCertificate> {
        let der = &self.value.x509_certificate;
        let x509 = self.decoder.decode_certificate(der)?;
        Ok(EmbeddedCertificate::new(&x509, der.clone()))
    }

    /// Signer certificate together with its Common Name.
    ///
    /// # Errors
    ///
    /// See [`Pkcs1Signature::signer_certificate`].
    pub fn resolve(&self) -> ResolveResult<ResolvedSigner> {
        self.signer_certificate().map(ResolvedSigner::new)
    }

    /// Common Name of the signer, or `None` if it cannot be determined.
    #[must_use]
    pub fn signer_common_name(&self) -> Option<String> {
        match self.signer_certificate() {
            Ok(certificate) => common_name(&certificate),
            Err(e) => {
                log::error!("Failed to get Signer cert {e}");
                None
            }
        }
    }
}
