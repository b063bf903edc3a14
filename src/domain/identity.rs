//! Signer identity derived from a resolved certificate.
//!
//! Identity is informational: any problem reading the subject degrades to an
//! absent common name instead of an error.

use serde::Serialize;

use crate::domain::constants::DN_COMMON_NAME;
use crate::domain::crypto::EmbeddedCertificate;
use crate::domain::dn::DistinguishedName;

/// Common Name of the certificate subject, if it has one.
///
/// Returns the first `CN` attribute in DN string order; the attribute type is
/// matched exactly.
#[must_use]
pub fn common_name(certificate: &EmbeddedCertificate) -> Option<String> {
    match DistinguishedName::parse(certificate.subject()) {
        Ok(dn) => dn.first_value_of(DN_COMMON_NAME).map(str::to_string),
        Err(e) => {
            log::warn!("Invalid subject name '{}': {e}", certificate.subject());
            None
        }
    }
}

/// Outcome of resolving a signature: the signer certificate and its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSigner {
    certificate: EmbeddedCertificate,
    common_name: Option<String>,
}

impl ResolvedSigner {
    #[must_use]
    pub fn new(certificate: EmbeddedCertificate) -> Self {
        let common_name = common_name(&certificate);
        Self {
            certificate,
            common_name,
        }
    }
    #[must_use]
    pub fn certificate(&self) -> &EmbeddedCertificate {
        &self.certificate
    }
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }
    #[must_use]
    pub fn into_certificate(self) -> EmbeddedCertificate {
        self.certificate
    }

    /// Flat, serializable view for reports.
    #[must_use]
    pub fn summary(&self) -> SignerSummary {
        SignerSummary {
            common_name: self.common_name.clone(),
            subject: self.certificate.subject().to_string(),
            issuer: self.certificate.issuer().to_string(),
            serial_decimal: self.certificate.serial().to_decimal(),
            serial_hex: self.certificate.serial().to_hex(),
        }
    }
}

/// Printable signer details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignerSummary {
    pub common_name: Option<String>,
    pub subject: String,
    pub issuer: String,
    pub serial_decimal: String,
    pub serial_hex: String,
}
