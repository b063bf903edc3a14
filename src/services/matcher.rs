//! Pairs signer descriptors with the certificates they reference.

use crate::domain::crypto::EmbeddedCertificate;
use crate::domain::dn::canonical_equals;
use crate::domain::pkcs7::SignerDescriptor;

/// A descriptor and a certificate whose issuer and serial agree.
#[derive(Debug, Clone, Copy)]
pub struct SignerMatch<'a> {
    pub descriptor: &'a SignerDescriptor,
    pub certificate: &'a EmbeddedCertificate,
}

/// Whether `certificate` is the one `descriptor` points at.
///
/// Issuers are compared with [`canonical_equals`]; serials by their decimal
/// value. Descriptors without issuer/serial never match.
#[must_use]
pub fn is_match(descriptor: &SignerDescriptor, certificate: &EmbeddedCertificate) -> bool {
    let serial_equal = descriptor
        .serial()
        .is_some_and(|serial| serial.to_decimal() == certificate.serial_decimal());
    serial_equal && canonical_equals(descriptor.issuer(), Some(certificate.issuer()))
}

/// Every (descriptor, certificate) pair that matches.
///
/// The scan always covers the full cross product so that a second matching
/// certificate is reported rather than hidden behind the first.
#[must_use]
pub fn match_all<'a>(
    descriptors: &'a [SignerDescriptor],
    certificates: &'a [EmbeddedCertificate],
) -> Vec<SignerMatch<'a>> {
    let mut matches = Vec::new();

    for descriptor in descriptors {
        for certificate in certificates {
            let si_issuer = descriptor.issuer().unwrap_or("<none>");
            let si_serial = descriptor
                .serial()
                .map_or_else(|| "<none>".to_string(), |s| s.to_decimal());

            if is_match(descriptor, certificate) {
                log::debug!("Cert does match signerInfo");
                matches.push(SignerMatch {
                    descriptor,
                    certificate,
                });
            } else {
                log::debug!("Cert does not match signerInfo");
            }
            log::debug!("SignerInfo   issuer:serial = {si_issuer}:{si_serial}");
            log::debug!(
                "Certificates issuer:serial = {}:{}",
                certificate.issuer(),
                certificate.serial_decimal()
            );
        }
    }

    matches
}
