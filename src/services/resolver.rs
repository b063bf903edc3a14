//! Signer resolution: extraction, matching and cardinality checks.

use crate::adapters::asn1::Asn1Decoder;
use crate::domain::crypto::EmbeddedCertificate;
use crate::domain::pkcs7::{SignatureContainer, SignerDescriptor};
use crate::infra::error::{ResolveError, ResolveResult};
use crate::services::extraction::{extract_certificates, extract_signer_descriptors};
use crate::services::matcher::match_all;

/// Certificates referenced by any of `descriptors`.
///
/// Works on arbitrary descriptor/certificate sets and does not enforce the
/// single-signer rule; a certificate matched by two descriptors is listed twice.
///
/// # Errors
///
/// - `MissingCertificate` if `certificates` is empty
/// - `MissingSignerInfo` if `descriptors` is empty
pub fn resolve_signer_certificates(
    descriptors: &[SignerDescriptor],
    certificates: &[EmbeddedCertificate],
) -> ResolveResult<Vec<EmbeddedCertificate>> {
    if certificates.is_empty() {
        return Err(ResolveError::MissingCertificate);
    }
    if descriptors.is_empty() {
        return Err(ResolveError::MissingSignerInfo);
    }

    log::debug!("Matching cert and signerInfo details");
    let signer_certs: Vec<EmbeddedCertificate> = match_all(descriptors, certificates)
        .into_iter()
        .map(|m| m.certificate.clone())
        .collect();

    log::debug!("returning {} certs", signer_certs.len());
    Ok(signer_certs)
}

/// Extract both entry sets of `container` and resolve their signer certificates.
///
/// # Errors
///
/// Same as [`resolve_signer_certificates`], evaluated on the entries that
/// decoded successfully.
pub fn resolve_container<D: Asn1Decoder + ?Sized>(
    container: &SignatureContainer,
    decoder: &D,
) -> ResolveResult<Vec<EmbeddedCertificate>> {
    let certificates = extract_certificates(container.certificate_entries(), decoder);
    let descriptors = extract_signer_descriptors(container.signer_info_entries(), decoder);
    resolve_signer_certificates(&descriptors.items, &certificates.items)
}

/// Reduce a list of matched certificates to the single signer.
///
/// # Errors
///
/// - `SignerNotFound` if `matches` is empty
/// - `AmbiguousSigner` if it holds more than one certificate
pub fn expect_single_signer(
    mut matches: Vec<EmbeddedCertificate>,
) -> ResolveResult<EmbeddedCertificate> {
    match matches.len() {
        0 => Err(ResolveError::SignerNotFound),
        1 => Ok(matches.remove(0)),
        n => Err(ResolveError::AmbiguousSigner(n)),
    }
}
