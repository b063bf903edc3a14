//! End-to-end signer resolution for PKCS#7 signature responses.

mod common;

use common::*;
use signer_resolver::{
    read_issuer, read_serial, resolve_container, DerDecoder, Pkcs7Signature, ResolveError,
    SignatureContainer, SignerReference,
};

#[test]
fn resolves_single_signer_certificate() {
    let signature = Pkcs7Signature::new(&well_formed_pkcs7()).expect("container should parse");

    let certs = signature.signer_certificates().expect("certificates should decode");
    assert_eq!(certs.len(), 1);
    assert_eq!(certs[0].as_der(), signer_certificate_der().as_slice());

    let resolved = signature.resolve().expect("signer should resolve");
    assert_eq!(resolved.common_name(), Some("Alice Example"));
    assert_eq!(resolved.summary().serial_decimal, "662316");
}

#[test]
fn signer_info_issuer_in_different_order_still_matches() {
    let bytes = pkcs7_der(
        &[signer_certificate_der()],
        &[signer_info_der("C=FI,O=Test Org,CN=Test CA", SIGNER_SERIAL)],
    );
    let signature = Pkcs7Signature::new(&bytes).expect("container should parse");
    assert_eq!(signature.signer_common_name().as_deref(), Some("Alice Example"));
}

#[test]
fn non_signed_data_content_type_is_rejected() {
    let bytes = content_info_der(DATA_OID, &signed_data_der(&[], &[]));
    assert!(matches!(
        Pkcs7Signature::new(&bytes),
        Err(ResolveError::InvalidFormat(_))
    ));
}

#[test]
fn garbage_is_rejected_as_invalid_format() {
    assert!(matches!(
        Pkcs7Signature::new(b"definitely not DER"),
        Err(ResolveError::InvalidFormat(_))
    ));
}

#[test]
fn multiple_signer_infos_are_unsupported() {
    let bytes = pkcs7_der(
        &[signer_certificate_der()],
        &[
            signer_info_der(CA_DN, SIGNER_SERIAL),
            signer_info_der(CA_DN, SIGNER_SERIAL),
        ],
    );
    assert!(matches!(
        Pkcs7Signature::new(&bytes),
        Err(ResolveError::UnsupportedFormat(_))
    ));
}

#[test]
fn zero_signer_infos_are_unsupported() {
    let bytes = pkcs7_der(&[signer_certificate_der()], &[]);
    assert!(matches!(
        Pkcs7Signature::new(&bytes),
        Err(ResolveError::UnsupportedFormat(_))
    ));
}

#[test]
fn two_matching_certificates_are_ambiguous() {
    let twin = certificate_der("CN=Alice Twin,O=Test Org,C=FI", CA_DN, SIGNER_SERIAL);
    let bytes = pkcs7_der(
        &[signer_certificate_der(), twin],
        &[signer_info_der(CA_DN, SIGNER_SERIAL)],
    );
    let signature = Pkcs7Signature::new(&bytes).expect("container should parse");

    assert_eq!(signature.signer_certificates().expect("decode").len(), 2);
    assert!(matches!(
        signature.signer_certificate(),
        Err(ResolveError::AmbiguousSigner(2))
    ));
    assert_eq!(signature.signer_common_name(), None);
}

#[test]
fn only_malformed_certificates_is_missing_certificate() {
    let bytes = pkcs7_der(
        &[malformed_entry(), malformed_entry()],
        &[signer_info_der(CA_DN, SIGNER_SERIAL)],
    );
    let signature = Pkcs7Signature::new(&bytes).expect("container should parse");
    assert!(matches!(
        signature.signer_certificates(),
        Err(ResolveError::MissingCertificate)
    ));
}

#[test]
fn no_certificates_at_all_is_missing_certificate() {
    let bytes = pkcs7_der(&[], &[signer_info_der(CA_DN, SIGNER_SERIAL)]);
    let signature = Pkcs7Signature::new(&bytes).expect("container should parse");
    assert!(matches!(
        signature.signer_certificate(),
        Err(ResolveError::MissingCertificate)
    ));
}

#[test]
fn malformed_neighbour_certificate_is_tolerated() {
    let bytes = pkcs7_der(
        &[malformed_entry(), signer_certificate_der()],
        &[signer_info_der(CA_DN, SIGNER_SERIAL)],
    );
    let signature = Pkcs7Signature::new(&bytes).expect("container should parse");
    assert_eq!(signature.signer_common_name().as_deref(), Some("Alice Example"));
}

#[test]
fn subject_key_identifier_signer_is_not_found() {
    let bytes = pkcs7_der(&[signer_certificate_der()], &[signer_info_ski_der(&[0x11; 20])]);
    let signature = Pkcs7Signature::new(&bytes).expect("container should parse");

    assert_eq!(
        signature.signer_descriptor().reference(),
        &SignerReference::SubjectKeyId(vec![0x11; 20])
    );
    assert_eq!(read_issuer(Some(signature.signer_descriptor())), None);
    assert_eq!(read_serial(Some(signature.signer_descriptor())), None);
    assert!(matches!(
        signature.signer_certificate(),
        Err(ResolveError::SignerNotFound)
    ));
}

#[test]
fn descriptor_accessors_expose_lookup_keys() {
    let signature = Pkcs7Signature::new(&well_formed_pkcs7()).expect("container should parse");
    let descriptor = signature.signer_descriptor();

    assert_eq!(signature.container().signer_info_entries().len(), 1);
    assert!(matches!(
        descriptor.reference(),
        SignerReference::IssuerSerial { issuer, .. } if issuer == CA_DN
    ));
    assert_eq!(read_serial(Some(descriptor)).as_deref(), Some("662316"));
    assert_eq!(read_issuer(Some(descriptor)).as_deref(), Some(CA_DN));
    assert_eq!(read_serial(None), None);
    assert_eq!(read_issuer(None), None);
}

#[test]
fn standalone_container_resolution_lists_all_matches() {
    let container = SignatureContainer::parse(&well_formed_pkcs7(), &DerDecoder::new())
        .expect("container should parse");
    assert_eq!(container.content_type(), SIGNED_DATA_OID);
    assert_eq!(container.certificate_entries().len(), 2);
    assert_eq!(container.signer_info_entries().len(), 1);

    let certs = resolve_container(&container, &DerDecoder::new()).expect("resolution");
    assert_eq!(certs.len(), 1);
    assert_eq!(certs[0].subject(), SIGNER_DN);
}
