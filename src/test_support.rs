//! Builders for certificates, signer infos and PKCS#7 containers used in tests.
//!
//! Only depends on external crates so integration tests can include it by path.
#![allow(dead_code)]

use std::str::FromStr;
use std::time::Duration;

use cms::cert::IssuerAndSerialNumber;
use cms::content_info::CmsVersion;
use cms::signed_data::{SignerIdentifier, SignerInfo};
use der::asn1::{BitString, ObjectIdentifier, OctetString, UtcTime};
use der::Encode;
use x509_cert::certificate::{TbsCertificate, Version};
use x509_cert::ext::pkix::SubjectKeyIdentifier;
use x509_cert::name::Name;
use x509_cert::serial_number::SerialNumber;
use x509_cert::spki::{AlgorithmIdentifierOwned, SubjectPublicKeyInfoOwned};
use x509_cert::time::{Time, Validity};
use x509_cert::Certificate;

pub const SIGNED_DATA_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.7.2");
pub const DATA_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.7.1");
pub const SHA256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.16.840.1.101.3.4.2.1");
pub const RSA_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
pub const SHA256_WITH_RSA_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.11");

pub const CA_DN: &str = "CN=Test CA,O=Test Org,C=FI";
pub const SIGNER_DN: &str = "CN=Alice Example,O=Test Org,C=FI";
pub const SIGNER_SERIAL: &[u8] = &[0x0A, 0x1B, 0x2C];
pub const SIGNATURE: &[u8] = &[0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0xFF, 0x10];

fn algorithm(oid: ObjectIdentifier) -> AlgorithmIdentifierOwned {
    AlgorithmIdentifierOwned {
        oid,
        parameters: None,
    }
}

fn utc(secs: u64) -> Time {
    Time::UtcTime(UtcTime::from_unix_duration(Duration::from_secs(secs)).unwrap())
}

/// DER certificate with the given subject, issuer and serial. The key and
/// signature are placeholders; nothing here is cryptographically valid.
pub fn certificate_der(subject: &str, issuer: &str, serial: &[u8]) -> Vec<u8> {
    let tbs_certificate = TbsCertificate {
        version: Version::V3,
        serial_number: SerialNumber::new(serial).unwrap(),
        signature: algorithm(SHA256_WITH_RSA_OID),
        issuer: Name::from_str(issuer).unwrap(),
        validity: Validity {
            not_before: utc(1_700_000_000),
            not_after: utc(1_900_000_000),
        },
        subject: Name::from_str(subject).unwrap(),
        subject_public_key_info: SubjectPublicKeyInfoOwned {
            algorithm: algorithm(RSA_OID),
            subject_public_key: BitString::from_bytes(&[0x30, 0x03, 0x02, 0x01, 0x01]).unwrap(),
        },
        issuer_unique_id: None,
        subject_unique_id: None,
        extensions: None,
    };

    Certificate {
        tbs_certificate,
        signature_algorithm: algorithm(SHA256_WITH_RSA_OID),
        signature: BitString::from_bytes(&[0xAA; 16]).unwrap(),
    }
    .to_der()
    .unwrap()
}

/// The certificate every default fixture signer info points at.
pub fn signer_certificate_der() -> Vec<u8> {
    certificate_der(SIGNER_DN, CA_DN, SIGNER_SERIAL)
}

/// DER `SignerInfo` identifying its certificate by issuer and serial.
pub fn signer_info_der(issuer: &str, serial: &[u8]) -> Vec<u8> {
    SignerInfo {
        version: CmsVersion::V1,
        sid: SignerIdentifier::IssuerAndSerialNumber(IssuerAndSerialNumber {
            issuer: Name::from_str(issuer).unwrap(),
            serial_number: SerialNumber::new(serial).unwrap(),
        }),
        digest_alg: algorithm(SHA256_OID),
        signed_attrs: None,
        signature_algorithm: algorithm(RSA_OID),
        signature: OctetString::new(SIGNATURE.to_vec()).unwrap(),
        unsigned_attrs: None,
    }
    .to_der()
    .unwrap()
}

/// DER `SignerInfo` identifying its certificate by subject key identifier.
pub fn signer_info_ski_der(key_id: &[u8]) -> Vec<u8> {
    SignerInfo {
        version: CmsVersion::V3,
        sid: SignerIdentifier::SubjectKeyIdentifier(SubjectKeyIdentifier(
            OctetString::new(key_id.to_vec()).unwrap(),
        )),
        digest_alg: algorithm(SHA256_OID),
        signed_attrs: None,
        signature_algorithm: algorithm(RSA_OID),
        signature: OctetString::new(SIGNATURE.to_vec()).unwrap(),
        unsigned_attrs: None,
    }
    .to_der()
    .unwrap()
}

/// Minimal DER TLV with definite length.
pub fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
    let len = content.len();
    let mut out = vec![tag];
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.extend_from_slice(&[0x81, len as u8]);
    } else {
        assert!(len <= 0xFFFF, "fixture too large");
        out.extend_from_slice(&[0x82, (len >> 8) as u8, len as u8]);
    }
    out.extend_from_slice(content);
    out
}

/// `SignedData` SEQUENCE holding the given (possibly malformed) entries as-is.
pub fn signed_data_der(certificates: &[Vec<u8>], signer_infos: &[Vec<u8>]) -> Vec<u8> {
    let mut body = vec![0x02, 0x01, 0x01];
    body.extend(tlv(0x31, &tlv(0x30, &SHA256_OID.to_der().unwrap())));
    body.extend(tlv(0x30, &DATA_OID.to_der().unwrap()));
    if !certificates.is_empty() {
        body.extend(tlv(0xA0, &certificates.concat()));
    }
    body.extend(tlv(0x31, &signer_infos.concat()));
    tlv(0x30, &body)
}

/// `ContentInfo` wrapping `content` under `content_type`.
pub fn content_info_der(content_type: ObjectIdentifier, content: &[u8]) -> Vec<u8> {
    let mut body = content_type.to_der().unwrap();
    body.extend(tlv(0xA0, content));
    tlv(0x30, &body)
}

/// Complete PKCS#7 signature container.
pub fn pkcs7_der(certificates: &[Vec<u8>], signer_infos: &[Vec<u8>]) -> Vec<u8> {
    content_info_der(SIGNED_DATA_OID, &signed_data_der(certificates, signer_infos))
}

/// Container with an intermediate CA certificate, the signer certificate and
/// one matching signer info.
pub fn well_formed_pkcs7() -> Vec<u8> {
    let ca = certificate_der(CA_DN, "CN=Root CA,C=FI", &[0x01]);
    pkcs7_der(
        &[ca, signer_certificate_der()],
        &[signer_info_der(CA_DN, SIGNER_SERIAL)],
    )
}

/// A SEQUENCE that frames correctly but is not a certificate.
pub fn malformed_entry() -> Vec<u8> {
    tlv(0x30, &[0x02, 0x01, 0x05])
}
