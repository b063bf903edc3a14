//! Signer descriptors: the lookup keys a `SignerInfo` holds for its certificate.

use std::fmt;

use cms::signed_data::{SignerIdentifier, SignerInfo};
use der::asn1::ObjectIdentifier;

use crate::domain::crypto::PositiveSerial;

/// How a signer info points at its certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignerReference {
    /// Issuer DN (RFC 4514 string) plus certificate serial number.
    IssuerSerial {
        issuer: String,
        serial: PositiveSerial,
    },
    /// Subject key identifier; carries no issuer or serial so never matches.
    SubjectKeyId(Vec<u8>),
}

/// Decoded `SignerInfo` reduced to what signer resolution needs.
///
/// A descriptor never owns a certificate; it only references one by value.
#[derive(Clone, PartialEq, Eq)]
pub struct SignerDescriptor {
    reference: SignerReference,
    digest_algorithm: ObjectIdentifier,
    signature: Vec<u8>,
}

impl SignerDescriptor {
    #[must_use]
    pub fn new(
        reference: SignerReference,
        digest_algorithm: ObjectIdentifier,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            reference,
            digest_algorithm,
            signature,
        }
    }

    #[must_use]
    pub fn from_signer_info(info: &SignerInfo) -> Self {
        let reference = match &info.sid {
            SignerIdentifier::IssuerAndSerialNumber(ias) => SignerReference::IssuerSerial {
                issuer: ias.issuer.to_string(),
                serial: PositiveSerial::from(&ias.serial_number),
            },
            SignerIdentifier::SubjectKeyIdentifier(ski) => {
                SignerReference::SubjectKeyId(ski.0.as_bytes().to_vec())
            }
        };
        Self::new(
            reference,
            info.digest_alg.oid,
            info.signature.as_bytes().to_vec(),
        )
    }

    #[must_use]
    pub fn reference(&self) -> &SignerReference {
        &self.reference
    }
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        match &self.reference {
            SignerReference::IssuerSerial { issuer, .. } => Some(issuer),
            SignerReference::SubjectKeyId(_) => None,
        }
    }
    #[must_use]
    pub fn serial(&self) -> Option<&PositiveSerial> {
        match &self.reference {
            SignerReference::IssuerSerial { serial, .. } => Some(serial),
            SignerReference::SubjectKeyId(_) => None,
        }
    }
    #[must_use]
    pub fn digest_algorithm(&self) -> ObjectIdentifier {
        self.digest_algorithm
    }
    #[must_use]
    pub fn signature_value(&self) -> &[u8] {
        &self.signature
    }
}

impl fmt::Debug for SignerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            SignerReference::IssuerSerial { issuer, serial } => write!(
                f,
                "SignerDescriptor(issuer={issuer}, serial={serial}, sig_len={})",
                self.signature.len()
            ),
            SignerReference::SubjectKeyId(ski) => write!(
                f,
                "SignerDescriptor(ski={}, sig_len={})",
                hex::encode(ski),
                self.signature.len()
            ),
        }
    }
}

/// Decimal serial number referenced by a signer descriptor.
#[must_use]
pub fn read_serial(descriptor: Option<&SignerDescriptor>) -> Option<String> {
    descriptor?.serial().map(PositiveSerial::to_decimal)
}

/// Issuer DN referenced by a signer descriptor.
#[must_use]
pub fn read_issuer(descriptor: Option<&SignerDescriptor>) -> Option<String> {
    descriptor?.issuer().map(str::to_string)
}
