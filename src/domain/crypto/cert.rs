use std::fmt;

use x509_cert::Certificate;

use super::PositiveSerial;

/// Certificate decoded from a signature container.
///
/// Issuer and subject are kept in their RFC 4514 string form since that is what
/// signer matching and identity extraction operate on.
#[derive(Clone)]
pub struct EmbeddedCertificate {
    der: Box<[u8]>,
    issuer: String,
    subject: String,
    serial: PositiveSerial,
}

impl EmbeddedCertificate {
    /// Wrap an already decoded certificate together with the DER it came from.
    #[must_use]
    pub fn new(x509: &Certificate, der: Vec<u8>) -> Self {
        let tbs = &x509.tbs_certificate;
        Self {
            issuer: tbs.issuer.to_string(),
            subject: tbs.subject.to_string(),
            serial: PositiveSerial::from(&tbs.serial_number),
            der: der.into_boxed_slice(),
        }
    }
    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }
    #[must_use]
    pub fn serial(&self) -> &PositiveSerial {
        &self.serial
    }
    /// Serial number as a decimal string.
    #[must_use]
    pub fn serial_decimal(&self) -> String {
        self.serial.to_decimal()
    }
}

impl PartialEq for EmbeddedCertificate {
    fn eq(&self, other: &Self) -> bool {
        self.der == other.der
    }
}

impl Eq for EmbeddedCertificate {}

impl fmt::Debug for EmbeddedCertificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EmbeddedCertificate(subject={}, serial={}, len={})",
            self.subject,
            self.serial,
            self.der.len()
        )
    }
}
