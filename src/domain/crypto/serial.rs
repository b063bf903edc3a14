use std::fmt;

use num_bigint::BigUint;

/// Certificate serial number reduced to its positive integer value.
///
/// DER integers may carry a leading zero byte to keep the sign bit clear, and
/// some encoders emit extra zero padding. Both are irrelevant here: the bytes
/// are read as an unsigned big-endian magnitude and compared in decimal form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PositiveSerial {
    value: BigUint,
}

impl PositiveSerial {
    #[must_use]
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self {
            value: BigUint::from_bytes_be(bytes),
        }
    }
    #[must_use]
    pub fn to_decimal(&self) -> String {
        self.value.to_str_radix(10)
    }
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.value.to_bytes_be())
    }
}

impl fmt::Display for PositiveSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for PositiveSerial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PositiveSerial({})", self.value)
    }
}

impl From<&x509_cert::serial_number::SerialNumber> for PositiveSerial {
    fn from(serial: &x509_cert::serial_number::SerialNumber) -> Self {
        Self::from_be_bytes(serial.as_bytes())
    }
}
