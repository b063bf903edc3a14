//! ASN.1 decoding capability used by the container parser and extractors.
//!
//! The resolver never walks DER itself. Everything structural goes through the
//! [`Asn1Decoder`] trait so callers can substitute their own decoder (or a
//! stub in tests); [`DerDecoder`] binds it to the RustCrypto `der`, `cms` and
//! `x509-cert` crates.

use cms::content_info::ContentInfo;
use cms::signed_data::SignerInfo;
use der::asn1::Any;
use der::{Decode, Encode, Reader, SliceReader, Tag, TagNumber, Tagged};
use x509_cert::Certificate;

use crate::domain::pkcs7::{RawEntry, SignedDataEntries};
use crate::infra::error::{ResolveError, ResolveResult};

/// Decoding operations required to resolve a signer.
pub trait Asn1Decoder {
    /// Decode the outer `ContentInfo` wrapper.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the bytes are not a DER `ContentInfo`.
    fn decode_content_info(&self, bytes: &[u8]) -> ResolveResult<ContentInfo>;

    /// Split a `SignedData` body into its raw certificate and signer info entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the content is not a `SignedData` SEQUENCE.
    fn decode_signed_data(&self, content: &Any) -> ResolveResult<SignedDataEntries>;

    /// Decode one X.509 certificate.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCertificate` if the bytes are not a DER certificate.
    fn decode_certificate(&self, der: &[u8]) -> ResolveResult<Certificate>;

    /// Decode one `SignerInfo`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the bytes are not a DER `SignerInfo`.
    fn decode_signer_info(&self, der: &[u8]) -> ResolveResult<SignerInfo>;
}

/// [`Asn1Decoder`] backed by the `der`/`cms`/`x509-cert` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerDecoder;

impl DerDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

const CERTIFICATES_TAG: Tag = Tag::ContextSpecific {
    constructed: true,
    number: TagNumber::N0,
};

const CRLS_TAG: Tag = Tag::ContextSpecific {
    constructed: true,
    number: TagNumber::N1,
};

impl Asn1Decoder for DerDecoder {
    fn decode_content_info(&self, bytes: &[u8]) -> ResolveResult<ContentInfo> {
        ContentInfo::from_der(bytes)
            .map_err(|e| ResolveError::InvalidFormat(format!("not a pkcs7 signature: {e}")))
    }

    // SignedData ::= SEQUENCE {
    //   version CMSVersion,
    //   digestAlgorithms SET OF DigestAlgorithmIdentifier,
    //   encapContentInfo EncapsulatedContentInfo,
    //   certificates [0] IMPLICIT CertificateSet OPTIONAL,
    //   crls [1] IMPLICIT RevocationInfoChoices OPTIONAL,
    //   signerInfos SET OF SignerInfo }
    fn decode_signed_data(&self, content: &Any) -> ResolveResult<SignedDataEntries> {
        expect_tag(content, Tag::Sequence, "SignedData")?;

        let mut reader = SliceReader::new(content.value())?;
        let _version: u8 = reader.decode()?;
        let digest_algorithms: Any = reader.decode()?;
        expect_tag(&digest_algorithms, Tag::Set, "digestAlgorithms")?;
        let encap_content_info: Any = reader.decode()?;
        expect_tag(&encap_content_info, Tag::Sequence, "encapContentInfo")?;

        let mut certificates = Vec::new();
        if reader.peek_tag()? == CERTIFICATES_TAG {
            let set: Any = reader.decode()?;
            certificates = split_entries(set.value())?;
        }
        if reader.peek_tag()? == CRLS_TAG {
            let _crls: Any = reader.decode()?;
        }

        let signer_infos: Any = reader.decode()?;
        expect_tag(&signer_infos, Tag::Set, "signerInfos")?;
        let signer_infos = split_entries(signer_infos.value())?;

        if !reader.is_finished() {
            return Err(ResolveError::InvalidFormat(
                "trailing data after SignedData signerInfos".to_string(),
            ));
        }

        Ok(SignedDataEntries {
            certificates,
            signer_infos,
        })
    }

    fn decode_certificate(&self, der: &[u8]) -> ResolveResult<Certificate> {
        Certificate::from_der(der).map_err(|e| ResolveError::InvalidCertificate(e.to_string()))
    }

    fn decode_signer_info(&self, der: &[u8]) -> ResolveResult<SignerInfo> {
        SignerInfo::from_der(der)
            .map_err(|e| ResolveError::InvalidFormat(format!("invalid SignerInfo: {e}")))
    }
}

fn expect_tag(any: &Any, expected: Tag, what: &str) -> ResolveResult<()> {
    if any.tag() == expected {
        Ok(())
    } else {
        Err(ResolveError::InvalidFormat(format!(
            "{what}: expected {expected}, found {}",
            any.tag()
        )))
    }
}

/// Split the content octets of a `SET OF` into its element TLVs.
fn split_entries(value: &[u8]) -> der::Result<Vec<RawEntry>> {
    let mut reader = SliceReader::new(value)?;
    let mut entries = Vec::new();
    while !reader.is_finished() {
        let entry: Any = reader.decode()?;
        entries.push(RawEntry::from_der(entry.to_der()?));
    }
    Ok(entries)
}
