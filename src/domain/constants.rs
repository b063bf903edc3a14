//! Centralized OIDs and attribute type tokens used while resolving signers.
//! Keep this intentionally small; only broadly reused literals should live here.

use const_oid::db::rfc5911;
use der::asn1::ObjectIdentifier;

// === PKCS#7/CMS content types ===

/// PKCS#7 `SignedData` content type (1.2.840.113549.1.7.2)
pub const PKCS7_SIGNED_DATA_OID: ObjectIdentifier = rfc5911::ID_SIGNED_DATA;

// === Distinguished name attribute types ===

/// Attribute type token of the Common Name as rendered in DN strings
pub const DN_COMMON_NAME: &str = "CN";
