pub mod constants;
pub mod crypto;
pub mod dn;
pub mod identity;
pub mod pkcs7;
