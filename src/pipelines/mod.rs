//! Signature facades orchestrating the stateless services.

pub mod pkcs1;
pub mod pkcs7;

pub use pkcs1::{Pkcs1Signature, Pkcs1Value};
pub use pkcs7::Pkcs7Signature;
