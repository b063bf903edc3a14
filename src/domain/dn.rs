//! LDAP-style distinguished name parsing and order-insensitive comparison.
//!
//! DN strings arrive from two places: certificate issuer/subject fields and the
//! `IssuerAndSerialNumber` of a signer info. Both are rendered to strings before
//! comparison, so equality is defined over the parsed (type, value) pairs rather
//! than over the raw text:
//! - `,` and `;` both separate RDNs, `+` separates members of a multi-valued RDN
//! - whitespace around separators and `=` is ignored
//! - `\x` escapes the next character and `"..."` quotes a value verbatim
//! - attribute types and values compare as case-sensitive strings
//!
//! Hex-pair escapes (`\2C`) are kept as written, not decoded. This is looser than
//! a full RFC 2253 comparator and is relied upon by the signer matcher.

use std::collections::BTreeSet;
use std::fmt;

/// One attribute type/value pair of a distinguished name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rdn {
    attr_type: String,
    value: String,
}

impl Rdn {
    #[must_use]
    pub fn new(attr_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attr_type: attr_type.into(),
            value: value.into(),
        }
    }
    #[must_use]
    pub fn attr_type(&self) -> &str {
        &self.attr_type
    }
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Rdn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.attr_type, self.value)
    }
}

/// Parsed distinguished name.
///
/// RDNs are kept in the order they appear in the source string; equality
/// ignores that order and compares the pairs as a set.
#[derive(Debug, Clone)]
pub struct DistinguishedName {
    rdns: Vec<Rdn>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DnParseError {
    #[error("attribute at position {position} has no '=' separator")]
    MissingEquals { position: usize },
    #[error("attribute at position {position} has an empty type")]
    EmptyType { position: usize },
    #[error("empty attribute at position {position}")]
    EmptyAttribute { position: usize },
    #[error("unterminated quoted value")]
    UnterminatedQuote,
    #[error("dangling escape at end of input")]
    DanglingEscape,
}

impl DistinguishedName {
    /// Parse an LDAP-style DN string.
    ///
    /// An empty (or all-whitespace) string is the empty DN.
    pub fn parse(input: &str) -> Result<Self, DnParseError> {
        let mut rdns = Vec::new();
        if input.trim().is_empty() {
            return Ok(Self { rdns });
        }

        let mut attr = AttrBuilder::default();
        let mut chars = input.char_indices();
        let mut attr_start = 0usize;

        while let Some((pos, c)) = chars.next() {
            match c {
                '\\' => {
                    let (_, escaped) = chars.next().ok_or(DnParseError::DanglingEscape)?;
                    attr.push(escaped, true);
                }
                '"' if attr.in_value() && attr.value_is_blank() => {
                    let mut closed = false;
                    for (_, q) in chars.by_ref() {
                        if q == '"' {
                            closed = true;
                            break;
                        }
                        attr.push(q, true);
                    }
                    if !closed {
                        return Err(DnParseError::UnterminatedQuote);
                    }
                }
                '=' if !attr.in_value() => attr.start_value(),
                ',' | ';' | '+' => {
                    rdns.push(attr.finish(attr_start)?);
                    attr = AttrBuilder::default();
                    attr_start = pos + 1;
                }
                other => attr.push(other, false),
            }
        }
        rdns.push(attr.finish(attr_start)?);

        Ok(Self { rdns })
    }

    /// RDNs in source order.
    #[must_use]
    pub fn rdns(&self) -> &[Rdn] {
        &self.rdns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rdns.is_empty()
    }

    /// Value of the first RDN whose type equals `attr_type` exactly.
    #[must_use]
    pub fn first_value_of(&self, attr_type: &str) -> Option<&str> {
        self.rdns
            .iter()
            .find(|rdn| rdn.attr_type == attr_type)
            .map(Rdn::value)
    }

    fn canonical_set(&self) -> BTreeSet<&Rdn> {
        self.rdns.iter().collect()
    }
}

impl PartialEq for DistinguishedName {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_set() == other.canonical_set()
    }
}

impl Eq for DistinguishedName {}

impl fmt::Display for DistinguishedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rdn) in self.rdns.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rdn}")?;
        }
        Ok(())
    }
}

/// Accumulates one `type=value` pair while scanning.
///
/// Trailing whitespace is trimmed only when it was not escaped or quoted.
#[derive(Default)]
struct AttrBuilder {
    attr_type: String,
    value: Option<String>,
    // Length of the value up to and including the last significant character.
    significant_len: usize,
}

impl AttrBuilder {
    fn in_value(&self) -> bool {
        self.value.is_some()
    }

    fn value_is_blank(&self) -> bool {
        self.value.as_deref().is_some_and(|v| v.trim().is_empty())
    }

    fn start_value(&mut self) {
        self.value = Some(String::new());
    }

    fn push(&mut self, c: char, literal: bool) {
        match self.value.as_mut() {
            Some(value) => {
                if value.is_empty() && c.is_whitespace() && !literal {
                    return;
                }
                value.push(c);
                if literal || !c.is_whitespace() {
                    self.significant_len = value.len();
                }
            }
            None => self.attr_type.push(c),
        }
    }

    fn finish(self, position: usize) -> Result<Rdn, DnParseError> {
        let attr_type = self.attr_type.trim();
        let Some(mut value) = self.value else {
            if attr_type.is_empty() {
                return Err(DnParseError::EmptyAttribute { position });
            }
            return Err(DnParseError::MissingEquals { position });
        };
        if attr_type.is_empty() {
            return Err(DnParseError::EmptyType { position });
        }
        value.truncate(self.significant_len);
        Ok(Rdn::new(attr_type, value))
    }
}

/// Compare two DN strings ignoring RDN order and delimiter style.
///
/// Absent or unparsable DNs never compare equal, not even to each other. An
/// empty string is present: it parses to the empty DN, which equals itself.
#[must_use]
pub fn canonical_equals(dn1: Option<&str>, dn2: Option<&str>) -> bool {
    let (Some(dn1), Some(dn2)) = (dn1, dn2) else {
        return false;
    };
    match (DistinguishedName::parse(dn1), DistinguishedName::parse(dn2)) {
        (Ok(n1), Ok(n2)) => n1 == n2,
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("DN comparison failed closed: {e}");
            false
        }
    }
}
