//! Distinguished-name comparison as used for signer matching.

use signer_resolver::{canonical_equals, DistinguishedName};

#[test]
fn reordered_attributes_are_equal() {
    assert!(canonical_equals(
        Some("CN=Test CA,O=Test Org,C=FI"),
        Some("C=FI, O=Test Org, CN=Test CA")
    ));
}

#[test]
fn multi_valued_rdns_flatten() {
    assert!(canonical_equals(
        Some("CN=Alice+SERIALNUMBER=123,C=FI"),
        Some("C=FI,SERIALNUMBER=123,CN=Alice")
    ));
}

#[test]
fn values_compare_case_sensitively() {
    assert!(!canonical_equals(Some("CN=Test CA"), Some("CN=test ca")));
}

#[test]
fn absent_or_unparseable_is_never_equal() {
    assert!(!canonical_equals(None, None));
    assert!(!canonical_equals(Some("CN=A"), None));
    assert!(!canonical_equals(Some("not a dn"), Some("not a dn")));
}

#[test]
fn extra_attribute_breaks_equality() {
    assert!(!canonical_equals(Some("CN=A,O=B"), Some("CN=A,O=B,C=FI")));
}

#[test]
fn first_common_name_wins() {
    let dn = DistinguishedName::parse("CN=First,OU=Unit,CN=Second").expect("valid DN");
    assert_eq!(dn.first_value_of("CN"), Some("First"));
}

#[test]
fn escaped_separators_stay_in_value() {
    let dn = DistinguishedName::parse(r"CN=Doe\, John,O=Org").expect("valid DN");
    assert_eq!(dn.first_value_of("CN"), Some("Doe, John"));
    assert_eq!(dn.rdns().len(), 2);
}

#[test]
fn different_common_names_differ() {
    assert!(!canonical_equals(Some("CN=Alice"), Some("CN=Bob")));
    assert!(canonical_equals(Some("CN=Alice,O=Org"), Some("O=Org,CN=Alice")));
}
