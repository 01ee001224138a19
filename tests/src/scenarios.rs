#![cfg(test)]
//! Documented input/output pairs of the address engine.

use ipdb_common::error::AddressError;
use ipdb_common::network::algebra::{add, modulus, shift, sub};
use ipdb_common::network::zone::{ZoneClass, reverse, reverse_zone};

fn zone(address: &str, class: &str) -> String {
    let zone_class: ZoneClass = class.parse().expect("valid zone class");
    reverse_zone(address, zone_class).expect("valid address")
}

#[test]
fn reverse_examples() {
    assert_eq!(reverse("255.128.63.16"), "16.63.128.255");
}

#[test]
fn reverse_zone_examples() {
    assert_eq!(zone("255.128.63.16", "C"), "63.128.255");
    assert_eq!(zone("255.128.63.16", "c"), "63.128.255");
    assert_eq!(zone("255.128.63.16", "b"), "128.255");
    assert_eq!(zone("255.128.63.16", "a"), "255");
    assert_eq!(zone("0.0.10.20", "C"), "10.0.0");
    assert_eq!(zone("10.0.0.0", "C"), "0.0.10");
    assert_eq!(zone("10.0.0.0", "B"), "0.10");
    assert_eq!(zone("0.10.0.0", "C"), "0.10.0");
    assert_eq!(zone("0.10.0.0", "B"), "10.0");
}

#[test]
fn algebra_examples() {
    let cases: [(fn(&str, &str) -> Result<String, AddressError>, &str, &str, &str); 10] = [
        (add, "10.10.10.0", "0.0.10.20", "10.10.20.20"),
        (sub, "10.10.20.20", "0.0.10.20", "10.10.10.0"),
        (modulus, "10.10.20.20", "0.0.1.0", "0.0.0.20"),
        (shift, "10.10.20.20", "0.0.1.0", "10.10.20.0"),
        (modulus, "10.10.20.20", "0.0.16.0", "0.0.4.20"),
        (shift, "10.10.20.20", "0.0.16.0", "10.10.16.0"),
        (modulus, "10.10.20.20", "0.16.0.0", "0.10.20.20"),
        (shift, "10.10.20.20", "0.16.0.0", "10.0.0.0"),
        (add, "10.10.10.0", "10.20", "10.10.20.20"),
        (sub, "10.10.10.0", "10.10.10.1", "255.255.255.255"),
    ];

    for (op, a, b, expected) in cases {
        assert_eq!(op(a, b).unwrap(), expected, "{a} with {b}");
    }
}

#[test]
fn division_by_zero_is_reported() {
    assert!(matches!(
        modulus("10.10.20.20", "0.0.0.0"),
        Err(AddressError::DivisionByZero { .. })
    ));
    assert!(matches!(
        shift("10.10.20.20", "0.0.0.0"),
        Err(AddressError::DivisionByZero { .. })
    ));
}

#[test]
fn invalid_zone_class_is_reported() {
    let err = "X".parse::<ZoneClass>().unwrap_err();
    assert_eq!(err, AddressError::InvalidZoneClass("X".into()));
    assert_eq!(err.to_string(), "invalid zone class 'X', expected one of A, B, C");
}
