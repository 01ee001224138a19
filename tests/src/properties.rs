#![cfg(test)]
//! Randomized checks of the algebraic laws the address engine promises.

use ipdb_common::network::address::{to_address_string, to_integer};
use ipdb_common::network::algebra::{add, modulus, shift};
use ipdb_common::network::zone::{ZoneClass, reverse, reverse_zone};
use rand::Rng;

const ROUNDS: usize = 2_000;

fn random_address(rng: &mut impl Rng) -> String {
    to_address_string(rng.random::<u32>())
}

#[test]
fn codec_round_trip() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let octets: [u8; 4] = rng.random();
        let address = octets.map(|o| o.to_string()).join(".");
        let packed = to_integer(&address).unwrap();
        assert_eq!(packed, u32::from_be_bytes(octets));
        assert_eq!(to_address_string(packed), address);
    }
}

#[test]
fn shift_plus_modulus_is_identity() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_address(&mut rng);
        let b = to_address_string(rng.random_range(1..=u32::MAX));
        let rebuilt = add(&shift(&a, &b).unwrap(), &modulus(&a, &b).unwrap()).unwrap();
        assert_eq!(rebuilt, a, "a={a} b={b}");
    }
}

#[test]
fn reverse_is_an_involution() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_address(&mut rng);
        assert_eq!(reverse(&reverse(&a)), a);
    }
}

#[test]
fn zone_field_count_grows_with_class() {
    let fields = |a: &str, class: ZoneClass| reverse_zone(a, class).unwrap().split('.').count();

    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_address(&mut rng);
        let (fa, fb, fc) = (
            fields(&a, ZoneClass::A),
            fields(&a, ZoneClass::B),
            fields(&a, ZoneClass::C),
        );
        assert!(fa <= fb && fb <= fc, "{a}: A={fa} B={fb} C={fc}");
        assert_eq!(fc, ZoneClass::C.retained_fields(), "{a}");
    }
}

#[test]
fn zone_is_a_suffix_of_the_reversed_base() {
    let mut rng = rand::rng();
    for _ in 0..ROUNDS {
        let a = random_address(&mut rng);
        for class in [ZoneClass::A, ZoneClass::B, ZoneClass::C] {
            let base = shift(&a, &class.boundary_step().to_string()).unwrap();
            let zone = reverse_zone(&a, class).unwrap();
            assert!(reverse(&base).ends_with(&zone), "{a} class {class}");
        }
    }
}
