//! # Reverse Zones
//!
//! Derives in-addr.arpa style names from IPv4 addresses.
//!
//! A reverse zone is the address aligned down to a classful boundary, with
//! its octets reversed and the leading zero octets contributed by the
//! alignment dropped:
//!
//! | address         | class | zone         |
//! |-----------------|-------|--------------|
//! | `255.128.63.16` | C     | `63.128.255` |
//! | `255.128.63.16` | B     | `128.255`    |
//! | `255.128.63.16` | A     | `255`        |
//! | `0.0.10.20`     | C     | `10.0.0`     |

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::AddressError;
use crate::network::address::{to_address_string, to_integer};
use crate::network::algebra::align_down;

/// Suffix of the IPv4 reverse mapping tree.
pub const ARPA_SUFFIX: &str = "in-addr.arpa";

/// Classful network size used to cut a reverse zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoneClass {
    /// One retained octet, `/8`.
    A,
    /// Two retained octets, `/16`.
    B,
    /// Three retained octets, `/24`.
    #[default]
    C,
}

impl ZoneClass {
    /// The address every zone base of this class is a multiple of.
    pub fn boundary_step(&self) -> Ipv4Addr {
        match self {
            Self::A => Ipv4Addr::new(1, 0, 0, 0),
            Self::B => Ipv4Addr::new(0, 1, 0, 0),
            Self::C => Ipv4Addr::new(0, 0, 1, 0),
        }
    }

    /// Minimum number of octets kept in a zone name of this class.
    pub fn retained_fields(&self) -> usize {
        match self {
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
        }
    }
}

impl FromStr for ZoneClass {
    type Err = AddressError;

    /// Parses `a`, `b` or `c` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(AddressError::InvalidZoneClass(s.to_string())),
        }
    }
}

impl fmt::Display for ZoneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
            Self::C => f.write_str("C"),
        }
    }
}

/// Reverses the dot-separated components of `address`.
///
/// Works on any dot-joined string, no address parsing takes place.
pub fn reverse(address: &str) -> String {
    address.split('.').rev().collect::<Vec<&str>>().join(".")
}

/// Derives the reverse zone holding `address` for the given class.
pub fn reverse_zone(address: &str, zone_class: ZoneClass) -> Result<String, AddressError> {
    let step: u32 = zone_class.boundary_step().into();
    let base: u32 = align_down(to_integer(address)?, step);
    let reversed: String = reverse(&to_address_string(base));

    let octets: Vec<&str> = reversed.split('.').collect();
    let fields: usize = zone_class.retained_fields();
    let leading_zeros: usize = octets
        .iter()
        .take(octets.len().saturating_sub(fields))
        .take_while(|octet| **octet == "0")
        .count();

    Ok(octets[leading_zeros..].join("."))
}

/// PTR owner name of `address`, e.g. `16.63.128.255.in-addr.arpa`.
pub fn ptr_name(address: &str) -> String {
    arpa_zone(&reverse(address))
}

/// Fully qualifies a reverse zone, e.g. `63.128.255.in-addr.arpa`.
pub fn arpa_zone(zone: &str) -> String {
    if zone.is_empty() {
        return ARPA_SUFFIX.to_string();
    }
    format!("{zone}.{ARPA_SUFFIX}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
