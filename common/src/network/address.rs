//! # Address Codec
//!
//! Converts between the dotted-decimal form of an IPv4 address and its
//! packed 32-bit integer form.
//!
//! Components are folded big-endian, most significant first. An input with
//! fewer than four components lands in the low-order bytes, so `"10.20"`
//! reads as `10 * 256 + 20`. [`crate::network::algebra`] relies on this to
//! accept short offsets such as `add("10.10.10.0", "10.20")`.

use std::net::Ipv4Addr;

use crate::error::AddressError;

/// Maximum number of dot-separated components in an address.
pub const OCTETS: usize = 4;

/// Packs a dotted-decimal address into a `u32`.
///
/// Every component must be a decimal number in `0..=255`. One to four
/// components are accepted.
pub fn to_integer(address: &str) -> Result<u32, AddressError> {
    let components: Vec<&str> = address.split('.').collect();
    if components.len() > OCTETS {
        return Err(AddressError::malformed(
            address,
            format!("expected at most {OCTETS} octets, found {}", components.len()),
        ));
    }

    components.iter().try_fold(0u32, |packed, component| {
        let octet = parse_octet(address, component)?;
        Ok((packed << 8) | u32::from(octet))
    })
}

/// Renders a `u32` as four dot-joined decimal octets without leading zeros.
pub fn to_address_string(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Typed variant of [`to_integer`].
pub fn parse(address: &str) -> Result<Ipv4Addr, AddressError> {
    to_integer(address).map(Ipv4Addr::from)
}

/// Re-renders an address in its canonical four-octet form.
///
/// `"010.1.2.3"` becomes `"10.1.2.3"`, `"10.20"` becomes `"0.0.10.20"`.
pub fn normalize(address: &str) -> Result<String, AddressError> {
    to_integer(address).map(to_address_string)
}

fn parse_octet(address: &str, component: &str) -> Result<u8, AddressError> {
    if component.is_empty() {
        return Err(AddressError::malformed(address, "empty octet"));
    }
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressError::malformed(
            address,
            format!("octet '{component}' is not a decimal number"),
        ));
    }
    component.parse::<u8>().map_err(|_| {
        AddressError::malformed(address, format!("octet '{component}' is out of range 0-255"))
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
