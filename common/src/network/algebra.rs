//! # Address Algebra
//!
//! Treats dotted-decimal addresses as opaque big-endian integers and applies
//! integer arithmetic to them. All results are taken modulo 2^32, so
//! overflow in one octet carries into its neighbour and `sub` wraps instead
//! of failing.

use crate::error::AddressError;
use crate::network::address::{to_address_string, to_integer};

/// Adds two addresses as if they were integers.
pub fn add(a: &str, b: &str) -> Result<String, AddressError> {
    apply(a, b, |x, y| Ok(x.wrapping_add(y)))
}

/// Subtracts `b` from `a` as if they were integers.
pub fn sub(a: &str, b: &str) -> Result<String, AddressError> {
    apply(a, b, |x, y| Ok(x.wrapping_sub(y)))
}

/// Computes `a mod b` over the packed integers.
pub fn modulus(a: &str, b: &str) -> Result<String, AddressError> {
    apply(a, b, |x, y| checked_rem(a, b, x, y))
}

/// Aligns `a` down to the nearest multiple of the boundary `b`.
///
/// Equivalent to `sub(a, modulus(a, b))`. With `b = 0.0.1.0` this yields the
/// base address of the /24 that holds `a`.
pub fn shift(a: &str, b: &str) -> Result<String, AddressError> {
    apply(a, b, |x, y| Ok(x - checked_rem(a, b, x, y)?))
}

/// Integer form of [`shift`], used by the zone namer.
pub(crate) fn align_down(address: u32, boundary: u32) -> u32 {
    // callers pass one of the non-zero classful steps
    address - address % boundary
}

fn apply<F>(a: &str, b: &str, op: F) -> Result<String, AddressError>
where
    F: FnOnce(u32, u32) -> Result<u32, AddressError>,
{
    let x = to_integer(a)?;
    let y = to_integer(b)?;
    op(x, y).map(to_address_string)
}

fn checked_rem(a: &str, b: &str, x: u32, y: u32) -> Result<u32, AddressError> {
    x.checked_rem(y).ok_or_else(|| AddressError::DivisionByZero {
        dividend: a.to_string(),
        divisor: b.to_string(),
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
