//! # ipdb common
//!
//! The IPv4 address engine shared by every other crate in the workspace.
//!
//! * **[`network::address`]**: dotted-decimal ↔ `u32` conversion.
//! * **[`network::algebra`]**: integer-style arithmetic over addresses.
//! * **[`network::zone`]**: octet reversal and classful reverse-zone names.
//! * **[`error`]**: the error type every fallible operation returns.

pub mod config;
pub mod error;
pub mod network;
