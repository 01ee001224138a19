//! # ipdb core
//!
//! Groups per-host route records collected from a fleet into a hostname-keyed
//! manifest of addresses and reverse-zone metadata.
//!
//! * **[`records`]**: decoding the raw fleet route mapping.
//! * **[`manifest`]**: the manifest itself and the zone queries over it.

pub mod error;
pub mod manifest;
pub mod records;
