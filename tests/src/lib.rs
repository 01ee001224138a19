//! Cross-crate tests for the address engine and the fleet manifest.

mod fleet;
mod properties;
mod scenarios;
