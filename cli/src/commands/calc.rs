use anyhow::Context;
use ipdb_common::config::Config;
use ipdb_common::network::{algebra, zone};
use ipdb_common::network::zone::ZoneClass;

use crate::terminal::print;

/// Integer-style operations over two addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mod,
    Shift,
}

impl Operation {
    pub fn apply(self, a: &str, b: &str) -> anyhow::Result<String> {
        let result = match self {
            Self::Add => algebra::add(a, b),
            Self::Sub => algebra::sub(a, b),
            Self::Mod => algebra::modulus(a, b),
            Self::Shift => algebra::shift(a, b),
        };
        result.with_context(|| format!("{:?} failed for '{a}' and '{b}'", self))
    }
}

pub fn arithmetic(operation: Operation, a: &str, b: &str, cfg: &Config) -> anyhow::Result<()> {
    let result: String = operation.apply(a, b)?;
    print::scalar(&result, cfg)
}

pub fn reverse(address: &str, cfg: &Config) -> anyhow::Result<()> {
    print::scalar(&zone::reverse(address), cfg)
}

pub fn reverse_zone(address: &str, zone_class: ZoneClass, cfg: &Config) -> anyhow::Result<()> {
    let zone: String = zone::reverse_zone(address, zone_class)
        .with_context(|| format!("Failed to derive class {zone_class} zone of '{address}'"))?;
    print::scalar(&zone, cfg)
}

pub fn ptr(address: &str, cfg: &Config) -> anyhow::Result<()> {
    print::scalar(&zone::ptr_name(address), cfg)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
