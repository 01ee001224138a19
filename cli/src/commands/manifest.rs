use std::path::Path;

use ipdb_common::config::{Config, OutputFormat};
use ipdb_core::manifest::{Manifest, ZoneMember};
use ipdb_core::records;
use serde_json::Value;
use tracing::info;

use crate::input;
use crate::terminal::print;

pub fn manifest(path: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let value: Value = input::read_json(path)?;
    let records = records::load_route_records(&value)?;
    let manifest: Manifest = Manifest::build(&records)?;

    if !cfg.quiet {
        let zones: usize = manifest.reverse_zones().len();
        info!("Manifest holds {} hosts across {zones} reverse zones", manifest.len());
    }

    match cfg.format {
        OutputFormat::Json => print::json(&manifest, cfg),
        OutputFormat::Text => {
            print::lines(manifest.iter().map(|(hostname, entry)| {
                format!(
                    "{hostname} {} {} {}",
                    entry.ip, entry.reverse_zone, entry.reverse_entry
                )
            }));
            Ok(())
        }
    }
}

pub fn zones(path: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let manifest: Manifest = load_manifest(path)?;
    let zones: Vec<String> = manifest.reverse_zones();

    match cfg.format {
        OutputFormat::Json => print::json(&zones, cfg),
        OutputFormat::Text => {
            print::lines(zones);
            Ok(())
        }
    }
}

pub fn members(zone: &str, path: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let manifest: Manifest = load_manifest(path)?;
    let members: Vec<ZoneMember> = manifest.zone_members(zone);

    if members.is_empty() && !cfg.quiet {
        print::header(&format!("no members in {zone}"), cfg);
    }

    match cfg.format {
        OutputFormat::Json => print::json(&members, cfg),
        OutputFormat::Text => {
            print::lines(
                members
                    .iter()
                    .map(|member| format!("{} {}", member.hostname, member.reverse_entry)),
            );
            Ok(())
        }
    }
}

fn load_manifest(path: Option<&Path>) -> anyhow::Result<Manifest> {
    let value: Value = input::read_json(path)?;
    Ok(Manifest::from_json(&value)?)
}
