//! # Fleet Manifest
//!
//! A hostname-keyed directory of addresses and the reverse-zone metadata a
//! DNS server needs to publish PTR records for them.
//!
//! The manifest is built in one pass from [`RouteRecords`] and is read-only
//! afterwards. Entries are kept sorted by hostname, which is also the order
//! every query returns them in.

use std::collections::{BTreeMap, BTreeSet};

use ipdb_common::error::AddressError;
use ipdb_common::network::address::{self, OCTETS};
use ipdb_common::network::zone::{self, ZoneClass};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ManifestError;
use crate::records::RouteRecords;

/// Address assumed for a host that reported no route source.
pub const DEFAULT_SOURCE: &str = "0.0.0.0";

/// Address and reverse-zone metadata of a single host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    #[serde(default)]
    pub ip: String,
    /// All four octets reversed, e.g. `20.10.1.10`.
    #[serde(default)]
    pub reverse_ip: String,
    /// Class C reverse zone, e.g. `10.1.10`.
    #[serde(default)]
    pub reverse_zone: String,
    /// Name of the PTR record inside `reverse_zone`, the last octet.
    #[serde(default)]
    pub reverse_entry: String,
}

impl ManifestEntry {
    /// Derives an entry from a host's source address.
    ///
    /// The address must carry all four octets. `ip`, `reverse_ip` and
    /// `reverse_entry` keep the source text as reported, so `10.1.10.020`
    /// reverses to `020.10.1.10`. Only `reverse_zone` goes through the
    /// integer form and comes out without leading zeros.
    pub fn from_source(source: &str) -> Result<Self, AddressError> {
        let octets: Vec<&str> = source.split('.').collect();
        if octets.len() != OCTETS {
            return Err(AddressError::malformed(
                source,
                format!("expected {OCTETS} octets, found {}", octets.len()),
            ));
        }
        address::parse(source)?;

        Ok(Self {
            ip: source.to_string(),
            reverse_ip: zone::reverse(source),
            reverse_zone: zone::reverse_zone(source, ZoneClass::C)?,
            reverse_entry: octets[OCTETS - 1].to_string(),
        })
    }
}

/// A host inside a reverse zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneMember {
    pub hostname: String,
    pub reverse_entry: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

/// The short host name of a minion id, the text before the first dot.
pub fn hostname_of(key: &str) -> &str {
    key.split('.').next().unwrap_or(key)
}

impl Manifest {
    /// Builds the manifest from fleet route records.
    ///
    /// Keys are reduced to their short host name. When two keys reduce to
    /// the same name, the one sorting last wins.
    pub fn build(records: &RouteRecords) -> Result<Self, ManifestError> {
        let mut entries: BTreeMap<String, ManifestEntry> = BTreeMap::new();

        for (key, route) in records {
            let hostname: &str = hostname_of(key);
            let source: &str = route.source.as_deref().unwrap_or(DEFAULT_SOURCE);

            let entry = ManifestEntry::from_source(source).map_err(|error| {
                ManifestError::Address {
                    key: key.clone(),
                    error,
                }
            })?;
            debug!(
                hostname,
                ip = %entry.ip,
                zone = %entry.reverse_zone,
                "Derived manifest entry"
            );

            if entries.insert(hostname.to_string(), entry).is_some() {
                warn!("Hostname '{hostname}' reported more than once, keeping '{key}'");
            }
        }

        Ok(Self { entries })
    }

    /// Reads a manifest back from JSON.
    ///
    /// Like [`crate::records::load_route_records`], a value that is not a
    /// JSON object yields an empty manifest.
    pub fn from_json(value: &Value) -> Result<Self, ManifestError> {
        if !value.is_object() {
            warn!("Manifest is not a JSON object, treating it as empty");
            return Ok(Self::default());
        }
        Ok(Self::deserialize(value)?)
    }

    /// Distinct reverse zones, sorted. Entries without a zone are skipped.
    pub fn reverse_zones(&self) -> Vec<String> {
        self.entries
            .values()
            .map(|entry| entry.reverse_zone.as_str())
            .filter(|zone| !zone.is_empty())
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    /// Hosts whose reverse zone equals `zone`, sorted by hostname.
    ///
    /// Entries without a zone never match, not even an empty `zone`.
    pub fn zone_members(&self, zone: &str) -> Vec<ZoneMember> {
        self.entries
            .iter()
            .filter(|(_, entry)| !entry.reverse_zone.is_empty() && entry.reverse_zone == zone)
            .map(|(hostname, entry)| ZoneMember {
                hostname: hostname.clone(),
                reverse_entry: entry.reverse_entry.clone(),
            })
            .collect()
    }

    pub fn get(&self, hostname: &str) -> Option<&ManifestEntry> {
        self.entries.get(hostname)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ManifestEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ManifestEntry)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, ManifestEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
