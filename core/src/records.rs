//! # Fleet Route Records
//!
//! The input shape of the manifest: a mapping from a minion id (usually a
//! fully qualified host name) to the route that host took towards a
//! well-known destination. Only the `source` address of that route is used,
//! every other field is ignored.
//!
//! ```json
//! {
//!   "saltmaster.example": { "source": "10.1.10.20", "interface": "eth0" },
//!   "linux-1.example":    { "source": "10.2.10.20" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ManifestError;

/// Route information reported by a single host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Address the host used to reach the destination.
    #[serde(default)]
    pub source: Option<String>,
}

impl RouteInfo {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }
}

/// Route records keyed by minion id, iterated in key order.
pub type RouteRecords = BTreeMap<String, RouteInfo>;

/// Decodes route records from an arbitrary JSON value.
///
/// A value that is not a JSON object yields no records. Fleet tooling feeds
/// whatever the collection step produced straight into this function, and an
/// empty mine result is reported as an empty manifest rather than a failure.
pub fn load_route_records(value: &Value) -> Result<RouteRecords, ManifestError> {
    if !value.is_object() {
        warn!("Route records are not a JSON object, treating them as empty");
        return Ok(RouteRecords::new());
    }
    Ok(RouteRecords::deserialize(value)?)
}

/// Parses route records from JSON text.
pub fn parse_route_records(json: &str) -> Result<RouteRecords, ManifestError> {
    let value: Value = serde_json::from_str(json)?;
    load_route_records(&value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
