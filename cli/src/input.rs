use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use serde_json::Value;
use tracing::debug;

/// Reads a JSON document from `path`, or from stdin when `path` is absent or `-`.
pub fn read_json(path: Option<&Path>) -> anyhow::Result<Value> {
    let text: String = match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        _ => {
            debug!("Reading stdin");
            io::read_to_string(io::stdin()).context("Failed to read stdin")?
        }
    };

    parse_json(&text)
}

fn parse_json(text: &str) -> anyhow::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).context("Input is not valid JSON")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
