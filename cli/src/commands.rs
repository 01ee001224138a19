pub mod calc;
pub mod manifest;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use ipdb_common::config::{Config, OutputFormat};
use ipdb_common::network::zone::ZoneClass;

#[derive(Parser)]
#[command(name = "ipdb")]
#[command(about = "IPv4 address algebra and reverse DNS zone manifests.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format of results (json or text)
    #[arg(long, global = true, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Only print results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show debug output of the ipdb crates
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reverse the octets of an address
    #[command(alias = "r")]
    Reverse { address: String },
    /// Reverse zone holding an address
    #[command(alias = "rz")]
    ReverseZone {
        address: String,
        /// Classful boundary (A, B or C)
        #[arg(default_value_t = ZoneClass::C)]
        zone_class: ZoneClass,
    },
    /// PTR owner name of an address
    Ptr { address: String },
    /// Add two addresses as integers
    Add { a: String, b: String },
    /// Subtract one address from another as integers
    Sub { a: String, b: String },
    /// Modulus of one address against another
    Mod { a: String, b: String },
    /// Align an address down to a boundary
    Shift { a: String, b: String },
    /// Build a manifest from fleet route records (JSON)
    #[command(alias = "m")]
    Manifest {
        /// Route records file, stdin when absent or '-'
        input: Option<PathBuf>,
    },
    /// List the distinct reverse zones of a manifest
    #[command(alias = "z")]
    Zones {
        /// Manifest file, stdin when absent or '-'
        input: Option<PathBuf>,
    },
    /// List the members of one reverse zone of a manifest
    Members {
        zone: String,
        /// Manifest file, stdin when absent or '-'
        input: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            format: self.format,
            pretty: self.pretty,
            quiet: self.quiet,
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
