use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Crates whose debug output `-v` turns on.
const WORKSPACE_CRATES: &[&str] = &["ipdb", "ipdb_core", "ipdb_common"];

/// Prefixes each log line with a level marker. Lines on [`PRINT_TARGET`] are
/// headers and go out bare.
pub struct IpdbFormatter;

impl<S, N> FormatEvent<S, N> for IpdbFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            write!(writer, "{} ", level_marker(meta.level()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_marker(level: &Level) -> ColoredString {
    if *level == Level::ERROR {
        "[-]".red().bold()
    } else if *level == Level::WARN {
        "[*]".yellow().bold()
    } else if *level == Level::INFO {
        "[+]".green().bold()
    } else {
        "[?]".blue()
    }
}

fn filter_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    WORKSPACE_CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .chain(std::iter::once("warn".to_string()))
        .collect::<Vec<String>>()
        .join(",")
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` is honoured unless `-v` was given, which turns on debug
/// output for the workspace crates.
pub fn init_logging(verbose: u8) {
    let filter: EnvFilter = if verbose > 0 {
        EnvFilter::new(filter_directives(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(false)))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .event_format(IpdbFormatter)
        .init();
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
