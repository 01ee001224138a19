use colored::*;
use ipdb_common::config::{Config, OutputFormat};
use serde::Serialize;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Events on this target are rendered undecorated by the log formatter.
pub const PRINT_TARGET: &str = "ipdb::print";

/// Writes a status line to stderr.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, cfg: &Config) {
    if cfg.quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    );

    print(&line);
}

/// Prints a single string result to stdout.
pub fn scalar(value: &str, cfg: &Config) -> anyhow::Result<()> {
    match cfg.format {
        OutputFormat::Json => json(value, cfg),
        OutputFormat::Text => {
            println!("{value}");
            Ok(())
        }
    }
}

/// Prints a result to stdout as JSON.
pub fn json<T>(value: &T, cfg: &Config) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
{
    let output: String = if cfg.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

pub fn lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        println!("{}", line.as_ref());
    }
}
