mod commands;
mod input;
mod terminal;

use commands::calc::{self, Operation};
use commands::{CommandLine, Commands, manifest};
use ipdb_common::config::Config;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg: Config = commands.config();

    match commands.command {
        Commands::Reverse { address } => calc::reverse(&address, &cfg),
        Commands::ReverseZone {
            address,
            zone_class,
        } => calc::reverse_zone(&address, zone_class, &cfg),
        Commands::Ptr { address } => calc::ptr(&address, &cfg),
        Commands::Add { a, b } => calc::arithmetic(Operation::Add, &a, &b, &cfg),
        Commands::Sub { a, b } => calc::arithmetic(Operation::Sub, &a, &b, &cfg),
        Commands::Mod { a, b } => calc::arithmetic(Operation::Mod, &a, &b, &cfg),
        Commands::Shift { a, b } => calc::arithmetic(Operation::Shift, &a, &b, &cfg),
        Commands::Manifest { input } => manifest::manifest(input.as_deref(), &cfg),
        Commands::Zones { input } => manifest::zones(input.as_deref(), &cfg),
        Commands::Members { zone, input } => manifest::members(&zone, input.as_deref(), &cfg),
    }
}
