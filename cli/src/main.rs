mod commands;
mod terminal;

use commands::{CommandLine, Commands, classify, strategies};
use terminal::{logging, print};
use zonr_common::config::ResolverConfig;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = ResolverConfig::new(commands.uri_strategy, commands.address_strategy);

    match commands.command {
        Commands::Classify { targets, deny } => {
            print::header("target classification");
            classify::classify(targets, cfg, &deny)
        }
        Commands::Strategies => {
            print::header("available strategies");
            strategies::strategies();
            Ok(())
        }
    }
}
