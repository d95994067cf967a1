pub mod classify;
pub mod strategies;
pub mod target;

use clap::{ArgAction, Parser, Subcommand};

use target::Target;
use zonr_common::network::target::TargetClassification;

#[derive(Parser)]
#[command(name = "zonr")]
#[command(about = "Classifies scan targets into trust zones before they are attacked.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Chain applied to URL targets, e.g. "intranet-hostname-ends-with:corp.example|intranet-ip-pattern:10.*.*.*"
    #[arg(long, global = true, env = "ZONR_URI_STRATEGY")]
    pub uri_strategy: Option<String>,

    /// Chain applied to IP address targets, e.g. "intranet-ip-pattern:10.0.*.*,2001:db8:*:*:*:*:*:*"
    #[arg(long, global = true, env = "ZONR_ADDRESS_STRATEGY")]
    pub address_strategy: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify one or more targets (IP addresses or URLs)
    #[command(alias = "c")]
    Classify {
        #[arg(required = true)]
        targets: Vec<Target>,
        /// Exit with an error if any target lands in one of these zones, e.g. "illegal,unknown"
        #[arg(long, value_name = "ZONE", value_delimiter = ',')]
        deny: Vec<TargetClassification>,
    },
    /// List the built-in strategies and their definition prefixes
    #[command(alias = "s")]
    Strategies,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
