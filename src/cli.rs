use clap::{Parser, Subcommand};

use crate::config::FilenamePolicy;

#[derive(Parser, Debug)]
#[command(name = "valprof", version, about = "Validator profile directory maintenance tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate profile JSON files under testnet/ and mainnet/
    Validate {
        #[arg(long)] root: Option<String>,
        #[arg(long)] json: bool,
        #[arg(long, value_enum)] filename_policy: Option<FilenamePolicy>,
    },
    /// Rename files in the profile tree to lowercase
    Rename {
        #[arg(long)] root: Option<String>,
        #[arg(long)] dry_run: bool,
    },
    Config { #[command(subcommand)] cmd: ConfigCmd },
    /// Print a completion script for the given shell
    Completions { shell: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    Get { key: String },
    Set { key: String, value: String },
}
