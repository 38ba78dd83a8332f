mod cli;
mod completions;
mod config;
mod layout;
mod profile;
mod rename;
mod report;
mod validate;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands, ConfigCmd};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate {
            root,
            json,
            filename_policy,
        } => {
            let all_valid = validate::run_validate(validate::ValidateArgs {
                root: root.as_deref(),
                json,
                filename_policy,
            })?;
            if !all_valid {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Rename { root, dry_run } => rename::run_rename(rename::RenameArgs {
            root: root.as_deref(),
            dry_run,
        }),
        Commands::Config { cmd } => cmd_config(cmd),
        Commands::Completions { shell } => completions::generate(&shell, &mut Cli::command()),
    }
}

fn cmd_config(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Get { key } => {
            let cfg = config::load_or_default()?;
            match key.as_str() {
                "filename_policy" => println!("{}", cfg.filename_policy),
                _ => anyhow::bail!("Unknown key: {key}"),
            }
        }
        ConfigCmd::Set { key, value } => {
            let mut cfg = config::load_or_default()?;
            match key.as_str() {
                "filename_policy" => cfg.filename_policy = value.parse()?,
                _ => anyhow::bail!("Unknown key: {key}"),
            }
            config::save(&cfg)?;
            println!("ok");
        }
    }
    Ok(())
}
