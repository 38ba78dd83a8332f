use anyhow::{bail, Result};
use clap::Command;
use clap_complete::Shell;
use std::io;

pub fn generate(shell_name: &str, cmd: &mut Command) -> Result<()> {
    let shell = match shell_name {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "elvish" => Shell::Elvish,
        "powershell" => Shell::PowerShell,
        other => bail!("Unsupported shell: {other}"),
    };
    clap_complete::generate(shell, cmd, "valprof", &mut io::stdout());
    Ok(())
}
