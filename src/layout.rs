use anyhow::{Context, Result};
use std::path::PathBuf;

/// Fixed directory shape of a profile repo checkout. There is exactly one
/// level of network directories, each with two asset subdirectories; no
/// generic tree walking is needed.
pub const NETWORK_DIRS: [&str; 2] = ["testnet", "mainnet"];
pub const ASSET_SUBDIRS: [&str; 2] = ["images", "background"];

/// Authoring template, excluded from every batch operation.
pub const TEMPLATE_FILENAME: &str = "validator-template.json";

pub const IMAGE_PREFIX: &str = "./images/";
pub const BACKGROUND_PREFIX: &str = "./background/";

pub fn resolve_root(flag: Option<&str>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("determine current directory")?;
    Ok(match flag {
        Some(p) => {
            let p = PathBuf::from(p);
            if p.is_absolute() {
                p
            } else {
                cwd.join(p)
            }
        }
        None => cwd,
    })
}

/// A profile file is any `.json` entry except the reserved template; both
/// checks ignore case so the template stays excluded under any spelling.
pub fn is_profile_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".json") && lower != TEMPLATE_FILENAME
}

/// Base name without the `.json` extension must already be lowercase.
pub fn stem_is_lowercase(file_name: &str) -> bool {
    let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
    stem == stem.to_lowercase()
}
