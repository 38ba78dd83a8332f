use anyhow::{Context, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// How a filename-case mismatch is treated during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FilenamePolicy {
    /// Mismatch fails the file.
    Error,
    /// Mismatch is reported but the file can still pass.
    Warn,
}

impl fmt::Display for FilenamePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilenamePolicy::Error => write!(f, "error"),
            FilenamePolicy::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for FilenamePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "error" => Ok(FilenamePolicy::Error),
            "warn" => Ok(FilenamePolicy::Warn),
            other => anyhow::bail!("invalid filename_policy: {other} (expected \"error\" or \"warn\")"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    pub filename_policy: FilenamePolicy,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            filename_policy: FilenamePolicy::Error,
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    // Allow tests to override with VALPROF_CONFIG_DIR
    if let Some(dir) = std::env::var_os("VALPROF_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let pd = ProjectDirs::from("", "", "valprof").context("unable to determine config dir")?;
    Ok(pd.config_dir().to_path_buf())
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn load_or_default() -> Result<UserConfig> {
    let path = config_path()?;
    if path.exists() {
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let cfg: UserConfig =
            serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg)
    } else {
        Ok(UserConfig::default())
    }
}

pub fn save(cfg: &UserConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let pretty = serde_json::to_string_pretty(cfg)?;
    fs::write(&path, pretty).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_round_trips_through_str() {
        for policy in [FilenamePolicy::Error, FilenamePolicy::Warn] {
            let parsed: FilenamePolicy = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!("strict".parse::<FilenamePolicy>().is_err());
    }
}
