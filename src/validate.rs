use crate::config::{self, FilenamePolicy};
use crate::layout::{self, BACKGROUND_PREFIX, IMAGE_PREFIX, NETWORK_DIRS};
use crate::profile::CheckError;
use crate::report::{DirectoryReport, FileReport};
use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::IsTerminal;
use std::path::Path;

pub struct ValidateArgs<'a> {
    pub root: Option<&'a str>,
    pub json: bool,
    pub filename_policy: Option<FilenamePolicy>,
}

/// Validates both network directories and prints the report. Returns
/// whether every processed file passed; the caller maps that onto the
/// process exit status.
pub fn run_validate(args: ValidateArgs) -> Result<bool> {
    let cfg = config::load_or_default()?;
    let policy = args.filename_policy.unwrap_or(cfg.filename_policy);
    let root = layout::resolve_root(args.root)?;

    let mut reports = Vec::with_capacity(NETWORK_DIRS.len());
    for dir in NETWORK_DIRS {
        reports.push(validate_directory(&root.join(dir), dir, policy)?);
    }
    let all_valid = reports.iter().all(DirectoryReport::is_valid);

    if args.json {
        print_json(&reports, all_valid)?;
    } else {
        print_report(&reports, all_valid);
    }
    Ok(all_valid)
}

/// Lists profile files in one network directory and validates each. A
/// missing directory is skipped and counts as valid; any other read
/// failure is fatal for the whole run.
pub fn validate_directory(
    dir: &Path,
    name: &str,
    policy: FilenamePolicy,
) -> Result<DirectoryReport> {
    if !dir.exists() {
        return Ok(DirectoryReport::skipped(name));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))? {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if layout::is_profile_file(&file_name) && entry.path().is_file() {
            names.push(file_name);
        }
    }
    names.sort();

    let files = names
        .into_iter()
        .map(|file_name| validate_profile_file(&dir.join(&file_name), policy))
        .collect();
    Ok(DirectoryReport {
        directory: name.to_string(),
        skipped: false,
        files,
    })
}

pub fn validate_profile_file(path: &Path, policy: FilenamePolicy) -> FileReport {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut report = FileReport::new(&file_name);

    // A parse failure (or unreadable file) is the only terminal check.
    let value: Value = match fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|raw| serde_json::from_str(&raw).map_err(|err| err.to_string()))
    {
        Ok(value) => value,
        Err(message) => {
            report.push(CheckError::InvalidJson(message));
            return report;
        }
    };

    if !layout::stem_is_lowercase(&file_name) {
        let err = CheckError::FilenameCase {
            found: file_name.clone(),
            expected: file_name.to_lowercase(),
        };
        match policy {
            FilenamePolicy::Error => report.push(err),
            FilenamePolicy::Warn => report.warn(err),
        }
    }

    check_fields(path, &value, &mut report);
    report.profile = serde_json::from_value(value).ok();
    report
}

fn check_fields(path: &Path, value: &Value, report: &mut FileReport) {
    for field in ["moniker", "details"] {
        if !is_nonempty_string(value.get(field)) {
            report.push(CheckError::MissingField(field));
        }
    }

    let profile_field = value.get("profile").or_else(|| {
        let legacy = value.get("profile_image_url");
        if legacy.is_some() {
            eprintln!(
                "warning: {}: `profile_image_url` is deprecated, rename the field to `profile`",
                report.file
            );
        }
        legacy
    });
    if !is_nonempty_string(profile_field) {
        report.push(CheckError::MissingField("profile"));
    }

    match value.get("background") {
        None | Some(Value::Null) | Some(Value::String(_)) => {}
        Some(_) => report.push(CheckError::InvalidFieldType {
            field: "background",
        }),
    }

    match value.get("contact") {
        Some(Value::Object(contact)) => {
            for (key, field) in [("email", "contact.email"), ("website", "contact.website")] {
                if !is_nonempty_string(contact.get(key)) {
                    report.push(CheckError::MissingField(field));
                }
            }
        }
        _ => report.push(CheckError::MissingField("contact object")),
    }

    check_asset_path(path, profile_field, "profile", IMAGE_PREFIX, report);
    check_asset_path(
        path,
        value.get("background"),
        "background",
        BACKGROUND_PREFIX,
        report,
    );
}

fn is_nonempty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// Prefix check first; the existence check only runs once the prefix is
/// known good, so a malformed path never produces a confusing
/// missing-file message on top of the prefix error.
fn check_asset_path(
    json_path: &Path,
    field: Option<&Value>,
    name: &'static str,
    prefix: &'static str,
    report: &mut FileReport,
) {
    let Some(Value::String(rel)) = field else {
        return;
    };
    if rel.is_empty() {
        return;
    }
    if !rel.starts_with(prefix) {
        report.push(CheckError::BadPathPrefix {
            field: name,
            prefix,
        });
        return;
    }
    let dir = json_path.parent().unwrap_or(Path::new("."));
    if !dir.join(rel).exists() {
        report.push(CheckError::MissingReferencedFile {
            field: name,
            path: rel.clone(),
        });
    }
}

fn print_report(reports: &[DirectoryReport], all_valid: bool) {
    let tty = std::io::stdout().is_terminal();
    for report in reports {
        if report.skipped {
            println!("Directory {} not found, skipping.", report.directory);
            continue;
        }
        println!("== {} ==", report.directory);
        if report.files.is_empty() {
            println!("  no profile files found");
            continue;
        }
        for file in &report.files {
            let mark = if file.is_valid() {
                if tty {
                    "ok".green().to_string()
                } else {
                    "ok".to_string()
                }
            } else if tty {
                "FAIL".bold().red().to_string()
            } else {
                "FAIL".to_string()
            };
            println!("  {mark} {}", file.file);
            for err in &file.errors {
                println!("    - {err}");
            }
            for warning in &file.warnings {
                println!("    - warning: {warning}");
            }
        }
        println!("{}/{} files valid", report.valid_count(), report.total());
    }
    if all_valid {
        println!("All profiles valid.");
    } else {
        println!("Some profiles have errors.");
    }
}

#[derive(Serialize)]
struct JsonReport {
    valid: bool,
    #[serde(rename = "generatedAt")]
    generated_at: String,
    directories: Vec<DirRow>,
}

#[derive(Serialize)]
struct DirRow {
    directory: String,
    skipped: bool,
    valid: bool,
    files: Vec<FileRow>,
}

#[derive(Serialize)]
struct FileRow {
    file: String,
    valid: bool,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
}

fn print_json(reports: &[DirectoryReport], all_valid: bool) -> Result<()> {
    let directories = reports
        .iter()
        .map(|report| DirRow {
            directory: report.directory.clone(),
            skipped: report.skipped,
            valid: report.is_valid(),
            files: report
                .files
                .iter()
                .map(|file| FileRow {
                    file: file.file.clone(),
                    valid: file.is_valid(),
                    errors: file.errors.iter().map(ToString::to_string).collect(),
                    warnings: file.warnings.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        })
        .collect();
    let doc = JsonReport {
        valid: all_valid,
        generated_at: Utc::now().to_rfc3339(),
        directories,
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
