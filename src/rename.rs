use crate::layout::{self, ASSET_SUBDIRS, NETWORK_DIRS};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct RenameArgs<'a> {
    pub root: Option<&'a str>,
    pub dry_run: bool,
}

/// Lowercases filenames across the fixed tree. Always succeeds as a
/// batch: individual rename failures are reported and skipped, never
/// propagated, so the exit status stays 0.
pub fn run_rename(args: RenameArgs) -> Result<()> {
    let root = layout::resolve_root(args.root)?;
    let mut renamed = 0usize;

    for dir in NETWORK_DIRS {
        let dir_path = root.join(dir);
        if !dir_path.exists() {
            println!("Directory {dir} not found, skipping.");
            continue;
        }
        println!("== {dir} ==");
        renamed += rename_entries(&dir_path, EntryFilter::ProfilesOnly, args.dry_run)?;
        for sub in ASSET_SUBDIRS {
            let sub_path = dir_path.join(sub);
            if sub_path.exists() {
                renamed += rename_entries(&sub_path, EntryFilter::AllFiles, args.dry_run)?;
            }
        }
    }

    if args.dry_run {
        println!("{renamed} files would be renamed.");
    } else {
        println!("Renamed {renamed} files.");
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryFilter {
    /// Network directories: only `.json` profiles, template excluded.
    ProfilesOnly,
    /// Asset subdirectories: every file, no extension filter.
    AllFiles,
}

fn rename_entries(dir: &Path, filter: EntryFilter, dry_run: bool) -> Result<usize> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if filter == EntryFilter::ProfilesOnly && !layout::is_profile_file(&name) {
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut renamed = 0;
    for name in names {
        let lower = name.to_lowercase();
        if lower == name {
            continue;
        }
        if dry_run {
            println!("  would rename {name} -> {lower}");
            renamed += 1;
            continue;
        }
        match fs::rename(dir.join(&name), dir.join(&lower)) {
            Ok(()) => {
                println!("  renamed {name} -> {lower}");
                renamed += 1;
            }
            Err(err) => eprintln!("  failed to rename {name}: {err}"),
        }
    }
    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lowercases_profiles_and_skips_template() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("Node-One.JSON"), "{}").unwrap();
        fs::write(dir.join("Validator-Template.json"), "{}").unwrap();
        fs::write(dir.join("Logo.PNG"), "png").unwrap();

        let renamed = rename_entries(dir, EntryFilter::ProfilesOnly, false).unwrap();
        assert_eq!(renamed, 1);
        assert!(dir.join("node-one.json").exists());
        assert!(dir.join("Validator-Template.json").exists());
        // non-json entries are untouched in network directories
        assert!(dir.join("Logo.PNG").exists());
    }

    #[test]
    fn asset_directories_take_any_extension() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("Logo.PNG"), "png").unwrap();
        fs::write(dir.join("NOEXT"), "x").unwrap();

        let renamed = rename_entries(dir, EntryFilter::AllFiles, false).unwrap();
        assert_eq!(renamed, 2);
        assert!(dir.join("logo.png").exists());
        assert!(dir.join("noext").exists());
    }

    #[test]
    fn rerun_renames_nothing() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("Node.json"), "{}").unwrap();

        assert_eq!(rename_entries(dir, EntryFilter::ProfilesOnly, false).unwrap(), 1);
        assert_eq!(rename_entries(dir, EntryFilter::ProfilesOnly, false).unwrap(), 0);
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        fs::write(dir.join("Node.json"), "{}").unwrap();

        assert_eq!(rename_entries(dir, EntryFilter::ProfilesOnly, true).unwrap(), 1);
        assert!(dir.join("Node.json").exists());
        assert!(!dir.join("node.json").exists());
    }
}
