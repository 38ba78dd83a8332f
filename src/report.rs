use crate::profile::{CheckError, ValidatorProfile};

/// Accumulated outcome for one profile file. Errors fail the file;
/// warnings are reported but leave it valid.
#[derive(Debug, Default)]
pub struct FileReport {
    pub file: String,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckError>,
    pub profile: Option<ValidatorProfile>,
}

impl FileReport {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, err: CheckError) {
        self.errors.push(err);
    }

    pub fn warn(&mut self, err: CheckError) {
        self.warnings.push(err);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

#[derive(Debug)]
pub struct DirectoryReport {
    pub directory: String,
    /// Directory was absent; treated as zero files and valid.
    pub skipped: bool,
    pub files: Vec<FileReport>,
}

impl DirectoryReport {
    pub fn skipped(directory: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            skipped: true,
            files: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.files.iter().all(FileReport::is_valid)
    }

    pub fn valid_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_valid()).count()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }
}
