use anyhow::{Result, anyhow};
use log::{debug, error, info, warn};
use std::path::Path;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::timing::{self, TimingError};

// @module: Application controller for subtitle checking

/// Aggregate result of one checking run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Files read and validated
    pub files_checked: usize,

    /// Files with at least one timing error
    pub files_with_errors: usize,

    /// Timing errors across all checked files
    pub total_errors: usize,
}

impl ValidationSummary {
    /// True when no checked file had a timing error
    pub fn is_clean(&self) -> bool {
        self.total_errors == 0
    }

    fn record(&mut self, errors: &[TimingError]) {
        self.files_checked += 1;
        if !errors.is_empty() {
            self.files_with_errors += 1;
            self.total_errors += errors.len();
        }
    }
}

/// Main application controller for subtitle timing checks
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Check a single subtitle file.
    ///
    /// Files whose extension is not in the configured list are skipped
    /// without being read or counted.
    pub fn run<P: AsRef<Path>>(&self, input_file: P) -> Result<ValidationSummary> {
        let path = input_file.as_ref();

        if !FileManager::file_exists(path) {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }

        let mut summary = ValidationSummary::default();

        if !FileManager::has_matching_extension(path, &self.config.extensions) {
            warn!(
                "Skipping {:?}: not a subtitle file (expected one of {:?})",
                path, self.config.extensions
            );
            return Ok(summary);
        }

        let errors = self.check_file(path)?;
        summary.record(&errors);

        Ok(summary)
    }

    /// Check every subtitle file under a directory, recursively.
    ///
    /// A file that cannot be read is logged and skipped; the walk continues.
    pub fn run_folder<P: AsRef<Path>>(&self, input_dir: P) -> Result<ValidationSummary> {
        let dir = input_dir.as_ref();

        if !FileManager::dir_exists(dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", dir));
        }

        let files = FileManager::find_files(dir, &self.config.extensions)?;
        if files.is_empty() {
            warn!("No subtitle files found in {:?}", dir);
        }

        let mut summary = ValidationSummary::default();

        for file in files {
            match self.check_file(&file) {
                Ok(errors) => summary.record(&errors),
                Err(e) => error!("Error checking file {:?}: {}", file, e),
            }
        }

        info!(
            "Checked {} files, {} with timing errors ({} total)",
            summary.files_checked, summary.files_with_errors, summary.total_errors
        );

        Ok(summary)
    }

    /// Validate one file's contents and report the result
    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<TimingError>> {
        let path = path.as_ref();
        debug!("Checking subtitle file: {:?}", path);

        let contents = FileManager::read_to_string(path)?;
        let errors = timing::validate(&contents);

        self.report(path, &errors);
        Ok(errors)
    }

    // Reporting policy lives here, not in the core: a clean file gets an
    // info line, a broken one its first error only (all with report_all).
    fn report(&self, path: &Path, errors: &[TimingError]) {
        if errors.is_empty() {
            info!("No errors were found in {:?}", path);
            return;
        }

        if self.config.report_all {
            for e in errors {
                error!("{:?}: {} (offset {})", path, e, e.offset);
            }
        } else if let Some(first) = errors.first() {
            error!("{:?}: {} (offset {})", path, first, first.offset);
        }
    }
}
