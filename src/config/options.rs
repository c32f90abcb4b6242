// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Where the tracker reads and writes its files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerOptions {
    pub progress_file: PathBuf,
    pub report_file: PathBuf,
    pub topics_backup: PathBuf,
    pub log_file: PathBuf,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            progress_file: PathBuf::from(PROGRESS_FILE),
            report_file: PathBuf::from(REPORT_FILE),
            topics_backup: PathBuf::from(TOPICS_BACKUP_FILE),
            log_file: Path::new(STORE_DIR).join(LOG_FILE),
        }
    }
}

impl TrackerOptions {
    /// Same file names, rooted at `dir` instead of the working directory.
    pub fn in_dir(dir: &Path) -> Self {
        let d = Self::default();
        Self {
            progress_file: dir.join(d.progress_file),
            report_file: dir.join(d.report_file),
            topics_backup: dir.join(d.topics_backup),
            log_file: dir.join(d.log_file),
        }
    }
}
