// src/store.rs
// progress.json: the one persisted entity. Whole-file read, whole-file overwrite.
// Single writer assumed; there is no locking.

use std::{fs, path::Path};

use chrono::{Local, NaiveDate};

use crate::data::ProgressSnapshot;
use crate::error::Result;
use crate::file::ensure_parent;

const STAMP_FMT: &str = "%m/%d/%y";

/// Read the snapshot at `path`, or a fresh one if the file does not exist yet.
pub fn load(path: &Path) -> Result<ProgressSnapshot> {
    if !path.exists() {
        logd!("{} not found, starting empty", path.display());
        return Ok(ProgressSnapshot::default());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Stamp today's date and write the whole snapshot to `path`.
pub fn save(snapshot: &mut ProgressSnapshot, path: &Path) -> Result<()> {
    save_dated(snapshot, path, Local::now().date_naive())
}

pub fn save_dated(snapshot: &mut ProgressSnapshot, path: &Path, today: NaiveDate) -> Result<()> {
    snapshot.last_updated = Some(today.format(STAMP_FMT).to_string());
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    logf!("saved progress to {}", path.display());
    Ok(())
}
