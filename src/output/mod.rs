pub mod csv;
pub mod json;
pub mod summary;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::results::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the files written by [`persist`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub summary: PathBuf,
}

fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Write the collection as JSON, CSV and a text summary
///
/// Each file is rendered in full before it is written.
pub fn persist(records: &[Record], config: &OutputConfig) -> Result<OutputPaths> {
    ensure_directory(&config.dir)?;

    let paths = OutputPaths {
        json: config.json_path(),
        csv: config.csv_path(),
        summary: config.summary_path(),
    };

    fs::write(&paths.json, json::to_json_string(records)?)?;
    ::log::info!("Saved {} records to {}", records.len(), paths.json.display());

    fs::write(&paths.csv, csv::to_csv_string(records))?;
    ::log::info!("Saved {} records to {}", records.len(), paths.csv.display());

    fs::write(&paths.summary, summary::to_summary_string(records))?;
    ::log::info!("Saved summary to {}", paths.summary.display());

    Ok(paths)
}
