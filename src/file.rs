// src/file.rs
//
// Export file writing. The GUI goes through write_export (path derived from
// ExportOptions); the CLI passes an explicit path to write_table.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{to_export_string, Delim};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write one export per the options; returns the path actually written.
pub fn write_export(
    export: &ExportOptions,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
) -> Result<PathBuf> {
    let path = export.out_path();
    write_table(&path, headers, rows, export.include_headers, export.format)?;
    Ok(path)
}

pub fn write_table(
    path: &Path,
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    format: Delim,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, to_export_string(headers, rows, include_headers, format))?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
