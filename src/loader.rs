//! Dataset loading.
//!
//! The interchange format is a JSON array of `{id, name, lat, lng}` records;
//! `.wpb` files hold the binary snapshot form (see [`DatasetDoc`]).

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

use crate::model::{Dataset, DatasetDoc, Point};

/// Parse a JSON array of waypoint records into a validated dataset.
pub fn parse_dataset_json(json: &str) -> Result<Dataset> {
    let records: Vec<Point> = serde_json::from_str(json).context("Parse waypoint records")?;
    Dataset::from_points(records)
}

/// Load a dataset from a file, branching on the extension: `.wpb` is read as
/// a binary snapshot, anything else is parsed as JSON.
pub fn load_dataset(path: &Utf8Path) -> Result<Dataset> {
    if path.extension() == Some("wpb") {
        let doc = DatasetDoc::load_from_binary(path.as_std_path())
            .with_context(|| format!("Failed to read snapshot {}", path))?;
        Ok(doc.dataset)
    } else {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
        parse_dataset_json(&text).with_context(|| format!("Failed to parse {}", path))
    }
}

/// Find dataset files (`.json` or `.wpb`) under `dir`, sorted by path.
pub fn discover_dataset_files(dir: &Utf8Path) -> Vec<Utf8PathBuf> {
    let mut found: Vec<Utf8PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.into_path()).ok())
        .filter(|p| matches!(p.extension(), Some("json") | Some("wpb")))
        .collect();
    found.sort();
    found
}
