// src/registry.rs
//
// Static registry of known datasets: human-readable match label → CSV file,
// plus the registered default boxer pair where we know it.

use std::path::PathBuf;

use crate::config::consts::DATA_DIR;

#[derive(Clone, Copy, Debug)]
pub struct DatasetEntry {
    pub label: &'static str,
    pub file: &'static str,
    /// Registered default (boxer A, boxer B); None → alphabetical fallback.
    pub default_pair: Option<(&'static str, &'static str)>,
    pub source_note: &'static str,
}

pub static DATASETS: &[DatasetEntry] = &[
    DatasetEntry {
        label: "Sample Data (Generated)",
        file: "boxing_match_data.csv",
        default_pair: Some(("Lightning Lewis", "Thunder Thompson")),
        source_note: "Generated sample data for demonstration purposes.",
    },
    DatasetEntry {
        label: "Davis vs Garcia (Jan 2023)",
        file: "davis_garcia_stats.csv",
        default_pair: Some(("Gervonta Davis", "Hector Luis Garcia")),
        source_note: "Real CompuBox data. Source: BoxingScene.com",
    },
    DatasetEntry {
        label: "Davis vs Roach (Mar 2025)",
        file: "davis_roach_stats.csv",
        default_pair: Some(("Gervonta Davis", "Lamont Roach")),
        source_note: "Real CompuBox data. Source: BoxingScene.com",
    },
    DatasetEntry {
        label: "Lopez vs Barboza (May 2025)",
        file: "lopez_barboza_stats.csv",
        default_pair: Some(("Teofimo Lopez", "Arnold Barboza Jr")),
        source_note: "Real CompuBox data. Source: BoxingScene.com",
    },
    DatasetEntry {
        label: "Garcia vs Romero (May 2025)",
        file: "garcia_romero_stats.csv",
        default_pair: Some(("Ryan Garcia", "Rolando Romero")),
        source_note: "Real CompuBox data. Source: BoxingScene.com",
    },
    DatasetEntry {
        label: "Canelo vs Scull (May 2025)",
        file: "canelo_scull_stats.csv",
        default_pair: Some(("Canelo Alvarez", "William Scull")),
        source_note: "Approximate CompuBox data from news reports.",
    },
    DatasetEntry {
        label: "Eubank Jr. vs Benn (Apr 2025)",
        file: "eubank_benn_stats.csv",
        default_pair: Some(("Chris Eubank Jr.", "Conor Benn")),
        source_note: "Approximate CompuBox data from news reports.",
    },
];

pub fn all() -> &'static [DatasetEntry] {
    DATASETS
}

pub fn by_label(label: &str) -> Option<&'static DatasetEntry> {
    DATASETS.iter().find(|d| d.label == label)
}

/// Where a registry dataset lives on disk.
pub fn data_path(entry: &DatasetEntry) -> PathBuf {
    PathBuf::from(DATA_DIR).join(entry.file)
}

/// Resolve the default boxer pair against the boxers actually present.
///
/// The registered pair wins when both names exist in `boxers`; otherwise fall
/// back to the first two alphabetically. `boxers` is expected sorted (see
/// `FightData::boxers`). Fewer than two distinct boxers → None.
pub fn resolve_default_pair(
    entry: &DatasetEntry,
    boxers: &[String],
) -> Option<(String, String)> {
    if boxers.len() < 2 {
        return None;
    }
    if let Some((a, b)) = entry.default_pair {
        let has = |n: &str| boxers.iter().any(|x| x == n);
        if a != b && has(a) && has(b) {
            return Some((s!(a), s!(b)));
        }
    }
    Some((boxers[0].clone(), boxers[1].clone()))
}
