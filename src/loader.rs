// src/loader.rs
//
// CSV ingestion: schema check, typed parse, optional-column zero-fill.
// Failure kinds are kept distinct so the UI can word its notices properly.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::csv::{parse_rows, Delim};
use crate::data::FightData;
use crate::records::{FeatureAvailability, RoundRecord};

pub const REQUIRED_COLUMNS: &[&str] = &[
    "Round",
    "Boxer",
    "Punches Thrown",
    "Punches Landed",
    "Significant Punches Thrown",
    "Significant Punches Landed",
];

pub const OPTIONAL_COLUMNS: &[&str] = &[
    "Ring Control %",
    "Head Punches Landed",
    "Body Punches Landed",
    "Jabs Landed",
    "Power Punches Landed",
];

#[derive(Debug)]
pub enum LoadError {
    /// File does not exist.
    NotFound(PathBuf),
    /// File exists but could not be read.
    Unreadable(PathBuf, io::Error),
    /// Header row lacks one or more required columns.
    MissingColumns(Vec<String>),
    /// A data cell failed to parse. 1-based line number of the offending row.
    Malformed { line: usize, reason: String },
    /// No data rows at all (header-only or empty file).
    Empty(PathBuf),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound(p) => write!(f, "file not found: {}", p.display()),
            LoadError::Unreadable(p, e) => write!(f, "cannot read {}: {}", p.display(), e),
            LoadError::MissingColumns(cols) => {
                write!(f, "missing required column(s): {}", cols.join(", "))
            }
            LoadError::Malformed { line, reason } => {
                write!(f, "malformed row at line {}: {}", line, reason)
            }
            LoadError::Empty(p) => write!(f, "no data rows in {}", p.display()),
        }
    }
}

impl Error for LoadError {}

/// Case-insensitive header lookup; cells are trimmed before comparison.
fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn parse_count(cell: &str, column: &str, line: usize) -> Result<u32, LoadError> {
    let t = cell.trim();
    if t.is_empty() {
        return Ok(0);
    }
    t.parse::<u32>().map_err(|_| LoadError::Malformed {
        line,
        reason: format!("{:?} is not a non-negative integer ({})", t, column),
    })
}

fn parse_pct(cell: &str, column: &str, line: usize) -> Result<f64, LoadError> {
    let t = cell.trim();
    if t.is_empty() {
        return Ok(0.0);
    }
    let v: f64 = t.parse().map_err(|_| LoadError::Malformed {
        line,
        reason: format!("{:?} is not a number ({})", t, column),
    })?;
    if !(0.0..=100.0).contains(&v) {
        return Err(LoadError::Malformed {
            line,
            reason: format!("{} out of range [0, 100]: {}", column, v),
        });
    }
    Ok(v)
}

/// Load one fight CSV. Required columns must all be present; missing optional
/// columns are zero-filled and reported via `FeatureAvailability`.
pub fn load(path: &Path, label: &str) -> Result<FightData, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| LoadError::Unreadable(path.to_path_buf(), e))?;

    let mut rows = parse_rows(&text, Delim::Csv);
    if rows.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    let headers = rows.remove(0);
    if rows.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    // Schema check: name every missing required column, not just the first.
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| find_column(&headers, c).is_none())
        .map(|c| s!(*c))
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let col = |name: &str| find_column(&headers, name);
    let c_round = col("Round").unwrap();
    let c_boxer = col("Boxer").unwrap();
    let c_thrown = col("Punches Thrown").unwrap();
    let c_landed = col("Punches Landed").unwrap();
    let c_sig_thrown = col("Significant Punches Thrown").unwrap();
    let c_sig_landed = col("Significant Punches Landed").unwrap();
    let c_ring = col("Ring Control %");
    let c_head = col("Head Punches Landed");
    let c_body = col("Body Punches Landed");
    let c_jabs = col("Jabs Landed");
    let c_power = col("Power Punches Landed");

    let cell = |row: &[String], ix: usize| row.get(ix).cloned().unwrap_or_default();
    let opt_cell = |row: &[String], ix: Option<usize>| {
        ix.and_then(|i| row.get(i).cloned()).unwrap_or_default()
    };

    let mut records = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let line = i + 2; // 1-based, after the header row

        let round: u32 = cell(row, c_round)
            .trim()
            .parse()
            .map_err(|_| LoadError::Malformed {
                line,
                reason: format!("{:?} is not a round number", cell(row, c_round)),
            })?;
        if round == 0 {
            return Err(LoadError::Malformed {
                line,
                reason: s!("round numbers start at 1"),
            });
        }

        let boxer = cell(row, c_boxer).trim().to_string();
        if boxer.is_empty() {
            return Err(LoadError::Malformed {
                line,
                reason: s!("empty boxer name"),
            });
        }

        let rec = RoundRecord {
            round,
            boxer,
            punches_thrown: parse_count(&cell(row, c_thrown), "Punches Thrown", line)?,
            punches_landed: parse_count(&cell(row, c_landed), "Punches Landed", line)?,
            sig_punches_thrown: parse_count(
                &cell(row, c_sig_thrown),
                "Significant Punches Thrown",
                line,
            )?,
            sig_punches_landed: parse_count(
                &cell(row, c_sig_landed),
                "Significant Punches Landed",
                line,
            )?,
            head_punches_landed: parse_count(
                &opt_cell(row, c_head),
                "Head Punches Landed",
                line,
            )?,
            body_punches_landed: parse_count(
                &opt_cell(row, c_body),
                "Body Punches Landed",
                line,
            )?,
            jabs_landed: parse_count(&opt_cell(row, c_jabs), "Jabs Landed", line)?,
            power_punches_landed: parse_count(
                &opt_cell(row, c_power),
                "Power Punches Landed",
                line,
            )?,
            ring_control_pct: parse_pct(&opt_cell(row, c_ring), "Ring Control %", line)?,
        };

        // Source data is pass-through here; CompuBox sheets occasionally
        // disagree with themselves and we display what they say.
        if rec.punches_landed > rec.punches_thrown
            || rec.sig_punches_landed > rec.sig_punches_thrown
        {
            loge!(
                "Load: {} line {}: landed > thrown for {}",
                path.display(),
                line,
                rec.boxer
            );
        }

        records.push(rec);
    }

    // A column that exists but sums to zero counts as "not tracked".
    let features = FeatureAvailability {
        ring_control: c_ring.is_some() && records.iter().any(|r| r.ring_control_pct > 0.0),
        head_body: (c_head.is_some() || c_body.is_some())
            && records
                .iter()
                .any(|r| r.head_punches_landed + r.body_punches_landed > 0),
        jab_power: (c_jabs.is_some() || c_power.is_some())
            && records
                .iter()
                .any(|r| r.jabs_landed + r.power_punches_landed > 0),
    };

    logf!(
        "Load: {} rows from {} (ring_control={}, head_body={}, jab_power={})",
        records.len(),
        path.display(),
        features.ring_control,
        features.head_body,
        features.jab_power
    );

    Ok(FightData {
        label: s!(label),
        records,
        features,
    })
}
