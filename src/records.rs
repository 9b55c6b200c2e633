// src/records.rs
//
// Core record types for round-by-round boxing statistics.
//
// - RoundRecord: one CSV row, one (round, boxer) pair. Immutable after load.
// - FeatureAvailability: which optional metrics the source actually carries.
// - MatchAggregate: per-boxer totals and derived ratios over a round subset.

/// One row of round-level punch statistics for a single boxer.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundRecord {
    pub round: u32,
    pub boxer: String,

    pub punches_thrown: u32,
    pub punches_landed: u32,
    pub sig_punches_thrown: u32,
    pub sig_punches_landed: u32,

    // Optional columns; zero when the source lacks them.
    // FeatureAvailability says whether zero means "none" or "not tracked".
    pub head_punches_landed: u32,
    pub body_punches_landed: u32,
    pub jabs_landed: u32,
    pub power_punches_landed: u32,

    /// Percentage in [0, 100]; 0 doubles as the "not available" sentinel.
    pub ring_control_pct: f64,
}

impl RoundRecord {
    /// Column labels matching `to_row()`, for table display and export.
    pub const HEADERS: &'static [&'static str] = &[
        "Round",
        "Boxer",
        "Punches Thrown",
        "Punches Landed",
        "Significant Punches Thrown",
        "Significant Punches Landed",
        "Head Punches Landed",
        "Body Punches Landed",
        "Jabs Landed",
        "Power Punches Landed",
        "Ring Control %",
    ];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.round.to_string(),
            self.boxer.clone(),
            self.punches_thrown.to_string(),
            self.punches_landed.to_string(),
            self.sig_punches_thrown.to_string(),
            self.sig_punches_landed.to_string(),
            self.head_punches_landed.to_string(),
            self.body_punches_landed.to_string(),
            self.jabs_landed.to_string(),
            self.power_punches_landed.to_string(),
            format!("{:.1}", self.ring_control_pct),
        ]
    }
}

/// Per-metric flags computed once at load time: column present in the source
/// AND nonzero somewhere. A column of all zeros is treated the same as a
/// missing column (the loader zero-fills missing optionals).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureAvailability {
    pub ring_control: bool,
    pub head_body: bool,
    pub jab_power: bool,
}

/// Summed and derived statistics for one boxer over a chosen round subset.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchAggregate {
    pub boxer: String,
    pub total_thrown: u32,
    pub total_landed: u32,
    pub punch_accuracy_pct: f64,
    pub total_sig_thrown: u32,
    pub total_sig_landed: u32,
    pub sig_accuracy_pct: f64,
    pub total_head_landed: u32,
    pub total_body_landed: u32,
    /// Arithmetic mean over the rounds present in the subset.
    pub avg_ring_control: f64,
}

impl MatchAggregate {
    /// Column labels matching `to_row()`, for table display and export.
    pub const HEADERS: &'static [&'static str] = &[
        "Boxer",
        "Thrown",
        "Landed",
        "Accuracy %",
        "Sig. Thrown",
        "Sig. Landed",
        "Sig. Accuracy %",
        "Head Landed",
        "Body Landed",
        "Avg Ring Control %",
    ];

    /// Stringify for the table/export boundary.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.boxer.clone(),
            self.total_thrown.to_string(),
            self.total_landed.to_string(),
            format!("{:.1}", self.punch_accuracy_pct),
            self.total_sig_thrown.to_string(),
            self.total_sig_landed.to_string(),
            format!("{:.1}", self.sig_accuracy_pct),
            self.total_head_landed.to_string(),
            self.total_body_landed.to_string(),
            format!("{:.1}", self.avg_ring_control),
        ]
    }
}
