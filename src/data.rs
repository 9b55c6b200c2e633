// src/data.rs
//
// Canonical and view-layer fight data.
//
// - FightData: read-only holder for one loaded dataset. Built once by the
//   loader; nothing mutates it afterwards.
// - RoundView: derived view produced by applying a SelectionState (boxer pair
//   + round filter). Holds row indexes into FightData, no copies.

use crate::aggregate::RoundFilter;
use crate::records::{FeatureAvailability, RoundRecord};

/// Authoritative record set for one fight, immutable after load.
#[derive(Clone, Debug)]
pub struct FightData {
    pub label: String,
    pub records: Vec<RoundRecord>,
    pub features: FeatureAvailability,
}

impl FightData {
    /// Distinct boxer names, alphabetically sorted.
    pub fn boxers(&self) -> Vec<String> {
        let mut v: Vec<String> = self.records.iter().map(|r| r.boxer.clone()).collect();
        v.sort();
        v.dedup();
        v
    }

    /// Distinct round numbers, ascending.
    pub fn rounds(&self) -> Vec<u32> {
        let mut v: Vec<u32> = self.records.iter().map(|r| r.round).collect();
        v.sort_unstable();
        v.dedup();
        v
    }
}

/// Zero-copy filtered view for display and aggregation.
/// Holds positions of kept rows in the canonical record set.
#[derive(Clone, Debug)]
pub struct RoundView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a FightData,
}

impl<'a> RoundView<'a> {
    /// Filter to the two named boxers and the round filter, ordered by
    /// (round, boxer) for stable display.
    pub fn from_fight(
        raw: &'a FightData,
        boxer_a: &str,
        boxer_b: &str,
        filter: RoundFilter,
    ) -> Self {
        let mut row_ix: Vec<usize> = raw
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.boxer == boxer_a || r.boxer == boxer_b)
            .filter(|(_, r)| match filter {
                RoundFilter::AllRounds => true,
                RoundFilter::Round(n) => r.round == n,
            })
            .map(|(i, _)| i)
            .collect();

        row_ix.sort_by_key(|&i| (raw.records[i].round, raw.records[i].boxer.clone()));
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize {
        self.row_ix.len()
    }
    pub fn is_empty(&self) -> bool {
        self.row_ix.is_empty()
    }

    /// Borrow a single record by projected index.
    pub fn record(&self, i: usize) -> Option<&RoundRecord> {
        self.row_ix.get(i).and_then(|&ix| self.raw.records.get(ix))
    }

    pub fn records(&self) -> impl Iterator<Item = &RoundRecord> {
        self.row_ix.iter().map(move |&ix| &self.raw.records[ix])
    }

    /// Distinct round numbers present in the view, ascending.
    pub fn rounds(&self) -> Vec<u32> {
        let mut v: Vec<u32> = self.records().map(|r| r.round).collect();
        v.sort_unstable();
        v.dedup();
        v
    }

    /// Data series for trend charts: (round, value) per record of one boxer,
    /// round-ascending.
    pub fn series_for(&self, boxer: &str, f: impl Fn(&RoundRecord) -> f64) -> Vec<(u32, f64)> {
        self.records()
            .filter(|r| r.boxer == boxer)
            .map(|r| (r.round, f(r)))
            .collect()
    }

    /// Ring control is meaningful only if the source tracks it AND it is
    /// nonzero somewhere in this view. "Present but all zero" degrades the
    /// same way as "absent".
    pub fn ring_control_available(&self) -> bool {
        self.raw.features.ring_control && self.records().any(|r| r.ring_control_pct > 0.0)
    }

    /// Same degrade rule for the head/body breakdown.
    pub fn head_body_available(&self) -> bool {
        self.raw.features.head_body
            && self
                .records()
                .any(|r| r.head_punches_landed + r.body_punches_landed > 0)
    }

    /// Materialize owned display rows (for UI table/export boundaries).
    pub fn to_owned_rows(&self) -> Vec<Vec<String>> {
        self.records().map(|r| r.to_row()).collect()
    }
}
