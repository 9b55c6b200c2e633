// src/config/state.rs
use super::options::AppOptions;
use crate::aggregate::RoundFilter;

/// What the user is looking at, passed whole into the aggregation/presentation
/// boundary on every recomputation. No hidden per-widget state.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    /// Index into the dataset registry.
    pub dataset_ix: usize,
    pub boxer_a: Option<String>,
    pub boxer_b: Option<String>,
    pub round_filter: RoundFilter,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            dataset_ix: 0,
            boxer_a: None,
            boxer_b: None,
            round_filter: RoundFilter::AllRounds,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct GuiState {
    pub selection: SelectionState,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Fight Comparison page -> metric column to rank by
    pub comparison_metric_ix: usize,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
