// src/gui/app.rs
//
// App owns the single source of truth (AppState + fight cache) and the
// derived view models. Every selector change funnels through rebuild_view(),
// which re-runs selection + aggregation from the explicit SelectionState.

use std::error::Error;

use eframe::egui;

use crate::{
    aggregate::{self, FightTotals, Outcome, RoundFilter},
    config::{
        options::PageKind,
        state::AppState,
    },
    data::RoundView,
    records::{MatchAggregate, RoundRecord},
    registry,
    store::Store,
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Boxing Match Statistics",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Aggregation results for the current selection. Absent when the filtered
/// subset is empty (no data for the selected round).
#[derive(Clone)]
pub struct AggView {
    pub table: Vec<MatchAggregate>,
    pub stats_a: MatchAggregate,
    pub stats_b: MatchAggregate,
    pub outcome: Outcome,
}

#[derive(Clone)]
pub struct ReadyView {
    pub label: String,
    pub source_note: &'static str,
    pub boxers: Vec<String>,
    /// Rounds available for the selected pair (for the round selector).
    pub rounds: Vec<u32>,
    pub boxer_a: String,
    pub boxer_b: String,
    pub round_filter: RoundFilter,
    /// Pair- and round-filtered records, (round, boxer) ordered.
    pub records: Vec<RoundRecord>,
    pub agg: Option<AggView>,
    pub ring_control_available: bool,
    pub head_body_available: bool,
}

/// What the Match Analysis page has to work with this frame.
#[derive(Clone)]
pub enum MatchView {
    Ready(ReadyView),
    /// Load failure / not enough boxers; rendered as an inline notice.
    Notice(String),
}

#[derive(Clone)]
pub struct ComparisonView {
    pub rows: Vec<(String, FightTotals)>,
    pub skipped: Vec<String>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-dataset canonical data, memoized by registry index
    pub store: Store,

    // derived view models
    pub match_view: MatchView,
    pub comparison_view: Option<ComparisonView>,

    // output text field UX (mapped <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        let mut app = Self {
            state,
            store: Store::new(),
            match_view: MatchView::Notice(s!("Loading…")),
            comparison_view: None,
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.rebuild_view();
        logf!("Init: {} datasets, default page={:?}", registry::all().len(), app.current_page_kind());
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.gui.current_page_index
    }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_page_index = idx;
    }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind {
        router::all_pages()[self.current_index()].kind()
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        router::all_pages()[self.current_index()]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /* ---------- view model construction ---------- */

    /// Recompute the Match Analysis view model from SelectionState.
    /// Also re-resolves the boxer pair when the stored one no longer fits
    /// the loaded dataset (e.g. after a dataset switch).
    pub fn rebuild_view(&mut self) {
        let ix = self.state.gui.selection.dataset_ix.min(registry::all().len() - 1);
        self.state.gui.selection.dataset_ix = ix;
        let entry = &registry::all()[ix];

        let fight = match self.store.get(ix) {
            Ok(f) => f,
            Err(e) => {
                loge!("View: load failed for {:?}: {}", entry.label, e);
                self.match_view =
                    MatchView::Notice(format!("Failed to load {}: {}", entry.label, e));
                self.status(s!("Load error"));
                return;
            }
        };

        let boxers = fight.boxers();
        if boxers.len() < 2 {
            self.match_view = MatchView::Notice(format!(
                "Not enough data: {} lists fewer than two boxers.",
                entry.label
            ));
            self.status(s!("Not enough data"));
            return;
        }

        // Keep the stored pair when both names are valid and distinct;
        // otherwise fall back to the registered/alphabetical default.
        let (boxer_a, boxer_b) = {
            let sel = &self.state.gui.selection;
            match (&sel.boxer_a, &sel.boxer_b) {
                (Some(a), Some(b)) if a != b && boxers.contains(a) && boxers.contains(b) => {
                    (a.clone(), b.clone())
                }
                _ => match registry::resolve_default_pair(entry, &boxers) {
                    Some(pair) => pair,
                    None => {
                        self.match_view = MatchView::Notice(format!(
                            "Not enough data: {} lists fewer than two boxers.",
                            entry.label
                        ));
                        return;
                    }
                },
            }
        };
        self.state.gui.selection.boxer_a = Some(boxer_a.clone());
        self.state.gui.selection.boxer_b = Some(boxer_b.clone());

        // Round selector options come from the pair-filtered set.
        let pair_view = RoundView::from_fight(fight, &boxer_a, &boxer_b, RoundFilter::AllRounds);
        let rounds = pair_view.rounds();

        let round_filter = self.state.gui.selection.round_filter;
        let view = RoundView::from_fight(fight, &boxer_a, &boxer_b, round_filter);

        let agg = if view.is_empty() {
            // Empty subset: no aggregate computed over nothing.
            None
        } else {
            let (stats_a, stats_b, table) =
                aggregate::aggregate(view.records(), &boxer_a, &boxer_b);
            match (stats_a, stats_b) {
                (Some(a), Some(b)) => {
                    let outcome = aggregate::predict_outcome(&a, &b);
                    Some(AggView {
                        table,
                        stats_a: a,
                        stats_b: b,
                        outcome,
                    })
                }
                // Pair was validated against the dataset, but the round
                // subset may still miss one side.
                _ => None,
            }
        };

        self.match_view = MatchView::Ready(ReadyView {
            label: s!(entry.label),
            source_note: entry.source_note,
            boxers,
            rounds,
            boxer_a,
            boxer_b,
            round_filter,
            records: view.records().cloned().collect(),
            agg,
            ring_control_available: view.ring_control_available(),
            head_body_available: view.head_body_available(),
        });
        self.status(format!(
            "Analyzing {} — {}",
            entry.label,
            round_filter.label()
        ));
    }

    /// Load every registry dataset and roll up whole-fight totals.
    /// Fights that fail to load are skipped with a notice, as in the
    /// comparison table this feeds.
    pub fn rebuild_comparison(&mut self) {
        let mut rows = Vec::new();
        let mut skipped = Vec::new();

        for (ix, entry) in registry::all().iter().enumerate() {
            match self.store.get(ix) {
                Ok(fight) => {
                    rows.push((s!(entry.label), aggregate::fight_totals(&fight.records)));
                }
                Err(e) => {
                    logd!("Comparison: skipping {:?} ({})", entry.label, e);
                    skipped.push(format!("{} ({})", entry.label, e));
                }
            }
        }

        self.comparison_view = Some(ComparisonView { rows, skipped });
    }

    /// Selector changed: re-derive everything downstream of SelectionState.
    pub fn on_selection_changed(&mut self) {
        self.rebuild_view();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.current_page().wants_sidebar() {
            egui::SidePanel::left("selectors")
                .resizable(false)
                .default_width(230.0)
                .show(ctx, |ui| {
                    super::components::sidebar::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    page.draw(ui, self);
                });
        });
    }
}
