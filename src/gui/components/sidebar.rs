// src/gui/components/sidebar.rs
//
// Left panel: dataset list plus the boxer pair and round selectors.
// Applies changes directly to SelectionState and triggers the rebuild.

use eframe::egui;

use crate::aggregate::RoundFilter;
use crate::gui::app::{App, MatchView};
use crate::registry;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Datasets");

    // Match the scroll bar aesthetics used in the main panel
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut dataset_changed = false;
    egui::ScrollArea::vertical()
        .id_salt("dataset_list_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            let current = app.state.gui.selection.dataset_ix;
            for (ix, entry) in registry::all().iter().enumerate() {
                if ui.selectable_label(ix == current, entry.label).clicked() && ix != current {
                    let sel = &mut app.state.gui.selection;
                    sel.dataset_ix = ix;
                    // New dataset: let the registered defaults re-resolve.
                    sel.boxer_a = None;
                    sel.boxer_b = None;
                    sel.round_filter = RoundFilter::AllRounds;
                    dataset_changed = true;
                }
            }
        });
    if dataset_changed {
        logf!(
            "UI: Dataset → {:?}",
            registry::all()[app.state.gui.selection.dataset_ix].label
        );
        app.on_selection_changed();
    }

    ui.separator();
    ui.heading("Match Filters");

    // Selector options come from the current view model, not from widget
    // state: the view model is rebuilt from SelectionState every change.
    let view = match &app.match_view {
        MatchView::Ready(v) => v.clone(),
        MatchView::Notice(text) => {
            let text = text.clone();
            super::notice(ui, &text);
            return;
        }
    };

    let mut sel = app.state.gui.selection.clone();
    let mut changed = false;

    egui::ComboBox::from_label("Boxer A")
        .selected_text(view.boxer_a.clone())
        .show_ui(ui, |ui| {
            for b in &view.boxers {
                let mut pick = view.boxer_a.clone();
                if ui.selectable_value(&mut pick, b.clone(), b).clicked() && pick != view.boxer_a {
                    sel.boxer_a = Some(pick);
                    // A == B is never allowed; displace B if needed.
                    if sel.boxer_a == sel.boxer_b {
                        sel.boxer_b = None;
                    }
                    changed = true;
                }
            }
        });

    egui::ComboBox::from_label("Boxer B")
        .selected_text(view.boxer_b.clone())
        .show_ui(ui, |ui| {
            for b in view.boxers.iter().filter(|b| **b != view.boxer_a) {
                let mut pick = view.boxer_b.clone();
                if ui.selectable_value(&mut pick, b.clone(), b).clicked() && pick != view.boxer_b {
                    sel.boxer_b = Some(pick);
                    changed = true;
                }
            }
        });

    let round_options: Vec<RoundFilter> = std::iter::once(RoundFilter::AllRounds)
        .chain(view.rounds.iter().map(|&n| RoundFilter::Round(n)))
        .collect();
    egui::ComboBox::from_label("Round")
        .selected_text(view.round_filter.label())
        .show_ui(ui, |ui| {
            for opt in &round_options {
                if ui
                    .selectable_value(&mut sel.round_filter, *opt, opt.label())
                    .clicked()
                {
                    changed = true;
                }
            }
        });

    if changed {
        logf!(
            "UI: Selection changed — {:?} vs {:?}, {}",
            sel.boxer_a,
            sel.boxer_b,
            sel.round_filter.label()
        );
        app.state.gui.selection = sel;
        app.on_selection_changed();
    }

    ui.separator();
    ui.label(format!("Analyzing: {} vs {}", view.boxer_a, view.boxer_b));
    super::info(ui, view.source_note);
}
