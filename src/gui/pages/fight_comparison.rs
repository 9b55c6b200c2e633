// src/gui/pages/fight_comparison.rs
//
// Cross-fight comparison: whole-fight totals per dataset, ranked by a
// selectable metric. Fights that fail to load are listed, not fatal.

use eframe::egui::{self, RichText};

use super::Page;
use crate::aggregate::FightTotals;
use crate::config::options::PageKind::{self, *};
use crate::gui::app::App;
use crate::gui::components::{self, charts, data_table};

pub struct FightComparisonPage;
pub static PAGE: FightComparisonPage = FightComparisonPage;

fn thrown(t: &FightTotals) -> f64 {
    t.total_thrown as f64
}
fn landed(t: &FightTotals) -> f64 {
    t.total_landed as f64
}
fn sig_thrown(t: &FightTotals) -> f64 {
    t.total_sig_thrown as f64
}
fn sig_landed(t: &FightTotals) -> f64 {
    t.total_sig_landed as f64
}
fn accuracy(t: &FightTotals) -> f64 {
    t.punch_accuracy_pct
}
fn sig_accuracy(t: &FightTotals) -> f64 {
    t.sig_accuracy_pct
}

static METRICS: &[(&str, fn(&FightTotals) -> f64)] = &[
    ("Total Punches Thrown", thrown),
    ("Total Punches Landed", landed),
    ("Total Significant Punches Thrown", sig_thrown),
    ("Total Significant Punches Landed", sig_landed),
    ("Overall Punch Accuracy (%)", accuracy),
    ("Overall Significant Punch Accuracy (%)", sig_accuracy),
];

impl Page for FightComparisonPage {
    fn kind(&self) -> PageKind {
        FightComparison
    }
    fn title(&self) -> &'static str {
        "Fight Comparison"
    }
    fn wants_sidebar(&self) -> bool {
        false
    }

    fn on_enter(&self, app: &mut App) {
        app.rebuild_comparison();
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.comparison_view.is_none() {
            app.rebuild_comparison();
        }
        let Some(view) = app.comparison_view.clone() else {
            return;
        };

        ui.heading("Fight Comparison Metrics");
        ui.label("Compare matches by aggregate statistics across every boxer in the fight.");
        ui.separator();

        let metric_ix = &mut app.state.gui.comparison_metric_ix;
        if *metric_ix >= METRICS.len() {
            *metric_ix = 0;
        }
        egui::ComboBox::from_label("Metric")
            .selected_text(METRICS[*metric_ix].0)
            .show_ui(ui, |ui| {
                for (ix, (name, _)) in METRICS.iter().enumerate() {
                    ui.selectable_value(metric_ix, ix, *name);
                }
            });
        let (metric_name, metric) = METRICS[app.state.gui.comparison_metric_ix];

        if view.rows.is_empty() {
            components::notice(ui, "No fight data could be loaded for comparison.");
            return;
        }

        let mut ranked = view.rows.clone();
        ranked.sort_by(|(_, a), (_, b)| {
            metric(b)
                .partial_cmp(&metric(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ui.add_space(8.0);
        ui.label(RichText::new(format!("{} per Fight", metric_name)).strong());

        let headers: Vec<String> = [
            "Fight",
            "Thrown",
            "Landed",
            "Sig. Thrown",
            "Sig. Landed",
            "Accuracy %",
            "Sig. Accuracy %",
        ]
        .iter()
        .map(|h| s!(*h))
        .collect();
        let rows: Vec<Vec<String>> = ranked
            .iter()
            .map(|(label, t)| {
                vec![
                    label.clone(),
                    t.total_thrown.to_string(),
                    t.total_landed.to_string(),
                    t.total_sig_thrown.to_string(),
                    t.total_sig_landed.to_string(),
                    format!("{:.1}", t.punch_accuracy_pct),
                    format!("{:.1}", t.sig_accuracy_pct),
                ]
            })
            .collect();
        data_table::draw(ui, "comparison", &headers, &rows, &[0], 220.0);

        ui.add_space(8.0);
        let groups: Vec<String> = ranked.iter().map(|(label, _)| label.clone()).collect();
        let values: Vec<f64> = ranked.iter().map(|(_, t)| metric(t)).collect();
        charts::grouped_bar_chart(
            ui,
            &format!("{} Across Fights", metric_name),
            &groups,
            &[(metric_name, charts::SERIES_A)],
            &[values],
        );

        for s in &view.skipped {
            components::notice(ui, &format!("Skipped: {}", s));
        }
    }
}
