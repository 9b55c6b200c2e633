// src/gui/pages/match_analysis.rs
//
// The main dashboard: raw round table, per-round/trend charts, aggregate
// table, metric cards, prediction banner, export controls.

use eframe::egui::{self, Color32, RichText};

use super::Page;
use crate::aggregate::{RoundFilter, Verdict};
use crate::config::options::PageKind::{self, *};
use crate::gui::app::{App, MatchView, ReadyView};
use crate::gui::components::{self, charts, data_table, export_bar, metrics};
use crate::records::{MatchAggregate, RoundRecord};

pub struct MatchAnalysisPage;
pub static PAGE: MatchAnalysisPage = MatchAnalysisPage;

fn series(records: &[RoundRecord], boxer: &str, f: impl Fn(&RoundRecord) -> f64) -> Vec<(u32, f64)> {
    records
        .iter()
        .filter(|r| r.boxer == boxer)
        .map(|r| (r.round, f(r)))
        .collect()
}

/// Sum of one metric for one boxer over the (already filtered) records.
fn total(records: &[RoundRecord], boxer: &str, f: impl Fn(&RoundRecord) -> u32) -> f64 {
    records
        .iter()
        .filter(|r| r.boxer == boxer)
        .map(|r| f(r) as u64)
        .sum::<u64>() as f64
}

fn draw_trend_charts(ui: &mut egui::Ui, view: &ReadyView) {
    ui.label(RichText::new("Match Trends").heading());
    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];
            charts::line_chart(
                ui,
                "Total Punches Landed per Round",
                &[
                    (
                        view.boxer_a.clone(),
                        charts::SERIES_A,
                        series(&view.records, &view.boxer_a, |r| r.punches_landed as f64),
                    ),
                    (
                        view.boxer_b.clone(),
                        charts::SERIES_B,
                        series(&view.records, &view.boxer_b, |r| r.punches_landed as f64),
                    ),
                ],
                None,
            );

            if view.ring_control_available {
                charts::line_chart(
                    ui,
                    "Ring Control % per Round",
                    &[(
                        view.boxer_a.clone(),
                        charts::SERIES_A,
                        series(&view.records, &view.boxer_a, |r| r.ring_control_pct),
                    )],
                    Some(100.0),
                );
            } else {
                charts::placeholder(
                    ui,
                    "Ring Control % per Round",
                    "Ring control data not available for this fight",
                );
            }
        }
        {
            let ui = &mut cols[1];
            charts::line_chart(
                ui,
                "Significant Punches Landed per Round",
                &[
                    (
                        view.boxer_a.clone(),
                        charts::SERIES_A,
                        series(&view.records, &view.boxer_a, |r| r.sig_punches_landed as f64),
                    ),
                    (
                        view.boxer_b.clone(),
                        charts::SERIES_B,
                        series(&view.records, &view.boxer_b, |r| r.sig_punches_landed as f64),
                    ),
                ],
                None,
            );
        }
    });
}

fn draw_round_charts(ui: &mut egui::Ui, view: &ReadyView, round: u32) {
    ui.label(RichText::new(format!("Statistics for Round {}", round)).heading());
    let groups = vec![view.boxer_a.clone(), view.boxer_b.clone()];

    ui.columns(2, |cols| {
        {
            let ui = &mut cols[0];
            charts::grouped_bar_chart(
                ui,
                &format!("Round {}: Punches Thrown vs Landed", round),
                &groups,
                &[
                    ("Thrown", charts::NEUTRAL),
                    ("Landed", charts::SERIES_A),
                ],
                &[
                    vec![
                        total(&view.records, &view.boxer_a, |r| r.punches_thrown),
                        total(&view.records, &view.boxer_b, |r| r.punches_thrown),
                    ],
                    vec![
                        total(&view.records, &view.boxer_a, |r| r.punches_landed),
                        total(&view.records, &view.boxer_b, |r| r.punches_landed),
                    ],
                ],
            );

            if view.ring_control_available {
                let a = view
                    .records
                    .iter()
                    .find(|r| r.boxer == view.boxer_a)
                    .map(|r| r.ring_control_pct)
                    .unwrap_or(0.0);
                let b = view
                    .records
                    .iter()
                    .find(|r| r.boxer == view.boxer_b)
                    .map(|r| r.ring_control_pct)
                    .unwrap_or(0.0);
                charts::share_bar(
                    ui,
                    &format!("Round {}: Ring Control", round),
                    (&view.boxer_a, a),
                    (&view.boxer_b, b),
                );
            } else {
                charts::placeholder(
                    ui,
                    &format!("Round {}: Ring Control", round),
                    "Ring control data not available for this fight",
                );
            }
        }
        {
            let ui = &mut cols[1];
            if view.head_body_available {
                charts::stacked_bar_chart(
                    ui,
                    &format!("Round {}: Significant Punches (Head vs Body)", round),
                    &groups,
                    &[("Head", charts::HEAD), ("Body", charts::BODY)],
                    &[
                        vec![
                            total(&view.records, &view.boxer_a, |r| r.head_punches_landed),
                            total(&view.records, &view.boxer_b, |r| r.head_punches_landed),
                        ],
                        vec![
                            total(&view.records, &view.boxer_a, |r| r.body_punches_landed),
                            total(&view.records, &view.boxer_b, |r| r.body_punches_landed),
                        ],
                    ],
                );
            } else {
                // No head/body split: fall back to plain significant punches.
                charts::grouped_bar_chart(
                    ui,
                    &format!("Round {}: Significant Punches Landed", round),
                    &groups,
                    &[("Sig. Landed", charts::SERIES_B)],
                    &[vec![
                        total(&view.records, &view.boxer_a, |r| r.sig_punches_landed),
                        total(&view.records, &view.boxer_b, |r| r.sig_punches_landed),
                    ]],
                );
                ui.small("Head/body punch breakdown not available for this dataset.");
            }
        }
    });
}

impl Page for MatchAnalysisPage {
    fn kind(&self) -> PageKind {
        MatchAnalysis
    }
    fn title(&self) -> &'static str {
        "Match Analysis"
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let view = match &app.match_view {
            MatchView::Ready(v) => v.clone(),
            MatchView::Notice(text) => {
                let text = text.clone();
                components::notice(ui, &text);
                return;
            }
        };

        ui.heading(&view.label);
        components::info(ui, view.source_note);
        ui.separator();

        ui.label(RichText::new("Raw Round Data").heading());
        if view.records.is_empty() {
            components::notice(ui, &format!("No data available for {}.", view.round_filter.label()));
        } else {
            let headers: Vec<String> = RoundRecord::HEADERS.iter().map(|h| s!(*h)).collect();
            let rows: Vec<Vec<String>> = view.records.iter().map(|r| r.to_row()).collect();
            data_table::draw(ui, "raw_rounds", &headers, &rows, &[1], 240.0);
        }

        ui.separator();

        match view.round_filter {
            RoundFilter::AllRounds => draw_trend_charts(ui, &view),
            RoundFilter::Round(n) => {
                if view.records.is_empty() {
                    components::notice(ui, &format!("No data available for Round {}.", n));
                } else {
                    draw_round_charts(ui, &view, n);
                }
            }
        }

        ui.separator();
        ui.label(RichText::new("Overall Match Analysis").heading());

        match &view.agg {
            Some(agg) => {
                metrics::draw(ui, agg);
                ui.add_space(8.0);

                ui.label(RichText::new("Detailed Aggregate Table").strong());
                let headers: Vec<String> =
                    MatchAggregate::HEADERS.iter().map(|h| s!(*h)).collect();
                let rows: Vec<Vec<String>> = agg.table.iter().map(|a| a.to_row()).collect();
                data_table::draw(ui, "aggregates", &headers, &rows, &[0], 160.0);

                ui.add_space(8.0);
                ui.label(RichText::new("Winner Prediction").strong());
                match &agg.outcome.verdict {
                    Verdict::Winner(name) => {
                        ui.label(
                            RichText::new(format!("Predicted Winner: {}", name))
                                .color(Color32::from_rgb(0x6B, 0xC4, 0x6D))
                                .strong(),
                        );
                    }
                    Verdict::Draw => {
                        components::notice(ui, "Prediction: Draw / Too Close to Call");
                    }
                }
                ui.label(agg.outcome.explain());
            }
            None => {
                // Either an empty round subset or a boxer missing from it.
                components::notice(
                    ui,
                    "Could not calculate match statistics for this selection. \
                     Ensure both boxers have data in the chosen rounds.",
                );
            }
        }

        ui.separator();
        export_bar::draw(ui, app);
    }
}
