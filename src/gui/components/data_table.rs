// src/gui/components/data_table.rs
//
// Draws a striped table. Purely a view over prepared header/row strings.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

pub fn draw(
    ui: &mut egui::Ui,
    id: &str,
    headers: &[String],
    rows: &[Vec<String>],
    non_numeric: &[usize],
    max_height: f32,
) {
    let cols = headers.len().max(rows.first().map(|r| r.len()).unwrap_or(0));
    if cols == 0 {
        return;
    }

    let numeric_cols: Vec<bool> = (0..cols).map(|ci| !non_numeric.contains(&ci)).collect();

    // Ensure scroll bars allocate space instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height);
        for ci in 0..cols {
            let col = if non_numeric.contains(&ci) {
                Column::auto().resizable(true).at_least(120.0).clip(true)
            } else {
                Column::auto().resizable(true).at_least(48.0).clip(true)
            };
            table = table.column(col);
        }

        table
            .header(24.0, |mut header| {
                for (ci, h) in headers.iter().enumerate() {
                    header.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let label = RichText::new(h).strong();
                        if numeric_cols[ci] {
                            ui.centered_and_justified(|ui| {
                                ui.label(label);
                            });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(label);
                            });
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, rows.len(), |mut row| {
                    let row_idx = row.index();
                    if let Some(data) = rows.get(row_idx) {
                        for ci in 0..cols {
                            let cell = data.get(ci);
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if let Some(cell) = cell {
                                    if numeric_cols[ci] {
                                        ui.centered_and_justified(|ui| {
                                            ui.label(cell);
                                        });
                                    } else {
                                        ui.with_layout(
                                            Layout::left_to_right(Align::Center),
                                            |ui| {
                                                ui.label(cell);
                                            },
                                        );
                                    }
                                }
                            });
                        }
                    }
                });
            });
    });
}
