// src/gui/components/export_bar.rs
//
// Copy/Export controls for the current Match Analysis tables.

use eframe::egui;

use crate::config::options::ExportScope;
use crate::csv::{to_export_string, Delim};
use crate::file;
use crate::gui::app::{App, MatchView};
use crate::records::{MatchAggregate, RoundRecord};

/// The table the current scope selects, as (headers, rows).
fn current_table(app: &App) -> Option<(Vec<String>, Vec<Vec<String>>)> {
    let view = match &app.match_view {
        MatchView::Ready(v) => v,
        MatchView::Notice(_) => return None,
    };
    match app.state.options.export.scope {
        ExportScope::RawRounds => Some((
            RoundRecord::HEADERS.iter().map(|h| s!(*h)).collect(),
            view.records.iter().map(|r| r.to_row()).collect(),
        )),
        ExportScope::Aggregates => {
            let agg = view.agg.as_ref()?;
            Some((
                MatchAggregate::HEADERS.iter().map(|h| s!(*h)).collect(),
                agg.table.iter().map(|a| a.to_row()).collect(),
            ))
        }
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut path_refresh = false;

    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        ui.label("Export:");
        ui.selectable_value(&mut export.scope, ExportScope::Aggregates, "Aggregates");
        ui.selectable_value(&mut export.scope, ExportScope::RawRounds, "Raw rounds");

        ui.separator();
        ui.label("Format:");
        let before = export.format;
        ui.selectable_value(&mut export.format, Delim::Csv, "CSV");
        ui.selectable_value(&mut export.format, Delim::Tsv, "TSV");
        if export.format != before && !app.out_path_dirty {
            // Format drives the extension unless the user edited the path.
            path_refresh = true;
        }

        ui.checkbox(&mut export.include_headers, "Headers");

        ui.separator();
        ui.label("Output:");
        let resp = ui.text_edit_singleline(&mut app.out_path_text);
        if resp.changed() {
            app.out_path_dirty = true;
        }
    });

    if path_refresh {
        app.out_path_text = app
            .state
            .options
            .export
            .out_path()
            .to_string_lossy()
            .into_owned();
    }

    ui.horizontal(|ui| {
        let table = current_table(app);
        let enabled = table.is_some();

        if ui
            .add_enabled(enabled, egui::Button::new("Copy"))
            .clicked()
        {
            if let Some((headers, rows)) = &table {
                let export = &app.state.options.export;
                let txt = to_export_string(
                    &Some(headers.clone()),
                    rows,
                    export.include_headers,
                    export.format,
                );
                ui.ctx().copy_text(txt);
                app.status(s!("Copied to clipboard."));
            }
        }

        if ui
            .add_enabled(enabled, egui::Button::new("Export"))
            .clicked()
        {
            if let Some((headers, rows)) = &table {
                if app.out_path_dirty {
                    app.state.options.export.set_path(&app.out_path_text.clone());
                    app.out_path_dirty = false;
                }
                let export = app.state.options.export.clone();
                match file::write_export(&export, &Some(headers.clone()), rows) {
                    Ok(path) => {
                        logf!("Export: wrote {} rows to {}", rows.len(), path.display());
                        app.status(format!("Exported → {}", path.display()));
                    }
                    Err(e) => {
                        loge!("Export: {}", e);
                        app.status(format!("Export error: {}", e));
                    }
                }
            }
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });
}
