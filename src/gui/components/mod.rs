// src/gui/components/mod.rs
use eframe::egui::{self, Color32, RichText};

pub mod charts;
pub mod data_table;
pub mod export_bar;
pub mod metrics;
pub mod sidebar;
pub mod tabs;

/// Inline warning notice (load failures, empty subsets, missing data).
pub fn notice(ui: &mut egui::Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .color(Color32::from_rgb(0xF0, 0xD2, 0x3C))
            .strong(),
    );
}

/// Inline informational line (dataset source notes and the like).
pub fn info(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::from_rgb(0x64, 0xB4, 0xFF)));
}
