// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;
use crate::config::options::PageKind;

pub mod fight_comparison;
pub mod match_analysis;

pub trait Page: Send + Sync + 'static {
    fn kind(&self) -> PageKind;
    fn title(&self) -> &'static str;

    /// Whether the left selector panel applies to this page.
    fn wants_sidebar(&self) -> bool {
        true
    }

    /// Called when the tab becomes active.
    fn on_enter(&self, _app: &mut App) {}

    /// Draw the page body into the central panel.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
