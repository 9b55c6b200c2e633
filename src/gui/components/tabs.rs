// src/gui/components/tabs.rs
//
// Top tab strip. The switch itself happens here so pages get their
// on_enter hook before the next draw.

use eframe::egui;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut switch_to: Option<usize> = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let current = app.current_index();
        for (ix, page) in router::all_pages().iter().enumerate() {
            let active = ix == current;
            if ui.selectable_label(active, page.title()).clicked() && !active {
                switch_to = Some(ix);
            }
        }
    });

    if let Some(ix) = switch_to {
        let prev = app.current_page_kind();
        app.set_current_index(ix);
        let page = router::all_pages()[ix];
        logf!("UI: Tab switch {:?} → {:?}", prev, page.kind());
        page.on_enter(app);
    }
}
