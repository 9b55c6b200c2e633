// src/gui/components/metrics.rs
//
// The four headline metric cards: significant punches, significant accuracy,
// total punches, total accuracy. One line per boxer, with the B-minus-A
// delta on the count metrics.

use eframe::egui::{self, RichText};

use crate::gui::app::AggView;

fn count_card(ui: &mut egui::Ui, label: &str, a: (&str, u32), b: (&str, u32)) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).strong());
        ui.label(format!("{}: {}", a.0, a.1));
        let delta = b.1 as i64 - a.1 as i64;
        ui.label(format!("{}: {} ({:+})", b.0, b.1, delta));
    });
}

fn pct_card(ui: &mut egui::Ui, label: &str, a: (&str, f64), b: (&str, f64)) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).strong());
        ui.label(format!("{}: {:.1}%", a.0, a.1));
        ui.label(format!("{}: {:.1}%", b.0, b.1));
    });
}

pub fn draw(ui: &mut egui::Ui, agg: &AggView) {
    let a = &agg.stats_a;
    let b = &agg.stats_b;

    ui.columns(4, |cols| {
        count_card(
            &mut cols[0],
            "Sig. Punches Landed",
            (&a.boxer, a.total_sig_landed),
            (&b.boxer, b.total_sig_landed),
        );
        pct_card(
            &mut cols[1],
            "Sig. Punch Accuracy",
            (&a.boxer, a.sig_accuracy_pct),
            (&b.boxer, b.sig_accuracy_pct),
        );
        count_card(
            &mut cols[2],
            "Total Punches Landed",
            (&a.boxer, a.total_landed),
            (&b.boxer, b.total_landed),
        );
        pct_card(
            &mut cols[3],
            "Punch Accuracy",
            (&a.boxer, a.punch_accuracy_pct),
            (&b.boxer, b.punch_accuracy_pct),
        );
    });
}
