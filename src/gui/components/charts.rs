// src/gui/components/charts.rs
//
// Small painter-drawn charts: line trends, grouped/stacked bars, and the
// ring-control share bar. Kept deliberately simple: a handful of rounds and
// two boxers, no pan/zoom.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Stroke, Vec2};

pub const SERIES_A: Color32 = Color32::from_rgb(0x64, 0xB4, 0xFF); // blue
pub const SERIES_B: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C); // yellow
pub const HEAD: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49); // red
pub const BODY: Color32 = Color32::from_rgb(0x8B, 0x2E, 0x1F); // dark red
pub const NEUTRAL: Color32 = Color32::from_rgb(0x9A, 0xA0, 0xA6);

const CHART_H: f32 = 190.0;
const PAD_LEFT: f32 = 36.0;
const PAD_BOTTOM: f32 = 18.0;
const PAD_TOP: f32 = 8.0;
const PAD_RIGHT: f32 = 8.0;

fn label_font() -> FontId {
    FontId::proportional(11.0)
}

fn title(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong());
}

/// Allocate the drawing area and return (full rect, inner plot rect, painter).
fn frame(ui: &mut egui::Ui) -> (Rect, Rect, egui::Painter) {
    let width = ui.available_width();
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, CHART_H), Sense::hover());
    let rect = resp.rect;
    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + PAD_LEFT, rect.top() + PAD_TOP),
        Pos2::new(rect.right() - PAD_RIGHT, rect.bottom() - PAD_BOTTOM),
    );
    (rect, plot, painter)
}

fn axis_color(ui: &egui::Ui) -> Color32 {
    ui.visuals().weak_text_color()
}

fn grid_stroke(ui: &egui::Ui) -> Stroke {
    Stroke::new(1.0, ui.visuals().faint_bg_color)
}

/// Nice y-axis ceiling: headroom above the data maximum, at least 1.
fn y_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let step = 10f64.powf(max.log10().floor());
    (max / step).ceil() * step
}

fn draw_y_axis(ui: &egui::Ui, painter: &egui::Painter, plot: Rect, y_max: f64) {
    let color = axis_color(ui);
    for i in 0..=4 {
        let frac = i as f32 / 4.0;
        let y = plot.bottom() - frac * plot.height();
        painter.line_segment(
            [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
            grid_stroke(ui),
        );
        painter.text(
            Pos2::new(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format!("{:.0}", y_max * frac as f64),
            label_font(),
            color,
        );
    }
}

fn legend(painter: &egui::Painter, plot: Rect, entries: &[(&str, Color32)]) {
    let mut x = plot.left() + 4.0;
    let y = plot.top() + 4.0;
    for (name, color) in entries {
        let swatch = Rect::from_min_size(Pos2::new(x, y), Vec2::splat(9.0));
        painter.rect_filled(swatch, 2.0, *color);
        let galley = painter.text(
            Pos2::new(x + 13.0, y - 2.0),
            Align2::LEFT_TOP,
            *name,
            label_font(),
            NEUTRAL,
        );
        x = galley.right() + 14.0;
    }
}

/// Per-round line chart. `series` holds (name, color, (round, value) points).
pub fn line_chart(
    ui: &mut egui::Ui,
    heading: &str,
    series: &[(String, Color32, Vec<(u32, f64)>)],
    y_max: Option<f64>,
) {
    title(ui, heading);
    let (_rect, plot, painter) = frame(ui);

    let rounds: Vec<u32> = {
        let mut v: Vec<u32> = series
            .iter()
            .flat_map(|(_, _, pts)| pts.iter().map(|(r, _)| *r))
            .collect();
        v.sort_unstable();
        v.dedup();
        v
    };
    if rounds.is_empty() {
        painter.text(
            plot.center(),
            Align2::CENTER_CENTER,
            "No data",
            label_font(),
            NEUTRAL,
        );
        return;
    }

    let data_max = series
        .iter()
        .flat_map(|(_, _, pts)| pts.iter().map(|(_, v)| *v))
        .fold(0.0f64, f64::max);
    let y_top = y_max.unwrap_or_else(|| y_ceiling(data_max));

    draw_y_axis(ui, &painter, plot, y_top);

    let (r_lo, r_hi) = (rounds[0] as f32, *rounds.last().unwrap_or(&rounds[0]) as f32);
    let span = (r_hi - r_lo).max(1.0);
    let x_of = |round: u32| plot.left() + (round as f32 - r_lo) / span * plot.width();
    let y_of = |v: f64| plot.bottom() - ((v / y_top) as f32).min(1.0) * plot.height();

    // Round ticks
    let color = axis_color(ui);
    for &r in &rounds {
        painter.text(
            Pos2::new(x_of(r), plot.bottom() + 2.0),
            Align2::CENTER_TOP,
            r.to_string(),
            label_font(),
            color,
        );
    }

    for (_, series_color, pts) in series {
        let mut prev: Option<Pos2> = None;
        for &(r, v) in pts {
            let p = Pos2::new(x_of(r), y_of(v));
            if let Some(q) = prev {
                painter.line_segment([q, p], Stroke::new(2.0, *series_color));
            }
            painter.circle_filled(p, 2.5, *series_color);
            prev = Some(p);
        }
    }

    let entries: Vec<(&str, Color32)> = series
        .iter()
        .map(|(name, color, _)| (name.as_str(), *color))
        .collect();
    legend(&painter, plot, &entries);
}

/// Grouped vertical bars: one group per boxer, one bar per series.
/// `values[s][g]` is series `s` for group `g`.
pub fn grouped_bar_chart(
    ui: &mut egui::Ui,
    heading: &str,
    groups: &[String],
    series: &[(&str, Color32)],
    values: &[Vec<f64>],
) {
    title(ui, heading);
    let (_rect, plot, painter) = frame(ui);
    if groups.is_empty() || series.is_empty() {
        return;
    }

    let data_max = values
        .iter()
        .flatten()
        .copied()
        .fold(0.0f64, f64::max);
    let y_top = y_ceiling(data_max);
    draw_y_axis(ui, &painter, plot, y_top);

    let group_w = plot.width() / groups.len() as f32;
    let bar_w = (group_w * 0.7) / series.len() as f32;
    let color = axis_color(ui);

    for (g, group) in groups.iter().enumerate() {
        let group_left = plot.left() + g as f32 * group_w + group_w * 0.15;
        for (s, (_, series_color)) in series.iter().enumerate() {
            let v = values.get(s).and_then(|vs| vs.get(g)).copied().unwrap_or(0.0);
            let h = ((v / y_top) as f32).min(1.0) * plot.height();
            let bar = Rect::from_min_max(
                Pos2::new(group_left + s as f32 * bar_w, plot.bottom() - h),
                Pos2::new(group_left + (s + 1) as f32 * bar_w - 2.0, plot.bottom()),
            );
            painter.rect_filled(bar, 2.0, *series_color);
            if v > 0.0 {
                painter.text(
                    Pos2::new(bar.center().x, bar.top() - 2.0),
                    Align2::CENTER_BOTTOM,
                    format!("{:.0}", v),
                    label_font(),
                    NEUTRAL,
                );
            }
        }
        painter.text(
            Pos2::new(plot.left() + (g as f32 + 0.5) * group_w, plot.bottom() + 2.0),
            Align2::CENTER_TOP,
            group,
            label_font(),
            color,
        );
    }

    legend(&painter, plot, series);
}

/// Stacked vertical bars: one bar per group, segments bottom-up in series
/// order. Used for the head/body breakdown.
pub fn stacked_bar_chart(
    ui: &mut egui::Ui,
    heading: &str,
    groups: &[String],
    series: &[(&str, Color32)],
    values: &[Vec<f64>],
) {
    title(ui, heading);
    let (_rect, plot, painter) = frame(ui);
    if groups.is_empty() || series.is_empty() {
        return;
    }

    let totals: Vec<f64> = (0..groups.len())
        .map(|g| {
            values
                .iter()
                .filter_map(|vs| vs.get(g))
                .copied()
                .sum::<f64>()
        })
        .collect();
    let y_top = y_ceiling(totals.iter().copied().fold(0.0f64, f64::max));
    draw_y_axis(ui, &painter, plot, y_top);

    let group_w = plot.width() / groups.len() as f32;
    let bar_w = group_w * 0.45;
    let color = axis_color(ui);

    for (g, group) in groups.iter().enumerate() {
        let cx = plot.left() + (g as f32 + 0.5) * group_w;
        let mut base = plot.bottom();
        for (s, (_, series_color)) in series.iter().enumerate() {
            let v = values.get(s).and_then(|vs| vs.get(g)).copied().unwrap_or(0.0);
            let h = ((v / y_top) as f32).min(1.0) * plot.height();
            if h > 0.0 {
                let seg = Rect::from_min_max(
                    Pos2::new(cx - bar_w / 2.0, base - h),
                    Pos2::new(cx + bar_w / 2.0, base),
                );
                painter.rect_filled(seg, 0.0, *series_color);
                base -= h;
            }
        }
        if totals[g] > 0.0 {
            painter.text(
                Pos2::new(cx, base - 2.0),
                Align2::CENTER_BOTTOM,
                format!("{:.0}", totals[g]),
                label_font(),
                NEUTRAL,
            );
        }
        painter.text(
            Pos2::new(cx, plot.bottom() + 2.0),
            Align2::CENTER_TOP,
            group,
            label_font(),
            color,
        );
    }

    legend(&painter, plot, series);
}

/// Horizontal share bar for ring control: the two sides split one bar.
pub fn share_bar(ui: &mut egui::Ui, heading: &str, a: (&str, f64), b: (&str, f64)) {
    title(ui, heading);
    let width = ui.available_width();
    let (resp, painter) = ui.allocate_painter(Vec2::new(width, 52.0), Sense::hover());
    let rect = resp.rect.shrink2(Vec2::new(4.0, 10.0));

    let total = (a.1 + b.1).max(1.0);
    let split = rect.left() + (a.1 / total) as f32 * rect.width();

    let left = Rect::from_min_max(rect.min, Pos2::new(split, rect.bottom()));
    let right = Rect::from_min_max(Pos2::new(split, rect.top()), rect.max);
    painter.rect_filled(left, 3.0, SERIES_A);
    painter.rect_filled(right, 3.0, SERIES_B);

    painter.text(
        Pos2::new(rect.left() + 4.0, rect.center().y),
        Align2::LEFT_CENTER,
        format!("{} {:.1}%", a.0, a.1),
        label_font(),
        Color32::BLACK,
    );
    painter.text(
        Pos2::new(rect.right() - 4.0, rect.center().y),
        Align2::RIGHT_CENTER,
        format!("{} {:.1}%", b.0, b.1),
        label_font(),
        Color32::BLACK,
    );
}

/// Substitute frame when a metric is not tracked by the dataset.
pub fn placeholder(ui: &mut egui::Ui, heading: &str, message: &str) {
    title(ui, heading);
    let (_rect, plot, painter) = frame(ui);
    painter.text(
        plot.center(),
        Align2::CENTER_CENTER,
        message,
        label_font(),
        NEUTRAL,
    );
}
