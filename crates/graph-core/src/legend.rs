// File: crates/graph-core/src/legend.rs
// Summary: Legend entries, placement and drawing.

use skia_safe as skia;

use crate::geometry::RectI32;
use crate::text::TextShaper;
use crate::theme::Theme;

pub const FONT_SIZE: f32 = 13.0;
const PAD: f32 = 8.0;
const ROW: f32 = 20.0;
const SAMPLE: f32 = 28.0;
const GAP: f32 = 8.0;
/// Distance between the legend box and the plot frame.
const MARGIN: f32 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: skia::Color,
}

/// Box that holds `rows` entries whose widest label measures `text_width`.
pub fn layout(plot: RectI32, loc: LegendLocation, rows: usize, text_width: f32) -> skia::Rect {
    let w = PAD + SAMPLE + GAP + text_width + PAD;
    let h = PAD * 2.0 + ROW * rows as f32;
    let left = match loc {
        LegendLocation::UpperLeft | LegendLocation::LowerLeft => plot.left as f32 + MARGIN,
        LegendLocation::UpperRight | LegendLocation::LowerRight => plot.right as f32 - MARGIN - w,
    };
    let top = match loc {
        LegendLocation::UpperLeft | LegendLocation::UpperRight => plot.top as f32 + MARGIN,
        LegendLocation::LowerLeft | LegendLocation::LowerRight => plot.bottom as f32 - MARGIN - h,
    };
    // Pixel-aligned so sample strokes cover whole rows.
    skia::Rect::from_xywh(left.round(), top.round(), w.ceil(), h)
}

pub fn draw(
    canvas: &skia::Canvas,
    text: &TextShaper,
    theme: &Theme,
    plot: RectI32,
    loc: LegendLocation,
    entries: &[LegendEntry],
    draw_labels: bool,
) {
    if entries.is_empty() {
        return;
    }
    let text_width = if draw_labels {
        entries
            .iter()
            .map(|e| text.measure_width(&e.label, FONT_SIZE))
            .fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let rect = layout(plot, loc, entries.len(), text_width);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(rect, 4.0, 4.0, &fill);

    let mut frame = skia::Paint::default();
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    frame.set_color(theme.legend_frame);
    canvas.draw_round_rect(rect, 4.0, 4.0, &frame);

    let mut sample = skia::Paint::default();
    sample.set_anti_alias(true);
    sample.set_style(skia::paint::Style::Stroke);
    sample.set_stroke_width(2.0);

    for (i, e) in entries.iter().enumerate() {
        let mid = rect.top + PAD + ROW * i as f32 + ROW * 0.5;
        let x0 = rect.left + PAD;
        sample.set_color(e.color);
        canvas.draw_line((x0, mid), (x0 + SAMPLE, mid), &sample);
        if draw_labels {
            text.draw_left(canvas, &e.label, x0 + SAMPLE + GAP, mid + FONT_SIZE * 0.35, FONT_SIZE, theme.legend_text);
        }
    }
}
