// File: crates/graph-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::io::Write;
use std::path::Path;

use skia_safe as skia;
use tracing::{debug, info};

use crate::error::ChartError;
use crate::geometry::{Projection, RectI32};
use crate::legend::{self, LegendEntry, LegendLocation};
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::ticks::{format_tick, nice_ticks};
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::Axis;

const TICK_LEN: f32 = 5.0;
const TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 15.0;
const TICK_TARGET: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Disable to get font-independent output.
    pub draw_labels: bool,
    pub show_grid: bool,
    pub legend: LegendLocation,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            show_grid: false,
            legend: LegendLocation::default(),
        }
    }
}

impl RenderOptions {
    /// Plot frame inside the surface, or `PlotArea` if the insets swallow it.
    pub fn plot_rect(&self) -> Result<RectI32, ChartError> {
        let rect = RectI32::from_ltrb(
            self.insets.left as i32,
            self.insets.top as i32,
            self.width - self.insets.right as i32,
            self.height - self.insets.bottom as i32,
        );
        if rect.width() <= 0 || rect.height() <= 0 {
            return Err(ChartError::PlotArea { width: rect.width(), height: rect.height() });
        }
        Ok(rect)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::unit(),
            y_axis: Axis::unit(),
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the data, padding each side by `margin` x span.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let bounds = self
            .series
            .iter()
            .filter_map(Series::bounds)
            .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));
        let Some((x_min, x_max, y_min, y_max)) = bounds else {
            self.x_axis.min = 0.0;
            self.x_axis.max = 1.0;
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        };
        let (x_min, x_max) = padded(x_min, x_max, margin);
        let (y_min, y_max) = padded(y_min, y_max, margin);
        debug!(x_min, x_max, y_min, y_max, "autoscaled axes");
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min;
        self.y_axis.max = y_max;
    }

    /// Legend rows in insertion order, with the colour each line is drawn in.
    pub fn legend_entries(&self, theme: &Theme) -> Vec<LegendEntry> {
        self.series
            .iter()
            .enumerate()
            .map(|(i, s)| LegendEntry {
                label: s.label.clone(),
                color: s.color.unwrap_or_else(|| theme.series_color(i)),
            })
            .collect()
    }

    /// Render the chart to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let plot = opts.plot_rect()?;
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts, plot);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        debug!(bytes = data.as_bytes().len(), "encoded png");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart as PNG into `out`.
    pub fn render_to_writer(&self, opts: &RenderOptions, mut out: impl Write) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    /// The parent directory must already exist.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        std::fs::write(path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, plot: RectI32) {
        let theme = &opts.theme;
        let text = TextShaper::new();
        let proj = Projection::new(plot, &self.x_axis, &self.y_axis);

        canvas.clear(theme.background);

        if opts.show_grid {
            draw_grid(canvas, theme, plot, &proj, &self.x_axis, &self.y_axis);
        }

        draw_axes(canvas, &text, opts, plot, &proj, &self.x_axis, &self.y_axis);

        canvas.save();
        canvas.clip_rect(to_rect(plot), skia::ClipOp::Intersect, true);
        for (i, s) in self.series.iter().enumerate() {
            let color = s.color.unwrap_or_else(|| theme.series_color(i));
            draw_line_series(canvas, &proj, s, color);
        }
        canvas.restore();

        if self.show_legend {
            legend::draw(
                canvas,
                &text,
                theme,
                plot,
                opts.legend,
                &self.legend_entries(theme),
                opts.draw_labels,
            );
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn padded(lo: f64, hi: f64, margin: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() <= f64::EPSILON * lo.abs().max(hi.abs()) {
        // Flat data: open a unit-relative window around it.
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * 0.5 };
        return (lo - half, hi + half);
    }
    (lo - span * margin, hi + span * margin)
}

fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, plot: RectI32, proj: &Projection, x: &Axis, y: &Axis) {
    let paint = stroke(theme.grid, 0.8);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    for v in nice_ticks(x.min, x.max, TICK_TARGET).0 {
        let px = proj.sx(v);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    for v in nice_ticks(y.min, y.max, TICK_TARGET).0 {
        let py = proj.sy(v);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    text: &TextShaper,
    opts: &RenderOptions,
    plot: RectI32,
    proj: &Projection,
    x: &Axis,
    y: &Axis,
) {
    let theme = &opts.theme;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // Frame (all four spines)
    canvas.draw_rect(to_rect(plot), &stroke(theme.frame, 1.0));

    let tick_paint = stroke(theme.tick, 1.0);

    let (x_ticks, x_step) = nice_ticks(x.min, x.max, TICK_TARGET);
    for v in x_ticks {
        let px = proj.sx(v);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick_paint);
        if opts.draw_labels {
            text.draw_centered(canvas, &format_tick(v, x_step), px, b + TICK_LEN + TICK_FONT + 2.0, TICK_FONT, theme.tick_label);
        }
    }

    let (y_ticks, y_step) = nice_ticks(y.min, y.max, TICK_TARGET);
    for v in y_ticks {
        let py = proj.sy(v);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick_paint);
        if opts.draw_labels {
            text.draw_right(canvas, &format_tick(v, y_step), l - TICK_LEN - 4.0, py + TICK_FONT * 0.35, TICK_FONT, theme.tick_label);
        }
    }

    if opts.draw_labels {
        // Axis titles: x centred under the tick labels, y left of them at mid-height.
        text.draw_centered(canvas, &x.label, (l + r) * 0.5, b + TICK_LEN + TICK_FONT + TITLE_FONT + 14.0, TITLE_FONT, theme.axis_label);
        let y_title_right = l - TICK_LEN - 4.0 - y_tick_label_width(text, y) - 10.0;
        text.draw_right(canvas, &y.label, y_title_right, (t + b) * 0.5 + TITLE_FONT * 0.35, TITLE_FONT, theme.axis_label);
    }
}

fn y_tick_label_width(text: &TextShaper, y: &Axis) -> f32 {
    let (ticks, step) = nice_ticks(y.min, y.max, TICK_TARGET);
    ticks
        .iter()
        .map(|&v| text.measure_width(&format_tick(v, step), TICK_FONT))
        .fold(0.0f32, f32::max)
}

fn draw_line_series(canvas: &skia::Canvas, proj: &Projection, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((proj.sx(x0), proj.sy(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((proj.sx(x), proj.sy(y)));
    }

    let mut paint = stroke(color, 2.0);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &paint);
}
