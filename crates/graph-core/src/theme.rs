// File: crates/graph-core/src/theme.rs
// Summary: Light/Dark theming for chart colors and the series colour cycle.

use skia_safe as skia;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub frame: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_text: skia::Color,
    /// Series colours, cycled by insertion index.
    pub palette: Vec<skia::Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            frame: skia::Color::BLACK,
            tick: skia::Color::BLACK,
            tick_label: skia::Color::BLACK,
            axis_label: skia::Color::BLACK,
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            legend_text: skia::Color::BLACK,
            palette: tab10(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
            legend_frame: skia::Color::from_argb(204, 90, 90, 100),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
            palette: vec![
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 255, 170, 64),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
            ],
        }
    }

    /// Colour for the series at insertion index `i`.
    pub fn series_color(&self, i: usize) -> skia::Color {
        if self.palette.is_empty() {
            return self.frame;
        }
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// The ten-colour "tab10" cycle (blue, orange, green, ...).
fn tab10() -> Vec<skia::Color> {
    [
        0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
        0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf,
    ]
    .iter()
    .map(|&rgb: &u32| skia::Color::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        let t = Theme::light();
        assert_eq!(t.series_color(0), skia::Color::from_rgb(0x1f, 0x77, 0xb4));
        assert_eq!(t.series_color(1), skia::Color::from_rgb(0xff, 0x7f, 0x0e));
        assert_eq!(t.series_color(10), t.series_color(0));
    }
}
