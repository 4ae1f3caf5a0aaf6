// File: crates/graph-core/src/text.rs
// Summary: Font lookup plus measured, aligned text drawing on a Skia canvas.

use skia_safe as skia;

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl TextShaper {
    pub fn new() -> Self {
        // Falls back to Skia's default font when the system has no matching face.
        let typeface = skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::normal());
        Self { typeface }
    }

    pub fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::new(tf.clone(), size.max(1.0)),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size.max(1.0));
                font
            }
        }
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let (width, _) = self.font(size).measure_str(text, None);
        width
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let font = self.font(size);
        canvas.draw_str(text, (x, y), &font, &fill(color));
    }

    /// Draw with the baseline at `y`, horizontally centred on `cx`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color);
    }

    /// Draw with the baseline at `y`, ending at `right`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, right - w, y, size, color);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(color);
    paint
}
