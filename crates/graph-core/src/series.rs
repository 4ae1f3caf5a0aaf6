// File: crates/graph-core/src/series.rs
// Summary: Labeled line series built from positional x/y columns.

use skia_safe as skia;

use crate::error::ChartError;

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
    /// Stroke colour; `None` picks from the theme palette by insertion index.
    pub color: Option<skia::Color>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), data_xy: Vec::new(), color: None }
    }

    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data, color: None }
    }

    /// Pair `xs[i]` with `ys[i]`.
    /// Fails when the columns differ in length; nothing is truncated or padded.
    pub fn from_columns<X>(label: impl Into<String>, xs: &[X], ys: &[f64]) -> Result<Self, ChartError>
    where
        X: Copy + Into<f64>,
    {
        let label = label.into();
        if xs.len() != ys.len() {
            return Err(ChartError::LengthMismatch { label, x_len: xs.len(), y_len: ys.len() });
        }
        let data = xs.iter().zip(ys).map(|(&x, &y)| (x.into(), y)).collect();
        Ok(Self { label, data_xy: data, color: None })
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// (x_min, x_max, y_min, y_max) over finite points, or `None` if there are none.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut it = self.data_xy.iter().filter(|(x, y)| x.is_finite() && y.is_finite());
        let &(x0, y0) = it.next()?;
        Some(it.fold((x0, x0, y0, y0), |(xl, xh, yl, yh), &(x, y)| {
            (xl.min(x), xh.max(x), yl.min(y), yh.max(y))
        }))
    }
}
