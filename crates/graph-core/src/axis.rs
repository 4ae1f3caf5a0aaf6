// File: crates/graph-core/src/axis.rs
// Summary: Axis model with title and view range.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Untitled axis over [0, 1].
    pub fn unit() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-300)
    }
}
