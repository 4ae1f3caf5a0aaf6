// File: crates/graph-core/src/timing.rs
// Summary: Measured runtimes of the two solvers and the chart comparing them.

use std::path::Path;

use tracing::info;

use crate::error::ChartError;
use crate::{Axis, Chart, RenderOptions, Series};

pub const EXHAUSTIVE_SEARCH: &str = "exhaustive search";
pub const DYNAMIC_PROGRAMMING: &str = "dynamic programming";
pub const X_LABEL: &str = "n";
pub const Y_LABEL: &str = "t";
/// Written to the working directory by the `graph` binary.
pub const OUTPUT_FILE: &str = "graph.png";
/// Fraction of the data span left empty on each side of both axes.
pub const AXIS_MARGIN: f64 = 0.05;

/// Runtime in seconds of each solver in `cranes` on an `n[i]` x `n[i]` grid
/// (see `benches/cranes_bench.rs`).
#[derive(Clone, Debug, PartialEq)]
pub struct Measurements {
    pub n: Vec<u32>,
    pub exhaustive_search: Vec<f64>,
    pub dynamic_programming: Vec<f64>,
}

impl Measurements {
    /// Sizes 2 through 6.
    pub fn small() -> Self {
        Self {
            n: (2..7).collect(),
            exhaustive_search: vec![4.619e-06, 9.69e-06, 1.245e-05, 2.464e-05, 3.968e-05],
            dynamic_programming: vec![2.88e-06, 3.87e-06, 6.6e-06, 8.789e-06, 1.234e-05],
        }
    }

    /// Even sizes 2 through 20.
    pub fn large() -> Self {
        Self {
            n: (2..22).step_by(2).collect(),
            exhaustive_search: vec![
                5.4e-06, 1.186e-05, 4.7719e-05, 0.000201389, 0.000750814,
                0.00309949, 0.0171517, 0.0678672, 0.256858, 1.31979,
            ],
            dynamic_programming: vec![
                2.94e-06, 7.07e-06, 1.739e-05, 1.9359e-05, 3.107e-05,
                0.000103769, 7.5179e-05, 8.56e-05, 0.000107499, 0.000154469,
            ],
        }
    }

    /// Figure with one line per solver, titled axes and autoscaled ranges.
    pub fn chart(&self) -> Result<Chart, ChartError> {
        let mut chart = Chart::new();
        chart.x_axis = Axis::new(X_LABEL, 0.0, 1.0);
        chart.y_axis = Axis::new(Y_LABEL, 0.0, 1.0);
        chart.add_series(Series::from_columns(EXHAUSTIVE_SEARCH, &self.n, &self.exhaustive_search)?);
        chart.add_series(Series::from_columns(DYNAMIC_PROGRAMMING, &self.n, &self.dynamic_programming)?);
        chart.autoscale_axes(AXIS_MARGIN);
        Ok(chart)
    }
}

/// Build the comparison chart and write it as a PNG at `path`.
pub fn render_graph(
    measurements: &Measurements,
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<(), ChartError> {
    info!(points = measurements.n.len(), "rendering timing comparison");
    measurements.chart()?.render_to_png(opts, path)
}
