// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, renderer, crane solvers and timing datasets.

pub mod axis;
pub mod chart;
pub mod cranes;
pub mod error;
pub mod geometry;
pub mod legend;
pub mod series;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod timing;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::{ChartError, CraneError};
pub use legend::{LegendEntry, LegendLocation};
pub use series::Series;
pub use theme::Theme;
pub use timing::{render_graph, Measurements};
