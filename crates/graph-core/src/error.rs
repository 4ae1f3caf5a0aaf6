// File: crates/graph-core/src/error.rs
// Summary: Error type shared by series construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The x and y columns of a series have different lengths.
    #[error("series '{label}' has {x_len} x values but {y_len} y values")]
    LengthMismatch {
        label: String,
        x_len: usize,
        y_len: usize,
    },

    /// Insets leave no room for the plot area.
    #[error("plot area collapsed: {width}x{height} px after insets")]
    PlotArea { width: i32, height: i32 },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CraneError {
    #[error("grid has no cells ({rows}x{columns})")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("grid start cell (0, 0) is a building")]
    StartBlocked,

    /// Exhaustive search enumerates step patterns as bits of a `u64`.
    #[error("exhaustive search needs {max_steps} steps; at most 63 fit in a bit pattern")]
    TooManySteps { max_steps: usize },

    #[error("step {direction:?} from ({row}, {column}) leaves the grid or enters a building")]
    InvalidStep {
        row: usize,
        column: usize,
        direction: crate::cranes::StepDirection,
    },

    #[error("{rows}x{columns} grid needs {expected} cells, got {got}")]
    CellCount {
        rows: usize,
        columns: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown cell '{0}' (expected '.', 'X' or 'c')")]
    UnknownCell(char),
}
