// File: crates/graph/src/main.rs
// Summary: Renders the exhaustive search vs dynamic programming runtimes to graph.png.

use anyhow::{Context, Result};
use graph_core::timing::OUTPUT_FILE;
use graph_core::{render_graph, Measurements, RenderOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let measurements = Measurements::small();
    tracing::debug!(sizes = ?measurements.n, "loaded measurements");

    render_graph(&measurements, &RenderOptions::default(), OUTPUT_FILE)
        .with_context(|| format!("failed to render '{OUTPUT_FILE}'"))?;
    println!("Wrote {OUTPUT_FILE}");
    Ok(())
}
