// File: crates/graph-core/tests/autoscale.rs
// Purpose: Validate autoscale across several series.

use graph_core::{Chart, Series};

#[test]
fn autoscale_spans_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(0.0, 1.0), (5.0, 3.0)]));
    chart.add_series(Series::with_data("b", vec![(2.0, 6.0), (3.0, 1.5)]));

    chart.autoscale_axes(0.0);

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 5.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (1.0, 6.0));
}

#[test]
fn autoscale_margin_is_relative_to_span() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("a", vec![(10.0, 0.0), (20.0, 2e-5)]));

    chart.autoscale_axes(0.1);

    assert!((chart.x_axis.min - 9.0).abs() < 1e-9);
    assert!((chart.x_axis.max - 21.0).abs() < 1e-9);
    assert!((chart.y_axis.min + 2e-6).abs() < 1e-15);
    assert!((chart.y_axis.max - 2.2e-5).abs() < 1e-15);
}

#[test]
fn autoscale_keeps_titles() {
    let mut chart = Chart::new();
    chart.x_axis.label = "n".into();
    chart.add_series(Series::with_data("a", vec![(1.0, 1.0), (2.0, 2.0)]));
    chart.autoscale_axes(0.05);
    assert_eq!(chart.x_axis.label, "n");
}

#[test]
fn autoscale_keeps_sub_epsilon_spans() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("tiny", vec![(0.0, 0.0), (1.0, 1e-17)]));

    chart.autoscale_axes(0.05);

    assert!(chart.y_axis.min < 0.0 && chart.y_axis.min > -1e-18);
    assert!(chart.y_axis.max > 1e-17 && chart.y_axis.max < 2e-17);
}
