// File: crates/graph-core/tests/timing.rs
// Purpose: Properties of the solver timing chart: titles, legend, output file, determinism.

use graph_core::timing::{DYNAMIC_PROGRAMMING, EXHAUSTIVE_SEARCH, OUTPUT_FILE};
use graph_core::{render_graph, Measurements, RenderOptions, Theme};

fn out_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

fn near(px: &image::Rgba<u8>, rgb: (u8, u8, u8), tol: i32) -> bool {
    let d = |a: u8, b: u8| (a as i32 - b as i32).abs();
    d(px[0], rgb.0) <= tol && d(px[1], rgb.1) <= tol && d(px[2], rgb.2) <= tol
}

#[test]
fn axis_titles() {
    let chart = Measurements::small().chart().unwrap();
    assert_eq!(chart.x_axis.label, "n");
    assert_eq!(chart.y_axis.label, "t");
}

#[test]
fn legend_lists_both_solvers_in_order() {
    let chart = Measurements::small().chart().unwrap();
    let labels: Vec<String> = chart
        .legend_entries(&Theme::light())
        .into_iter()
        .map(|e| e.label)
        .collect();
    assert_eq!(labels, vec!["exhaustive search".to_string(), "dynamic programming".to_string()]);
    assert_eq!(labels, vec![EXHAUSTIVE_SEARCH, DYNAMIC_PROGRAMMING]);
}

#[test]
fn series_follow_input_order() {
    let chart = Measurements::small().chart().unwrap();
    let xs: Vec<f64> = chart.series[0].data_xy.iter().map(|p| p.0).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(chart.series[0].data_xy[4], (6.0, 3.968e-05));
    assert_eq!(chart.series[1].data_xy[0], (2.0, 2.88e-06));
}

#[test]
fn writes_graph_png_and_overwrites() {
    let dir = out_dir("timing_overwrite");
    let path = dir.join(OUTPUT_FILE);
    std::fs::write(&path, b"stale").expect("seed stale file");

    let opts = RenderOptions::default();
    render_graph(&Measurements::small(), &opts, &path).expect("first render");
    let first = std::fs::read(&path).expect("read first");
    assert!(first.len() > 5);
    assert!(first.starts_with(&[137, 80, 78, 71]));

    render_graph(&Measurements::small(), &opts, &path).expect("second render");
    let second = std::fs::read(&path).expect("read second");

    let a = image::load_from_memory(&first).expect("decode first").to_rgba8();
    let b = image::load_from_memory(&second).expect("decode second").to_rgba8();
    assert_eq!(a.as_raw(), b.as_raw(), "reruns must produce the same picture");

    let names: Vec<_> = std::fs::read_dir(&dir)
        .expect("list dir")
        .map(|e| e.expect("entry").file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from(OUTPUT_FILE)]);
}

#[test]
fn both_lines_are_drawn_in_palette_colours() {
    let chart = Measurements::small().chart().unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let img = image::load_from_memory(&chart.render_to_png_bytes(&opts).unwrap())
        .unwrap()
        .to_rgba8();

    // Background is white.
    assert!(near(img.get_pixel(0, 0), (255, 255, 255), 0));

    let blue = img.pixels().filter(|p| near(p, (0x1f, 0x77, 0xb4), 24)).count();
    let orange = img.pixels().filter(|p| near(p, (0xff, 0x7f, 0x0e), 24)).count();
    assert!(blue > 50, "exhaustive search line missing ({blue} px)");
    assert!(orange > 50, "dynamic programming line missing ({orange} px)");
}

#[test]
fn large_dataset_renders() {
    let chart = Measurements::large().chart().unwrap();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.show_grid = true;
    let bytes = chart.render_to_png_bytes(&opts).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn explicit_colour_overrides_palette() {
    let teal = skia_safe::Color::from_rgb(0, 200, 160);
    let mut chart = Measurements::small().chart().unwrap();
    chart.series[0] = chart.series[0].clone().with_color(teal);

    let theme = Theme::light();
    let entries = chart.legend_entries(&theme);
    assert_eq!(entries[0].color, teal);
    assert_eq!(entries[1].color, theme.series_color(1));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let img = image::load_from_memory(&chart.render_to_png_bytes(&opts).unwrap())
        .unwrap()
        .to_rgba8();

    let teal_px = img.pixels().filter(|p| near(p, (0, 200, 160), 24)).count();
    let blue_px = img.pixels().filter(|p| near(p, (0x1f, 0x77, 0xb4), 24)).count();
    assert!(teal_px > 50, "override colour missing ({teal_px} px)");
    assert_eq!(blue_px, 0, "palette blue should not be drawn");
}
