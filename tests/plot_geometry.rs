use criterion_charts_wasm::application::settings::SeriesSettings;
use criterion_charts_wasm::application::{ChartController, ChartSettings};
use criterion_charts_wasm::domain::benchmark::{ChartDataStore, FieldRole, Sample};
use criterion_charts_wasm::domain::chart::{LegendPosition, PlotKind, ZoomBox};
use criterion_charts_wasm::infrastructure::rendering::geometry::ticks;
use criterion_charts_wasm::infrastructure::rendering::{ChartLayout, PlotArea, PlotGeometry, sample_at};

fn geometry() -> PlotGeometry {
    PlotGeometry::new(
        PlotArea { left: 50.0, top: 10.0, width: 400.0, height: 200.0 },
        ZoomBox { x_min: 0.0, x_max: 10.0, y_min: 0.0, y_max: 100.0 },
    )
}

#[test]
fn maps_data_to_pixels() {
    let g = geometry();
    assert_eq!(g.x_to_px(5.0), 250.0);
    assert_eq!(g.y_to_px(0.0), 210.0);
    assert_eq!(g.y_to_px(100.0), 10.0);
    assert!((g.px_to_x(g.x_to_px(3.3)) - 3.3).abs() < 1e-9);
    assert!((g.px_to_y(g.y_to_px(42.0)) - 42.0).abs() < 1e-9);
}

#[test]
fn hit_test_finds_nearest_visible_sample() {
    let g = geometry();
    let samples: Vec<Sample> = [0.0, 2.5, 5.0, 10.0, 12.0]
        .iter()
        .enumerate()
        .map(|(i, &x)| Sample::new(i, x).with_field("y", 1.0, FieldRole::Measurement))
        .collect();

    assert_eq!(g.nearest_sample(&samples, g.x_to_px(2.4)), Some(1));
    assert_eq!(g.nearest_sample(&samples, g.x_to_px(9.9)), Some(3));
    assert_eq!(g.nearest_sample(&samples, 40.0), None);
    assert_eq!(g.nearest_sample(&[], 100.0), None);
}

#[test]
fn legend_takes_space_from_its_side() {
    let right = ChartLayout::compute(500.0, 300.0, LegendPosition::Right, 10.0, &["push"], false);
    assert_eq!(right.plot.left, 70.0);
    assert_eq!(right.plot.width, 366.0);
    assert_eq!(right.legend_origin, (446.0, 10.0));

    let top = ChartLayout::compute(500.0, 300.0, LegendPosition::Top, 10.0, &["push"], false);
    assert_eq!(top.plot.top, 38.0);
    assert_eq!(top.plot.width, 420.0);

    let none = ChartLayout::compute(500.0, 300.0, LegendPosition::Left, 10.0, &[], false);
    assert_eq!(none.plot.left, 70.0);
}

#[test]
fn ticks_are_round_numbers() {
    let unit = ticks(0.0, 1.0, 5);
    assert_eq!(unit.len(), 6);
    assert!((unit[1] - 0.2).abs() < 1e-12);
    assert!((unit[5] - 1.0).abs() < 1e-12);
    assert_eq!(ticks(900.0, 3000.0, 5), vec![1000.0, 1500.0, 2000.0, 2500.0, 3000.0]);
}

#[test]
fn controller_hit_test_uses_current_view() {
    let store = ChartDataStore::from_json(include_str!("fixtures/push.json")).expect("fixture parses");
    let settings = ChartSettings::new("push", PlotKind::MeanTimePerIter)
        .with_series(SeriesSettings::new("vec"))
        .with_iter_multiplier(1000.0);
    let controller = ChartController::from_settings(&store, &settings).expect("controller");
    let layout = ChartLayout::for_controller(&controller);

    assert_eq!(sample_at(&controller, layout.plot.left), Some(0));
    assert_eq!(sample_at(&controller, layout.plot.right()), Some(2));
    assert_eq!(sample_at(&controller, 1.0), None);
}
