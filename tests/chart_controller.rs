use criterion_charts_wasm::application::settings::SeriesSettings;
use criterion_charts_wasm::application::{ChartController, ChartSettings};
use criterion_charts_wasm::domain::benchmark::ChartDataStore;
use criterion_charts_wasm::domain::chart::{Bound, PlotKind, Selection, ZoomBox};

fn store() -> ChartDataStore {
    ChartDataStore::from_json(include_str!("fixtures/push.json")).expect("fixture parses")
}

fn mean_time() -> ChartSettings {
    ChartSettings::new("push", PlotKind::MeanTimePerIter)
        .with_series(SeriesSettings::new("fll-noalloc-back"))
        .with_series(SeriesSettings::new("vec"))
        .with_iter_multiplier(1000.0)
}

#[test]
fn starts_fitted_to_data() {
    let controller = ChartController::from_settings(&store(), &mean_time()).expect("controller");
    assert!(controller.viewport().is_auto());
    assert_eq!(
        controller.visible_box(),
        Some(ZoomBox { x_min: 1.0, x_max: 3.0, y_min: 900.0, y_max: 3000.0 })
    );
    assert_eq!(controller.right_box(), None);
}

#[test]
fn drag_zooms_and_reset_restores() {
    let mut controller = ChartController::from_settings(&store(), &mean_time()).expect("controller");
    controller.pointer_down(Some(1));
    controller.pointer_move(Some(2));
    assert_eq!(controller.reference_area(), Some((2.0, 3.0)));
    controller.pointer_up();

    assert_eq!(controller.state().selection, Selection::Idle);
    assert_eq!(
        controller.visible_box(),
        Some(ZoomBox { x_min: 2.0, x_max: 3.0, y_min: 1800.0, y_max: 3000.0 })
    );

    controller.reset();
    assert!(controller.viewport().is_auto());
}

#[test]
fn pointer_outside_samples_is_ignored() {
    let mut controller = ChartController::from_settings(&store(), &mean_time()).expect("controller");
    controller.pointer_down(None);
    assert!(!controller.state().is_selecting());

    controller.pointer_down(Some(0));
    controller.pointer_move(None);
    assert_eq!(controller.state().selection, Selection::Selecting { start: 0, end: None });
    controller.pointer_up();
    assert!(controller.viewport().is_auto());
}

#[test]
fn fixed_x_range_is_home() {
    let settings = mean_time().with_x_range(Some(1000.0), Some(2500.0));
    let mut controller = ChartController::from_settings(&store(), &settings).expect("controller");
    assert_eq!(controller.viewport().x_min, Bound::Fixed(1.0));
    assert_eq!(controller.viewport().x_max, Bound::Fixed(2.5));

    let visible = controller.visible_box().expect("visible");
    assert_eq!((visible.x_min, visible.x_max), (1.0, 2.5));

    controller.pointer_down(Some(0));
    controller.pointer_move(Some(1));
    controller.pointer_up();
    assert_eq!(controller.viewport().y_min, Bound::Fixed(900.0));
    controller.reset();
    assert_eq!(controller.viewport().x_max, Bound::Fixed(2.5));
    assert_eq!(controller.viewport().y_min, Bound::Auto);
}

#[test]
fn click_fits_everything_despite_fixed_x_range() {
    let settings = mean_time().with_x_range(Some(1000.0), Some(2500.0));
    let mut controller = ChartController::from_settings(&store(), &settings).expect("controller");
    controller.pointer_down(Some(1));
    controller.pointer_up();
    assert!(controller.viewport().is_auto());
    assert_eq!(
        controller.visible_box(),
        Some(ZoomBox { x_min: 1.0, x_max: 3.0, y_min: 900.0, y_max: 3000.0 })
    );
}

#[test]
fn density_right_axis_shares_x() {
    let settings = ChartSettings::new("push", PlotKind::ProbabilityDensity)
        .with_series(SeriesSettings::new("fll-noalloc-back"))
        .with_iter_multiplier(1000.0);
    let mut controller = ChartController::from_settings(&store(), &settings).expect("controller");

    controller.pointer_down(Some(0));
    controller.pointer_move(Some(2));
    controller.pointer_up();

    let left = controller.visible_box().expect("left");
    assert_eq!((left.y_min, left.y_max), (0.1, 0.4));
    let right = controller.right_box().expect("right");
    assert_eq!((right.x_min, right.x_max), (left.x_min, left.x_max));
    assert_eq!((right.y_min, right.y_max), (1.0, 3.0));
}
