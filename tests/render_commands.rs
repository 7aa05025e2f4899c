use criterion_charts_wasm::application::settings::SeriesSettings;
use criterion_charts_wasm::application::{ChartController, ChartSettings};
use criterion_charts_wasm::domain::benchmark::ChartDataStore;
use criterion_charts_wasm::domain::chart::PlotKind;
use criterion_charts_wasm::domain::errors::{ChartError, ChartResult};
use criterion_charts_wasm::infrastructure::rendering::surface::TextStyle;
use criterion_charts_wasm::infrastructure::rendering::{
    ChartRenderer, DrawCommand, DrawSurface, PlotArea, RecordingSurface,
};

fn controller(settings: ChartSettings) -> ChartController {
    let store = ChartDataStore::from_json(include_str!("fixtures/push.json")).expect("fixture parses");
    ChartController::from_settings(&store, &settings).expect("controller")
}

fn mean_time() -> ChartSettings {
    ChartSettings::new("push", PlotKind::MeanTimePerIter)
        .with_series(SeriesSettings::new("fll-noalloc-back"))
        .with_series(SeriesSettings::new("vec").with_stroke("#ff0000"))
        .with_iter_multiplier(1000.0)
}

fn labels(surface: &RecordingSurface) -> Vec<&str> {
    surface.texts().into_iter().filter(|text| text.parse::<f64>().is_err()).collect()
}

#[test]
fn mean_time_chart_labels() {
    let mut surface = RecordingSurface::new();
    ChartRenderer::render(&mut surface, &controller(mean_time()), None).expect("render");

    insta::assert_snapshot!(labels(&surface).join("\n"), @r"
    Iterations (x 10^3)
    Mean Time Per Iteration (ns)
    fll-noalloc-back
    vec
    ");
}

#[test]
fn each_series_gets_a_line_and_dots() {
    let mut surface = RecordingSurface::new();
    ChartRenderer::render(&mut surface, &controller(mean_time()), None).expect("render");

    let series_lines = surface
        .polylines()
        .into_iter()
        .filter(|c| matches!(c, DrawCommand::Polyline { points, .. } if points.len() == 3))
        .count();
    assert_eq!(series_lines, 2);
    assert!(surface.commands.iter().any(
        |c| matches!(c, DrawCommand::Polyline { color, points, .. } if color == "#ff0000" && points.len() == 3)
    ));
    let dots = surface.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. })).count();
    assert_eq!(dots, 6);
}

#[test]
fn hover_draws_active_dots() {
    let mut surface = RecordingSurface::new();
    ChartRenderer::render(&mut surface, &controller(mean_time()), Some(1)).expect("render");
    let active = surface
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { radius, .. } if *radius == 4.0))
        .count();
    assert_eq!(active, 2);
}

#[test]
fn drag_in_progress_is_shaded() {
    let mut controller = controller(mean_time());
    controller.pointer_down(Some(0));
    controller.pointer_move(Some(2));

    let mut surface = RecordingSurface::new();
    ChartRenderer::render(&mut surface, &controller, None).expect("render");
    assert!(surface.commands.iter().any(|c| matches!(c, DrawCommand::Rect { color, .. } if color == "#cccccc")));

    controller.pointer_up();
    ChartRenderer::render(&mut surface, &controller, None).expect("render");
    assert!(!surface.commands.iter().any(|c| matches!(c, DrawCommand::Rect { color, .. } if color == "#cccccc")));
}

#[test]
fn density_chart_fills_area_and_labels_right_axis() {
    let settings = ChartSettings::new("push", PlotKind::ProbabilityDensity)
        .with_series(SeriesSettings::new("fll-noalloc-back").with_mean())
        .with_iter_multiplier(1000.0);
    let mut surface = RecordingSurface::new();
    ChartRenderer::render(&mut surface, &controller(settings), None).expect("render");

    let polygons = surface.commands.iter().filter(|c| matches!(c, DrawCommand::Polygon { .. })).count();
    assert_eq!(polygons, 1);
    let texts = labels(&surface);
    assert!(texts.contains(&"Iterations (x 10^3)"));
    assert!(texts.contains(&"Density (fll-noalloc-back)"));
    assert!(texts.contains(&"Mean Time Per Iteration (ns)"));
}

#[test]
fn nothing_to_plot_says_so() {
    let settings = ChartSettings::new("push", PlotKind::MeanTimePerIter).with_series(SeriesSettings::new("bogus"));
    let mut surface = RecordingSurface::new();
    ChartRenderer::render(&mut surface, &controller(settings), None).expect("render");
    assert_eq!(surface.texts(), vec!["No data"]);
}

/// Records like `RecordingSurface` but refuses to draw text.
#[derive(Default)]
struct TextlessSurface {
    inner: RecordingSurface,
}

impl DrawSurface for TextlessSurface {
    fn clear(&mut self, width: f64, height: f64) -> ChartResult<()> {
        self.inner.clear(width, height)
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str, alpha: f64) -> ChartResult<()> {
        self.inner.fill_rect(x, y, width, height, color, alpha)
    }

    fn polyline(&mut self, points: &[(f64, f64)], color: &str, width: f64, dashed: bool) -> ChartResult<()> {
        self.inner.polyline(points, color, width, dashed)
    }

    fn polygon(&mut self, points: &[(f64, f64)], color: &str, alpha: f64) -> ChartResult<()> {
        self.inner.polygon(points, color, alpha)
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, stroke: &str) -> ChartResult<()> {
        self.inner.circle(x, y, radius, fill, stroke)
    }

    fn text(&mut self, _text: &str, _x: f64, _y: f64, _style: &TextStyle) -> ChartResult<()> {
        Err(ChartError::Rendering("fillText rejected".to_string()))
    }

    fn clip(&mut self, area: Option<PlotArea>) -> ChartResult<()> {
        self.inner.clip(area)
    }
}

#[test]
fn surface_failure_aborts_the_frame() {
    let mut surface = TextlessSurface::default();
    let result = ChartRenderer::render(&mut surface, &controller(mean_time()), None);
    assert!(matches!(result, Err(ChartError::Rendering(ref message)) if message == "fillText rejected"));
    assert!(!surface.inner.commands.iter().any(|c| matches!(c, DrawCommand::Circle { .. })));
}
