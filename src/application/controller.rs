use crate::application::chart_service::ChartModel;
use crate::application::settings::ChartSettings;
use crate::domain::{
    benchmark::BenchmarkRepository,
    chart::{Axis, DataExtent, SelectionEvent, Viewport, ZoomBox, ZoomState},
    errors::ChartResult,
    logging::{LogComponent, LogLevel, get_logger},
};

/// Owns one chart's model and its zoom/selection state.
///
/// Pointer events arrive already hit-tested: `None` means the pointer is
/// not over a sample and the event is dropped.
#[derive(Debug, Clone)]
pub struct ChartController {
    model: ChartModel,
    state: ZoomState,
}

impl ChartController {
    pub fn new(model: ChartModel) -> Self {
        let state = ZoomState::new(model.home);
        Self { model, state }
    }

    pub fn from_settings<R: BenchmarkRepository>(repository: &R, settings: &ChartSettings) -> ChartResult<Self> {
        ChartModel::build(repository, settings).map(Self::new)
    }

    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    pub fn state(&self) -> &ZoomState {
        &self.state
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    pub fn dispatch(&mut self, event: SelectionEvent) {
        let before = self.state;
        self.state = before.reduce(event, &self.model.samples, &self.model.zoom_keys);

        if before.is_selecting() && !self.state.is_selecting() {
            let metadata = serde_json::to_string(&self.state.viewport).unwrap_or_default();
            let message = if self.state.viewport == self.state.home { "🔄 Zoom reset" } else { "🔍 Zoom applied" };
            get_logger().log_with_metadata(
                LogLevel::Debug,
                LogComponent::Application("ChartController"),
                message,
                &metadata,
            );
        }
    }

    pub fn pointer_down(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.dispatch(SelectionEvent::PointerDown(index));
        }
    }

    pub fn pointer_move(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.dispatch(SelectionEvent::PointerMove(index));
        }
    }

    pub fn pointer_up(&mut self) {
        self.dispatch(SelectionEvent::PointerUp);
    }

    pub fn reset(&mut self) {
        self.dispatch(SelectionEvent::Reset);
    }

    /// Visible box on the left axis, auto edges filled from the data.
    /// `None` when nothing is plotted.
    pub fn visible_box(&self) -> Option<ZoomBox> {
        let keys = self.model.axis_keys(Axis::Left);
        let extent = DataExtent::of(&self.model.samples, &keys)?;
        Some(self.state.viewport.resolve(&extent).normalized())
    }

    /// Right-axis box: shares x with the left axis, y always fits the
    /// right-axis data.
    pub fn right_box(&self) -> Option<ZoomBox> {
        if !self.model.has_right_axis() {
            return None;
        }
        let visible = self.visible_box()?;
        let keys = self.model.axis_keys(Axis::Right);
        let extent = DataExtent::of(&self.model.samples, &keys)?;
        Some(
            ZoomBox {
                x_min: visible.x_min,
                x_max: visible.x_max,
                y_min: extent.y_min,
                y_max: extent.y_max,
            }
            .normalized(),
        )
    }

    /// x span of the drag in progress.
    pub fn reference_area(&self) -> Option<(f64, f64)> {
        self.state.reference_area(&self.model.samples)
    }
}
