use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::app::CriterionChart;
use crate::application::{ChartController, ChartSettings};
use crate::domain::{
    benchmark::ChartDataStore,
    errors::ChartError,
    logging::LogComponent,
};
use crate::infrastructure::rendering::{CanvasSurface, ChartRenderer, sample_at};

fn to_js(error: ChartError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Canvas-only chart handle for callers that don't mount the Leptos
/// component. Pointer positions are canvas-relative pixels.
#[wasm_bindgen]
pub struct CriterionChartApi {
    canvas_id: String,
    controller: ChartController,
    hover: Option<usize>,
}

#[wasm_bindgen]
impl CriterionChartApi {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String, data_json: &str, settings_json: &str) -> Result<CriterionChartApi, JsValue> {
        let store = ChartDataStore::from_json(data_json).map_err(to_js)?;
        let settings = ChartSettings::from_json(settings_json).map_err(to_js)?;
        let controller = ChartController::from_settings(&store, &settings).map_err(to_js)?;
        crate::log_info!(
            LogComponent::Presentation("CriterionChartApi"),
            "✅ Chart bound to canvas '{}'",
            canvas_id
        );
        Ok(Self { canvas_id, controller, hover: None })
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, offset_x: f64) {
        let index = sample_at(&self.controller, offset_x);
        self.controller.pointer_down(index);
    }

    /// Also tracks the hovered sample for the active dot.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, offset_x: f64) {
        let index = sample_at(&self.controller, offset_x);
        self.hover = index;
        if self.controller.state().is_selecting() {
            self.controller.pointer_move(index);
        }
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    #[wasm_bindgen(js_name = resetZoom)]
    pub fn reset_zoom(&mut self) {
        self.controller.reset();
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let model = self.controller.model();
        let mut surface =
            CanvasSurface::from_element_id(&self.canvas_id, model.width, model.height).map_err(to_js)?;
        ChartRenderer::render(&mut surface, &self.controller, self.hover).map_err(to_js)
    }

    /// Current viewport as JSON; auto edges are `"auto"`.
    pub fn viewport(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.controller.viewport()).map_err(|e| to_js(e.into()))
    }

    /// Hovered sample's tooltip as `{"x": .., "rows": [[name, value], ..]}`,
    /// or `null`.
    pub fn tooltip(&self) -> String {
        let tooltip = self.hover.and_then(|index| self.controller.model().tooltip(index));
        match tooltip {
            Some(tooltip) => serde_json::json!({ "x": tooltip.x, "rows": tooltip.rows }).to_string(),
            None => "null".to_string(),
        }
    }
}

/// Mount a `CriterionChart` component at the end of `<body>`.
#[wasm_bindgen(js_name = mountCriterionChart)]
pub fn mount_criterion_chart(data_json: &str, settings_json: &str) -> Result<(), JsValue> {
    let store = Rc::new(ChartDataStore::from_json(data_json).map_err(to_js)?);
    let settings = ChartSettings::from_json(settings_json).map_err(to_js)?;
    leptos::mount_to_body(move || {
        use leptos::*;
        view! { <CriterionChart store=store settings=settings /> }
    });
    Ok(())
}
