#![cfg(all(target_arch = "wasm32", feature = "render"))]

use criterion_charts_wasm::presentation::CriterionChartApi;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const SETTINGS: &str = r#"{
    "group": "push",
    "plot": "mean-time-per-iter",
    "series": [{ "name": "fll-noalloc-back" }, { "name": "vec" }],
    "iter_multiplier": 1000
}"#;

#[wasm_bindgen_test]
fn renders_and_zooms_on_a_real_canvas() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id("criterion-chart");
    document.body().unwrap().append_child(&canvas).unwrap();

    let mut api =
        CriterionChartApi::new("criterion-chart".to_string(), include_str!("fixtures/push.json"), SETTINGS).unwrap();
    api.render().unwrap();
    assert_eq!(canvas.width(), 500);
    assert!(api.viewport().unwrap().contains("auto"));

    api.pointer_down(80.0);
    api.pointer_move(300.0);
    api.pointer_up();
    api.render().unwrap();
    assert!(api.viewport().unwrap().contains("fixed"));

    api.reset_zoom();
    assert!(api.viewport().unwrap().contains("auto"));
}

#[wasm_bindgen_test]
fn unknown_group_is_an_error() {
    let settings = SETTINGS.replace("\"push\"", "\"pop\"");
    let err = CriterionChartApi::new("missing".to_string(), include_str!("fixtures/push.json"), &settings)
        .err()
        .unwrap();
    assert!(err.as_string().unwrap().starts_with("Could not find Plot Data"));
}
