use leptos::html::Canvas;
use leptos::*;
use std::rc::Rc;

use crate::{
    application::{ChartController, ChartSettings, Tooltip, labels},
    domain::{
        benchmark::ChartDataStore,
        errors::ChartError,
        logging::LogComponent,
    },
    infrastructure::rendering::{CanvasSurface, ChartRenderer, sample_at},
};

/// 📈 One benchmark chart drawn onto a canvas.
///
/// Drag across the plot to zoom into the selected samples, double-click
/// to go back to the starting view.
#[component]
pub fn CriterionChart(store: Rc<ChartDataStore>, settings: ChartSettings) -> impl IntoView {
    let controller = match ChartController::from_settings(store.as_ref(), &settings) {
        Ok(controller) => controller,
        Err(error) => return view! { <ErrorPanel error=error width=settings.width /> }.into_view(),
    };
    let (width, height) = (settings.width, settings.height);

    let controller = create_rw_signal(controller);
    let hover = create_rw_signal(None::<usize>);
    let pointer = create_rw_signal((0.0f64, 0.0f64));
    let canvas_ref = create_node_ref::<Canvas>();

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let hovered = hover.get();
        let drawn = controller.with(|controller| {
            let mut surface = CanvasSurface::from_canvas(&canvas, width, height)?;
            ChartRenderer::render(&mut surface, controller, hovered)
        });
        if let Err(error) = drawn {
            crate::log_error!(LogComponent::Presentation("CriterionChart"), "❌ {error}");
        }
    });

    let handle_mouse_down = move |event: web_sys::MouseEvent| {
        let x = event.offset_x() as f64;
        controller.update(|controller| {
            let index = sample_at(controller, x);
            controller.pointer_down(index);
        });
    };

    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let (x, y) = (event.offset_x() as f64, event.offset_y() as f64);
        pointer.set((x, y));
        let index = controller.with_untracked(|controller| sample_at(controller, x));
        hover.set(index);
        if controller.with_untracked(|controller| controller.state().is_selecting()) {
            controller.update(|controller| controller.pointer_move(index));
        }
    };

    let handle_mouse_up = move |_event: web_sys::MouseEvent| {
        controller.update(|controller| controller.pointer_up());
    };

    let handle_mouse_leave = move |_event: web_sys::MouseEvent| hover.set(None);

    let handle_double_click = move |_event: web_sys::MouseEvent| {
        controller.update(|controller| controller.reset());
    };

    let tooltip = move || {
        let index = hover.get()?;
        controller.with(|controller| controller.model().tooltip(index))
    };

    view! {
        <div
            class="criterion-chart"
            style=format!("position: relative; width: {width}px; height: {height}px;")
        >
            <canvas
                node_ref=canvas_ref
                width=width
                height=height
                style="cursor: crosshair; user-select: none;"
                on:mousedown=handle_mouse_down
                on:mousemove=handle_mouse_move
                on:mouseup=handle_mouse_up
                on:mouseleave=handle_mouse_leave
                on:dblclick=handle_double_click
            />
            {move || tooltip().map(|tooltip| view! { <ChartTooltip tooltip=tooltip position=pointer.get() /> })}
        </div>
    }
    .into_view()
}

/// 🎯 Values of the hovered sample, next to the pointer.
#[component]
fn ChartTooltip(tooltip: Tooltip, position: (f64, f64)) -> impl IntoView {
    let (x, y) = position;
    let rows = tooltip
        .rows
        .into_iter()
        .map(|(name, value)| view! { <div class="tooltip-row">{format!("{name}: {value:.4}")}</div> })
        .collect_view();

    view! {
        <div
            class="chart-tooltip"
            style=format!(
                "position: absolute; left: {}px; top: {}px; pointer-events: none; \
                 background: rgba(255, 255, 255, 0.95); border: 1px solid #ccc; \
                 padding: 6px 8px; font-size: 12px; white-space: nowrap;",
                x + 12.0,
                y + 12.0
            )
        >
            <div class="tooltip-x">{labels::format_x_tick(tooltip.x)}</div>
            {rows}
        </div>
    }
}

/// ❌ Shown in place of a chart that could not be built.
#[component]
pub fn ErrorPanel(error: ChartError, #[prop(default = 500)] width: u32) -> impl IntoView {
    view! {
        <div class="criterion-chart-error" style=format!("width: {width}px; height: 100px;")>
            <p>{error.to_string()}</p>
        </div>
    }
}
