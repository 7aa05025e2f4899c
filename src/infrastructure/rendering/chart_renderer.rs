//! Paints a `ChartController`'s current view onto any `DrawSurface`.

use super::geometry::{
    APPROX_CHAR_WIDTH, ChartLayout, LEGEND_ROW_HEIGHT, LEGEND_SWATCH, PlotGeometry, nice_step, ticks,
};
use super::surface::{DrawSurface, TextAlign, TextStyle};
use crate::application::{ChartController, ChartElement, ChartModel, labels};
use crate::domain::{chart::Axis, errors::ChartResult, logging::LogComponent};

const AXIS_COLOR: &str = "#666666";
const GRID_COLOR: &str = "#e5e5e5";
const TEXT_COLOR: &str = "#333333";
const SELECTION_COLOR: &str = "#cccccc";
const SELECTION_ALPHA: f64 = 0.3;
const AREA_ALPHA: f64 = 0.6;
const TICK_TARGET: usize = 5;
const TICK_LENGTH: f64 = 5.0;

/// Text for a tick at `value` when ticks are `step` apart.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 { (-step.log10().floor()).max(0.0) as usize } else { 0 };
    format!("{:.*}", decimals, value)
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Draw the whole chart; `hover` is the index of the sample under the
    /// pointer, if any.
    pub fn render<S: DrawSurface>(
        surface: &mut S,
        controller: &ChartController,
        hover: Option<usize>,
    ) -> ChartResult<()> {
        let model = controller.model();
        let layout = ChartLayout::for_controller(controller);
        surface.clear(layout.width, layout.height)?;

        let Some(bounds) = controller.visible_box() else {
            crate::log_warn!(
                LogComponent::Infrastructure("ChartRenderer"),
                "⚠️ Nothing to plot for '{}'",
                model.group
            );
            let style = TextStyle::new(TEXT_COLOR, TextAlign::Center);
            return surface.text("No data", layout.width / 2.0, layout.height / 2.0, &style);
        };
        let left = PlotGeometry::new(layout.plot, bounds);
        let right = controller.right_box().map(|b| PlotGeometry::new(layout.plot, b));

        Self::draw_axes(surface, model, &left, right.as_ref())?;

        surface.clip(Some(layout.plot))?;
        for element in &model.elements {
            let geometry = match (element.axis(), right.as_ref()) {
                (Axis::Right, Some(right)) => right,
                _ => &left,
            };
            Self::draw_element(surface, model, element, geometry)?;
        }
        if let Some((from, to)) = controller.reference_area() {
            let (a, b) = (left.x_to_px(from), left.x_to_px(to));
            surface.fill_rect(
                a.min(b),
                layout.plot.top,
                (b - a).abs(),
                layout.plot.height,
                SELECTION_COLOR,
                SELECTION_ALPHA,
            )?;
        }
        if let Some(index) = hover {
            Self::draw_active_dots(surface, model, index, &left, right.as_ref())?;
        }
        surface.clip(None)?;

        Self::draw_legend(surface, model, &layout)?;
        crate::log_trace!(
            LogComponent::Infrastructure("ChartRenderer"),
            "🎨 Frame: {} elements, x {:.3}..{:.3}",
            model.elements.len(),
            bounds.x_min,
            bounds.x_max
        );
        Ok(())
    }

    fn draw_axes<S: DrawSurface>(
        surface: &mut S,
        model: &ChartModel,
        left: &PlotGeometry,
        right: Option<&PlotGeometry>,
    ) -> ChartResult<()> {
        let area = left.area;
        let b = left.bounds;
        let tick_style = |align| TextStyle::new(AXIS_COLOR, align);

        let x_step = nice_step(b.width() / TICK_TARGET as f64);
        for x in ticks(b.x_min, b.x_max, TICK_TARGET) {
            let px = left.x_to_px(x);
            surface.polyline(&[(px, area.top), (px, area.bottom())], GRID_COLOR, 1.0, true)?;
            surface.polyline(&[(px, area.bottom()), (px, area.bottom() + TICK_LENGTH)], AXIS_COLOR, 1.0, false)?;
            let text = if x_step >= 0.01 { labels::format_x_tick(x) } else { format_tick(x, x_step) };
            surface.text(&text, px, area.bottom() + 14.0, &tick_style(TextAlign::Center))?;
        }

        let y_step = nice_step(b.height() / TICK_TARGET as f64);
        for y in ticks(b.y_min, b.y_max, TICK_TARGET) {
            let py = left.y_to_px(y);
            surface.polyline(&[(area.left, py), (area.right(), py)], GRID_COLOR, 1.0, true)?;
            surface.polyline(&[(area.left - TICK_LENGTH, py), (area.left, py)], AXIS_COLOR, 1.0, false)?;
            surface.text(&format_tick(y, y_step), area.left - 8.0, py, &tick_style(TextAlign::Right))?;
        }

        surface.polyline(&[(area.left, area.top), (area.left, area.bottom())], AXIS_COLOR, 1.0, false)?;
        surface.polyline(&[(area.left, area.bottom()), (area.right(), area.bottom())], AXIS_COLOR, 1.0, false)?;

        if let Some(right) = right {
            let rb = right.bounds;
            let step = nice_step(rb.height() / TICK_TARGET as f64);
            surface.polyline(&[(area.right(), area.top), (area.right(), area.bottom())], AXIS_COLOR, 1.0, false)?;
            for y in ticks(rb.y_min, rb.y_max, TICK_TARGET) {
                let py = right.y_to_px(y);
                surface.polyline(&[(area.right(), py), (area.right() + TICK_LENGTH, py)], AXIS_COLOR, 1.0, false)?;
                surface.text(&format_tick(y, step), area.right() + 8.0, py, &tick_style(TextAlign::Left))?;
            }
        }

        let label_style = |color: &Option<String>| {
            TextStyle::new(color.as_deref().unwrap_or(TEXT_COLOR), TextAlign::Center)
        };
        let x = &model.labels.x;
        surface.text(&x.text, area.left + area.width / 2.0, area.bottom() + 34.0, &label_style(&x.color))?;
        let y = &model.labels.y;
        surface.text(&y.text, 14.0, area.top + area.height / 2.0, &label_style(&y.color).vertical())?;
        if let (Some(label), Some(_)) = (&model.labels.y_right, right) {
            surface.text(
                &label.text,
                area.right() + 58.0,
                area.top + area.height / 2.0,
                &label_style(&label.color).vertical(),
            )?;
        }
        Ok(())
    }

    fn points(model: &ChartModel, key: &str, geometry: &PlotGeometry) -> Vec<(f64, f64)> {
        model
            .samples
            .iter()
            .filter_map(|s| Some((geometry.x_to_px(s.x), geometry.y_to_px(s.value(key)?))))
            .collect()
    }

    fn draw_element<S: DrawSurface>(
        surface: &mut S,
        model: &ChartModel,
        element: &ChartElement,
        geometry: &PlotGeometry,
    ) -> ChartResult<()> {
        match element {
            ChartElement::Line { key, stroke, stroke_width, dot, .. } => {
                let points = Self::points(model, key, geometry);
                surface.polyline(&points, stroke, *stroke_width, false)?;
                let dot_stroke = dot.stroke.as_deref().unwrap_or(stroke);
                for &(x, y) in &points {
                    surface.circle(x, y, dot.size, &dot.fill, dot_stroke)?;
                }
            }
            ChartElement::TrendLine { key, stroke, stroke_width, .. } => {
                let points = Self::points(model, key, geometry);
                surface.polyline(&points, stroke, *stroke_width, false)?;
            }
            ChartElement::Area { key, fill, stroke, stroke_width, .. } => {
                let points = Self::points(model, key, geometry);
                let (Some(&(first_x, _)), Some(&(last_x, _))) = (points.first(), points.last()) else {
                    return Ok(());
                };
                let b = geometry.bounds;
                let baseline = geometry.y_to_px(0f64.clamp(b.y_min, b.y_max));
                let mut outline = points.clone();
                outline.push((last_x, baseline));
                outline.push((first_x, baseline));
                surface.polygon(&outline, fill, AREA_ALPHA)?;
                surface.polyline(&points, stroke, *stroke_width, false)?;
            }
            ChartElement::MeanLine { x, stroke, stroke_width } => {
                let px = geometry.x_to_px(*x);
                let area = geometry.area;
                surface.polyline(&[(px, area.top), (px, area.bottom())], stroke, *stroke_width, false)?;
            }
        }
        Ok(())
    }

    fn draw_active_dots<S: DrawSurface>(
        surface: &mut S,
        model: &ChartModel,
        index: usize,
        left: &PlotGeometry,
        right: Option<&PlotGeometry>,
    ) -> ChartResult<()> {
        let Some(sample) = model.samples.iter().find(|s| s.index == index) else {
            return Ok(());
        };
        for element in &model.elements {
            let ChartElement::Line { key, axis, stroke, active_dot, .. } = element else {
                continue;
            };
            let Some(value) = sample.value(key) else {
                continue;
            };
            let geometry = match (axis, right) {
                (Axis::Right, Some(right)) => right,
                _ => left,
            };
            let fill = active_dot.stroke.as_deref().unwrap_or(stroke);
            surface.circle(
                geometry.x_to_px(sample.x),
                geometry.y_to_px(value),
                active_dot.size * 2.0,
                fill,
                &active_dot.fill,
            )?;
        }
        Ok(())
    }

    fn draw_legend<S: DrawSurface>(surface: &mut S, model: &ChartModel, layout: &ChartLayout) -> ChartResult<()> {
        let (mut x, mut y) = layout.legend_origin;
        let vertical = model.legend.position.is_vertical();
        let style = TextStyle::new(TEXT_COLOR, TextAlign::Left);
        for (name, color) in model.legend_entries() {
            let middle = y + LEGEND_ROW_HEIGHT / 2.0;
            surface.fill_rect(x, middle - LEGEND_SWATCH / 2.0, LEGEND_SWATCH, LEGEND_SWATCH, color, 1.0)?;
            surface.text(name, x + LEGEND_SWATCH + 6.0, middle, &style)?;
            if vertical {
                y += LEGEND_ROW_HEIGHT;
            } else {
                x += LEGEND_SWATCH + 6.0 + name.chars().count() as f64 * APPROX_CHAR_WIDTH + 16.0;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_decimals_follow_step() {
        assert_eq!(format_tick(0.25, 0.05), "0.25");
        assert_eq!(format_tick(40.0, 20.0), "40");
        assert_eq!(format_tick(1.5, 0.5), "1.5");
    }
}
