//! Layout of the canvas and the mapping between data and pixels.

use crate::application::ChartController;
use crate::domain::benchmark::Sample;
use crate::domain::chart::{LegendPosition, ZoomBox};

pub const FONT_SIZE: f64 = 12.0;
/// Rough glyph width used to size the legend without a text backend.
pub const APPROX_CHAR_WIDTH: f64 = 7.0;
pub const LEGEND_SWATCH: f64 = 10.0;
pub const LEGEND_ROW_HEIGHT: f64 = 18.0;
const AXIS_SPACE_LEFT: f64 = 70.0;
const AXIS_SPACE_RIGHT: f64 = 70.0;
const AXIS_SPACE_BOTTOM: f64 = 45.0;
const EDGE_GAP: f64 = 10.0;

/// Pixel rectangle the data is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains_x(&self, px: f64) -> bool {
        px >= self.left && px <= self.right()
    }
}

/// Where everything goes on a canvas of a given size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot: PlotArea,
    /// Top-left corner of the legend block.
    pub legend_origin: (f64, f64),
}

impl ChartLayout {
    pub fn compute(
        width: f64,
        height: f64,
        legend: LegendPosition,
        legend_padding: f64,
        legend_labels: &[&str],
        right_axis: bool,
    ) -> Self {
        let entry_width = |label: &str| LEGEND_SWATCH + 6.0 + label.chars().count() as f64 * APPROX_CHAR_WIDTH;
        let legend_w = match legend.is_vertical() {
            true => legend_labels.iter().map(|l| entry_width(*l)).fold(0.0, f64::max),
            false => legend_labels.iter().map(|l| entry_width(*l) + 16.0).sum::<f64>(),
        };
        let legend_h = match legend.is_vertical() {
            true => legend_labels.len() as f64 * LEGEND_ROW_HEIGHT,
            false => LEGEND_ROW_HEIGHT,
        };
        let has_legend = !legend_labels.is_empty();

        let mut left = AXIS_SPACE_LEFT;
        let mut right = width - EDGE_GAP - if right_axis { AXIS_SPACE_RIGHT } else { 0.0 };
        let mut top = EDGE_GAP;
        let mut bottom = height - AXIS_SPACE_BOTTOM;
        let legend_origin = match legend {
            LegendPosition::Right => {
                if has_legend {
                    right -= legend_w + legend_padding;
                }
                (right + legend_padding + if right_axis { AXIS_SPACE_RIGHT } else { 0.0 }, top)
            }
            LegendPosition::Left => {
                let origin = (EDGE_GAP, top);
                if has_legend {
                    left += legend_w + legend_padding;
                }
                origin
            }
            LegendPosition::Top => {
                let origin = ((width - legend_w) / 2.0, top);
                if has_legend {
                    top += legend_h + legend_padding;
                }
                origin
            }
            LegendPosition::Bottom => {
                if has_legend {
                    bottom -= legend_h + legend_padding;
                }
                ((width - legend_w) / 2.0, height - legend_h - 2.0)
            }
        };

        Self {
            width,
            height,
            plot: PlotArea {
                left,
                top,
                width: (right - left).max(1.0),
                height: (bottom - top).max(1.0),
            },
            legend_origin,
        }
    }

    /// Layout for a controller's current model.
    pub fn for_controller(controller: &ChartController) -> Self {
        let model = controller.model();
        let labels: Vec<&str> = model.legend_entries().into_iter().map(|(name, _)| name).collect();
        Self::compute(
            model.width as f64,
            model.height as f64,
            model.legend.position,
            model.legend.padding,
            &labels,
            model.has_right_axis(),
        )
    }
}

/// Maps data coordinates inside `bounds` onto `area` and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub area: PlotArea,
    pub bounds: ZoomBox,
}

impl PlotGeometry {
    pub fn new(area: PlotArea, bounds: ZoomBox) -> Self {
        Self { area, bounds: bounds.normalized() }
    }

    pub fn x_to_px(&self, x: f64) -> f64 {
        self.area.left + (x - self.bounds.x_min) / self.bounds.width() * self.area.width
    }

    /// Pixel y grows downwards.
    pub fn y_to_px(&self, y: f64) -> f64 {
        self.area.top + (1.0 - (y - self.bounds.y_min) / self.bounds.height()) * self.area.height
    }

    pub fn px_to_x(&self, px: f64) -> f64 {
        self.bounds.x_min + (px - self.area.left) / self.area.width * self.bounds.width()
    }

    pub fn px_to_y(&self, py: f64) -> f64 {
        self.bounds.y_min + (1.0 - (py - self.area.top) / self.area.height) * self.bounds.height()
    }

    /// Index of the visible sample nearest to pixel column `px`, or `None`
    /// outside the plot area.
    pub fn nearest_sample(&self, samples: &[Sample], px: f64) -> Option<usize> {
        if !self.area.contains_x(px) {
            return None;
        }
        let x = self.px_to_x(px);
        samples
            .iter()
            .filter(|s| s.x >= self.bounds.x_min && s.x <= self.bounds.x_max)
            .min_by(|a, b| (a.x - x).abs().total_cmp(&(b.x - x).abs()))
            .map(|s| s.index)
    }
}

/// Hit-test a pointer column against a controller's current view.
pub fn sample_at(controller: &ChartController, offset_x: f64) -> Option<usize> {
    let bounds = controller.visible_box()?;
    let layout = ChartLayout::for_controller(controller);
    PlotGeometry::new(layout.plot, bounds).nearest_sample(&controller.model().samples, offset_x)
}

/// 1, 2 or 5 times a power of ten, at least `raw`.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let base = 10f64.powf(raw.log10().floor());
    let ratio = raw / base;
    if ratio <= 1.0 {
        base
    } else if ratio <= 2.0 {
        base * 2.0
    } else if ratio <= 5.0 {
        base * 5.0
    } else {
        base * 10.0
    }
}

/// Round-valued ticks covering `[min, max]`, about `target` of them.
pub fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step((max - min) / target.max(1) as f64);
    if step == 0.0 {
        return vec![min];
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}
