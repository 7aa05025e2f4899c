use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use super::rescale::RescaleMode;
use super::selection::FLAT_RANGE_EPSILON;
use crate::domain::benchmark::{Sample, SeriesKind};

/// Value Object - kind of benchmark plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlotKind {
    #[display(fmt = "Mean Time Per Iteration")]
    #[strum(serialize = "mean-time-per-iter")]
    MeanTimePerIter,
    #[display(fmt = "Linear Regression")]
    #[strum(serialize = "linear-regression")]
    LinearRegression,
    #[display(fmt = "Probability Density")]
    #[strum(serialize = "probability-density")]
    ProbabilityDensity,
}

impl PlotKind {
    /// Density plots put time on the x axis, so the roles of unit and
    /// multiplier swap.
    pub fn rescale_mode(&self) -> RescaleMode {
        match self {
            Self::ProbabilityDensity => RescaleMode::Inverted,
            _ => RescaleMode::Normal,
        }
    }

    /// Field kind the zoom box is computed over.
    pub fn zoom_kind(&self) -> SeriesKind {
        match self {
            Self::ProbabilityDensity => SeriesKind::Density,
            _ => SeriesKind::Value,
        }
    }
}

/// Value Object - legend placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

impl LegendPosition {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Which y axis an element is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Left,
    Right,
}

/// One edge of the viewport: a concrete value or "fit to the data".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bound {
    #[default]
    Auto,
    Fixed(f64),
}

impl Bound {
    pub fn resolve(&self, data: f64) -> f64 {
        match self {
            Bound::Auto => data,
            Bound::Fixed(value) => *value,
        }
    }
}

impl From<Option<f64>> for Bound {
    fn from(value: Option<f64>) -> Self {
        value.map(Bound::Fixed).unwrap_or(Bound::Auto)
    }
}

/// Bounding box produced by a committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ZoomBox {
    /// Order each pair of edges and give empty spans a minimal width so
    /// the box can be mapped to pixels.
    pub fn normalized(self) -> Self {
        let (x_min, x_max) = span(self.x_min, self.x_max);
        let (y_min, y_max) = span(self.y_min, self.y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

fn span(a: f64, b: f64) -> (f64, f64) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo > 0.0 {
        (lo, hi)
    } else {
        let pad = (lo.abs() * FLAT_RANGE_EPSILON).max(FLAT_RANGE_EPSILON);
        (lo - pad, hi + pad)
    }
}

/// Value Object - the visible region of the chart
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: Bound,
    pub x_max: Bound,
    pub y_min: Bound,
    pub y_max: Bound,
}

impl Viewport {
    /// Fit every edge to the data.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Auto-fit y, with the x edges pinned where given.
    pub fn with_x_range(x_min: Option<f64>, x_max: Option<f64>) -> Self {
        Self { x_min: x_min.into(), x_max: x_max.into(), ..Self::auto() }
    }

    pub fn is_auto(&self) -> bool {
        *self == Self::auto()
    }

    /// Fill the auto edges from the data extent.
    pub fn resolve(&self, extent: &DataExtent) -> ZoomBox {
        ZoomBox {
            x_min: self.x_min.resolve(extent.x_min),
            x_max: self.x_max.resolve(extent.x_max),
            y_min: self.y_min.resolve(extent.y_min),
            y_max: self.y_max.resolve(extent.y_max),
        }
    }
}

impl From<ZoomBox> for Viewport {
    fn from(zoom: ZoomBox) -> Self {
        Self {
            x_min: Bound::Fixed(zoom.x_min),
            x_max: Bound::Fixed(zoom.x_max),
            y_min: Bound::Fixed(zoom.y_min),
            y_max: Bound::Fixed(zoom.y_max),
        }
    }
}

/// Min/max of the plotted data, used to fill auto-fit edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataExtent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataExtent {
    /// Extent over `x` and the given keys. `None` when no sample carries
    /// any of the keys.
    pub fn of<S: AsRef<str>>(samples: &[Sample], keys: &[S]) -> Option<Self> {
        let mut extent: Option<DataExtent> = None;
        for sample in samples {
            for key in keys {
                let Some(y) = sample.value(key.as_ref()) else { continue };
                if !y.is_finite() {
                    continue;
                }
                let e = extent.get_or_insert(DataExtent { x_min: sample.x, x_max: sample.x, y_min: y, y_max: y });
                e.x_min = e.x_min.min(sample.x);
                e.x_max = e.x_max.max(sample.x);
                e.y_min = e.y_min.min(y);
                e.y_max = e.y_max.max(y);
            }
        }
        extent
    }
}
