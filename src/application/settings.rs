//! The single settings record a chart is configured from.

use serde::Deserialize;

use crate::domain::chart::{LegendPosition, PlotKind, TimeUnit, XRange};
use crate::domain::errors::{ChartError, ChartResult};

/// Marker style for the points of a series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub size: f64,
    pub stroke: Option<String>,
    pub fill: String,
}

impl DotStyle {
    pub fn new(size: f64) -> Self {
        Self { size, stroke: None, fill: "white".to_string() }
    }

    fn active() -> Self {
        Self::new(2.0)
    }
}

impl Default for DotStyle {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { stroke: None, stroke_width: 1.0 }
    }
}

fn active_dot() -> DotStyle {
    DotStyle::active()
}

/// One plotted series and how it looks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeriesSettings {
    pub name: String,
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: Option<f64>,
    #[serde(default)]
    pub dot: DotStyle,
    #[serde(default = "active_dot")]
    pub active_dot: DotStyle,
    #[serde(default)]
    pub trend_line: LineStyle,
    #[serde(default)]
    pub area_fill: Option<String>,
    #[serde(default)]
    pub render_mean: bool,
    #[serde(default)]
    pub mean: LineStyle,
}

impl SeriesSettings {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stroke: None,
            stroke_width: None,
            dot: DotStyle::default(),
            active_dot: DotStyle::active(),
            trend_line: LineStyle::default(),
            area_fill: None,
            render_mean: false,
            mean: LineStyle::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: &str) -> Self {
        self.stroke = Some(stroke.to_string());
        self
    }

    pub fn with_mean(mut self) -> Self {
        self.render_mean = true;
        self
    }
}

/// Text and colour overrides for an axis label.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    pub value: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendSettings {
    pub position: LegendPosition,
    pub padding: f64,
}

impl Default for LegendSettings {
    fn default() -> Self {
        Self { position: LegendPosition::Right, padding: 10.0 }
    }
}

/// Everything a chart instance is configured with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub group: String,
    pub plot: PlotKind,
    pub series: Vec<SeriesSettings>,
    pub x_label: LabelSettings,
    pub y_label: LabelSettings,
    pub y_right_label: LabelSettings,
    pub legend: LegendSettings,
    /// Display unit; the dataset's own unit when unset.
    pub time_unit: Option<TimeUnit>,
    pub iter_multiplier: f64,
    pub x_range: XRange,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            group: String::new(),
            plot: PlotKind::MeanTimePerIter,
            series: Vec::new(),
            x_label: LabelSettings::default(),
            y_label: LabelSettings::default(),
            y_right_label: LabelSettings::default(),
            legend: LegendSettings::default(),
            time_unit: None,
            iter_multiplier: 1.0,
            x_range: XRange::default(),
            width: 500,
            height: 300,
        }
    }
}

impl ChartSettings {
    pub fn new(group: &str, plot: PlotKind) -> Self {
        Self { group: group.to_string(), plot, ..Self::default() }
    }

    pub fn with_series(mut self, series: SeriesSettings) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = Some(unit);
        self
    }

    pub fn with_iter_multiplier(mut self, multiplier: f64) -> Self {
        self.iter_multiplier = multiplier;
        self
    }

    pub fn with_x_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.x_range = XRange { min, max };
        self
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| ChartError::InvalidSettings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.iter_multiplier.is_finite() || self.iter_multiplier <= 0.0 {
            return Err(ChartError::InvalidSettings(format!(
                "iteration multiplier must be a positive number, got {}",
                self.iter_multiplier
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidSettings(format!(
                "canvas size {}x{} is empty",
                self.width, self.height
            )));
        }
        if let (Some(min), Some(max)) = (self.x_range.min, self.x_range.max) {
            if min >= max {
                return Err(ChartError::InvalidSettings(format!("x range [{}, {}] is empty", min, max)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_defaults_fill_missing_fields() {
        let settings = ChartSettings::from_json(
            r#"{"group": "Push", "plot": "linear-regression", "series": [{"name": "fll-noalloc-back"}], "time_unit": "ms"}"#,
        )
        .unwrap();
        assert_eq!(settings.plot, PlotKind::LinearRegression);
        assert_eq!(settings.time_unit, Some(TimeUnit::Milliseconds));
        assert_eq!(settings.iter_multiplier, 1.0);
        assert_eq!(settings.series[0].active_dot.size, 2.0);
        assert_eq!(settings.legend.position, LegendPosition::Right);
    }

    #[test]
    fn rejects_non_positive_multiplier() {
        let settings = ChartSettings::new("push", PlotKind::MeanTimePerIter).with_iter_multiplier(0.0);
        assert!(matches!(settings.validate(), Err(ChartError::InvalidSettings(_))));
    }
}
