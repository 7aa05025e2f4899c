//! Turns a dataset plus a `ChartSettings` record into everything the view
//! draws: rescaled samples, one element per visual, labels and the
//! viewport the chart starts from.

use crate::application::labels;
use crate::application::settings::{ChartSettings, DotStyle, LegendSettings, SeriesSettings};
use crate::domain::{
    benchmark::{BenchmarkDataSet, BenchmarkRepository, GroupName, Sample, SeriesKind, SeriesResolver, position_of},
    chart::{Axis, PlotKind, TimeUnitPair, Viewport, rescale, rescale_x_range},
    errors::{ChartError, ChartResult},
    logging::LogComponent,
};

/// Stroke colours handed out to series that don't set one.
pub const DEFAULT_PALETTE: [&str; 6] = ["#3182bd", "#e6550d", "#31a354", "#756bb1", "#d62728", "#636363"];

/// A single drawable piece of the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartElement {
    /// Series values joined by a line. A zero stroke width draws only the
    /// dots.
    Line {
        name: String,
        key: String,
        axis: Axis,
        stroke: String,
        stroke_width: f64,
        dot: DotStyle,
        active_dot: DotStyle,
    },
    /// Linear regression fit.
    TrendLine { name: String, key: String, stroke: String, stroke_width: f64 },
    /// Filled probability density.
    Area { name: String, key: String, axis: Axis, fill: String, stroke: String, stroke_width: f64 },
    /// Vertical marker at a series mean.
    MeanLine { x: f64, stroke: String, stroke_width: f64 },
}

impl ChartElement {
    /// Legend text, `None` for elements without a legend entry.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Line { name, .. } | Self::TrendLine { name, .. } | Self::Area { name, .. } => Some(name),
            Self::MeanLine { .. } => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Line { key, .. } | Self::TrendLine { key, .. } | Self::Area { key, .. } => Some(key),
            Self::MeanLine { .. } => None,
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Self::Line { axis, .. } | Self::Area { axis, .. } => *axis,
            Self::TrendLine { .. } | Self::MeanLine { .. } => Axis::Left,
        }
    }

    /// Colour shown in the legend swatch.
    pub fn color(&self) -> &str {
        match self {
            Self::Area { fill, .. } => fill,
            Self::Line { stroke, .. } | Self::TrendLine { stroke, .. } | Self::MeanLine { stroke, .. } => stroke,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub x: AxisLabel,
    pub y: AxisLabel,
    pub y_right: Option<AxisLabel>,
}

/// Values shown when hovering a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub x: f64,
    pub rows: Vec<(String, f64)>,
}

/// Display-ready description of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub group: GroupName,
    pub plot: PlotKind,
    pub units: TimeUnitPair,
    pub iter_multiplier: f64,
    pub samples: Vec<Sample>,
    pub elements: Vec<ChartElement>,
    pub labels: AxisLabels,
    pub legend: LegendSettings,
    /// Keys the zoom box is computed over.
    pub zoom_keys: Vec<String>,
    /// Viewport the chart starts from and resets to.
    pub home: Viewport,
    pub width: u32,
    pub height: u32,
}

impl ChartModel {
    pub fn build<R: BenchmarkRepository>(repository: &R, settings: &ChartSettings) -> ChartResult<Self> {
        settings.validate()?;

        let Some(dataset) = repository.dataset(&settings.group) else {
            crate::log_error!(
                LogComponent::Application("ChartService"),
                "❌ No plot data for group '{}'",
                settings.group
            );
            return Err(ChartError::UnknownGroup(settings.group.clone()));
        };

        let plot = settings.plot;
        let mode = plot.rescale_mode();
        let units = TimeUnitPair::with_display(dataset.source_unit, settings.time_unit);
        let samples = rescale(&dataset.samples, units, settings.iter_multiplier, mode).into_owned();

        let resolver = SeriesResolver::new(repository);
        let group = dataset.group.value();
        let names: Vec<&str> = settings
            .series
            .iter()
            .map(|s| s.name.as_str())
            .filter(|name| dataset.binding(name).is_some())
            .collect();
        let zoom_keys = resolver.keys(group, names.as_slice(), plot.zoom_kind());

        let mut elements = Vec::new();
        for (position, series) in settings.series.iter().enumerate() {
            if dataset.binding(&series.name).is_none() {
                let error = ChartError::UnknownSeries { group: group.to_string(), series: series.name.clone() };
                crate::log_warn!(LogComponent::Application("ChartService"), "⚠️ {error}, skipped");
                continue;
            }
            let color = DEFAULT_PALETTE[position % DEFAULT_PALETTE.len()];
            elements.extend(series_elements(&resolver, dataset, plot, series, units, color));
        }

        let x_range = rescale_x_range(settings.x_range, settings.iter_multiplier, mode);
        let labels = axis_labels(settings, units);

        crate::log_info!(
            LogComponent::Application("ChartService"),
            "📊 {} chart for '{}': {} samples, {} elements ({} → {})",
            plot,
            group,
            samples.len(),
            elements.len(),
            units.source,
            units.display
        );

        Ok(Self {
            group: dataset.group.clone(),
            plot,
            units,
            iter_multiplier: settings.iter_multiplier,
            samples,
            elements,
            labels,
            legend: settings.legend.clone(),
            zoom_keys,
            home: Viewport::with_x_range(x_range.min, x_range.max),
            width: settings.width,
            height: settings.height,
        })
    }

    pub fn has_right_axis(&self) -> bool {
        self.labels.y_right.is_some()
    }

    /// Keys of every element drawn against `axis`.
    pub fn axis_keys(&self, axis: Axis) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|element| element.axis() == axis)
            .filter_map(ChartElement::key)
            .collect()
    }

    pub fn legend_entries(&self) -> Vec<(&str, &str)> {
        self.elements
            .iter()
            .filter_map(|element| element.name().map(|name| (name, element.color())))
            .collect()
    }

    /// Hover details for the sample carrying `index`.
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let sample = &self.samples[position_of(&self.samples, index)?];
        let rows = self
            .elements
            .iter()
            .filter_map(|element| {
                let value = sample.value(element.key()?)?;
                Some((element.name()?.to_string(), value))
            })
            .collect();
        Some(Tooltip { x: sample.x, rows })
    }
}

fn series_elements<R: BenchmarkRepository>(
    resolver: &SeriesResolver<'_, R>,
    dataset: &BenchmarkDataSet,
    plot: PlotKind,
    series: &SeriesSettings,
    units: TimeUnitPair,
    default_color: &str,
) -> Vec<ChartElement> {
    let group = dataset.group.value();
    let stroke = series.stroke.clone().unwrap_or_else(|| default_color.to_string());
    let line = |key: &str, axis: Axis, stroke_width: f64| ChartElement::Line {
        name: series.name.clone(),
        key: key.to_string(),
        axis,
        stroke: stroke.clone(),
        stroke_width,
        dot: series.dot.clone(),
        active_dot: series.active_dot.clone(),
    };

    let mut elements = Vec::new();
    let value_key = resolver.resolve_key(group, &series.name, SeriesKind::Value);
    match plot {
        PlotKind::MeanTimePerIter => {
            if let Some(key) = value_key {
                elements.push(line(key, Axis::Left, series.stroke_width.unwrap_or(1.0)));
            }
        }
        PlotKind::LinearRegression => {
            if let Some(key) = value_key {
                elements.push(line(key, Axis::Left, 0.0));
            }
            if let Some(key) = resolver.resolve_key(group, &series.name, SeriesKind::Trend) {
                elements.push(ChartElement::TrendLine {
                    name: format!("LR ({})", series.name),
                    key: key.to_string(),
                    stroke: series.trend_line.stroke.clone().unwrap_or_else(|| stroke.clone()),
                    stroke_width: series.trend_line.stroke_width,
                });
            }
        }
        PlotKind::ProbabilityDensity => {
            if let Some(key) = resolver.resolve_key(group, &series.name, SeriesKind::Density) {
                elements.push(ChartElement::Area {
                    name: format!("Density ({})", series.name),
                    key: key.to_string(),
                    axis: Axis::Left,
                    fill: series.area_fill.clone().unwrap_or_else(|| stroke.clone()),
                    stroke: stroke.clone(),
                    stroke_width: series.stroke_width.unwrap_or(0.0),
                });
            }
            if let Some(key) = value_key {
                elements.push(line(key, Axis::Right, 0.0));
            }
            if series.render_mean {
                if let Some(stats) = dataset.stats(&series.name) {
                    elements.push(ChartElement::MeanLine {
                        x: units.convert(stats.mean),
                        stroke: series.mean.stroke.clone().unwrap_or_else(|| stroke.clone()),
                        stroke_width: series.mean.stroke_width,
                    });
                }
            }
        }
    }
    elements
}

fn axis_labels(settings: &ChartSettings, units: TimeUnitPair) -> AxisLabels {
    let plot = settings.plot;
    let x = settings
        .x_label
        .value
        .clone()
        .unwrap_or_else(|| labels::x_label(plot, units.display, settings.iter_multiplier));
    let y = settings
        .y_label
        .value
        .clone()
        .unwrap_or_else(|| labels::y_label(plot, units.display));
    let y_right = labels::y_right_label(plot, settings.iter_multiplier).map(|text| AxisLabel {
        text: settings.y_right_label.value.clone().unwrap_or(text),
        color: settings.y_right_label.color.clone(),
    });

    AxisLabels {
        x: AxisLabel { text: x, color: settings.x_label.color.clone() },
        y: AxisLabel { text: y, color: settings.y_label.color.clone() },
        y_right,
    }
}
