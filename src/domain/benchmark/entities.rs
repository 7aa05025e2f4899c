use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::value_objects::{FieldRole, GroupName, SeriesKind};
use crate::domain::chart::units::TimeUnit;

/// One value stored on a sample, tagged with what it measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldValue {
    pub value: f64,
    pub role: FieldRole,
}

/// A single point of a benchmark dataset.
///
/// `index` is unique and ordered within a dataset; `x` is expected to be
/// non-decreasing but nothing relies on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub index: usize,
    pub x: f64,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Sample {
    pub fn new(index: usize, x: f64) -> Self {
        Self { index, x, fields: BTreeMap::new() }
    }

    pub fn with_field(mut self, key: &str, value: f64, role: FieldRole) -> Self {
        self.fields.insert(key.to_string(), FieldValue { value, role });
        self
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.fields.get(key).map(|field| field.value)
    }
}

/// Links a display name to the field keys holding its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBinding {
    pub name: String,
    pub value_key: String,
    #[serde(default)]
    pub trend_key: Option<String>,
    #[serde(default)]
    pub density_key: Option<String>,
}

impl SeriesBinding {
    pub fn new(name: &str, value_key: &str) -> Self {
        Self {
            name: name.to_string(),
            value_key: value_key.to_string(),
            trend_key: None,
            density_key: None,
        }
    }

    pub fn with_trend(mut self, key: &str) -> Self {
        self.trend_key = Some(key.to_string());
        self
    }

    pub fn with_density(mut self, key: &str) -> Self {
        self.density_key = Some(key.to_string());
        self
    }

    pub fn key(&self, kind: SeriesKind) -> Option<&str> {
        match kind {
            SeriesKind::Value => Some(self.value_key.as_str()),
            SeriesKind::Trend => self.trend_key.as_deref(),
            SeriesKind::Density => self.density_key.as_deref(),
        }
    }

    /// Role a field key plays for this series, if it belongs to it.
    pub fn role_of(&self, key: &str) -> Option<FieldRole> {
        if self.density_key.as_deref() == Some(key) {
            Some(FieldRole::Density)
        } else if self.trend_key.as_deref() == Some(key) {
            Some(FieldRole::Trend)
        } else if self.value_key == key {
            Some(FieldRole::Measurement)
        } else {
            None
        }
    }
}

/// Summary statistics supplied alongside a series (never computed here).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub mean: f64,
    #[serde(default)]
    pub std_dev: f64,
}

/// All data needed to chart one benchmark group.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkDataSet {
    pub group: GroupName,
    pub source_unit: TimeUnit,
    pub samples: Vec<Sample>,
    bindings: BTreeMap<String, SeriesBinding>,
    stats: BTreeMap<String, SeriesStats>,
}

impl BenchmarkDataSet {
    pub fn new(group: GroupName, source_unit: TimeUnit) -> Self {
        Self {
            group,
            source_unit,
            samples: Vec::new(),
            bindings: BTreeMap::new(),
            stats: BTreeMap::new(),
        }
    }

    pub fn with_binding(mut self, binding: SeriesBinding) -> Self {
        self.bindings.insert(binding.name.to_ascii_lowercase(), binding);
        self
    }

    pub fn with_stats(mut self, series: &str, stats: SeriesStats) -> Self {
        self.stats.insert(series.to_ascii_lowercase(), stats);
        self
    }

    pub fn with_samples(mut self, samples: Vec<Sample>) -> Self {
        self.samples = samples;
        self
    }

    /// Series names are matched case-insensitively.
    pub fn binding(&self, series: &str) -> Option<&SeriesBinding> {
        self.bindings.get(&series.to_ascii_lowercase())
    }

    pub fn stats(&self, series: &str) -> Option<&SeriesStats> {
        self.stats.get(&series.to_ascii_lowercase())
    }

    /// Role for a field key, looked up through the bindings. Keys no
    /// binding mentions are plain measurements.
    pub fn role_of(&self, key: &str) -> FieldRole {
        self.bindings
            .values()
            .find_map(|binding| binding.role_of(key))
            .unwrap_or(FieldRole::Measurement)
    }

    /// Position of the sample carrying `index`.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        position_of(&self.samples, index)
    }
}

/// Position of the sample carrying `index` in a slice ordered by index.
pub fn position_of(samples: &[Sample], index: usize) -> Option<usize> {
    samples.binary_search_by_key(&index, |sample| sample.index).ok()
}
