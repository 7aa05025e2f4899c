use serde::Deserialize;
use std::collections::BTreeMap;

use super::entities::{BenchmarkDataSet, Sample, SeriesBinding, SeriesStats};
use super::value_objects::GroupName;
use crate::domain::chart::units::TimeUnit;
use crate::domain::errors::{ChartError, ChartResult};
use crate::domain::logging::LogComponent;

/// Read access to the datasets a chart can be drawn from.
pub trait BenchmarkRepository {
    /// Group lookup is case-insensitive.
    fn dataset(&self, group: &str) -> Option<&BenchmarkDataSet>;
}

/// In-memory group → dataset mapping handed to each chart instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataStore {
    groups: BTreeMap<GroupName, BenchmarkDataSet>,
}

impl ChartDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the dataset for its group.
    pub fn insert(&mut self, dataset: BenchmarkDataSet) -> ChartResult<()> {
        validate_order(&dataset.group, &dataset.samples)?;
        self.groups.insert(dataset.group.clone(), dataset);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Parse the JSON document produced by the data export step.
    pub fn from_json(json: &str) -> ChartResult<Self> {
        let document: StoreDocument = serde_json::from_str(json)?;
        let mut store = Self::new();
        for (group, dataset) in document.groups {
            store.insert(dataset.into_dataset(GroupName::from(group)))?;
        }
        if store.is_empty() {
            crate::log_warn!(LogComponent::Domain("DataStore"), "⚠️ Document has no benchmark groups");
        }
        crate::log_debug!(LogComponent::Domain("DataStore"), "📦 Loaded {} benchmark groups", store.len());
        Ok(store)
    }
}

impl BenchmarkRepository for ChartDataStore {
    fn dataset(&self, group: &str) -> Option<&BenchmarkDataSet> {
        self.groups.get(&GroupName::from(group))
    }
}

fn validate_order(group: &GroupName, samples: &[Sample]) -> ChartResult<()> {
    for pair in samples.windows(2) {
        if pair[1].index <= pair[0].index {
            return Err(ChartError::InvalidData(format!(
                "group '{}': sample index {} follows {}",
                group, pair[1].index, pair[0].index
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct StoreDocument {
    groups: BTreeMap<String, DataSetDocument>,
}

#[derive(Debug, Deserialize)]
struct DataSetDocument {
    unit: TimeUnit,
    #[serde(default)]
    series: Vec<SeriesBinding>,
    #[serde(default)]
    stats: BTreeMap<String, SeriesStats>,
    #[serde(default)]
    samples: Vec<SampleRow>,
}

#[derive(Debug, Deserialize)]
struct SampleRow {
    i: usize,
    x: f64,
    #[serde(flatten)]
    values: BTreeMap<String, f64>,
}

impl DataSetDocument {
    fn into_dataset(self, group: GroupName) -> BenchmarkDataSet {
        let mut dataset = BenchmarkDataSet::new(group, self.unit);
        for binding in self.series {
            dataset = dataset.with_binding(binding);
        }
        for (series, stats) in self.stats {
            dataset = dataset.with_stats(&series, stats);
        }
        // Roles come from the bindings, so they must be in place first.
        let samples = self
            .samples
            .into_iter()
            .map(|row| {
                row.values.iter().fold(Sample::new(row.i, row.x), |sample, (key, value)| {
                    let role = dataset.role_of(key);
                    sample.with_field(key, *value, role)
                })
            })
            .collect();
        dataset.with_samples(samples)
    }
}
