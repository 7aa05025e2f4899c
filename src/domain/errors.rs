use derive_more::Display;

/// Everything that can go wrong between loading a dataset and drawing it.
///
/// Only `UnknownGroup` is ever shown to the user (as the fallback panel);
/// the others surface through the JS API or the logs.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChartError {
    #[display(
        fmt = "Could not find Plot Data for Criterion Group: {}. Please check the group prop in the CriterionPlot Component",
        _0
    )]
    UnknownGroup(String),
    #[display(fmt = "Unknown series '{}' in group '{}'", series, group)]
    UnknownSeries { group: String, series: String },
    #[display(fmt = "Invalid data: {}", _0)]
    InvalidData(String),
    #[display(fmt = "Invalid settings: {}", _0)]
    InvalidSettings(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
}

impl std::error::Error for ChartError {}

impl From<serde_json::Error> for ChartError {
    fn from(error: serde_json::Error) -> Self {
        ChartError::InvalidData(error.to_string())
    }
}

pub type ChartResult<T> = Result<T, ChartError>;
