use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Absolute time unit a benchmark measurement can be expressed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeUnit {
    #[strum(serialize = "s")]
    #[serde(rename = "s")]
    Seconds,

    #[strum(serialize = "ms")]
    #[serde(rename = "ms")]
    Milliseconds,

    #[strum(serialize = "ns")]
    #[serde(rename = "ns")]
    Nanoseconds,

    #[strum(serialize = "ps")]
    #[serde(rename = "ps")]
    Picoseconds,
}

impl TimeUnit {
    fn ordinal(self) -> usize {
        match self {
            Self::Seconds => 0,
            Self::Milliseconds => 1,
            Self::Nanoseconds => 2,
            Self::Picoseconds => 3,
        }
    }
}

/// `TIME_UNIT_CONVERT[from][to]`, rows and columns ordered s, ms, ns, ps.
const TIME_UNIT_CONVERT: [[f64; 4]; 4] = [
    /*  s  */ [1.0, 1e3, 1e9, 1e12],
    /*  ms */ [1e-3, 1.0, 1e6, 1e9],
    /*  ns */ [1e-9, 1e-6, 1.0, 1e3],
    /*  ps */ [1e-12, 1e-9, 1e-3, 1.0],
];

/// Convert `value` from one time unit to another.
///
/// Same-unit conversion returns `value` untouched, bit for bit.
pub fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    if from == to {
        return value;
    }
    value * TIME_UNIT_CONVERT[from.ordinal()][to.ordinal()]
}

/// Source unit of a dataset together with the unit the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeUnitPair {
    pub source: TimeUnit,
    pub display: TimeUnit,
}

impl TimeUnitPair {
    pub fn new(source: TimeUnit, display: TimeUnit) -> Self {
        Self { source, display }
    }

    /// Display unit defaults to the source unit.
    pub fn with_display(source: TimeUnit, display: Option<TimeUnit>) -> Self {
        Self::new(source, display.unwrap_or(source))
    }

    pub fn is_identity(&self) -> bool {
        self.source == self.display
    }

    pub fn convert(&self, value: f64) -> f64 {
        convert(value, self.source, self.display)
    }
}
