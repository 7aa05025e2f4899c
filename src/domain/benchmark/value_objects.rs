use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// Benchmark group name, always stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct GroupName(String);

impl GroupName {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupName {
    fn from(value: &str) -> Self {
        Self(value.to_ascii_lowercase())
    }
}

impl From<String> for GroupName {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// Which of a series' fields a lookup is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeriesKind {
    Value,
    Trend,
    Density,
}

/// What a stored field measures. Decides how rescaling treats it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    #[default]
    Measurement,
    Trend,
    Density,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_are_lower_cased() {
        assert_eq!(GroupName::from("Push").value(), "push");
        assert_eq!(GroupName::from("PUSH".to_string()), GroupName::from("push"));
    }
}
