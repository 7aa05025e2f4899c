use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::units::TimeUnitPair;
use crate::domain::benchmark::{FieldRole, Sample};

/// Which axis carries the time unit and which the iteration multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RescaleMode {
    /// x is an iteration count, values are times.
    #[default]
    Normal,
    /// x is a time (density plots); values are iteration counts or
    /// densities.
    Inverted,
}

/// Optional fixed x range configured on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Produce display-ready samples.
///
/// Normal mode converts every field to the display unit and divides `x`
/// by the multiplier. Inverted mode converts `x` instead, divides
/// measurement and trend fields by the multiplier and leaves density
/// fields alone. With no multiplier and no unit change the input comes
/// back borrowed.
pub fn rescale<'a>(
    samples: &'a [Sample],
    units: TimeUnitPair,
    iter_multiplier: f64,
    mode: RescaleMode,
) -> Cow<'a, [Sample]> {
    if iter_multiplier == 1.0 && units.is_identity() {
        return Cow::Borrowed(samples);
    }

    let rescaled = samples
        .iter()
        .map(|sample| {
            let mut out = sample.clone();
            match mode {
                RescaleMode::Normal => {
                    out.x = sample.x / iter_multiplier;
                    for field in out.fields.values_mut() {
                        field.value = units.convert(field.value);
                    }
                }
                RescaleMode::Inverted => {
                    out.x = units.convert(sample.x);
                    for field in out.fields.values_mut() {
                        if field.role != FieldRole::Density {
                            field.value /= iter_multiplier;
                        }
                    }
                }
            }
            out
        })
        .collect();
    Cow::Owned(rescaled)
}

/// Bring a configured x range into the same space as rescaled samples.
pub fn rescale_x_range(range: XRange, iter_multiplier: f64, mode: RescaleMode) -> XRange {
    if mode == RescaleMode::Inverted || iter_multiplier == 1.0 {
        return range;
    }
    XRange {
        min: range.min.map(|min| min / iter_multiplier),
        max: range.max.map(|max| max / iter_multiplier),
    }
}
