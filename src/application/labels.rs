use crate::domain::chart::{PlotKind, TimeUnit};

/// Suffix describing an iteration multiplier: `x 10^3` for powers of ten,
/// `x250` otherwise, nothing for 1.
pub fn multiplier_label(multiplier: f64) -> Option<String> {
    if multiplier == 1.0 {
        return None;
    }
    let exponent = multiplier.log10().round();
    if exponent >= 1.0 && 10f64.powi(exponent as i32) == multiplier {
        return Some(format!("x 10^{}", exponent as i32));
    }
    if multiplier.fract() == 0.0 {
        Some(format!("x{}", multiplier as i64))
    } else {
        Some(format!("x{}", multiplier))
    }
}

fn iterations_label(multiplier: f64) -> String {
    match multiplier_label(multiplier) {
        Some(suffix) => format!("Iterations ({})", suffix),
        None => "Iterations".to_string(),
    }
}

pub fn x_label(plot: PlotKind, unit: TimeUnit, multiplier: f64) -> String {
    match plot {
        PlotKind::ProbabilityDensity => format!("Mean Time Per Iteration ({})", unit),
        PlotKind::MeanTimePerIter | PlotKind::LinearRegression => iterations_label(multiplier),
    }
}

pub fn y_label(plot: PlotKind, unit: TimeUnit) -> String {
    match plot {
        PlotKind::MeanTimePerIter => format!("Mean Time Per Iteration ({})", unit),
        PlotKind::LinearRegression => format!("Total Sample Time ({})", unit),
        PlotKind::ProbabilityDensity => "Density".to_string(),
    }
}

/// Only density plots have a right axis; it counts iterations.
pub fn y_right_label(plot: PlotKind, multiplier: f64) -> Option<String> {
    match plot {
        PlotKind::ProbabilityDensity => Some(iterations_label(multiplier)),
        _ => None,
    }
}

/// Tick text for the x axis: small values as-is, the rest to two places.
pub fn format_x_tick(value: f64) -> String {
    if value < 1.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_suffixes() {
        assert_eq!(multiplier_label(1.0), None);
        assert_eq!(multiplier_label(1000.0).as_deref(), Some("x 10^3"));
        assert_eq!(multiplier_label(10.0).as_deref(), Some("x 10^1"));
        assert_eq!(multiplier_label(250.0).as_deref(), Some("x250"));
        assert_eq!(multiplier_label(20.0).as_deref(), Some("x20"));
    }

    #[test]
    fn axis_labels_follow_plot_kind() {
        assert_eq!(x_label(PlotKind::MeanTimePerIter, TimeUnit::Nanoseconds, 1000.0), "Iterations (x 10^3)");
        assert_eq!(
            x_label(PlotKind::ProbabilityDensity, TimeUnit::Milliseconds, 1000.0),
            "Mean Time Per Iteration (ms)"
        );
        assert_eq!(y_label(PlotKind::LinearRegression, TimeUnit::Picoseconds), "Total Sample Time (ps)");
        assert_eq!(y_right_label(PlotKind::MeanTimePerIter, 1.0), None);
        assert_eq!(y_right_label(PlotKind::ProbabilityDensity, 1.0).as_deref(), Some("Iterations"));
    }

    #[test]
    fn x_ticks() {
        assert_eq!(format_x_tick(0.25), "0.25");
        assert_eq!(format_x_tick(12.3456), "12.35");
    }
}
