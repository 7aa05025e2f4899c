use std::borrow::Cow;

use criterion_charts_wasm::domain::benchmark::{FieldRole, Sample};
use criterion_charts_wasm::domain::chart::{RescaleMode, TimeUnit, TimeUnitPair, XRange, rescale, rescale_x_range};

fn samples() -> Vec<Sample> {
    vec![
        Sample::new(0, 1000.0)
            .with_field("y0", 2000.0, FieldRole::Measurement)
            .with_field("tl0", 1800.0, FieldRole::Trend)
            .with_field("dy0", 0.25, FieldRole::Density),
        Sample::new(1, 2000.0)
            .with_field("y0", 4000.0, FieldRole::Measurement)
            .with_field("dy0", 0.75, FieldRole::Density),
    ]
}

#[test]
fn identity_borrows_input() {
    let data = samples();
    let units = TimeUnitPair::new(TimeUnit::Nanoseconds, TimeUnit::Nanoseconds);
    for mode in [RescaleMode::Normal, RescaleMode::Inverted] {
        let out = rescale(&data, units, 1.0, mode);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, data.as_slice());
    }
}

#[test]
fn normal_mode_scales_x_and_converts_every_field() {
    let data = samples();
    let units = TimeUnitPair::new(TimeUnit::Nanoseconds, TimeUnit::Picoseconds);
    let out = rescale(&data, units, 1000.0, RescaleMode::Normal);

    assert_eq!(out[0].x, 1.0);
    assert_eq!(out[1].x, 2.0);
    assert_eq!(out[0].value("y0"), Some(2_000_000.0));
    assert_eq!(out[0].value("tl0"), Some(1_800_000.0));
    assert_eq!(out[0].value("dy0"), Some(250.0));
    assert_eq!(out[1].index, 1);
}

#[test]
fn inverted_mode_leaves_density_untouched() {
    let data = samples();
    let units = TimeUnitPair::new(TimeUnit::Nanoseconds, TimeUnit::Picoseconds);
    let out = rescale(&data, units, 1000.0, RescaleMode::Inverted);

    assert_eq!(out[0].x, 1_000_000.0);
    assert_eq!(out[0].value("y0"), Some(2.0));
    assert_eq!(out[0].value("tl0"), Some(1.8));
    assert_eq!(out[0].value("dy0"), Some(0.25));
    assert_eq!(out[1].value("dy0"), Some(0.75));
}

#[test]
fn input_is_never_modified() {
    let data = samples();
    let before = data.clone();
    let units = TimeUnitPair::new(TimeUnit::Nanoseconds, TimeUnit::Seconds);
    let _ = rescale(&data, units, 10.0, RescaleMode::Normal);
    assert_eq!(data, before);
}

#[test]
fn fixed_x_range_follows_the_x_axis() {
    let range = XRange { min: Some(1000.0), max: None };
    assert_eq!(
        rescale_x_range(range, 1000.0, RescaleMode::Normal),
        XRange { min: Some(1.0), max: None }
    );
    assert_eq!(rescale_x_range(range, 1000.0, RescaleMode::Inverted), range);
    assert_eq!(rescale_x_range(range, 1.0, RescaleMode::Normal), range);
}
