//! Zoom-by-selection state machine.
//!
//! The chart is either `Idle` or `Selecting` a range of samples with the
//! pointer. Releasing the pointer commits the selection: a usable range
//! replaces the viewport with its bounding box, anything else fits all
//! four edges to the data again. All transitions are pure
//! `(state, event) -> state` functions so they can be exercised without a
//! canvas.

use serde::Serialize;

use super::value_objects::{Viewport, ZoomBox};
use crate::domain::benchmark::{Sample, position_of};

/// Half-height given to a selection whose values are all equal.
pub const FLAT_RANGE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Selection {
    #[default]
    Idle,
    /// Drag in progress. Indices are sample indices, not positions.
    Selecting { start: usize, end: Option<usize> },
}

/// Pointer input already resolved to the sample under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    PointerDown(usize),
    PointerMove(usize),
    PointerUp,
    /// Drop any zoom and selection, e.g. from a "reset" button.
    Reset,
}

/// Bounding box of the samples between two indices, across `keys`.
///
/// Returns `None` ("no zoom") when `end` is unset or equal to `start`,
/// when either index is missing from `samples`, or when the range holds
/// no value for any key. The scanned range is `[start, end)` after
/// ordering; the x edges come from the samples at `start` and `end`.
pub fn compute_zoom<S: AsRef<str>>(
    samples: &[Sample],
    keys: &[S],
    start: usize,
    end: Option<usize>,
) -> Option<ZoomBox> {
    let end = end?;
    if start == end {
        return None;
    }
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    let first = position_of(samples, start)?;
    let last = position_of(samples, end)?;

    let mut range: Option<(f64, f64)> = None;
    for sample in &samples[first..last] {
        for key in keys {
            if let Some(y) = sample.value(key.as_ref()) {
                let (lo, hi) = range.get_or_insert((y, y));
                *lo = lo.min(y);
                *hi = hi.max(y);
            }
        }
    }
    let (mut y_min, mut y_max) = range?;
    if y_min == y_max {
        y_min -= FLAT_RANGE_EPSILON;
        y_max += FLAT_RANGE_EPSILON;
    }

    Some(ZoomBox {
        x_min: samples[first].x,
        x_max: samples[last].x,
        y_min,
        y_max,
    })
}

/// Viewport plus in-flight selection for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomState {
    pub viewport: Viewport,
    pub selection: Selection,
    /// Starting viewport, restored by `Reset`: auto-fit, or the fixed x
    /// range the chart was configured with.
    pub home: Viewport,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(Viewport::auto())
    }
}

impl ZoomState {
    pub fn new(home: Viewport) -> Self {
        Self { viewport: home, selection: Selection::Idle, home }
    }

    pub fn reduce<S: AsRef<str>>(self, event: SelectionEvent, samples: &[Sample], keys: &[S]) -> Self {
        match (self.selection, event) {
            (_, SelectionEvent::Reset) => Self::new(self.home),
            (_, SelectionEvent::PointerDown(index)) => Self {
                selection: Selection::Selecting { start: index, end: None },
                ..self
            },
            (Selection::Selecting { start, .. }, SelectionEvent::PointerMove(index)) => Self {
                selection: Selection::Selecting { start, end: Some(index) },
                ..self
            },
            (Selection::Selecting { start, end }, SelectionEvent::PointerUp) => {
                let viewport = compute_zoom(samples, keys, start, end)
                    .map(Viewport::from)
                    .unwrap_or_else(Viewport::auto);
                Self { viewport, selection: Selection::Idle, home: self.home }
            }
            (Selection::Idle, SelectionEvent::PointerMove(_) | SelectionEvent::PointerUp) => self,
        }
    }

    /// x span of the drag in progress, for shading.
    pub fn reference_area(&self, samples: &[Sample]) -> Option<(f64, f64)> {
        let Selection::Selecting { start, end: Some(end) } = self.selection else {
            return None;
        };
        let left = samples[position_of(samples, start)?].x;
        let right = samples[position_of(samples, end)?].x;
        Some((left, right))
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.selection, Selection::Selecting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmark::FieldRole;

    fn samples() -> Vec<Sample> {
        [10.0, 30.0, 20.0]
            .iter()
            .enumerate()
            .map(|(i, y)| Sample::new(i, i as f64 + 1.0).with_field("y", *y, FieldRole::Measurement))
            .collect()
    }

    #[test]
    fn pointer_down_starts_selection() {
        let state = ZoomState::default().reduce(SelectionEvent::PointerDown(1), &samples(), &["y"]);
        assert_eq!(state.selection, Selection::Selecting { start: 1, end: None });
        assert!(state.viewport.is_auto());
    }

    #[test]
    fn reference_area_tracks_drag() {
        let data = samples();
        let state = ZoomState::default()
            .reduce(SelectionEvent::PointerDown(2), &data, &["y"])
            .reduce(SelectionEvent::PointerMove(0), &data, &["y"]);
        assert_eq!(state.reference_area(&data), Some((3.0, 1.0)));
    }
}
