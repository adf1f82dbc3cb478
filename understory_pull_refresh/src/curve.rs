// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pull curve: map a damped overscroll to a target offset and indicator rotation.
//!
//! Up to the total drag distance the offset grows linearly. Past it, a
//! slingshot tension term adds an "extra move" that decelerates as the pull
//! continues and saturates at one slingshot distance, so the content never
//! travels further than twice the slingshot distance.
//!
//! ```
//! use understory_pull_refresh::curve::pull_metrics;
//!
//! // Inside the linear region the offset tracks the overscroll.
//! let m = pull_metrics(30.0, 50.0, 50.0).unwrap();
//! assert_eq!(m.offset, 30.0);
//! assert_eq!(m.extra_move, 0.0);
//!
//! // Far past the trigger distance the offset saturates.
//! let m = pull_metrics(1_000.0, 50.0, 50.0).unwrap();
//! assert_eq!(m.offset, 100.0);
//!
//! // Upward pulls produce nothing.
//! assert!(pull_metrics(-5.0, 50.0, 50.0).is_none());
//! ```

/// Everything derived from one overscroll sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PullMetrics {
    /// The damped pull distance the metrics were computed from.
    pub overscroll: f64,
    /// Linear progress toward the trigger distance, in `[0, 1]`.
    pub drag_percent: f64,
    /// `drag_percent` remapped so that `0.4..=1.0` spans `0..=1`.
    pub adjusted_percent: f64,
    /// Tension past the trigger distance, in `[0, 0.5]`.
    pub tension_percent: f64,
    /// Damped offset added on top of the linear region.
    pub extra_move: f64,
    /// Offset of the target relative to its rest position.
    pub offset: f64,
    /// Rotation hint for the indicator.
    pub rotation: f64,
}

/// Computes the pull metrics for `overscroll`.
///
/// `total_drag_distance` is the trigger distance and `slingshot_distance`
/// the distance the target travels at the trigger point. Returns `None` for a
/// negative overscroll (the pointer is above where the drag began); the
/// caller should leave the offset alone in that case.
#[must_use]
pub fn pull_metrics(
    overscroll: f64,
    total_drag_distance: f64,
    slingshot_distance: f64,
) -> Option<PullMetrics> {
    let original_drag_percent = overscroll / total_drag_distance;
    if original_drag_percent < 0.0 || original_drag_percent.is_nan() {
        return None;
    }
    let drag_percent = original_drag_percent.abs().min(1.0);
    let adjusted_percent = (drag_percent - 0.4).max(0.0) * 5.0 / 3.0;
    let extra_overscroll = overscroll.abs() - total_drag_distance;
    let tension_slingshot_percent =
        (extra_overscroll.min(slingshot_distance * 2.0) / slingshot_distance).max(0.0);
    let quarter = tension_slingshot_percent / 4.0;
    let tension_percent = (quarter - quarter * quarter) * 2.0;
    let extra_move = slingshot_distance * tension_percent * 2.0;

    Some(PullMetrics {
        overscroll,
        drag_percent,
        adjusted_percent,
        tension_percent,
        extra_move,
        offset: slingshot_distance * drag_percent + extra_move,
        rotation: (-0.25 + 0.4 * adjusted_percent + tension_percent * 2.0) * 0.5,
    })
}
