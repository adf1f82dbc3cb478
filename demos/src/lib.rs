// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the demos: scripted touch input and a text dump of a
//! container frame.

use std::time::Duration;

use kurbo::{Insets, Point, Size};
use understory_event_state::touch::{PointerId, TouchAction, TouchEvent};
use understory_pull_refresh::{RefreshHeader, RefreshTarget, SwipeRefresh};

/// Frame interval used by the demos.
pub const FRAME: Duration = Duration::from_millis(16);

/// Viewport the demos lay out into.
pub const VIEWPORT: Size = Size::new(360.0, 640.0);

/// A single finger dragged straight down from `from_y` to `to_y` in `steps`
/// moves, then lifted.
pub fn vertical_swipe(id: PointerId, from_y: f64, to_y: f64, steps: u32) -> Vec<TouchEvent> {
    let at = |action, y| TouchEvent::single(action, id, Point::new(VIEWPORT.width * 0.5, y));
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps as usize + 2);
    events.push(at(TouchAction::Down, from_y));
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        events.push(at(TouchAction::Move, from_y + (to_y - from_y) * t));
    }
    events.push(at(TouchAction::Up, to_y));
    events
}

/// One line describing the container's state, offsets, and header.
pub fn describe<T: RefreshTarget>(refresh: &SwipeRefresh<T, RefreshHeader>) -> String {
    let layout = refresh.layout(VIEWPORT, Insets::ZERO);
    format!(
        "{:<10} offset {:>6.1}  header {:>5.1}px {} reveal {:.2}  \"{}\"",
        format!("{:?}", refresh.state()),
        refresh.target_offset(),
        layout.header.height(),
        if layout.header_visible { "shown " } else { "hidden" },
        layout.header_reveal,
        refresh.header().text(),
    )
}

/// Ticks until the container is quiet, logging each frame. Returns the number
/// of frames run.
pub fn run_frames<T: RefreshTarget>(refresh: &mut SwipeRefresh<T, RefreshHeader>) -> u32 {
    let mut frames = 0;
    while refresh.tick(FRAME) {
        frames += 1;
        log::info!("frame {frames:>3}: {}", describe(refresh));
    }
    frames
}
