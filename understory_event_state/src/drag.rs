// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session helper: follow one active pointer through a vertical drag.
//!
//! ## Usage
//!
//! 1) On [`TouchAction::Down`](crate::touch::TouchAction::Down), call
//!    [`DragSession::begin`] to adopt the first pointer and record its Y.
//! 2) On each move, call [`DragSession::delta_y`] to get the travel since the
//!    start, and [`DragSession::start_if_past_slop`] to decide when the gesture
//!    becomes a drag.
//! 3) Forward `PointerDown`/`PointerUp` to [`DragSession::on_pointer_down`] and
//!    [`DragSession::on_secondary_pointer_up`] so the session keeps following a
//!    finger that is still in contact.
//! 4) End the session with [`DragSession::end`] on `Up`/`Cancel`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::DragSession;
//! use understory_event_state::touch::{PointerId, TouchAction, TouchEvent};
//!
//! let mut session = DragSession::default();
//! let down = TouchEvent::single(TouchAction::Down, PointerId(0), Point::new(0.0, 100.0));
//! assert_eq!(session.begin(&down), Ok(100.0));
//!
//! let moved = TouchEvent::single(TouchAction::Move, PointerId(0), Point::new(0.0, 130.0));
//! let dy = session.delta_y(&moved).unwrap();
//! assert_eq!(dy, 30.0);
//!
//! // 30 is past an 8 unit slop: the session is now dragging.
//! assert!(session.start_if_past_slop(dy, 8.0));
//! assert!(session.is_dragging());
//! ```

use core::fmt;

use crate::touch::{PointerId, TouchEvent};

/// Why the active pointer could not be resolved in an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerLookupError {
    /// The session is not following any pointer.
    NoActivePointer,
    /// The active pointer is not part of the event.
    NotInEvent(PointerId),
}

impl fmt::Display for PointerLookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActivePointer => f.write_str("no active pointer id"),
            Self::NotInEvent(id) => write!(f, "active pointer id {} is not in the event", id.0),
        }
    }
}

impl core::error::Error for PointerLookupError {}

/// Per-gesture drag state: the followed pointer, where it started, how far it
/// has travelled, and whether the gesture has become a drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    /// Pointer currently followed, if any.
    pub active_pointer: Option<PointerId>,
    /// Y coordinate of the active pointer when the session began.
    pub initial_y: f64,
    /// Travel recorded by the last [`DragSession::update`].
    pub last_delta_y: f64,
    /// Set once the pointer travelled past the slop.
    pub is_being_dragged: bool,
}

impl DragSession {
    /// Starts following the first pointer of `event` and records its Y.
    ///
    /// Any previous session state is discarded. On error the session still
    /// follows the new pointer id (if the event had one) but keeps the old
    /// initial Y.
    pub fn begin(&mut self, event: &TouchEvent) -> Result<f64, PointerLookupError> {
        self.active_pointer = event.pointer_id(0);
        self.is_being_dragged = false;
        self.last_delta_y = 0.0;
        let y = self.active_y(event)?;
        self.initial_y = y;
        Ok(y)
    }

    /// Resolves the Y coordinate of the active pointer in `event`.
    pub fn active_y(&self, event: &TouchEvent) -> Result<f64, PointerLookupError> {
        let id = self
            .active_pointer
            .ok_or(PointerLookupError::NoActivePointer)?;
        event
            .find_pointer_index(id)
            .and_then(|index| event.y(index))
            .ok_or(PointerLookupError::NotInEvent(id))
    }

    /// Vertical travel of the active pointer since the session began.
    ///
    /// Positive values mean the pointer moved down.
    pub fn delta_y(&self, event: &TouchEvent) -> Result<f64, PointerLookupError> {
        Ok(self.active_y(event)? - self.initial_y)
    }

    /// Like [`DragSession::delta_y`], but also records the travel in
    /// [`DragSession::last_delta_y`]. A failed lookup leaves it unchanged.
    pub fn update(&mut self, event: &TouchEvent) -> Result<f64, PointerLookupError> {
        let delta_y = self.delta_y(event)?;
        self.last_delta_y = delta_y;
        Ok(delta_y)
    }

    /// Marks the session as dragging once `delta_y` exceeds `slop`.
    ///
    /// Returns `true` only for the call that performs the transition.
    pub fn start_if_past_slop(&mut self, delta_y: f64, slop: f64) -> bool {
        if delta_y > slop && !self.is_being_dragged {
            self.is_being_dragged = true;
            true
        } else {
            false
        }
    }

    /// Follows the pointer that just touched down.
    pub fn on_pointer_down(&mut self, event: &TouchEvent) {
        if let Some(pointer) = event.action_pointer() {
            self.active_pointer = Some(pointer.id);
        }
    }

    /// Handles a non-final pointer lifting.
    ///
    /// If the lifted pointer is the active one, the session switches to the
    /// other pointer (index 1 when the lifted pointer was at index 0, index 0
    /// otherwise). The drag flag is left untouched. Returns `true` when the
    /// active pointer changed.
    pub fn on_secondary_pointer_up(&mut self, event: &TouchEvent) -> bool {
        let index = event.action_index;
        let Some(lifted) = event.pointer_id(index) else {
            return false;
        };
        if self.active_pointer != Some(lifted) {
            return false;
        }
        let new_index = if index == 0 { 1 } else { 0 };
        self.active_pointer = event.pointer_id(new_index);
        true
    }

    /// Ends the session: no active pointer, not dragging, no travel.
    pub fn end(&mut self) {
        self.active_pointer = None;
        self.is_being_dragged = false;
        self.last_delta_y = 0.0;
    }

    /// Returns `true` once the gesture has become a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_being_dragged
    }

    /// Returns `true` while a pointer is being followed.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active_pointer.is_some()
    }
}
