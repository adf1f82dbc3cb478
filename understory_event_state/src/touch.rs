// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-pointer touch events: action codes, pointer ids, and per-pointer positions.
//!
//! A [`TouchEvent`] is a snapshot of every pointer currently in contact, plus the
//! action that produced it. For [`TouchAction::PointerDown`] and
//! [`TouchAction::PointerUp`], [`TouchEvent::action_index`] names the pointer
//! that went down or up; for every other action it is `0`.
//!
//! Pointer *indices* are positions in [`TouchEvent::pointers`] and may change
//! from one event to the next. Pointer *ids* are stable for the lifetime of a
//! contact. State machines should remember ids and resolve them to indices
//! with [`TouchEvent::find_pointer_index`] on every event.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::touch::{PointerId, TouchAction, TouchEvent, TouchPointer};
//!
//! let first = TouchPointer::new(PointerId(7), Point::new(10.0, 20.0));
//! let second = TouchPointer::new(PointerId(9), Point::new(40.0, 80.0));
//!
//! // Second finger joins: it sits at index 1.
//! let ev = TouchEvent::new(TouchAction::PointerDown, [first, second]).with_action_index(1);
//! assert_eq!(ev.action_pointer().map(|p| p.id), Some(PointerId(9)));
//! assert_eq!(ev.find_pointer_index(PointerId(7)), Some(0));
//! assert_eq!(ev.y(1), Some(80.0));
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Identifier assigned to a pointer for the lifetime of its contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// What happened to produce a [`TouchEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// The first pointer touched down; starts a gesture.
    Down,
    /// One or more pointers moved.
    Move,
    /// An additional pointer touched down while others are in contact.
    PointerDown,
    /// A non-final pointer lifted; others remain in contact.
    PointerUp,
    /// The final pointer lifted; ends the gesture.
    Up,
    /// The gesture was aborted by the host (for example, a parent took over).
    Cancel,
}

impl TouchAction {
    /// Returns `true` for actions that end a gesture (`Up` and `Cancel`).
    #[must_use]
    pub fn ends_gesture(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A pointer in contact with the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPointer {
    /// Stable id of the contact.
    pub id: PointerId,
    /// Position in the receiver's local coordinate space.
    pub position: Point,
}

impl TouchPointer {
    /// Creates a pointer at `position`.
    #[must_use]
    pub const fn new(id: PointerId, position: Point) -> Self {
        Self { id, position }
    }
}

/// A touch event with every pointer currently in contact.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// The action that produced the event.
    pub action: TouchAction,
    /// Index into [`pointers`](Self::pointers) of the pointer that caused a
    /// `PointerDown`/`PointerUp`. Zero for other actions.
    pub action_index: usize,
    /// Pointers in contact, in platform order.
    pub pointers: SmallVec<[TouchPointer; 4]>,
}

impl TouchEvent {
    /// Creates an event from an action and the pointers in contact.
    #[must_use]
    pub fn new(action: TouchAction, pointers: impl IntoIterator<Item = TouchPointer>) -> Self {
        Self {
            action,
            action_index: 0,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// Creates a single-pointer event.
    #[must_use]
    pub fn single(action: TouchAction, id: PointerId, position: Point) -> Self {
        Self::new(action, [TouchPointer::new(id, position)])
    }

    /// Sets the index of the pointer that caused the action.
    #[must_use]
    pub fn with_action_index(mut self, index: usize) -> Self {
        self.action_index = index;
        self
    }

    /// Number of pointers in contact.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns the id of the pointer at `index`.
    #[must_use]
    pub fn pointer_id(&self, index: usize) -> Option<PointerId> {
        self.pointers.get(index).map(|p| p.id)
    }

    /// Resolves a pointer id to its index in this event.
    #[must_use]
    pub fn find_pointer_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Returns the position of the pointer at `index`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point> {
        self.pointers.get(index).map(|p| p.position)
    }

    /// Returns the vertical coordinate of the pointer at `index`.
    #[must_use]
    pub fn y(&self, index: usize) -> Option<f64> {
        self.position(index).map(|p| p.y)
    }

    /// Returns the pointer named by [`action_index`](Self::action_index).
    #[must_use]
    pub fn action_pointer(&self) -> Option<TouchPointer> {
        self.pointers.get(self.action_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointer(id: u32, y: f64) -> TouchPointer {
        TouchPointer::new(PointerId(id), Point::new(0.0, y))
    }

    #[test]
    fn single_pointer_event_has_index_zero() {
        let ev = TouchEvent::single(TouchAction::Down, PointerId(3), Point::new(1.0, 2.0));
        assert_eq!(ev.pointer_count(), 1);
        assert_eq!(ev.action_index, 0);
        assert_eq!(ev.pointer_id(0), Some(PointerId(3)));
        assert_eq!(ev.y(0), Some(2.0));
    }

    #[test]
    fn find_pointer_index_resolves_ids() {
        let ev = TouchEvent::new(TouchAction::Move, [pointer(5, 0.0), pointer(2, 10.0)]);
        assert_eq!(ev.find_pointer_index(PointerId(2)), Some(1));
        assert_eq!(ev.find_pointer_index(PointerId(5)), Some(0));
        assert_eq!(ev.find_pointer_index(PointerId(9)), None);
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        let ev = TouchEvent::new(TouchAction::Move, [pointer(1, 0.0)]);
        assert_eq!(ev.pointer_id(4), None);
        assert_eq!(ev.y(4), None);
        assert!(ev.clone().with_action_index(3).action_pointer().is_none());
    }

    #[test]
    fn action_pointer_follows_action_index() {
        let ev = TouchEvent::new(TouchAction::PointerUp, [pointer(1, 0.0), pointer(2, 30.0)])
            .with_action_index(1);
        assert_eq!(ev.action_pointer(), Some(pointer(2, 30.0)));
    }

    #[test]
    fn only_up_and_cancel_end_a_gesture() {
        assert!(TouchAction::Up.ends_gesture());
        assert!(TouchAction::Cancel.ends_gesture());
        assert!(!TouchAction::PointerUp.ends_gesture());
        assert!(!TouchAction::Down.ends_gesture());
    }
}
