// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused pieces of state for interactions that
//! span multiple events:
//!
//! - [`touch`]: A multi-pointer touch event model with action codes and stable pointer ids
//! - [`drag`]: Follow one active pointer through a vertical drag, including slop
//!   detection and hand-over when fingers are added or lifted
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or platform event source
//!
//! The crate does not assume any particular UI framework, event system, or scene
//! graph structure. Hosts translate their native pointer events into
//! [`touch::TouchEvent`] values, and higher-level gesture recognizers (for
//! example `understory_pull_refresh`) interpret the resulting session state.
//!
//! ## Drag sessions
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::drag::DragSession;
//! use understory_event_state::touch::{PointerId, TouchAction, TouchEvent, TouchPointer};
//!
//! let mut session = DragSession::default();
//!
//! // One finger down at y = 0.
//! let a = TouchPointer::new(PointerId(0), Point::new(0.0, 0.0));
//! session.begin(&TouchEvent::new(TouchAction::Down, [a])).unwrap();
//!
//! // A second finger joins and becomes the active pointer.
//! let b = TouchPointer::new(PointerId(1), Point::new(0.0, 40.0));
//! let join = TouchEvent::new(TouchAction::PointerDown, [a, b]).with_action_index(1);
//! session.on_pointer_down(&join);
//! assert_eq!(session.active_pointer, Some(PointerId(1)));
//!
//! // The second finger lifts: the session falls back to the first one.
//! let lift = TouchEvent::new(TouchAction::PointerUp, [a, b]).with_action_index(1);
//! session.on_secondary_pointer_up(&lift);
//! assert_eq!(session.active_pointer, Some(PointerId(0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build Kurbo with the standard library.
//! - `libm`: Build Kurbo with `libm` for `no_std` targets.
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod drag;
pub mod touch;
