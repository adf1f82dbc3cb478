// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pull_refresh --heading-base-level=0

//! Understory Pull Refresh: a headless pull-to-refresh gesture container.
//!
//! [`SwipeRefresh`] wraps one scrollable target and a header indicator. The
//! host feeds it touch events and frame ticks; it decides when a downward
//! drag belongs to the container rather than the target, moves the target
//! along a damped pull curve, triggers a refresh past a threshold, and
//! animates back to rest once the refresh completes. Rendering is left to the
//! host: [`SwipeRefresh::layout`] reports where the target and header go.
//!
//! ## Flow
//!
//! 1) Route touches through [`SwipeRefresh::dispatch_touch_event`], or call
//!    [`SwipeRefresh::on_intercept_touch_event`] and
//!    [`SwipeRefresh::on_touch_event`] from an existing intercept/dispatch
//!    pipeline.
//! 2) Call [`SwipeRefresh::tick`] once per frame while it returns `true`.
//! 3) When the [`RefreshListener`] fires, load data and report back with
//!    [`SwipeRefresh::on_refreshing_complete`], or from another thread with
//!    [`RefreshHandle::request_complete`].
//! 4) While refreshing, `tick` has nothing to do and returns `false`. A
//!    completion posted from another thread waits for the next `tick`: when
//!    woken, check [`SwipeRefresh::has_pending_completion`] (or
//!    [`SwipeRefresh::is_animating`]) and resume ticking if it is `true`.
//!
//! ## States
//!
//! - [`RefreshState::Idle`]: nothing is happening.
//! - [`RefreshState::Dragging`]: the pointer passed the touch slop and pulls the target.
//! - [`RefreshState::Triggered`]: released past the trigger distance, or started
//!   programmatically; the header is moving into place.
//! - [`RefreshState::Refreshing`]: the listener has been notified.
//! - [`RefreshState::Returning`]: showing the outcome, then going back to rest.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::time::Duration;
//!
//! use kurbo::Point;
//! use understory_event_state::touch::{PointerId, TouchAction, TouchEvent};
//! use understory_pull_refresh::{RefreshHeader, RefreshState, ScrollOffset, SwipeRefresh};
//!
//! let mut refresh = SwipeRefresh::new(RefreshHeader::default());
//! refresh.set_target(ScrollOffset::TOP);
//! refresh.set_on_refresh_listener(|| println!("refreshing"));
//!
//! let touch = |action, y| TouchEvent::single(action, PointerId(0), Point::new(0.0, y));
//! refresh.dispatch_touch_event(&touch(TouchAction::Down, 0.0));
//! refresh.dispatch_touch_event(&touch(TouchAction::Move, 20.0));
//! refresh.dispatch_touch_event(&touch(TouchAction::Move, 120.0));
//! refresh.dispatch_touch_event(&touch(TouchAction::Up, 120.0));
//! assert!(refresh.is_refreshing());
//!
//! while refresh.tick(Duration::from_millis(16)) {}
//! assert_eq!(refresh.state(), RefreshState::Refreshing);
//!
//! refresh.on_refreshing_complete(true);
//! while refresh.tick(Duration::from_millis(16)) {}
//! assert_eq!(refresh.state(), RefreshState::Idle);
//! assert_eq!(refresh.target_offset(), 0.0);
//! ```
//!
//! ## Logging
//!
//! The container logs through the [`log`] facade: `error` for touch streams
//! that reference unknown pointers, `debug` for state changes and
//! `trace` for animations.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`RefreshConfig`].

pub mod animation;
mod config;
mod container;
pub mod curve;
mod flags;
mod header;
mod layout;
mod target;

pub use animation::{AnimationKind, Interpolator, OffsetAnimation, Transition};
pub use config::{ConfigError, DEFAULT_SPINNER_FINAL_OFFSET, DEFAULT_TOUCH_SLOP, RefreshConfig};
pub use container::{RefreshState, SwipeRefresh};
pub use curve::PullMetrics;
pub use flags::{RefreshFlags, RefreshHandle};
pub use header::{HeaderLabel, PullListener, RefreshHeader};
pub use layout::{Layer, OffsetGeometry, RefreshLayout};
pub use target::{RefreshListener, RefreshTarget, ScrollOffset};
