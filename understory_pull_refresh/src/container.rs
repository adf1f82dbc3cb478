// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture container: touch interpretation, offsets, and the refresh state machine.

use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use kurbo::{Insets, Size};
use understory_event_state::drag::DragSession;
use understory_event_state::touch::{TouchAction, TouchEvent};

use crate::animation::{AnimationKind, Interpolator, OffsetAnimation, Transition};
use crate::config::{ConfigError, RefreshConfig};
use crate::curve::pull_metrics;
use crate::flags::{RefreshFlags, RefreshHandle};
use crate::header::{PullListener, RefreshHeader};
use crate::layout::{OffsetGeometry, RefreshLayout};
use crate::target::{RefreshListener, RefreshTarget};

/// Where the container is in its refresh cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefreshState {
    /// At rest, waiting for a pull.
    #[default]
    Idle,
    /// The user is pulling the content down.
    Dragging,
    /// A refresh was requested; the header is moving into place.
    Triggered,
    /// The header is in place and the listener was told to refresh.
    Refreshing,
    /// The refresh finished or the pull was abandoned; going back to rest.
    Returning,
}

/// Pull-to-refresh gesture container for a single target.
///
/// `T` is the pulled content and `H` the header indicator. See the
/// [crate documentation](crate) for the event flow.
pub struct SwipeRefresh<T, H = RefreshHeader> {
    config: RefreshConfig,
    target: Option<T>,
    header: H,
    listener: Option<Box<dyn RefreshListener>>,
    flags: Arc<RefreshFlags>,
    state: RefreshState,
    session: DragSession,
    geometry: OffsetGeometry,
    animation: Option<OffsetAnimation>,
    completion_delay: Option<Duration>,
    header_visible: bool,
    enabled: bool,
    notify: bool,
    intercepting: bool,
}

impl<T: fmt::Debug, H: fmt::Debug> fmt::Debug for SwipeRefresh<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRefresh")
            .field("config", &self.config)
            .field("target", &self.target)
            .field("header", &self.header)
            .field("has_listener", &self.listener.is_some())
            .field("flags", &self.flags)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("geometry", &self.geometry)
            .field("animation", &self.animation)
            .field("completion_delay", &self.completion_delay)
            .field("header_visible", &self.header_visible)
            .field("enabled", &self.enabled)
            .field("notify", &self.notify)
            .field("intercepting", &self.intercepting)
            .finish()
    }
}

impl<T, H: PullListener> SwipeRefresh<T, H> {
    /// Creates a container with the default configuration and no target.
    #[must_use]
    pub fn new(header: H) -> Self {
        Self {
            config: RefreshConfig::default(),
            target: None,
            header,
            listener: None,
            flags: Arc::default(),
            state: RefreshState::Idle,
            session: DragSession::default(),
            geometry: OffsetGeometry::default(),
            animation: None,
            completion_delay: None,
            header_visible: false,
            enabled: true,
            notify: false,
            intercepting: false,
        }
    }

    /// Creates a container with `config`, rejecting configurations that
    /// cannot drive the gesture.
    pub fn with_config(header: H, config: RefreshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut refresh = Self::new(header);
        refresh.config = config;
        Ok(refresh)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RefreshConfig {
        &self.config
    }

    /// Sets the listener notified when a refresh is requested, replacing any
    /// previous one.
    pub fn set_on_refresh_listener(&mut self, listener: impl RefreshListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Sets the pulled content.
    pub fn set_target(&mut self, target: T) {
        self.target = Some(target);
    }

    /// The pulled content, if set.
    #[must_use]
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Mutable access to the pulled content, for example to update its
    /// scroll offset.
    pub fn target_mut(&mut self) -> Option<&mut T> {
        self.target.as_mut()
    }

    /// The header indicator.
    #[must_use]
    pub fn header(&self) -> &H {
        &self.header
    }

    /// Mutable access to the header indicator.
    pub fn header_mut(&mut self) -> &mut H {
        &mut self.header
    }

    /// Enables or disables the gesture. A disabled container ignores touches
    /// but still finishes running animations.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns `true` if the gesture is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns `true` while a refresh is in progress.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.flags.is_refreshing()
    }

    /// A thread-safe handle onto the refresh flags.
    #[must_use]
    pub fn handle(&self) -> RefreshHandle {
        RefreshHandle::new(Arc::clone(&self.flags))
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Current offsets.
    #[must_use]
    pub fn geometry(&self) -> OffsetGeometry {
        self.geometry
    }

    /// Current offset of the target relative to the top of the content box.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.geometry.current_target_offset
    }

    /// Damped pull distance of the gesture in progress; zero between gestures.
    #[must_use]
    pub fn overscroll(&self) -> f64 {
        self.session.last_delta_y * self.config.drag_rate
    }

    /// Returns `true` if the header should be drawn.
    #[must_use]
    pub fn is_header_visible(&self) -> bool {
        self.header_visible
    }

    /// Returns `true` while an animation, the completion delay, or a
    /// completion posted through a [`RefreshHandle`] is pending.
    ///
    /// Hosts keep calling [`tick`](Self::tick) while this is `true`.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
            || self.completion_delay.is_some()
            || self.has_pending_completion()
    }

    /// Returns `true` if a completion posted through a [`RefreshHandle`] is
    /// waiting for the next [`tick`](Self::tick).
    ///
    /// While refreshing, nothing else needs ticks; hosts that stopped ticking
    /// poll this (for example when woken by the thread that posted the
    /// request) and resume ticking when it turns `true`.
    #[must_use]
    pub fn has_pending_completion(&self) -> bool {
        self.flags.has_completion_request()
    }

    /// Lays out the target and header inside `size` minus `padding`.
    #[must_use]
    pub fn layout(&self, size: Size, padding: Insets) -> RefreshLayout {
        RefreshLayout::compute(
            &self.geometry,
            size,
            padding,
            self.header_visible,
            self.header_reveal(),
        )
    }

    /// Starts or stops refreshing without a gesture.
    ///
    /// Starting moves the target to the trigger offset, reveals the header,
    /// and notifies the listener once the reveal ends. Starting while
    /// already refreshing does nothing. Stopping behaves like
    /// [`on_refreshing_complete`](Self::on_refreshing_complete) with the
    /// current success flag; stopping while not refreshing does nothing.
    pub fn set_refreshing(&mut self, refreshing: bool) {
        if refreshing == self.is_refreshing() {
            return;
        }
        if refreshing {
            self.finish_return();
            self.flags.set_refreshing(true);
            let end_target = self.geometry.original_target_offset + self.config.total_drag_distance;
            self.set_target_offset(end_target);
            self.notify = true;
            self.header_visible = true;
            self.start_animation(
                OffsetAnimation::new(AnimationKind::HeaderAlphaIn, self.config.alpha_in_duration)
                    .then(Transition::Refresh),
            );
            self.set_state(RefreshState::Triggered);
        } else {
            self.finish_refreshing();
        }
    }

    /// Ends the current refresh.
    ///
    /// The header shows the outcome, and after the completion delay the
    /// target animates back to rest. Does nothing if not refreshing.
    pub fn on_refreshing_complete(&mut self, is_success: bool) {
        if !self.is_refreshing() {
            log::debug!("refresh completion ignored: not refreshing");
            return;
        }
        self.flags.set_success(is_success);
        self.finish_refreshing();
    }

    /// Advances animations and the completion delay by `dt`.
    ///
    /// Completion requests posted through a [`RefreshHandle`] are applied
    /// first. Returns `true` while more ticks are needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(mut animation) = self.animation.take() {
            animation.advance(dt);
            self.apply_frame(&animation);
            if animation.is_finished() {
                self.end_animation(animation);
            } else {
                self.animation = Some(animation);
            }
        }

        if let Some(remaining) = self.completion_delay {
            if dt >= remaining {
                self.completion_delay = None;
                self.animate_to_start(Transition::Refresh);
            } else {
                self.completion_delay = Some(remaining - dt);
            }
        }

        // Applied last so the outcome delay starts in full on this frame.
        if let Some(is_success) = self.flags.take_completion_request() {
            self.on_refreshing_complete(is_success);
        }

        self.is_animating()
    }

    fn header_reveal(&self) -> f64 {
        match self.animation {
            Some(animation) if animation.kind() == AnimationKind::HeaderAlphaIn => {
                animation.progress()
            }
            Some(animation) if animation.kind() == AnimationKind::HeaderScaleDown => {
                1.0 - animation.progress()
            }
            _ => 1.0,
        }
    }

    fn set_state(&mut self, state: RefreshState) {
        if self.state != state {
            log::debug!("refresh state {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    fn set_target_offset(&mut self, offset: f64) {
        self.geometry.current_target_offset = offset;
    }

    fn decelerate(&self) -> Interpolator {
        Interpolator::Decelerate(self.config.decelerate_factor)
    }

    /// Enters refreshing from a gesture: the header moves to the refreshing
    /// offset and the listener hears about it when it arrives.
    fn start_refreshing(&mut self, notify: bool) {
        self.notify = notify;
        self.flags.set_refreshing(true);
        self.header.on_refreshing();
        let from = self.geometry.current_target_offset;
        let to = self.geometry.original_target_offset + self.config.spinner_final_offset;
        self.start_animation(
            OffsetAnimation::new(
                AnimationKind::ToCorrectPosition,
                self.config.animate_to_trigger_duration,
            )
            .between(from, to)
            .with_interpolator(self.decelerate())
            .then(Transition::Refresh),
        );
        self.set_state(RefreshState::Triggered);
    }

    fn finish_refreshing(&mut self) {
        self.notify = false;
        self.flags.set_refreshing(false);
        self.header.on_complete(self.flags.is_success());
        self.completion_delay = Some(self.config.complete_delay);
        self.set_state(RefreshState::Returning);
    }

    fn animate_to_start(&mut self, on_end: Transition) {
        let from = self.geometry.current_target_offset;
        let to = self.geometry.original_target_offset;
        self.start_animation(
            OffsetAnimation::new(
                AnimationKind::ToStartPosition,
                self.config.animate_to_start_duration,
            )
            .between(from, to)
            .with_interpolator(self.decelerate())
            .then(on_end),
        );
        self.set_state(RefreshState::Returning);
    }

    fn start_animation(&mut self, animation: OffsetAnimation) {
        if let Some(replaced) = self.animation.take() {
            log::trace!("{:?} replaced by {:?}", replaced.kind(), animation.kind());
            self.header.on_animation_end(replaced.kind());
        }
        log::trace!("{:?} started", animation.kind());
        self.header.on_animation_start(animation.kind());
        self.animation = Some(animation);
    }

    fn apply_frame(&mut self, animation: &OffsetAnimation) {
        if animation.kind().moves_target() {
            self.set_target_offset(animation.value());
        }
    }

    fn end_animation(&mut self, animation: OffsetAnimation) {
        log::trace!("{:?} ended", animation.kind());
        self.header.on_animation_end(animation.kind());
        if let Some(transition) = animation.on_end() {
            self.run_transition(transition);
        }
    }

    fn run_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Refresh => {
                if self.is_refreshing() {
                    self.header.on_refreshing();
                    self.set_state(RefreshState::Refreshing);
                    if core::mem::take(&mut self.notify) {
                        log::debug!("notifying refresh listener");
                        if let Some(listener) = self.listener.as_mut() {
                            listener.on_refresh();
                        }
                    }
                } else {
                    self.header.on_reset();
                    self.header_visible = false;
                    self.flags.set_success(false);
                    let original = self.geometry.original_target_offset;
                    self.set_target_offset(original);
                    if !self.is_animating() {
                        self.set_state(RefreshState::Idle);
                    }
                }
            }
            Transition::ScaleDownHeader => {
                self.start_animation(
                    OffsetAnimation::new(
                        AnimationKind::HeaderScaleDown,
                        self.config.scale_down_duration,
                    )
                    .then(Transition::HideHeader),
                );
            }
            Transition::HideHeader => {
                self.header_visible = false;
                self.header.on_reset();
                if !self.is_animating() {
                    self.set_state(RefreshState::Idle);
                }
            }
        }
    }

    /// Runs every pending return step to completion at once.
    fn finish_return(&mut self) {
        while self.state == RefreshState::Returning {
            if let Some(mut animation) = self.animation.take() {
                animation.finish();
                self.apply_frame(&animation);
                self.end_animation(animation);
            } else if self.completion_delay.take().is_some() {
                self.animate_to_start(Transition::Refresh);
            } else {
                self.set_state(RefreshState::Idle);
            }
        }
    }
}

impl<T: RefreshTarget, H: PullListener> SwipeRefresh<T, H> {
    /// Returns `true` if the target can scroll up, in which case downward
    /// drags belong to it.
    ///
    /// Without a target this is `false`.
    #[must_use]
    pub fn can_child_scroll_up(&self) -> bool {
        self.target.as_ref().is_some_and(|target| target.can_scroll_up())
    }

    /// Watches an event on its way to the target and decides whether the
    /// container should take over the gesture.
    ///
    /// Returns `true` once the pointer has travelled past the touch slop.
    pub fn on_intercept_touch_event(&mut self, event: &TouchEvent) -> bool {
        if event.action == TouchAction::Down && self.state == RefreshState::Returning {
            self.finish_return();
        }
        if !self.can_start_gesture() || self.is_refreshing() {
            return false;
        }

        match event.action {
            TouchAction::Down => {
                let original = self.geometry.original_target_offset;
                self.set_target_offset(original);
                if self.session.begin(event).is_err() {
                    return false;
                }
                self.track_slop(event);
            }
            TouchAction::Move => {
                if !self.session.is_tracking() {
                    log::error!("got a move event without an active pointer id");
                    return false;
                }
                self.track_slop(event);
            }
            TouchAction::PointerDown => {}
            TouchAction::PointerUp => {
                self.session.on_secondary_pointer_up(event);
            }
            TouchAction::Up | TouchAction::Cancel => {
                self.session.end();
                if self.state == RefreshState::Dragging {
                    self.set_state(RefreshState::Idle);
                }
            }
        }
        self.session.is_dragging()
    }

    /// Handles an event once the container owns the gesture.
    ///
    /// Returns `true` if the event was consumed.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        if event.action == TouchAction::Down && self.state == RefreshState::Returning {
            self.finish_return();
        }
        if !self.can_start_gesture() || self.is_refreshing() {
            return false;
        }

        match event.action {
            TouchAction::Down => {
                if self.session.begin(event).is_err() {
                    return false;
                }
            }
            TouchAction::Move => return self.pull(event),
            TouchAction::PointerDown => {
                self.session.on_pointer_down(event);
            }
            TouchAction::PointerUp => {
                self.session.on_secondary_pointer_up(event);
            }
            TouchAction::Up | TouchAction::Cancel => {
                self.release(event);
                return false;
            }
        }
        true
    }

    /// Routes `event` the way a parent view does when its child consumes
    /// touches: it is offered to [`on_intercept_touch_event`](Self::on_intercept_touch_event)
    /// until the container takes over, and goes to
    /// [`on_touch_event`](Self::on_touch_event) from the next event on.
    ///
    /// Returns `true` if the container consumed the event.
    pub fn dispatch_touch_event(&mut self, event: &TouchEvent) -> bool {
        let consumed = if self.intercepting {
            self.on_touch_event(event)
        } else {
            let took_over = self.on_intercept_touch_event(event);
            self.intercepting = took_over;
            took_over
        };
        if event.action.ends_gesture() {
            self.intercepting = false;
        }
        consumed
    }

    fn can_start_gesture(&self) -> bool {
        self.enabled
            && self.target.is_some()
            && self.state != RefreshState::Returning
            && !self.can_child_scroll_up()
    }

    fn track_slop(&mut self, event: &TouchEvent) {
        let Ok(delta_y) = self.session.update(event) else {
            return;
        };
        if self.session.start_if_past_slop(delta_y, self.config.touch_slop) {
            self.flags.set_success(false);
            self.header.on_reset();
            self.set_state(RefreshState::Dragging);
        }
    }

    fn pull(&mut self, event: &TouchEvent) -> bool {
        let delta_y = match self.session.update(event) {
            Ok(delta_y) => delta_y,
            Err(err) => {
                log::error!("got a move event but have an invalid active pointer id: {err}");
                return false;
            }
        };
        if !self.session.is_dragging() {
            self.track_slop(event);
            if !self.session.is_dragging() {
                return true;
            }
        }

        let overscroll = delta_y * self.config.drag_rate;
        let Some(metrics) = pull_metrics(
            overscroll,
            self.config.total_drag_distance,
            self.config.spinner_final_offset,
        ) else {
            return false;
        };
        self.header_visible = true;
        self.header
            .on_pull(overscroll, self.config.total_drag_distance, metrics.rotation);
        let target_y = self.geometry.original_target_offset + metrics.offset;
        self.set_target_offset(target_y);
        true
    }

    fn release(&mut self, event: &TouchEvent) {
        if !self.session.is_tracking() {
            if event.action == TouchAction::Up {
                log::error!("got an up event without an active pointer id");
            }
            return;
        }
        let overscroll = match self.session.update(event) {
            Ok(delta_y) => Some(delta_y * self.config.drag_rate),
            Err(err) => {
                log::error!("got an up event but have an invalid active pointer id: {err}");
                None
            }
        };
        let was_dragging = self.session.is_dragging();
        self.session.end();

        match overscroll {
            Some(overscroll) if overscroll > self.config.total_drag_distance => {
                self.start_refreshing(true);
            }
            _ if was_dragging || self.header_visible || !self.geometry.is_at_rest() => {
                self.animate_to_start(Transition::ScaleDownHeader);
            }
            _ => self.set_state(RefreshState::Idle),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use kurbo::Point;
    use understory_event_state::touch::{PointerId, TouchPointer};

    use super::*;
    use crate::header::HeaderLabel;
    use crate::target::ScrollOffset;

    const FRAME: Duration = Duration::from_millis(16);

    fn ev(action: TouchAction, y: f64) -> TouchEvent {
        TouchEvent::single(action, PointerId(0), Point::new(0.0, y))
    }

    fn container() -> (SwipeRefresh<ScrollOffset>, Rc<Cell<u32>>) {
        let mut refresh = SwipeRefresh::new(RefreshHeader::default());
        refresh.set_target(ScrollOffset::TOP);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        refresh.set_on_refresh_listener(move || counter.set(counter.get() + 1));
        (refresh, calls)
    }

    fn settle(refresh: &mut SwipeRefresh<ScrollOffset>) {
        for _ in 0..200 {
            if !refresh.tick(FRAME) {
                return;
            }
        }
        panic!("animations did not settle");
    }

    #[test]
    fn intercept_waits_for_slop() {
        let (mut refresh, _) = container();
        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Down, 100.0)));
        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Move, 108.0)));
        assert_eq!(refresh.state(), RefreshState::Idle);
        assert!(refresh.on_intercept_touch_event(&ev(TouchAction::Move, 109.0)));
        assert_eq!(refresh.state(), RefreshState::Dragging);
    }

    #[test]
    fn intercept_ignores_scrolled_content() {
        let (mut refresh, _) = container();
        refresh.set_target(ScrollOffset(25.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Move, 200.0)));
        assert_eq!(refresh.state(), RefreshState::Idle);
    }

    #[test]
    fn disabled_container_ignores_touches() {
        let (mut refresh, _) = container();
        refresh.set_enabled(false);
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Move, 200.0)));
        assert!(!refresh.on_touch_event(&ev(TouchAction::Move, 200.0)));
    }

    #[test]
    fn no_target_means_no_gesture() {
        let mut refresh: SwipeRefresh<ScrollOffset> = SwipeRefresh::new(RefreshHeader::default());
        assert!(!refresh.can_child_scroll_up());
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Move, 200.0)));
    }

    #[test]
    fn move_without_active_pointer_is_not_consumed() {
        let (mut refresh, _) = container();
        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Move, 50.0)));
        assert!(!refresh.on_touch_event(&ev(TouchAction::Move, 50.0)));
    }

    #[test]
    fn move_with_unknown_pointer_is_not_consumed() {
        let (mut refresh, _) = container();
        refresh.on_touch_event(&ev(TouchAction::Down, 0.0));
        let stranger = TouchEvent::single(TouchAction::Move, PointerId(9), Point::new(0.0, 80.0));
        assert!(!refresh.on_touch_event(&stranger));
        assert_eq!(refresh.target_offset(), 0.0);
    }

    #[test]
    fn pulling_moves_target_and_updates_header() {
        let (mut refresh, _) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 20.0));
        assert!(refresh.on_touch_event(&ev(TouchAction::Move, 60.0)));

        // 60 of travel at drag rate 0.5 is 30 of overscroll.
        assert_eq!(refresh.overscroll(), 30.0);
        assert_eq!(refresh.target_offset(), 30.0);
        assert!(refresh.is_header_visible());
        assert_eq!(refresh.header().label(), HeaderLabel::PullToRefresh);

        refresh.on_touch_event(&ev(TouchAction::Move, 120.0));
        assert_eq!(refresh.header().label(), HeaderLabel::ReleaseToRefresh);
    }

    #[test]
    fn pulling_above_start_is_not_consumed() {
        let (mut refresh, _) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 100.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 120.0));
        assert!(!refresh.on_touch_event(&ev(TouchAction::Move, 90.0)));
    }

    #[test]
    fn release_past_trigger_refreshes_once() {
        let (mut refresh, calls) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 20.0));
        refresh.on_touch_event(&ev(TouchAction::Move, 120.0));
        refresh.on_touch_event(&ev(TouchAction::Up, 120.0));

        assert!(refresh.is_refreshing());
        assert_eq!(refresh.state(), RefreshState::Triggered);
        assert_eq!(calls.get(), 0);

        settle(&mut refresh);
        assert_eq!(refresh.state(), RefreshState::Refreshing);
        assert_eq!(refresh.target_offset(), 50.0);
        assert_eq!(refresh.header().label(), HeaderLabel::Refreshing);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn release_below_trigger_returns_and_hides_header() {
        let (mut refresh, calls) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 20.0));
        refresh.on_touch_event(&ev(TouchAction::Move, 60.0));
        refresh.on_touch_event(&ev(TouchAction::Up, 60.0));

        assert!(!refresh.is_refreshing());
        assert_eq!(refresh.state(), RefreshState::Returning);

        settle(&mut refresh);
        assert_eq!(refresh.state(), RefreshState::Idle);
        assert_eq!(refresh.target_offset(), 0.0);
        assert!(!refresh.is_header_visible());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn cancel_past_trigger_refreshes_like_release() {
        let (mut refresh, calls) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 20.0));
        refresh.on_touch_event(&ev(TouchAction::Move, 200.0));
        refresh.on_touch_event(&ev(TouchAction::Cancel, 200.0));

        assert!(refresh.is_refreshing());
        settle(&mut refresh);
        assert_eq!(refresh.state(), RefreshState::Refreshing);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn cancel_below_trigger_returns_to_rest() {
        let (mut refresh, calls) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 20.0));
        refresh.on_touch_event(&ev(TouchAction::Move, 80.0));
        refresh.on_touch_event(&ev(TouchAction::Cancel, 80.0));

        settle(&mut refresh);
        assert!(!refresh.is_refreshing());
        assert_eq!(refresh.target_offset(), 0.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn tap_leaves_container_idle() {
        let (mut refresh, _) = container();
        refresh.on_touch_event(&ev(TouchAction::Down, 10.0));
        refresh.on_touch_event(&ev(TouchAction::Up, 10.0));
        assert_eq!(refresh.state(), RefreshState::Idle);
        assert!(!refresh.is_animating());
    }

    #[test]
    fn up_without_pointer_is_ignored() {
        let (mut refresh, _) = container();
        assert!(!refresh.on_touch_event(&ev(TouchAction::Up, 10.0)));
        assert_eq!(refresh.state(), RefreshState::Idle);
    }

    #[test]
    fn touches_are_ignored_while_refreshing() {
        let (mut refresh, calls) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);
        assert_eq!(calls.get(), 1);

        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0)));
        assert!(!refresh.on_touch_event(&ev(TouchAction::Up, 500.0)));
        assert_eq!(refresh.state(), RefreshState::Refreshing);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn programmatic_refresh_jumps_and_notifies_after_reveal() {
        let (mut refresh, calls) = container();
        refresh.set_refreshing(true);

        assert!(refresh.is_refreshing());
        assert_eq!(refresh.target_offset(), 50.0);
        assert!(refresh.is_header_visible());
        let layout = refresh.layout(Size::new(100.0, 200.0), Insets::ZERO);
        assert_eq!(layout.header_reveal, 0.0);
        assert_eq!(calls.get(), 0);

        settle(&mut refresh);
        assert_eq!(calls.get(), 1);
        assert_eq!(refresh.state(), RefreshState::Refreshing);
    }

    #[test]
    fn repeated_set_refreshing_true_is_a_no_op() {
        let (mut refresh, calls) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);
        refresh.set_refreshing(true);
        refresh.set_refreshing(true);
        settle(&mut refresh);
        assert_eq!(calls.get(), 1);
        assert_eq!(refresh.state(), RefreshState::Refreshing);
    }

    #[test]
    fn completion_shows_outcome_then_returns() {
        let (mut refresh, _) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);

        refresh.on_refreshing_complete(true);
        assert!(!refresh.is_refreshing());
        assert_eq!(refresh.header().label(), HeaderLabel::Complete);
        assert_eq!(refresh.state(), RefreshState::Returning);

        // Still showing the outcome during the delay.
        refresh.tick(Duration::from_millis(400));
        assert_eq!(refresh.target_offset(), 50.0);

        settle(&mut refresh);
        assert_eq!(refresh.state(), RefreshState::Idle);
        assert_eq!(refresh.target_offset(), 0.0);
        assert_eq!(refresh.header().label(), HeaderLabel::PullToRefresh);
        assert!(!refresh.handle().is_success());
    }

    #[test]
    fn failed_completion_shows_failure() {
        let (mut refresh, _) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);
        refresh.on_refreshing_complete(false);
        assert_eq!(refresh.header().label(), HeaderLabel::Failed);
    }

    #[test]
    fn completion_when_idle_is_ignored() {
        let (mut refresh, _) = container();
        refresh.on_refreshing_complete(true);
        assert_eq!(refresh.state(), RefreshState::Idle);
        assert!(!refresh.is_animating());
        refresh.set_refreshing(false);
        assert!(!refresh.is_animating());
    }

    #[test]
    fn down_during_return_finishes_it() {
        let (mut refresh, _) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);
        refresh.on_refreshing_complete(true);
        refresh.tick(FRAME);

        assert!(!refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0)));
        assert_eq!(refresh.state(), RefreshState::Idle);
        assert_eq!(refresh.target_offset(), 0.0);
        assert!(!refresh.is_animating());

        // The new gesture proceeds normally.
        assert!(refresh.on_intercept_touch_event(&ev(TouchAction::Move, 40.0)));
    }

    #[test]
    fn move_during_return_is_ignored() {
        let (mut refresh, _) = container();
        refresh.on_intercept_touch_event(&ev(TouchAction::Down, 0.0));
        refresh.on_intercept_touch_event(&ev(TouchAction::Move, 20.0));
        refresh.on_touch_event(&ev(TouchAction::Move, 60.0));
        refresh.on_touch_event(&ev(TouchAction::Up, 60.0));
        assert_eq!(refresh.state(), RefreshState::Returning);

        assert!(!refresh.on_touch_event(&ev(TouchAction::Move, 90.0)));
    }

    #[test]
    fn second_finger_takes_over_and_hands_back() {
        let (mut refresh, _) = container();
        let a = |y| TouchPointer::new(PointerId(0), Point::new(0.0, y));
        let b = |y| TouchPointer::new(PointerId(1), Point::new(0.0, y));

        refresh.on_intercept_touch_event(&TouchEvent::new(TouchAction::Down, [a(0.0)]));
        refresh.on_intercept_touch_event(&TouchEvent::new(TouchAction::Move, [a(20.0)]));
        let join =
            TouchEvent::new(TouchAction::PointerDown, [a(20.0), b(40.0)]).with_action_index(1);
        refresh.on_touch_event(&join);

        // Only the second finger's position drives the offset now.
        refresh.on_touch_event(&TouchEvent::new(TouchAction::Move, [a(20.0), b(80.0)]));
        assert_eq!(refresh.target_offset(), 40.0);

        let lift =
            TouchEvent::new(TouchAction::PointerUp, [a(20.0), b(80.0)]).with_action_index(1);
        refresh.on_touch_event(&lift);
        assert_eq!(refresh.state(), RefreshState::Dragging);

        refresh.on_touch_event(&TouchEvent::new(TouchAction::Move, [a(30.0)]));
        assert_eq!(refresh.target_offset(), 15.0);
    }

    #[test]
    fn handle_completion_applies_on_tick() {
        let (mut refresh, _) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);

        let handle = refresh.handle();
        handle.request_complete(true);
        assert!(refresh.is_refreshing());

        assert!(refresh.has_pending_completion());
        assert!(refresh.is_animating());

        assert!(refresh.tick(FRAME));
        assert!(!refresh.is_refreshing());
        assert!(!refresh.has_pending_completion());
        assert!(handle.is_success());
        assert_eq!(refresh.header().label(), HeaderLabel::Complete);
    }

    #[test]
    fn posted_completion_keeps_the_full_outcome_delay() {
        let (mut refresh, _) = container();
        refresh.set_refreshing(true);
        settle(&mut refresh);

        refresh.handle().request_complete(true);
        refresh.tick(Duration::from_millis(400));
        assert_eq!(refresh.state(), RefreshState::Returning);

        // 400 ms into the 500 ms delay: the return has not started yet.
        refresh.tick(Duration::from_millis(400));
        assert_eq!(refresh.header().animating(), None);
        assert_eq!(refresh.target_offset(), 50.0);

        refresh.tick(Duration::from_millis(100));
        assert_eq!(
            refresh.header().animating(),
            Some(AnimationKind::ToStartPosition)
        );
    }

    #[test]
    fn with_config_validates() {
        let bad = RefreshConfig {
            drag_rate: 0.0,
            ..RefreshConfig::default()
        };
        let result = SwipeRefresh::<ScrollOffset, _>::with_config(RefreshHeader::default(), bad);
        assert_eq!(result.err(), Some(ConfigError::NonPositiveDragRate(0.0)));
    }

    #[test]
    fn header_reports_animations() {
        let (mut refresh, _) = container();
        refresh.set_refreshing(true);
        assert_eq!(refresh.header().animating(), Some(AnimationKind::HeaderAlphaIn));
        settle(&mut refresh);
        assert_eq!(refresh.header().animating(), None);
    }
}
