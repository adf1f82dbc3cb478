// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pulled content and the refresh listener.

/// The single child the container repositions.
///
/// The container only needs to know whether the child can still scroll
/// towards its top: while it can, downward drags belong to the child.
pub trait RefreshTarget {
    /// Returns `true` if the content can scroll up (towards its start).
    fn can_scroll_up(&self) -> bool;
}

impl<T: RefreshTarget + ?Sized> RefreshTarget for &T {
    fn can_scroll_up(&self) -> bool {
        (**self).can_scroll_up()
    }
}

impl<T: RefreshTarget + ?Sized> RefreshTarget for Box<T> {
    fn can_scroll_up(&self) -> bool {
        (**self).can_scroll_up()
    }
}

/// A target described by its vertical scroll offset.
///
/// It can scroll up whenever the offset is positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset(pub f64);

impl ScrollOffset {
    /// Scrolled to the very top.
    pub const TOP: Self = Self(0.0);
}

impl RefreshTarget for ScrollOffset {
    fn can_scroll_up(&self) -> bool {
        self.0 > 0.0
    }
}

/// A fixed answer, for content that is never scrollable (`false`) or a host
/// that tracks scrollability elsewhere.
impl RefreshTarget for bool {
    fn can_scroll_up(&self) -> bool {
        *self
    }
}

/// Notified when the user asks for a refresh.
///
/// Any `FnMut()` closure is a listener.
pub trait RefreshListener {
    /// A refresh was requested. Call
    /// [`SwipeRefresh::on_refreshing_complete`](crate::SwipeRefresh::on_refreshing_complete)
    /// (or [`RefreshHandle::request_complete`](crate::RefreshHandle::request_complete))
    /// when it is done.
    fn on_refresh(&mut self);
}

impl<F: FnMut()> RefreshListener for F {
    fn on_refresh(&mut self) {
        self();
    }
}
