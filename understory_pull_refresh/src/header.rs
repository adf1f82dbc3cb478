// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The header indicator shown above the pulled content.
//!
//! The container talks to the header only through [`PullListener`]. The
//! stock [`RefreshHeader`] turns those callbacks into a [`HeaderLabel`] and a
//! rotation hint for whatever renders the header; hosts with their own
//! indicator implement [`PullListener`] directly.
//!
//! ```
//! use understory_pull_refresh::{HeaderLabel, PullListener, RefreshHeader};
//!
//! let mut header = RefreshHeader::default();
//! header.on_pull(30.0, 50.0, 0.1);
//! assert_eq!(header.label(), HeaderLabel::PullToRefresh);
//!
//! header.on_pull(60.0, 50.0, 0.2);
//! assert_eq!(header.label(), HeaderLabel::ReleaseToRefresh);
//! assert_eq!(header.text(), "Release to refresh");
//!
//! header.on_complete(false);
//! assert_eq!(header.label(), HeaderLabel::Failed);
//! ```

use kurbo::{Point, Rect, Size};

use crate::animation::AnimationKind;

/// Callbacks through which the container drives its header.
pub trait PullListener {
    /// The header returns to its resting look.
    fn on_reset(&mut self);

    /// The user is pulling.
    ///
    /// `overscroll` is the damped pull distance, `total_drag_distance` the
    /// trigger distance, and `rotation` a hint for spinning an icon.
    fn on_pull(&mut self, overscroll: f64, total_drag_distance: f64, rotation: f64);

    /// A refresh is in progress.
    fn on_refreshing(&mut self);

    /// The refresh finished, successfully or not.
    fn on_complete(&mut self, is_success: bool);

    /// An animation of the header or the content started.
    fn on_animation_start(&mut self, kind: AnimationKind) {
        let _ = kind;
    }

    /// An animation of the header or the content ended.
    fn on_animation_end(&mut self, kind: AnimationKind) {
        let _ = kind;
    }
}

/// What the header says.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderLabel {
    /// Resting, or pulled less than the trigger distance.
    #[default]
    PullToRefresh,
    /// Pulled past the trigger distance.
    ReleaseToRefresh,
    /// Refresh in progress.
    Refreshing,
    /// Refresh finished successfully.
    Complete,
    /// Refresh finished with an error.
    Failed,
}

impl HeaderLabel {
    /// Default English text for the label.
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::PullToRefresh => "Pull to refresh",
            Self::ReleaseToRefresh => "Release to refresh",
            Self::Refreshing => "Refreshing...",
            Self::Complete => "Refresh complete",
            Self::Failed => "Refresh failed",
        }
    }
}

/// The stock header: a label, a rotating icon, and the content size used to
/// place them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RefreshHeader {
    label: HeaderLabel,
    rotation: f64,
    content_size: Size,
    animating: Option<AnimationKind>,
}

impl RefreshHeader {
    /// Creates a header whose content (icon plus label) measures `content_size`.
    #[must_use]
    pub fn new(content_size: Size) -> Self {
        Self {
            content_size,
            ..Self::default()
        }
    }

    /// Current label.
    #[must_use]
    pub fn label(&self) -> HeaderLabel {
        self.label
    }

    /// Text of the current label.
    #[must_use]
    pub fn text(&self) -> &'static str {
        self.label.text()
    }

    /// Rotation hint from the last pull.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Measured size of the header content.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Updates the measured size of the header content.
    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    /// The animation currently running, as last reported by the container.
    #[must_use]
    pub fn animating(&self) -> Option<AnimationKind> {
        self.animating
    }

    /// Places the content inside the header area.
    ///
    /// While the area is shorter than the content, the content hugs the
    /// bottom edge so that it slides in from above; otherwise it is centred.
    /// It is always centred horizontally.
    #[must_use]
    pub fn content_rect(&self, area: Rect) -> Rect {
        let size = self.content_size;
        let x = area.x0 + (area.width() - size.width) * 0.5;
        let y = if size.height > area.height() {
            area.y1 - size.height
        } else {
            area.y0 + (area.height() - size.height) * 0.5
        };
        Rect::from_origin_size(Point::new(x, y), size)
    }
}

impl PullListener for RefreshHeader {
    fn on_reset(&mut self) {
        self.label = HeaderLabel::PullToRefresh;
        self.rotation = 0.0;
    }

    fn on_pull(&mut self, overscroll: f64, total_drag_distance: f64, rotation: f64) {
        self.rotation = rotation;
        self.label = if overscroll > total_drag_distance {
            HeaderLabel::ReleaseToRefresh
        } else {
            HeaderLabel::PullToRefresh
        };
    }

    fn on_refreshing(&mut self) {
        self.label = HeaderLabel::Refreshing;
    }

    fn on_complete(&mut self, is_success: bool) {
        self.label = if is_success {
            HeaderLabel::Complete
        } else {
            HeaderLabel::Failed
        };
    }

    fn on_animation_start(&mut self, kind: AnimationKind) {
        self.animating = Some(kind);
    }

    fn on_animation_end(&mut self, kind: AnimationKind) {
        if self.animating == Some(kind) {
            self.animating = None;
        }
    }
}
