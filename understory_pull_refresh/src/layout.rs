// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offsets of the target and header, and where they land in a layout pass.

use kurbo::{Insets, Rect, Size};

/// Vertical offsets tracked by the container.
///
/// All values are relative to the top of the padded content box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetGeometry {
    /// Rest offset of the target.
    pub original_target_offset: f64,
    /// Offset of the target right now.
    pub current_target_offset: f64,
    /// Top edge of the header area.
    pub origin_header_offset: f64,
}

impl OffsetGeometry {
    /// How far the target is displaced from rest.
    #[must_use]
    pub fn displacement(&self) -> f64 {
        self.current_target_offset - self.original_target_offset
    }

    /// Returns `true` when the target sits at its rest offset.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.current_target_offset == self.original_target_offset
    }
}

/// A child of the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The pulled content.
    Target,
    /// The header indicator.
    Header,
}

/// Result of a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefreshLayout {
    /// Bounds of the target: the padded content box shifted by the offset.
    pub target: Rect,
    /// Bounds of the header: from its origin offset down to the target's top.
    pub header: Rect,
    /// Whether the header should be drawn at all.
    pub header_visible: bool,
    /// Reveal factor in `[0, 1]` for header alpha/scale effects.
    pub header_reveal: f64,
}

impl RefreshLayout {
    /// Children in paint order. The header is always painted last, above the
    /// target.
    #[must_use]
    pub fn paint_order(&self) -> [Layer; 2] {
        [Layer::Target, Layer::Header]
    }

    pub(crate) fn compute(
        geometry: &OffsetGeometry,
        size: Size,
        padding: Insets,
        header_visible: bool,
        header_reveal: f64,
    ) -> Self {
        let left = padding.x0;
        let top = padding.y0;
        let width = (size.width - padding.x0 - padding.x1).max(0.0);
        let height = (size.height - padding.y0 - padding.y1).max(0.0);

        let target_top = top + geometry.current_target_offset;
        let target = Rect::new(left, target_top, left + width, target_top + height);
        let header_top = top + geometry.origin_header_offset;
        let header = Rect::new(left, header_top, left + width, target_top.max(header_top));

        Self {
            target,
            header,
            header_visible,
            header_reveal,
        }
    }
}
