// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Refresh flags readable from any thread.
//!
//! The container is the only writer of the refreshing and success flags.
//! Other threads hold a [`RefreshHandle`]: they may read the flags and post a
//! completion request, which the container applies on its next tick.
//!
//! ```
//! use std::thread;
//!
//! use understory_pull_refresh::{RefreshHeader, ScrollOffset, SwipeRefresh};
//!
//! let mut refresh: SwipeRefresh<ScrollOffset> = SwipeRefresh::new(RefreshHeader::default());
//! refresh.set_refreshing(true);
//!
//! let handle = refresh.handle();
//! assert!(handle.is_refreshing());
//!
//! // A background job finishes and reports back.
//! thread::spawn(move || handle.request_complete(true)).join().unwrap();
//!
//! refresh.tick(std::time::Duration::from_millis(16));
//! assert!(!refresh.is_refreshing());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

const NO_REQUEST: u8 = 0;
const COMPLETE_FAILED: u8 = 1;
const COMPLETE_SUCCEEDED: u8 = 2;

/// Atomic holder of the refreshing/success flags and a pending completion.
#[derive(Debug, Default)]
pub struct RefreshFlags {
    refreshing: AtomicBool,
    success: AtomicBool,
    completion: AtomicU8,
}

impl RefreshFlags {
    /// Returns `true` while a refresh is in progress.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    /// Returns the success flag of the current or last completion.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success.load(Ordering::Acquire)
    }

    /// Returns `true` if a completion request is waiting to be applied.
    #[must_use]
    pub fn has_completion_request(&self) -> bool {
        self.completion.load(Ordering::Acquire) != NO_REQUEST
    }

    pub(crate) fn set_refreshing(&self, refreshing: bool) {
        self.refreshing.store(refreshing, Ordering::Release);
    }

    pub(crate) fn set_success(&self, success: bool) {
        self.success.store(success, Ordering::Release);
    }

    /// Posts a completion for the container to apply on its next tick.
    ///
    /// A later request overwrites an earlier one that was not applied yet.
    pub fn request_complete(&self, is_success: bool) {
        let value = if is_success {
            COMPLETE_SUCCEEDED
        } else {
            COMPLETE_FAILED
        };
        self.completion.store(value, Ordering::Release);
    }

    pub(crate) fn take_completion_request(&self) -> Option<bool> {
        match self.completion.swap(NO_REQUEST, Ordering::AcqRel) {
            COMPLETE_SUCCEEDED => Some(true),
            COMPLETE_FAILED => Some(false),
            _ => None,
        }
    }
}

/// Cloneable, thread-safe view of a container's refresh flags.
#[derive(Clone, Debug)]
pub struct RefreshHandle {
    flags: Arc<RefreshFlags>,
}

impl RefreshHandle {
    pub(crate) fn new(flags: Arc<RefreshFlags>) -> Self {
        Self { flags }
    }

    /// Returns `true` while a refresh is in progress.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.flags.is_refreshing()
    }

    /// Returns the success flag of the current or last completion.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.flags.is_success()
    }

    /// Asks the container to finish refreshing on its next tick.
    ///
    /// The UI side sees the request through
    /// [`SwipeRefresh::has_pending_completion`](crate::SwipeRefresh::has_pending_completion);
    /// wake it so that it resumes ticking.
    pub fn request_complete(&self, is_success: bool) {
        self.flags.request_complete(is_success);
    }
}
