// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-ahead search buffer for keyboard navigation of option lists.
//!
//! Typing printable characters while a list has focus jumps to the first row
//! whose label starts with everything typed so far. This module owns the typed
//! text and its expiry; the caller owns the list and the matching rule.
//!
//! ## Usage
//!
//! ```
//! use multipick_event_state::typeahead::{TypeAhead, find_from};
//!
//! let labels = ["apple", "banana", "blueberry", "cherry"];
//! let mut search = TypeAhead::new();
//!
//! // "b" at t=0 lands on banana.
//! let query = search.push('b', 0);
//! let hit = find_from(labels.len(), None, |i| labels[i].starts_with(query));
//! assert_eq!(hit, Some(1));
//!
//! // "l" 100ms later extends the buffer to "bl".
//! let query = search.push('l', 100);
//! let hit = find_from(labels.len(), hit, |i| labels[i].starts_with(query));
//! assert_eq!(hit, Some(2));
//!
//! // After a pause the buffer starts over.
//! assert_eq!(search.push('c', 1_000), "c");
//! ```
//!
//! ## Buffer Rules
//!
//! 1. **Append**: each keystroke is appended and restarts the deadline.
//! 2. **Expire**: once `timeout` milliseconds pass without a keystroke, the
//!    buffer is empty again. Expiry is checked on the next [`TypeAhead::push`]
//!    or explicitly with [`TypeAhead::expire`].
//! 3. **Clear**: hosts clear the buffer when the list loses focus or closes.
//!
//! Timestamps are caller-supplied milliseconds from any monotonic clock.

use alloc::string::String;

/// Default pause, in milliseconds, after which typed text is forgotten.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Rolling buffer of recently typed characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAhead {
    /// Text typed since the last expiry
    buffer: String,
    /// Time at which the buffer expires, if it holds anything
    deadline: Option<u64>,
    /// Inactivity window in milliseconds
    timeout: u64,
}

impl TypeAhead {
    /// Create an empty buffer with the default 500ms timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    /// Create an empty buffer with a custom timeout.
    ///
    /// # Arguments
    /// * `timeout` - Inactivity window in milliseconds after which the buffer clears
    pub fn with_timeout(timeout: u64) -> Self {
        Self {
            buffer: String::new(),
            deadline: None,
            timeout,
        }
    }

    /// Append a typed character and return the whole buffer.
    ///
    /// # Arguments
    /// * `c` - The typed character
    /// * `timestamp` - Event timestamp in milliseconds
    pub fn push(&mut self, c: char, timestamp: u64) -> &str {
        self.expire(timestamp);
        self.buffer.push(c);
        self.deadline = Some(timestamp.saturating_add(self.timeout));
        tracing::trace!(buffer = %self.buffer, "type-ahead");
        &self.buffer
    }

    /// Clear the buffer if its deadline has passed.
    ///
    /// # Returns
    /// `true` if the buffer was cleared by this call
    pub fn expire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Forget everything typed.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.deadline = None;
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Check if nothing has been typed since the last expiry.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Time at which the buffer expires, or `None` if it is empty.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Inactivity window in milliseconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }
}

impl Default for TypeAhead {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first matching row at or after `cursor`, wrapping to the start.
///
/// With no cursor the whole list is searched from the top. Returns `None` if no
/// row matches, in which case the caller leaves the cursor where it is.
///
/// # Arguments
/// * `len` - Number of rows
/// * `cursor` - Current cursor position, if any
/// * `is_match` - Predicate over row indices
pub fn find_from<F>(len: usize, cursor: Option<usize>, mut is_match: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    let start = cursor.unwrap_or(0).min(len);
    (start..len).chain(0..start).find(|&i| is_match(i))
}
