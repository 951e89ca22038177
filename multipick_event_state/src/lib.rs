// Copyright 2025 the Multipick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=multipick_event_state --heading-base-level=0

//! Multipick Event State: small state machines for list keyboard input.
//!
//! - [`keys`]: [`Key`](keys::Key), [`Modifiers`](keys::Modifiers), and the
//!   [`RangeAnchor`](keys::RangeAnchor) recorded while Shift is held.
//! - [`typeahead`]: a rolling [`TypeAhead`](typeahead::TypeAhead) buffer with a
//!   500ms inactivity timeout, and [`find_from`](typeahead::find_from) for the
//!   "at or after the cursor, then from the top" search.
//!
//! Nothing here knows about options or rendering. Timestamps are caller-supplied
//! milliseconds, so the state machines are deterministic under test.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod keys;
pub mod typeahead;
