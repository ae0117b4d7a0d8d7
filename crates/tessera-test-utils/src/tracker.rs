// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct TrackerState {
    live: Cell<usize>,
    drops: Cell<usize>,
    clones: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
}

/// Shared counters for a family of [`Tracked`] values.
///
/// # Example
///
/// ```rust
/// use tessera_test_utils::{Tracker, catch_panic};
///
/// let tracker = Tracker::new();
/// let a = tracker.track(1);
///
/// tracker.panic_on_clone_after(0);
/// assert!(catch_panic(|| a.clone()).is_err());
///
/// drop(a);
/// assert_eq!(tracker.live(), 0);
/// assert_eq!(tracker.drops(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Tracker {
    state: Rc<TrackerState>,
}

impl Tracker {
    /// Creates a tracker with all counters at zero and no armed panic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new tracked value.
    pub fn track(&self, value: i32) -> Tracked {
        let live = &self.state.live;
        live.set(live.get() + 1);

        Tracked {
            value,
            tracker: self.clone(),
        }
    }

    /// Number of tracked values currently alive.
    pub fn live(&self) -> usize {
        self.state.live.get()
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.state.drops.get()
    }

    /// Number of successful clones so far.
    pub fn clones(&self) -> usize {
        self.state.clones.get()
    }

    /// Lets the next `successful` clones through, then panics on every clone.
    pub fn panic_on_clone_after(&self, successful: usize) {
        self.state.clone_budget.set(Some(successful));
    }

    /// Removes any armed clone panic.
    pub fn disarm(&self) {
        self.state.clone_budget.set(None);
    }

    fn before_clone(&self) {
        let budget = &self.state.clone_budget;

        match budget.get() {
            Some(0) => panic!("Tracked::clone: injected panic"),
            Some(left) => budget.set(Some(left - 1)),
            None => {}
        }

        let clones = &self.state.clones;
        clones.set(clones.get() + 1);
    }

    fn on_drop(&self) {
        let live = &self.state.live;
        live.set(live.get() - 1);

        let drops = &self.state.drops;
        drops.set(drops.get() + 1);
    }
}

/// An `i32` whose lifetime is recorded by its [`Tracker`].
pub struct Tracked {
    value: i32,
    tracker: Tracker,
}

impl Tracked {
    /// The wrapped value.
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.tracker.before_clone();
        self.tracker.track(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.tracker.on_drop();
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl core::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

/// Collects the wrapped values, in order.
pub fn values<'a>(items: impl IntoIterator<Item = &'a Tracked>) -> Vec<i32> {
    items.into_iter().map(Tracked::value).collect()
}
