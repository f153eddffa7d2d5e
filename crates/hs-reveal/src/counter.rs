//! Hit Counter
//!
//! Monotonic per-session counter with a fixed goal. The goal signal is a
//! hard single-fire guarantee of the counter itself: it reports true on
//! exactly the increment that reaches the goal and never again, so no
//! caller-side gating is needed.

use serde::{Deserialize, Serialize};

/// Result of one increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitProgress {
    /// Count after this increment
    pub count: u64,
    /// True iff this increment made the count reach the goal
    pub goal_reached: bool,
}

/// Monotonic hit counter with a single-fire goal latch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitCounter {
    count: u64,
    goal: u64,
    fired: bool,
}

impl HitCounter {
    /// Create a counter at zero. `goal` must be at least 1.
    pub fn new(goal: u64) -> Self {
        debug_assert!(goal >= 1, "goal must be at least 1");
        Self {
            count: 0,
            goal,
            fired: false,
        }
    }

    /// Record one hit
    pub fn increment(&mut self) -> HitProgress {
        self.count += 1;

        let goal_reached = !self.fired && self.count >= self.goal;
        if goal_reached {
            self.fired = true;
        }

        HitProgress {
            count: self.count,
            goal_reached,
        }
    }

    /// Current count
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The fixed goal
    #[inline]
    pub fn goal(&self) -> u64 {
        self.goal
    }

    /// Whether the goal signal has fired (latched)
    #[inline]
    pub fn goal_reached(&self) -> bool {
        self.fired
    }
}
