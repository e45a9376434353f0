//! Transition deduplication: notify once per signal change.

use crate::models::signal::SignalDirection;
use serde::{Deserialize, Serialize};

/// How a `None` verdict affects tracked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// `None` leaves tracked state alone, so `Long, None, Long` notifies once.
    #[default]
    Sticky,
    /// `None` clears tracked state, so `Long, None, Long` notifies twice.
    RearmOnNone,
}

/// Holds the last emitted signal. Owned by the single poll worker.
#[derive(Debug, Clone, Default)]
pub struct TransitionTracker {
    last_emitted: SignalDirection,
    policy: TransitionPolicy,
}

impl TransitionTracker {
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            last_emitted: SignalDirection::None,
            policy,
        }
    }

    /// Returns true when `direction` should be notified. Updates tracked
    /// state before returning true.
    pub fn evaluate(&mut self, direction: SignalDirection) -> bool {
        if !direction.is_directional() {
            if self.policy == TransitionPolicy::RearmOnNone {
                self.last_emitted = SignalDirection::None;
            }
            return false;
        }

        if direction == self.last_emitted {
            return false;
        }

        self.last_emitted = direction;
        true
    }

    pub fn last_emitted(&self) -> SignalDirection {
        self.last_emitted
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }
}
