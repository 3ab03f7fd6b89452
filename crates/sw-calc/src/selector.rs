//! Status copy selection with per-tier stickiness.

use rand::seq::SliceRandom;
use rand::Rng;
use sw_core::config::TierTable;
use sw_core::{StatusCopy, Tier};

/// The fixed recommendation for a tier.
pub fn recommendation_for(tier: Tier, tiers: &TierTable) -> &str {
    &tiers.get(tier).recommendation
}

/// Pick fresh copy for `tier`, or `None` when `previous` carries the same
/// label and the caller should keep what is already shown.
pub fn select_copy<R: Rng + ?Sized>(
    tier: Tier,
    previous: Option<Tier>,
    tiers: &TierTable,
    rng: &mut R,
) -> Option<StatusCopy> {
    let copy = tiers.get(tier);
    if let Some(prev) = previous {
        if tiers.get(prev).label == copy.label {
            return None;
        }
    }
    Some(StatusCopy {
        message: copy.messages.choose(rng).cloned().unwrap_or_default(),
        recommendation: recommendation_for(tier, tiers).to_string(),
    })
}

/// Per-widget memory of the last tier and the copy shown for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerMemory {
    pub last_tier: Option<Tier>,
    pub current_copy: Option<StatusCopy>,
}

impl ControllerMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy to display for `tier`, re-rolling only on a tier change.
    /// Returns the copy and whether it was re-rolled.
    pub fn apply<R: Rng + ?Sized>(&mut self, tier: Tier, tiers: &TierTable, rng: &mut R) -> (StatusCopy, bool) {
        let previous = if self.current_copy.is_some() { self.last_tier } else { None };
        let rerolled = match select_copy(tier, previous, tiers, rng) {
            Some(copy) => {
                self.current_copy = Some(copy);
                true
            }
            None => false,
        };
        self.last_tier = Some(tier);
        let copy = self.current_copy.clone().unwrap_or_else(|| StatusCopy {
            message: String::new(),
            recommendation: recommendation_for(tier, tiers).to_string(),
        });
        (copy, rerolled)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
