//! Threshold classifier.

use sw_core::config::TierThresholds;
use sw_core::Tier;

/// Map a loss to its tier. Every bound is exclusive on the upper side, so a
/// loss equal to a threshold lands in the higher tier.
pub fn classify(loss_mg: u32, thresholds: &TierThresholds) -> Tier {
    if loss_mg < thresholds.minimal_max {
        Tier::Minimal
    } else if loss_mg < thresholds.low_max {
        Tier::Low
    } else if loss_mg < thresholds.moderate_max {
        Tier::Moderate
    } else if loss_mg < thresholds.high_max {
        Tier::High
    } else {
        Tier::Extreme
    }
}
