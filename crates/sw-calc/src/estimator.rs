//! Multiplicative sodium-loss model.

use serde::Serialize;
use sw_core::config::LossModel;
use sw_core::InputSet;

/// Intermediate factors of one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossFactors {
    pub duration_hours: f64,
    pub temp_factor: f64,
    pub intensity_factor: f64,
    pub humidity_factor: f64,
}

impl LossFactors {
    /// Unrounded loss in mg.
    pub fn total_mg(&self, model: &LossModel) -> f64 {
        model.base_loss_per_hour_mg
            * self.duration_hours
            * self.temp_factor
            * self.intensity_factor
            * self.humidity_factor
    }
}

/// 1 plus a per-unit increase above each threshold; the two adjustments stack.
fn stepped_factor(value: f64, thresholds: (f64, f64), rates: (f64, f64)) -> f64 {
    let mut factor = 1.0;
    if value > thresholds.0 {
        factor += (value - thresholds.0) * rates.0;
    }
    if value > thresholds.1 {
        factor += (value - thresholds.1) * rates.1;
    }
    factor
}

pub fn loss_factors(inputs: &InputSet, model: &LossModel) -> LossFactors {
    LossFactors {
        duration_hours: inputs.duration as f64 / 60.0,
        temp_factor: stepped_factor(
            inputs.temperature as f64,
            (model.temp_threshold_moderate, model.temp_threshold_high),
            (model.temp_factor_moderate, model.temp_factor_high),
        ),
        intensity_factor: model.intensity_base_factor
            + (inputs.intensity as f64 / 10.0) * model.intensity_scale_factor,
        humidity_factor: stepped_factor(
            inputs.humidity as f64,
            (model.humidity_threshold_moderate, model.humidity_threshold_high),
            (model.humidity_factor_moderate, model.humidity_factor_high),
        ),
    }
}

/// Estimated sodium loss in whole milligrams.
///
/// Rounds half away from zero, which for the non-negative totals produced
/// here is round-half-up.
pub fn estimate_loss(inputs: &InputSet, model: &LossModel) -> u32 {
    let total = loss_factors(inputs, model).total_mg(model);
    total.max(0.0).round() as u32
}
