//! Saltworks calculator — normalizes slider readings, estimates sodium loss,
//! classifies it into a tier and picks the copy to show.

pub mod estimator;
pub mod format;
pub mod normalize;
pub mod rules;
pub mod selector;

pub use estimator::{estimate_loss, loss_factors, LossFactors};
pub use format::format_loss;
pub use normalize::{normalize, normalize_all};
pub use rules::classify;
pub use selector::*;

use rand::Rng;
use std::collections::BTreeMap;
use std::sync::Arc;
use sw_core::{DisplayState, InputField, InputSet, RawInput, Result, SaltConfig, Tier, SALT_CONFIG};

/// The full calculation pipeline over one immutable configuration.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Arc<SaltConfig>,
}

impl Engine {
    /// Validate `config` and build an engine over it.
    pub fn new(config: Arc<SaltConfig>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self { config: Arc::new(SALT_CONFIG.clone()) }
    }

    pub fn config(&self) -> &Arc<SaltConfig> {
        &self.config
    }

    pub fn normalize_inputs(&self, read: impl FnMut(InputField) -> RawInput) -> InputSet {
        normalize_all(read, &self.config.inputs)
    }

    /// Loss and tier for already-normalized inputs.
    pub fn evaluate(&self, inputs: &InputSet) -> (u32, Tier) {
        let loss = estimate_loss(inputs, &self.config.loss_model);
        (loss, classify(loss, &self.config.thresholds))
    }

    /// Run one recomputation: normalize, estimate, classify, select copy.
    pub fn recompute<R: Rng + ?Sized>(
        &self,
        read: impl FnMut(InputField) -> RawInput,
        memory: &mut ControllerMemory,
        rng: &mut R,
    ) -> DisplayState {
        let inputs = self.normalize_inputs(read);
        self.display(inputs, memory, rng)
    }

    /// Build the display state for normalized inputs.
    pub fn display<R: Rng + ?Sized>(&self, inputs: InputSet, memory: &mut ControllerMemory, rng: &mut R) -> DisplayState {
        let (loss, tier) = self.evaluate(&inputs);
        let (copy, rerolled) = memory.apply(tier, &self.config.tiers, rng);
        let tier_copy = self.config.tiers.get(tier);

        tracing::debug!(
            duration = inputs.duration,
            temperature = inputs.temperature,
            intensity = inputs.intensity,
            humidity = inputs.humidity,
            loss_mg = loss,
            tier = %tier,
            rerolled,
            "recomputed salinity status"
        );

        let readouts: BTreeMap<InputField, String> = InputField::ALL
            .into_iter()
            .map(|f| (f, self.config.inputs.get(f).readout(inputs.get(f))))
            .collect();

        DisplayState {
            loss_mg: loss,
            formatted_loss: format_loss(loss),
            tier,
            tier_label: tier_copy.label.clone(),
            style_tag: tier_copy.style_tag.clone(),
            message: copy.message,
            recommendation: copy.recommendation,
            inputs,
            readouts,
        }
    }
}
