//! Default calculator configuration: slider ranges, loss model constants,
//! tier thresholds and status copy.

use crate::error::{Result, SaltError};
use crate::lint::{lint_config, CopyLintConfig};
use crate::types::{InputField, InputSpec, Tier};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn s(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Range descriptors for the four inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTable {
    pub duration: InputSpec,
    pub temperature: InputSpec,
    pub intensity: InputSpec,
    pub humidity: InputSpec,
}

impl InputTable {
    pub fn get(&self, field: InputField) -> &InputSpec {
        match field {
            InputField::Duration => &self.duration,
            InputField::Temperature => &self.temperature,
            InputField::Intensity => &self.intensity,
            InputField::Humidity => &self.humidity,
        }
    }
}

/// Constants of the multiplicative sodium-loss model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossModel {
    /// Baseline loss for one hour of moderate effort (mg).
    pub base_loss_per_hour_mg: f64,
    pub temp_threshold_moderate: f64,
    pub temp_threshold_high: f64,
    pub temp_factor_moderate: f64,
    pub temp_factor_high: f64,
    pub intensity_base_factor: f64,
    pub intensity_scale_factor: f64,
    pub humidity_threshold_moderate: f64,
    pub humidity_threshold_high: f64,
    pub humidity_factor_moderate: f64,
    pub humidity_factor_high: f64,
}

impl Default for LossModel {
    fn default() -> Self {
        Self {
            base_loss_per_hour_mg: 600.0,
            temp_threshold_moderate: 70.0,
            temp_threshold_high: 85.0,
            temp_factor_moderate: 0.02,
            temp_factor_high: 0.03,
            intensity_base_factor: 0.3,
            intensity_scale_factor: 1.4,
            humidity_threshold_moderate: 40.0,
            humidity_threshold_high: 70.0,
            humidity_factor_moderate: 0.01,
            humidity_factor_high: 0.015,
        }
    }
}

/// Exclusive upper bounds (mg) of the four lower tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub minimal_max: u32,
    pub low_max: u32,
    pub moderate_max: u32,
    pub high_max: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self { minimal_max: 300, low_max: 600, moderate_max: 1000, high_max: 1500 }
    }
}

/// Display copy for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCopy {
    pub label: String,
    pub style_tag: String,
    pub messages: Vec<String>,
    pub recommendation: String,
}

/// One [`TierCopy`] per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable {
    pub minimal: TierCopy,
    pub low: TierCopy,
    pub moderate: TierCopy,
    pub high: TierCopy,
    pub extreme: TierCopy,
}

impl TierTable {
    pub fn get(&self, tier: Tier) -> &TierCopy {
        match tier {
            Tier::Minimal => &self.minimal,
            Tier::Low => &self.low,
            Tier::Moderate => &self.moderate,
            Tier::High => &self.high,
            Tier::Extreme => &self.extreme,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tier, &TierCopy)> {
        Tier::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

/// Reactive controller settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Trailing-edge debounce for drag events, roughly one frame.
    pub debounce_ms: u64,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self { debounce_ms: 16 }
    }
}

/// Full calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaltConfig {
    pub inputs: InputTable,
    #[serde(default)]
    pub loss_model: LossModel,
    #[serde(default)]
    pub thresholds: TierThresholds,
    pub tiers: TierTable,
    #[serde(default)]
    pub widget: WidgetSettings,
    #[serde(default)]
    pub copy_lint: CopyLintConfig,
}

impl SaltConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SaltConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural invariants the calculator relies on.
    pub fn validate(&self) -> Result<()> {
        for field in InputField::ALL {
            let spec = self.inputs.get(field);
            if spec.min > spec.max {
                return Err(SaltError::InvalidConfig(format!(
                    "{}: min {} exceeds max {}",
                    field, spec.min, spec.max
                )));
            }
            if spec.default < spec.min || spec.default > spec.max {
                return Err(SaltError::InvalidConfig(format!(
                    "{}: default {} outside [{}, {}]",
                    field, spec.default, spec.min, spec.max
                )));
            }
            if spec.step <= 0 {
                return Err(SaltError::InvalidConfig(format!("{}: step must be positive", field)));
            }
        }

        let t = &self.thresholds;
        if !(t.minimal_max < t.low_max && t.low_max < t.moderate_max && t.moderate_max < t.high_max) {
            return Err(SaltError::InvalidConfig(format!(
                "tier thresholds must be strictly increasing: {:?}",
                t
            )));
        }

        let mut labels = HashSet::new();
        for (tier, copy) in self.tiers.iter() {
            if copy.label.trim().is_empty() {
                return Err(SaltError::InvalidConfig(format!("{}: empty label", tier)));
            }
            if !labels.insert(copy.label.as_str()) {
                return Err(SaltError::InvalidConfig(format!("{}: duplicate label {}", tier, copy.label)));
            }
            if copy.messages.is_empty() {
                return Err(SaltError::InvalidConfig(format!("{}: no candidate messages", tier)));
            }
            if copy.recommendation.trim().is_empty() {
                return Err(SaltError::InvalidConfig(format!("{}: empty recommendation", tier)));
            }
        }

        if let Some(v) = lint_config(self, &self.copy_lint)?.violations.into_iter().next() {
            return Err(SaltError::ForbiddenCopy { word: v.word, text: v.text });
        }
        Ok(())
    }
}

fn input(name: &str, label: &str, range: (i32, i32), step: i32, default: i32, unit: &str, spaced_unit: bool) -> InputSpec {
    InputSpec {
        name: name.into(),
        label: label.into(),
        min: range.0,
        max: range.1,
        step,
        default,
        unit: unit.into(),
        spaced_unit,
    }
}

fn tier(label: &str, messages: &[&str], recommendation: &str) -> TierCopy {
    TierCopy {
        label: label.into(),
        style_tag: format!("status-{}", label.to_lowercase()),
        messages: s(messages),
        recommendation: recommendation.into(),
    }
}

/// Default calculator configuration.
pub fn default_salt_config() -> SaltConfig {
    SaltConfig {
        inputs: InputTable {
            duration: input("duration", "Duration", (15, 180), 15, 60, "min", true),
            temperature: input("temperature", "Temperature", (40, 110), 5, 75, "\u{00B0}F", false),
            intensity: input("intensity", "Intensity", (1, 10), 1, 5, "/10", false),
            humidity: input("humidity", "Humidity", (0, 100), 10, 50, "%", false),
        },
        loss_model: LossModel::default(),
        thresholds: TierThresholds::default(),
        tiers: TierTable {
            minimal: tier(
                "MINIMAL",
                &[
                    "You're barely working. Your body is probably fine.",
                    "Light activity detected. Your sodium levels remain unimpressed.",
                    "This is more of a warm-up than a workout. Salt can wait.",
                ],
                "A glass of water will do. Save the salt for when you actually need it.",
            ),
            low: tier(
                "LOW",
                &[
                    "Some effort detected. Your minerals are mildly concerned.",
                    "Starting to heat up? Good. Stay hydrated.",
                    "Your body is beginning to notice. Don't ignore it.",
                ],
                "Light hydration recommended. One serving before or after should suffice.",
            ),
            moderate: tier(
                "MODERATE",
                &[
                    "Now we're talking. Your sodium is leaving the building.",
                    "Solid effort. Your electrolytes are working overtime.",
                    "This is the zone where preparation pays off.",
                ],
                "Pre-load before activity. Consider mid-session replenishment if going longer.",
            ),
            high: tier(
                "HIGH",
                &[
                    "You're hemorrhaging minerals. Replenish or regret it.",
                    "Your body is dumping sodium like it's going out of style.",
                    "This is not a drill. Your electrolytes need backup.",
                ],
                "Full protocol recommended: Pre-flight, Loadout, and Reset. No shortcuts.",
            ),
            extreme: tier(
                "EXTREME",
                &[
                    "You absolute unit. Your body is a sodium evacuation zone.",
                    "Peak mineral loss achieved. Recovery is now mandatory.",
                    "Congratulations on trying to become completely depleted.",
                ],
                "Deploy all countermeasures. Pre-load heavily, replenish during, and recover aggressively.",
            ),
        },
        widget: WidgetSettings::default(),
        copy_lint: CopyLintConfig::default(),
    }
}

impl Default for SaltConfig {
    fn default() -> Self {
        default_salt_config()
    }
}

/// The default config instance.
pub static SALT_CONFIG: std::sync::LazyLock<SaltConfig> = std::sync::LazyLock::new(default_salt_config);
