use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the four slider-controlled inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Duration,
    Temperature,
    Intensity,
    Humidity,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::Duration,
        InputField::Temperature,
        InputField::Intensity,
        InputField::Humidity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Temperature => "temperature",
            Self::Intensity => "intensity",
            Self::Humidity => "humidity",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Range descriptor for a single input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    pub name: String,
    pub label: String,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
    pub unit: String,
    /// Put a space between value and unit in the readout ("60 min").
    #[serde(default)]
    pub spaced_unit: bool,
}

impl InputSpec {
    /// Human readout for an already-normalized value.
    pub fn readout(&self, value: i32) -> String {
        if self.spaced_unit {
            format!("{} {}", value, self.unit)
        } else {
            format!("{}{}", value, self.unit)
        }
    }
}

/// A raw slider reading as handed over by the host, possibly garbage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Text(String),
    Missing,
}

impl RawInput {
    /// Integer interpretation of the reading, `None` when it is not numeric.
    ///
    /// Text is read as a leading integer: whitespace is skipped, an optional
    /// sign and the leading run of digits are taken, anything after is
    /// ignored. Finite numbers truncate toward zero.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(n.trunc() as i64),
            Self::Number(_) => None,
            Self::Text(s) => parse_integer_prefix(s),
            Self::Missing => None,
        }
    }
}

fn parse_integer_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Only overflow can fail here; saturate so clamping still lands on a bound.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i32> for RawInput {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for RawInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Normalized inputs; every field lies inside its spec's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSet {
    /// Minutes.
    pub duration: i32,
    /// Degrees Fahrenheit.
    pub temperature: i32,
    /// 1..=10.
    pub intensity: i32,
    /// Percent.
    pub humidity: i32,
}

impl InputSet {
    pub fn new(duration: i32, temperature: i32, intensity: i32, humidity: i32) -> Self {
        Self { duration, temperature, intensity, humidity }
    }

    pub fn get(&self, field: InputField) -> i32 {
        match field {
            InputField::Duration => self.duration,
            InputField::Temperature => self.temperature,
            InputField::Intensity => self.intensity,
            InputField::Humidity => self.humidity,
        }
    }

    pub fn set(&mut self, field: InputField, value: i32) {
        match field {
            InputField::Duration => self.duration = value,
            InputField::Temperature => self.temperature = value,
            InputField::Intensity => self.intensity = value,
            InputField::Humidity => self.humidity = value,
        }
    }
}

/// Sodium-loss severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Minimal = 0,
    Low = 1,
    Moderate = 2,
    High = 3,
    Extreme = 4,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::Minimal, Tier::Low, Tier::Moderate, Tier::High, Tier::Extreme];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message and recommendation shown together for a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCopy {
    pub message: String,
    pub recommendation: String,
}

/// Everything the host writes into the visible widget after one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub loss_mg: u32,
    pub formatted_loss: String,
    pub tier: Tier,
    pub tier_label: String,
    pub style_tag: String,
    pub message: String,
    pub recommendation: String,
    pub inputs: InputSet,
    pub readouts: BTreeMap<InputField, String>,
}
