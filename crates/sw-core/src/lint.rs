//! Brand-voice lint for display copy.

use crate::config::SaltConfig;
use crate::error::{Result, SaltError};
use crate::types::InputField;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const PREVIEW_CHARS: usize = 80;

/// Words that must never appear in user-facing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyLintConfig {
    pub forbidden_words: Vec<String>,
}

impl Default for CopyLintConfig {
    fn default() -> Self {
        Self {
            forbidden_words: ["sweat", "sweaty", "perspire", "perspiration"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

/// A forbidden word found in a piece of copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where the copy lives, e.g. `tiers.high.messages[1]`.
    pub location: String,
    pub word: String,
    pub text: String,
}

/// Case-insensitive, whole-word matcher over the forbidden list.
#[derive(Debug, Clone)]
pub struct CopyLinter {
    pattern: Option<Regex>,
}

impl CopyLinter {
    pub fn new(config: &CopyLintConfig) -> Result<Self> {
        let words: Vec<String> = config
            .forbidden_words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(regex::escape)
            .collect();
        if words.is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = Regex::new(&format!(r"(?i)\b({})\b", words.join("|")))
            .map_err(|e| SaltError::InvalidConfig(format!("forbidden word pattern: {}", e)))?;
        Ok(Self { pattern: Some(pattern) })
    }

    pub fn lint_text(&self, location: &str, text: &str) -> Vec<Violation> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        pattern
            .find_iter(text)
            .map(|m| Violation {
                location: location.to_string(),
                word: m.as_str().to_string(),
                text: text.to_string(),
            })
            .collect()
    }
}

/// Result of scanning a configuration's copy.
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub violations: Vec<Violation>,
}

impl LintReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "[PASS] No forbidden words found. Copy is compliant.");
        }
        writeln!(f, "[FAIL] FORBIDDEN WORDS DETECTED")?;
        writeln!(f, "Total violations: {}", self.violations.len())?;
        for v in &self.violations {
            writeln!(f, "{}: '{}' found", v.location, v.word)?;
            let preview: String = v.text.chars().take(PREVIEW_CHARS).collect();
            if v.text.chars().count() > PREVIEW_CHARS {
                writeln!(f, "    {}...", preview)?;
            } else {
                writeln!(f, "    {}", preview)?;
            }
        }
        write!(f, "Brand compliance FAILED.")
    }
}

/// Scan every label, message and recommendation in `config`.
pub fn lint_config(config: &SaltConfig, lint: &CopyLintConfig) -> Result<LintReport> {
    let linter = CopyLinter::new(lint)?;
    let mut violations = Vec::new();

    for field in InputField::ALL {
        let spec = config.inputs.get(field);
        violations.extend(linter.lint_text(&format!("inputs.{}.label", field), &spec.label));
    }
    for (tier, copy) in config.tiers.iter() {
        violations.extend(linter.lint_text(&format!("tiers.{}.label", tier), &copy.label));
        for (i, message) in copy.messages.iter().enumerate() {
            violations.extend(linter.lint_text(&format!("tiers.{}.messages[{}]", tier, i), message));
        }
        violations.extend(linter.lint_text(&format!("tiers.{}.recommendation", tier), &copy.recommendation));
    }

    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "copy lint found forbidden words");
    }
    Ok(LintReport { violations })
}
