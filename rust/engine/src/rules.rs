use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How the Ace takes part in straights and kicker comparisons.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AceRule {
    /// Ace ranks highest and also completes the A-2-3-4-5 straight.
    #[default]
    Both,
    /// Ace ranks highest only; A-2-3-4-5 is not a straight.
    High,
    /// Ace always counts as one: A-2-3-4-5 is a straight, A-K-Q-J-T is not.
    Low,
}

/// Variant rules handed to [`crate::evaluator::HandEvaluator`].
///
/// The default is standard high poker. Rules can also be read from TOML:
///
/// ```
/// use pokercards_engine::rules::{AceRule, Rules};
///
/// let rules = Rules::from_toml_str(r#"ace = "high""#).unwrap();
/// assert_eq!(rules.ace, AceRule::High);
/// assert_eq!(Rules::from_toml_str("").unwrap(), Rules::default());
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub ace: AceRule,
}

impl Rules {
    pub fn new(ace: AceRule) -> Self {
        Self { ace }
    }

    /// Whether A-2-3-4-5 counts as a five-high straight.
    pub fn wheel_straight(&self) -> bool {
        matches!(self.ace, AceRule::Both | AceRule::Low)
    }

    pub fn from_toml_str(s: &str) -> Result<Rules, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Rules, ConfigError> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
