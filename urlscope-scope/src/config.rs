use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;
use urlscope_pattern::UrlMatchPattern;

use crate::ScopeError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScopeConfig {
    pub rules: Vec<ScopeRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScopeRule {
    pub rule_type: ScopeRuleType,
    #[serde(with = "urlscope_pattern::as_raw")]
    pub pattern: UrlMatchPattern,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScopeRuleType {
    Include,
    Exclude,
}

fn enabled_by_default() -> bool {
    true
}

impl ScopeRule {
    pub fn include(pattern: impl Into<UrlMatchPattern>) -> Self {
        Self {
            rule_type: ScopeRuleType::Include,
            pattern: pattern.into(),
            enabled: true,
        }
    }

    pub fn exclude(pattern: impl Into<UrlMatchPattern>) -> Self {
        Self {
            rule_type: ScopeRuleType::Exclude,
            pattern: pattern.into(),
            enabled: true,
        }
    }
}

impl ScopeConfig {
    pub fn from_toml(raw: &str) -> Result<Self, ScopeError> {
        let config: Self = toml::from_str(raw).map_err(|err| ScopeError::Config(err.to_string()))?;
        for (index, rule) in config.rules.iter().enumerate() {
            if !rule.pattern.is_valid() {
                warn!(
                    rule = index,
                    pattern = rule.pattern.as_str(),
                    "scope rule pattern is invalid and will match nothing"
                );
            }
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ScopeError> {
        toml::to_string_pretty(self).map_err(|err| ScopeError::Config(err.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ScopeError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn load_or_create(path: &Path) -> Result<Self, ScopeError> {
        if path.exists() {
            Self::load(path)
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ScopeError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn invalid_rules(&self) -> impl Iterator<Item = (usize, &ScopeRule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| !rule.pattern.is_valid())
    }
}
