use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Priority weights configuration.
///
/// Caller-supplied (user settings) or defaulted. Each weight multiplies the
/// matching normalized factor from
/// [`PriorityFactors`](crate::core::PriorityFactors); missing fields fall
/// back to the documented defaults on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// Weight for the critical-category factor
    #[serde(default = "default_critical_comments_weight")]
    pub critical_comments: f64,

    /// Weight for repository staleness (days since last commit)
    #[serde(default = "default_days_since_commit_weight")]
    pub days_since_commit: f64,

    /// Weight for the open-issue count factor
    #[serde(default = "default_open_issues_weight")]
    pub open_issues: f64,

    /// Weight for the file-complexity factor
    #[serde(default = "default_code_complexity_weight")]
    pub code_complexity: f64,

    /// Weight for the security-vulnerability factor
    #[serde(default = "default_security_vulnerability_weight")]
    pub security_vulnerability: f64,

    /// Weight for the caller-supplied bonus factor
    #[serde(default = "default_custom_priority_weight")]
    pub custom_priority: f64,
}

fn default_critical_comments_weight() -> f64 {
    3.0
}

fn default_days_since_commit_weight() -> f64 {
    2.0
}

fn default_open_issues_weight() -> f64 {
    2.0
}

fn default_code_complexity_weight() -> f64 {
    1.5
}

fn default_security_vulnerability_weight() -> f64 {
    5.0
}

fn default_custom_priority_weight() -> f64 {
    1.0
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            critical_comments: default_critical_comments_weight(),
            days_since_commit: default_days_since_commit_weight(),
            open_issues: default_open_issues_weight(),
            code_complexity: default_code_complexity_weight(),
            security_vulnerability: default_security_vulnerability_weight(),
            custom_priority: default_custom_priority_weight(),
        }
    }
}

/// Rejected weight configuration.
#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("{name} weight must be non-negative, got {value}")]
    NegativeWeight { name: &'static str, value: f64 },
}

impl PriorityWeights {
    fn named_weights(&self) -> [(&'static str, f64); 6] {
        [
            ("critical_comments", self.critical_comments),
            ("days_since_commit", self.days_since_commit),
            ("open_issues", self.open_issues),
            ("code_complexity", self.code_complexity),
            ("security_vulnerability", self.security_vulnerability),
            ("custom_priority", self.custom_priority),
        ]
    }

    /// Check the non-negativity invariant. Caller-facing: the scoring
    /// pipeline itself assumes weights were validated at the settings
    /// boundary.
    pub fn validate(&self) -> Result<(), WeightsError> {
        self.named_weights()
            .into_iter()
            .find(|(_, value)| *value < 0.0)
            .map_or(Ok(()), |(name, value)| {
                Err(WeightsError::NegativeWeight { name, value })
            })
    }
}
