//! Priority scoring.
//!
//! Pure functions: a finding's category plus file and repository context go
//! in, a normalized factor vector and a weighted scalar score come out. The
//! current time is an explicit argument so identical inputs always produce
//! identical scores.

use chrono::{DateTime, Utc};

use crate::config::PriorityWeights;
use crate::core::{AnalysisResult, PriorityFactors, RepositoryContext, TaskCategory};

/// Bonus threshold above which a finding counts as inherently critical.
///
/// The bonus deliberately contributes twice for high-bonus findings: once
/// here and once through the `custom_priority` factor. This double counting
/// is the documented scoring contract, not an accident.
const CRITICAL_BONUS_THRESHOLD: u32 = 3;

/// Compute the normalized factor vector for one finding.
///
/// All factors except `custom_priority` are capped at 10 so the weight
/// vector transfers across repositories without recalibration.
pub fn calculate_priority_factors(
    category: TaskCategory,
    analysis: &AnalysisResult,
    repo: &RepositoryContext,
    bonus: u32,
    now: DateTime<Utc>,
) -> PriorityFactors {
    let critical = if category.is_critical() { 1.0 } else { 0.0 };
    let critical_bonus = if bonus > CRITICAL_BONUS_THRESHOLD {
        1.0
    } else {
        0.0
    };
    let days_since_commit = repo.days_since_last_commit(now) as f64;

    PriorityFactors {
        critical_comments: critical + critical_bonus,
        days_since_commit: (days_since_commit / 30.0).min(10.0),
        open_issues: (f64::from(repo.open_issues) / 10.0).min(10.0),
        code_complexity: (analysis.complexity / 20.0).min(10.0),
        security_vulnerability: if category == TaskCategory::Security {
            1.0
        } else {
            0.0
        },
        custom_priority: f64::from(bonus),
    }
}

/// Combine a factor vector with a weight vector into a scalar score,
/// rounded to one decimal place.
pub fn calculate_priority_score(factors: &PriorityFactors, weights: &PriorityWeights) -> f64 {
    let score = factors.critical_comments * weights.critical_comments
        + factors.days_since_commit * weights.days_since_commit
        + factors.open_issues * weights.open_issues
        + factors.code_complexity * weights.code_complexity
        + factors.security_vulnerability * weights.security_vulnerability
        + factors.custom_priority * weights.custom_priority;

    round_to_tenth(score)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
