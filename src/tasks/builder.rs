//! Task construction from raw findings.
//!
//! One builder per finding kind; all three attach provenance (file, line,
//! locator snippet, tags) and delegate scoring and titling.

use chrono::{DateTime, Utc};

use crate::config::PriorityWeights;
use crate::core::{
    AnalysisResult, CommentMarker, IncompleteCodeFinding, RepositoryContext, SecurityFinding,
    Task, TaskCategory, TaskStatus,
};
use crate::scoring::{calculate_priority_factors, calculate_priority_score};
use crate::titles::{generate_incomplete_code_title, generate_security_title, generate_title};

/// Priority bonus for incomplete-code findings.
pub const INCOMPLETE_CODE_BONUS: u32 = 2;
/// Priority bonus for security findings.
pub const SECURITY_BONUS: u32 = 5;

static SUGGESTED_STEPS: &[(TaskCategory, &str)] = &[
    (
        TaskCategory::Todo,
        "Review the TODO comment and implement the required functionality",
    ),
    (
        TaskCategory::Fixme,
        "Investigate the issue described and apply the necessary fix",
    ),
    (TaskCategory::Bug, "Debug and resolve the reported bug"),
    (
        TaskCategory::Security,
        "Address the security vulnerability immediately",
    ),
    (
        TaskCategory::Optimize,
        "Profile the code and implement performance improvements",
    ),
    (
        TaskCategory::Review,
        "Conduct a code review of the flagged section",
    ),
    (
        TaskCategory::Refactor,
        "Refactor the code to improve maintainability",
    ),
    (
        TaskCategory::Documentation,
        "Add or update documentation for this code section",
    ),
];

pub(crate) fn suggested_steps(category: TaskCategory) -> &'static str {
    SUGGESTED_STEPS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, steps)| *steps)
        .unwrap_or("Review and address the flagged code")
}

/// Locator placeholder; the engine never reads source text.
fn code_snippet(analysis: &AnalysisResult, line_number: usize) -> String {
    format!("Line {} in {}", line_number, analysis.path.display())
}

/// Build a task from a comment marker.
pub fn task_from_comment(
    marker: &CommentMarker,
    analysis: &AnalysisResult,
    repo: &RepositoryContext,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> Task {
    let factors = calculate_priority_factors(marker.category, analysis, repo, 0, now);
    let priority_score = calculate_priority_score(&factors, weights);

    Task {
        title: generate_title(&marker.description, marker.category),
        description: marker.description.clone(),
        category: marker.category,
        priority_score,
        priority_factors: factors,
        file_path: analysis.path.clone(),
        line_number: marker.line_number,
        code_snippet: code_snippet(analysis, marker.line_number),
        suggested_next_steps: suggested_steps(marker.category).to_string(),
        status: TaskStatus::Open,
        tags: vec![
            marker.category.to_string().to_lowercase(),
            analysis.language.to_string(),
        ],
    }
}

/// Build a task from an incomplete-code finding.
pub fn task_from_incomplete_code(
    finding: &IncompleteCodeFinding,
    analysis: &AnalysisResult,
    repo: &RepositoryContext,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> Task {
    let factors = calculate_priority_factors(
        TaskCategory::IncompleteCode,
        analysis,
        repo,
        INCOMPLETE_CODE_BONUS,
        now,
    );
    let priority_score = calculate_priority_score(&factors, weights);
    let line_number = finding.line_number.unwrap_or(0);

    Task {
        title: generate_incomplete_code_title(finding),
        description: finding
            .description
            .clone()
            .unwrap_or_else(|| "Code implementation is incomplete".to_string()),
        category: TaskCategory::IncompleteCode,
        priority_score,
        priority_factors: factors,
        file_path: analysis.path.clone(),
        line_number,
        code_snippet: code_snippet(analysis, line_number),
        suggested_next_steps: "Complete the implementation of this function or class".to_string(),
        status: TaskStatus::Open,
        tags: vec![
            "incomplete".to_string(),
            analysis.language.to_string(),
            finding.kind.tag().to_lowercase(),
        ],
    }
}

/// Build a task from a security finding.
pub fn task_from_security_issue(
    finding: &SecurityFinding,
    analysis: &AnalysisResult,
    repo: &RepositoryContext,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> Task {
    let factors =
        calculate_priority_factors(TaskCategory::Security, analysis, repo, SECURITY_BONUS, now);
    let priority_score = calculate_priority_score(&factors, weights);
    let line_number = finding.line_number.unwrap_or(0);

    Task {
        title: generate_security_title(finding),
        description: finding.description.clone(),
        category: TaskCategory::Security,
        priority_score,
        priority_factors: factors,
        file_path: analysis.path.clone(),
        line_number,
        code_snippet: code_snippet(analysis, line_number),
        suggested_next_steps: "Review and fix this security vulnerability immediately".to_string(),
        status: TaskStatus::Open,
        tags: vec![
            "security".to_string(),
            "critical".to_string(),
            analysis.language.to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IncompleteKind, Language, VulnerabilityKind};
    use std::path::PathBuf;

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            path: PathBuf::from("src/services/payment.js"),
            language: Language::JavaScript,
            complexity: 40.0,
            comments: vec![],
            incomplete_code: vec![],
            security_issues: vec![],
        }
    }

    fn repo() -> RepositoryContext {
        RepositoryContext {
            full_name: "acme/api".to_string(),
            last_commit_at: None,
            open_issues: 5,
        }
    }

    #[test]
    fn comment_task_carries_provenance_and_tags() {
        let marker = CommentMarker {
            category: TaskCategory::Todo,
            description: "TODO: add retries to the payment client".to_string(),
            line_number: 42,
        };
        let task = task_from_comment(
            &marker,
            &analysis(),
            &repo(),
            &PriorityWeights::default(),
            Utc::now(),
        );

        assert_eq!(task.category, TaskCategory::Todo);
        assert_eq!(task.line_number, 42);
        assert_eq!(task.file_path, PathBuf::from("src/services/payment.js"));
        assert_eq!(task.code_snippet, "Line 42 in src/services/payment.js");
        assert_eq!(task.description, "TODO: add retries to the payment client");
        assert_eq!(task.status, TaskStatus::Open);
        assert_eq!(task.tags, vec!["todo".to_string(), "javascript".to_string()]);
        assert_eq!(
            task.suggested_next_steps,
            "Review the TODO comment and implement the required functionality"
        );
    }

    #[test]
    fn unknown_category_gets_generic_steps() {
        assert_eq!(
            suggested_steps(TaskCategory::Hack),
            "Review and address the flagged code"
        );
        assert_eq!(
            suggested_steps(TaskCategory::Other),
            "Review and address the flagged code"
        );
    }

    #[test]
    fn incomplete_task_defaults_description_and_line() {
        let finding = IncompleteCodeFinding {
            kind: IncompleteKind::Stub,
            name: Some("parseConfig".to_string()),
            description: None,
            line_number: None,
        };
        let task = task_from_incomplete_code(
            &finding,
            &analysis(),
            &repo(),
            &PriorityWeights::default(),
            Utc::now(),
        );

        assert_eq!(task.title, "Complete stub implementation: parseConfig");
        assert_eq!(task.description, "Code implementation is incomplete");
        assert_eq!(task.category, TaskCategory::IncompleteCode);
        assert_eq!(task.line_number, 0);
        assert_eq!(task.priority_factors.custom_priority, 2.0);
        assert_eq!(
            task.tags,
            vec![
                "incomplete".to_string(),
                "javascript".to_string(),
                "stub".to_string()
            ]
        );
    }

    #[test]
    fn security_task_scores_twenty_with_default_weights() {
        let finding = SecurityFinding {
            kind: VulnerabilityKind::SqlInjection,
            description: "string concatenation in query".to_string(),
            line_number: Some(88),
            location: Some("UserRepository.findByName".to_string()),
            affected_component: None,
        };
        let task = task_from_security_issue(
            &finding,
            &analysis(),
            &repo(),
            &PriorityWeights::default(),
            Utc::now(),
        );

        assert_eq!(
            task.title,
            "Fix SQL injection vulnerability in UserRepository.findByName"
        );
        assert_eq!(task.priority_score, 20.0);
        assert_eq!(task.category, TaskCategory::Security);
        assert_eq!(task.line_number, 88);
        assert_eq!(
            task.tags,
            vec![
                "security".to_string(),
                "critical".to_string(),
                "javascript".to_string()
            ]
        );
        assert_eq!(
            task.suggested_next_steps,
            "Review and fix this security vulnerability immediately"
        );
    }
}
