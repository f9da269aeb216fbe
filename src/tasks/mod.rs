//! Task generation pipeline.
//!
//! Flattens per-file findings into candidate tasks, deduplicates within the
//! batch, and returns the list sorted by descending priority score. The
//! pipeline is a pure function of its inputs: no caches, no globals, so
//! independent repository batches can run in parallel without coordination.

pub mod builder;
pub mod dedup;

pub use builder::{task_from_comment, task_from_incomplete_code, task_from_security_issue};
pub use dedup::deduplicate_tasks;

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PriorityWeights;
use crate::core::{AnalysisResult, PriorityLevel, RepositoryContext, Task, TaskCategory};

/// Generate the ranked task list for one repository analysis batch.
///
/// `weights` falls back to [`PriorityWeights::default`] when absent.
pub fn generate_tasks(
    results: &[AnalysisResult],
    repo: &RepositoryContext,
    weights: Option<&PriorityWeights>,
) -> Vec<Task> {
    generate_tasks_at(results, repo, weights, Utc::now())
}

/// [`generate_tasks`] with an explicit clock, so identical inputs always
/// produce identical output.
pub fn generate_tasks_at(
    results: &[AnalysisResult],
    repo: &RepositoryContext,
    weights: Option<&PriorityWeights>,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let default_weights = PriorityWeights::default();
    let weights = weights.unwrap_or(&default_weights);

    let candidates: Vec<Task> = results
        .iter()
        .flat_map(|analysis| file_tasks(analysis, repo, weights, now))
        .collect();

    let mut tasks = deduplicate_tasks(candidates);
    tasks.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    info!(
        "Generated {} tasks for repository {}",
        tasks.len(),
        repo.full_name
    );
    tasks
}

/// Candidate tasks for one file: comment markers, then incomplete code,
/// then security findings.
fn file_tasks(
    analysis: &AnalysisResult,
    repo: &RepositoryContext,
    weights: &PriorityWeights,
    now: DateTime<Utc>,
) -> Vec<Task> {
    let comment_tasks = analysis
        .comments
        .iter()
        .flat_map(|comment| comment.markers.iter())
        .map(|marker| task_from_comment(marker, analysis, repo, weights, now));

    let incomplete_tasks = analysis
        .incomplete_code
        .iter()
        .map(|finding| task_from_incomplete_code(finding, analysis, repo, weights, now));

    let security_tasks = analysis
        .security_issues
        .iter()
        .map(|finding| task_from_security_issue(finding, analysis, repo, weights, now));

    comment_tasks
        .chain(incomplete_tasks)
        .chain(security_tasks)
        .collect()
}

pub fn filter_by_category(tasks: Vec<Task>, category: TaskCategory) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.category == category)
        .collect()
}

pub fn filter_by_min_score(tasks: Vec<Task>, min_score: f64) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.priority_score >= min_score)
        .collect()
}

pub fn group_by_file(tasks: Vec<Task>) -> HashMap<PathBuf, Vec<Task>> {
    tasks.into_iter().fold(HashMap::new(), |mut acc, task| {
        acc.entry(task.file_path.clone()).or_default().push(task);
        acc
    })
}

pub fn total_priority_score(tasks: &[Task]) -> f64 {
    tasks.iter().map(|task| task.priority_score).sum()
}

/// Aggregate view over a generated task list.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub by_category: HashMap<TaskCategory, usize>,
    pub critical: usize,
    pub top_score: f64,
}

pub fn summarize(tasks: &[Task]) -> TaskSummary {
    tasks.iter().fold(TaskSummary::default(), |mut acc, task| {
        acc.total += 1;
        *acc.by_category.entry(task.category).or_default() += 1;
        if task.priority_level() == PriorityLevel::Critical {
            acc.critical += 1;
        }
        acc.top_score = acc.top_score.max(task.priority_score);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PriorityFactors, TaskStatus};

    fn task(file: &str, category: TaskCategory, score: f64) -> Task {
        Task {
            title: "t".to_string(),
            description: "d".to_string(),
            category,
            priority_score: score,
            priority_factors: PriorityFactors {
                critical_comments: 0.0,
                days_since_commit: 0.0,
                open_issues: 0.0,
                code_complexity: 0.0,
                security_vulnerability: 0.0,
                custom_priority: 0.0,
            },
            file_path: PathBuf::from(file),
            line_number: 1,
            code_snippet: String::new(),
            suggested_next_steps: String::new(),
            status: TaskStatus::Open,
            tags: vec![],
        }
    }

    #[test]
    fn filter_by_category_keeps_only_matches() {
        let tasks = vec![
            task("a.rs", TaskCategory::Bug, 5.0),
            task("b.rs", TaskCategory::Todo, 3.0),
            task("c.rs", TaskCategory::Bug, 1.0),
        ];
        let bugs = filter_by_category(tasks, TaskCategory::Bug);
        assert_eq!(bugs.len(), 2);
        assert!(bugs.iter().all(|t| t.category == TaskCategory::Bug));
    }

    #[test]
    fn filter_by_min_score_is_inclusive() {
        let tasks = vec![
            task("a.rs", TaskCategory::Bug, 5.0),
            task("b.rs", TaskCategory::Todo, 3.0),
        ];
        let filtered = filter_by_min_score(tasks, 5.0);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].priority_score, 5.0);
    }

    #[test]
    fn group_by_file_buckets_tasks() {
        let tasks = vec![
            task("a.rs", TaskCategory::Bug, 5.0),
            task("a.rs", TaskCategory::Todo, 3.0),
            task("b.rs", TaskCategory::Todo, 1.0),
        ];
        let grouped = group_by_file(tasks);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&PathBuf::from("a.rs")].len(), 2);
        assert_eq!(grouped[&PathBuf::from("b.rs")].len(), 1);
    }

    #[test]
    fn summary_counts_categories_and_critical() {
        let tasks = vec![
            task("a.rs", TaskCategory::Security, 80.0),
            task("b.rs", TaskCategory::Security, 40.0),
            task("c.rs", TaskCategory::Todo, 10.0),
        ];
        let summary = summarize(&tasks);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.by_category[&TaskCategory::Security], 2);
        assert_eq!(summary.by_category[&TaskCategory::Todo], 1);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.top_score, 80.0);
    }

    #[test]
    fn total_priority_score_sums() {
        let tasks = vec![
            task("a.rs", TaskCategory::Bug, 5.0),
            task("b.rs", TaskCategory::Todo, 3.5),
        ];
        assert_eq!(total_priority_score(&tasks), 8.5);
    }
}
