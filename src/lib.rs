// Export modules for library usage
pub mod config;
pub mod core;
pub mod scoring;
pub mod tasks;
pub mod titles;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResult, CommentFinding, CommentMarker, IncompleteCodeFinding, IncompleteKind,
    Language, PriorityFactors, PriorityLevel, RepositoryContext, SecurityFinding, Task,
    TaskCategory, TaskStatus, VulnerabilityKind,
};

pub use crate::config::{PriorityWeights, WeightsError};

pub use crate::scoring::{calculate_priority_factors, calculate_priority_score};

pub use crate::tasks::{
    deduplicate_tasks, filter_by_category, filter_by_min_score, generate_tasks,
    generate_tasks_at, group_by_file, summarize, task_from_comment, task_from_incomplete_code,
    task_from_security_issue, total_priority_score, TaskSummary,
};

pub use crate::titles::{
    clean_description, extract_subject, generate_incomplete_code_title, generate_security_title,
    generate_title,
};
