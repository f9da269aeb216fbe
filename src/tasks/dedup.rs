//! Within-batch task deduplication.
//!
//! The same underlying issue can surface through two detection paths, e.g.
//! a marker comment on a line that is also flagged as incomplete code.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::core::{Task, TaskCategory};

type TaskKey = (PathBuf, usize, TaskCategory);

/// Collapse tasks sharing (file_path, line_number, category), keeping the
/// higher-scored instance. First-seen position is kept even when a later
/// duplicate wins the slot; score ties keep the first seen.
pub fn deduplicate_tasks(tasks: Vec<Task>) -> Vec<Task> {
    let mut kept: Vec<Task> = Vec::with_capacity(tasks.len());
    let mut index: HashMap<TaskKey, usize> = HashMap::new();

    for task in tasks {
        let key = (task.file_path.clone(), task.line_number, task.category);
        match index.get(&key) {
            Some(&slot) => {
                if task.priority_score > kept[slot].priority_score {
                    kept[slot] = task;
                }
            }
            None => {
                index.insert(key, kept.len());
                kept.push(task);
            }
        }
    }

    kept
}
