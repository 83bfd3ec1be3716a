use serde::{Deserialize, Serialize};
use crate::models::Task;

/// Persisted root document
///
/// `index` is the last assigned task ID. It only ever grows, so IDs are
/// never reused after a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub index: i64,
    pub tasks: Vec<Task>,
}

impl State {
    /// Empty state (`{"index":0,"tasks":[]}`)
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs of every task currently on `board`
    pub fn board_task_ids(&self, board: &str) -> Vec<i64> {
        self.tasks
            .iter()
            .filter(|task| task.board == board)
            .map(|task| task.id)
            .collect()
    }
}
