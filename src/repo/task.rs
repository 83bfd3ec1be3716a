use crate::models::{State, Task};
use log::{debug, trace};

/// Tasks of one board, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGroup<'a> {
    pub name: &'a str,
    pub tasks: Vec<&'a Task>,
}

/// Task repository operating on the in-memory state
///
/// Every operation that targets a task by ID silently skips IDs that do not
/// resolve. A stale or mistyped ID is never an error.
pub struct TaskRepo;

impl TaskRepo {
    /// Create a new task and return its ID
    pub fn create(state: &mut State, description: &str, board: &str, priority: i64) -> i64 {
        state.index += 1;
        let id = state.index;
        state.tasks.push(Task::new(id, board, description, priority));
        debug!("created task {} on @{} (priority {})", id, board, priority);
        id
    }

    /// Find a task by ID given as text
    pub fn find<'a>(state: &'a State, id: &str) -> Option<&'a Task> {
        state.tasks.iter().find(|task| task.matches_id(id))
    }

    fn find_mut<'a>(state: &'a mut State, id: &str) -> Option<&'a mut Task> {
        let task = state.tasks.iter_mut().find(|task| task.matches_id(id));
        if task.is_none() {
            trace!("task {} not found, skipping", id);
        }
        task
    }

    /// Flip the checkbox of a task
    pub fn toggle_checked(state: &mut State, id: &str) {
        if let Some(task) = Self::find_mut(state, id) {
            task.checked = !task.checked;
        }
    }

    /// Set the priority of a task
    pub fn set_priority(state: &mut State, id: &str, priority: i64) {
        if let Some(task) = Self::find_mut(state, id) {
            task.priority = priority;
        }
    }

    /// Replace the description of a task
    pub fn set_description(state: &mut State, id: &str, description: &str) {
        if let Some(task) = Self::find_mut(state, id) {
            task.description = description.to_string();
        }
    }

    /// Move a task to another board
    pub fn set_board(state: &mut State, id: &str, board: &str) {
        if let Some(task) = Self::find_mut(state, id) {
            task.board = board.to_string();
        }
    }

    /// Delete a single task by ID
    pub fn delete_by_id(state: &mut State, id: &str) {
        if let Some(pos) = state.tasks.iter().position(|task| task.matches_id(id)) {
            state.tasks.remove(pos);
            debug!("deleted task {}", id);
        }
    }

    /// Delete every task on a board
    pub fn delete_by_board(state: &mut State, board: &str) {
        let before = state.tasks.len();
        state.tasks.retain(|task| task.board != board);
        debug!("deleted {} task(s) from @{}", before - state.tasks.len(), board);
    }

    /// Group tasks by board, boards in first-seen order
    pub fn group_by_board(state: &State) -> Vec<BoardGroup<'_>> {
        let mut groups: Vec<BoardGroup<'_>> = Vec::new();
        for task in &state.tasks {
            match groups.iter_mut().find(|group| group.name == task.board) {
                Some(group) => group.tasks.push(task),
                None => groups.push(BoardGroup {
                    name: task.board.as_str(),
                    tasks: vec![task],
                }),
            }
        }
        groups
    }
}
