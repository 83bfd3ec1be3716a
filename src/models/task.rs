use serde::{Deserialize, Deserializer, Serialize};

/// Board used when a task is created without an explicit `@board`
pub const DEFAULT_BOARD: &str = "tasks";

/// Priority assigned when a task is created without a `p:N` suffix
pub const DEFAULT_PRIORITY: i64 = 1;

/// Task model
///
/// Priority is kept as a plain integer. Values outside 1..=3 are tolerated
/// and render like the nearest bucket (see `cli::output`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub board: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_priority")]
    pub priority: i64,
    pub checked: bool,
}

/// Accept priorities written as numbers or as numeric strings ("2").
/// Older data files store the raw `p:N` capture as text.
fn deserialize_priority<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPriority {
        Number(i64),
        Text(String),
        List(Vec<RawPriority>),
    }

    fn resolve(raw: RawPriority) -> Option<i64> {
        match raw {
            RawPriority::Number(n) => Some(n),
            RawPriority::Text(text) => text.trim().parse().ok(),
            RawPriority::List(items) => items.into_iter().next().and_then(resolve),
        }
    }

    let raw = RawPriority::deserialize(deserializer)?;
    resolve(raw).ok_or_else(|| serde::de::Error::custom("priority is not a number"))
}

impl Task {
    /// Create a new, unchecked task
    pub fn new(id: i64, board: impl Into<String>, description: impl Into<String>, priority: i64) -> Self {
        Self {
            id,
            board: board.into(),
            description: description.into(),
            priority,
            checked: false,
        }
    }

    /// Match a task against an ID given as text (e.g. "7" or "007")
    pub fn matches_id(&self, id: &str) -> bool {
        id.trim().parse::<i64>().map(|n| n == self.id).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_unchecked() {
        let task = Task::new(1, "shopping", "milk", 2);
        assert_eq!(task.id, 1);
        assert_eq!(task.board, "shopping");
        assert_eq!(task.priority, 2);
        assert!(!task.checked);
    }

    #[test]
    fn test_matches_id_from_text() {
        let task = Task::new(7, DEFAULT_BOARD, "x", DEFAULT_PRIORITY);
        assert!(task.matches_id("7"));
        assert!(task.matches_id("007"));
        assert!(!task.matches_id("8"));
        assert!(!task.matches_id("seven"));
        assert!(!task.matches_id(""));
    }

    #[test]
    fn test_priority_read_from_text() {
        let json = r#"{"id":4,"board":"shopping","description":"milk","priority":"2","checked":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, 2);

        // Written back as a plain number
        assert_eq!(serde_json::to_value(&task).unwrap()["priority"], 2);
    }

    #[test]
    fn test_priority_read_from_single_item_list() {
        let json = r#"{"id":4,"board":"b","description":"x","priority":["3"],"checked":false}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, 3);
    }

    #[test]
    fn test_priority_rejects_non_numeric_text() {
        let json = r#"{"id":4,"board":"b","description":"x","priority":"high","checked":false}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_task_json_field_names() {
        let task = Task::new(3, "work", "report", 3);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["board"], "work");
        assert_eq!(json["description"], "report");
        assert_eq!(json["priority"], 3);
        assert_eq!(json["checked"], false);
    }
}
