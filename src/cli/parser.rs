// Token classification for command arguments
//
// Arguments are joined with ',' and scanned as one text. Board and task ID
// references are only recognised in list position: at the start of the text
// or right after a comma. A description containing ",2" or ",@x" is
// therefore read as a reference too.

use regex::Regex;
use std::sync::OnceLock;

fn board_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|,)@(\w+)").expect("board pattern is valid"))
}

fn task_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:^|,)([0-9]+)").expect("task id pattern is valid"))
}

fn priority_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"p:([1-3])$").expect("priority pattern is valid"))
}

/// Structured references found in the argument text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    /// Board names without '@', left to right, duplicates kept
    pub boards: Vec<String>,
    /// Task IDs as text, left to right, duplicates kept
    pub task_ids: Vec<String>,
    /// Trailing `p:N` suffix
    pub priority: Option<i64>,
}

/// Classify raw arguments into boards, task IDs and priority
pub fn classify(args: &[String]) -> ClassifiedArgs {
    classify_text(&args.join(","))
}

/// Classify already-joined argument text
pub fn classify_text(text: &str) -> ClassifiedArgs {
    let boards = board_regex()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();
    let task_ids = task_id_regex()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect();
    let priority = priority_regex()
        .captures(text)
        .and_then(|caps| caps[1].parse::<i64>().ok());

    ClassifiedArgs { boards, task_ids, priority }
}

/// Board named by an argument that starts with `@word`
pub fn leading_board(arg: &str) -> Option<String> {
    board_regex()
        .captures(arg)
        .filter(|caps| caps.get(0).map(|m| m.start()) == Some(0))
        .map(|caps| caps[1].to_string())
}

/// Task ID at the start of an argument
pub fn leading_task_id(arg: &str) -> Option<String> {
    task_id_regex()
        .captures(arg)
        .filter(|caps| caps.get(0).map(|m| m.start()) == Some(0))
        .map(|caps| caps[1].to_string())
}

/// Drop the trailing argument carrying the `p:N` suffix, if one was found
pub fn strip_priority(args: &[String], priority: Option<i64>) -> &[String] {
    match (priority, args.split_last()) {
        (Some(_), Some((_, rest))) => rest,
        _ => args,
    }
}

/// Join description parts into a single string
pub fn join_description(parts: &[String]) -> String {
    parts.join(" ")
}
