// Output formatting utilities
//
// Rendering is split in two: `render_boards` and `help_lines` build plain
// lines tagged with a style, `print_lines` turns styles into ANSI escapes.

use crate::models::{State, Task};
use crate::repo::TaskRepo;
use anyhow::Result;
use std::cmp::Ordering;
use std::io::{IsTerminal, Write};

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_UNDERLINE: &str = "\x1b[4m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_MAGENTA: &str = "\x1b[35m";
const ANSI_FG_CYAN: &str = "\x1b[36m";
const ANSI_FG_BRIGHT_RED: &str = "\x1b[91m";
const ANSI_FG_BRIGHT_YELLOW: &str = "\x1b[93m";
const ANSI_FG_BRIGHT_BLUE: &str = "\x1b[94m";

/// Style category of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Title,
    BoardHeader,
    Separator,
    Summary,
    Completed,
    High,
    Medium,
    Low,
    Help,
}

impl Style {
    /// ANSI prefix for this style
    fn ansi(&self) -> String {
        match self {
            Style::Title | Style::Separator => ANSI_FG_CYAN.to_string(),
            Style::BoardHeader => format!("{}{}", ANSI_BOLD, ANSI_FG_MAGENTA),
            Style::Summary => format!("{}{}", ANSI_UNDERLINE, ANSI_FG_CYAN),
            Style::Completed | Style::Help => ANSI_FG_GREEN.to_string(),
            Style::High => ANSI_FG_BRIGHT_RED.to_string(),
            Style::Medium => ANSI_FG_BRIGHT_YELLOW.to_string(),
            Style::Low => ANSI_FG_BRIGHT_BLUE.to_string(),
        }
    }
}

/// One line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: Style,
    pub text: String,
}

impl Line {
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self { style, text: text.into() }
    }
}

/// Priority glyph: "!!" for 3 and up, "! " for 2, blank otherwise
pub fn priority_glyph(priority: i64) -> &'static str {
    if priority >= 3 {
        "!!"
    } else if priority >= 2 {
        "! "
    } else {
        "  "
    }
}

/// Style for a task line
pub fn task_style(task: &Task) -> Style {
    if task.checked {
        Style::Completed
    } else if task.priority >= 3 {
        Style::High
    } else if task.priority >= 2 {
        Style::Medium
    } else {
        Style::Low
    }
}

/// Zero-pad an ID to the digit width of `pad_target`
pub fn pad_id(id: i64, pad_target: i64) -> String {
    let width = pad_target.to_string().len();
    format!("{:0width$}", id, width = width)
}

/// Format a single task line, e.g. `1 !  [ ] milk`
pub fn format_task(task: &Task, pad_target: i64) -> String {
    format!(
        "{} {} [{}] {}",
        pad_id(task.id, pad_target),
        priority_glyph(task.priority),
        if task.checked { 'X' } else { ' ' },
        task.description
    )
}

/// Priority descending, then ID ascending
fn compare_tasks(a: &&Task, b: &&Task) -> Ordering {
    b.priority.cmp(&a.priority).then_with(|| a.id.cmp(&b.id))
}

/// Pending tasks of a board in display order
pub fn sorted_pending<'a>(tasks: &[&'a Task]) -> Vec<&'a Task> {
    let mut pending: Vec<&Task> = tasks.iter().copied().filter(|t| !t.checked).collect();
    pending.sort_by(compare_tasks);
    pending
}

/// Completed tasks of a board in display order
pub fn sorted_completed<'a>(tasks: &[&'a Task]) -> Vec<&'a Task> {
    let mut completed: Vec<&Task> = tasks.iter().copied().filter(|t| t.checked).collect();
    completed.sort_by(compare_tasks);
    completed
}

/// Render every board of the state
pub fn render_boards(state: &State) -> Vec<Line> {
    let mut lines = vec![
        Line::new(Style::Title, "Bord"),
        Line::new(Style::Title, "---"),
        Line::new(Style::Title, ""),
    ];

    for group in TaskRepo::group_by_board(state) {
        lines.push(Line::new(Style::BoardHeader, format!("@{}", group.name)));

        let pending = sorted_pending(&group.tasks);
        let completed = sorted_completed(&group.tasks);

        for task in &pending {
            lines.push(Line::new(task_style(task), format_task(task, state.index)));
        }
        lines.push(Line::new(Style::Separator, "---"));
        for task in &completed {
            lines.push(Line::new(task_style(task), format_task(task, state.index)));
        }

        lines.push(Line::new(Style::Summary, ""));
        lines.push(Line::new(
            Style::Summary,
            format!(
                "Completed Tasks: {} | Pending: {} | Total: {}",
                completed.len(),
                pending.len(),
                group.tasks.len()
            ),
        ));
        lines.push(Line::new(Style::Summary, ""));
    }

    lines
}

/// Usage text for the help command
pub fn help_lines() -> Vec<Line> {
    const HELP: &str = "
Bord Help
---

bord
      Displays all tasks on all boards
      USAGE: bord

(t)ask {@board OPTIONAL} '{task description}' {p:[1-3] priority OPTIONAL}
      Adds a new task
      USAGE: bord task @shopping 'milk' p:2

(c)heck {@board or multiple # task ID numbers}
      Inverts the checkbox on one or more tasks or boards
      USAGE: bord check 2 42 54

(m)ove {@board or multiple # task ID numbers} {@board destination}
      Moves one or more tasks or boards to a target board
      USAGE: bord move 2 42 @shopping @stuffToDoLater

(e)dit {# task ID number} '{task description}' {p:[1-3] priority OPTIONAL}
      Edits the description of a target task
      USAGE: bord edit 2 'bread' p:1

(p)rioritize {@board or multiple # task ID numbers} {p:[1-3] priority}
      Changes priority of one or more tasks or boards
      USAGE: bord prioritize @shopping p:3

(d)elete {@board or multiple # task ID numbers}
      Deletes one or more tasks or boards
      USAGE: bord delete @importantThings

(h)elp
      This
      USAGE: bord h
";
    HELP.lines().map(|line| Line::new(Style::Help, line)).collect()
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Apply a style to text when colors are enabled
pub fn styled(line: &Line, use_color: bool) -> String {
    if use_color && !line.text.is_empty() {
        format!("{}{}{}", line.style.ansi(), line.text, ANSI_RESET)
    } else {
        line.text.clone()
    }
}

/// Write lines to stdout
pub fn print_lines(lines: &[Line], use_color: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{}", styled(line, use_color))?;
    }
    out.flush()?;
    Ok(())
}
