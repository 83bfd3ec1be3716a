use clap::{CommandFactory, Parser};
use crate::cli::abbrev::canonical_command;
use crate::cli::error::BordError;
use crate::cli::output::{help_lines, is_tty, print_lines, render_boards};
use crate::cli::parser::{classify, join_description, leading_board, leading_task_id, strip_priority, ClassifiedArgs};
use crate::config::Config;
use crate::db::DataFile;
use crate::models::{State, DEFAULT_BOARD, DEFAULT_PRIORITY};
use crate::repo::TaskRepo;
use anyhow::Result;
use log::debug;

/// Description used when `task` is given no description text
pub const DEFAULT_DESCRIPTION: &str = "Hello World";

#[derive(Parser, Debug)]
#[command(name = "bord")]
#[command(about = "Bord - A tiny command-line task tracker with boards, priorities and checkboxes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Command: (t)ask, (c)heck, (m)ove, (e)dit, (p)rioritize, (d)elete, (h)elp.
    /// Omit to list every board.
    pub command: Option<String>,
    /// Board references (@board), task IDs, description text and an optional trailing p:[1-3]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Flags recognised in the command slot only
const VERSION_FLAGS: &[&str] = &["--version", "-V"];

impl Cli {
    /// Split raw tokens (argv without the program name) into command and
    /// arguments. Nothing is interpreted: `-x`, `--` and `--version` after
    /// the command are ordinary argument tokens.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        let mut tokens = tokens.into_iter();
        let command = tokens.next();
        Self { command, args: tokens.collect() }
    }

    /// Whether the command slot asks for the version string
    pub fn wants_version(&self) -> bool {
        self.command.as_deref().map(|c| VERSION_FLAGS.contains(&c)).unwrap_or(false)
    }
}

/// The closed set of commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// No command: list everything
    List,
    Task,
    Delete,
    Check,
    Move,
    Edit,
    Prioritize,
    Help,
}

/// What to do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Render the boards and save the state
    Render,
    /// Print usage and stop without saving
    Help,
}

impl Command {
    /// Resolve a command name or alias. `None` means no command was given.
    pub fn from_name(name: Option<&str>) -> Result<Self, BordError> {
        let Some(name) = name else {
            return Ok(Command::List);
        };
        match canonical_command(name) {
            Some("task") => Ok(Command::Task),
            Some("delete") => Ok(Command::Delete),
            Some("check") => Ok(Command::Check),
            Some("move") => Ok(Command::Move),
            Some("edit") => Ok(Command::Edit),
            Some("prioritize") => Ok(Command::Prioritize),
            Some("help") => Ok(Command::Help),
            _ => Err(BordError::UnknownCommand(name.to_string())),
        }
    }

    /// Apply the command to the state
    pub fn execute(self, state: &mut State, args: &[String]) -> Outcome {
        let classified = classify(args);
        debug!("{:?} with {:?}", self, classified);

        match self {
            Command::List => {}
            Command::Task => handle_task_add(state, args, &classified),
            Command::Delete => handle_delete(state, &classified),
            Command::Check => handle_check(state, &classified),
            Command::Move => handle_move(state, &classified),
            Command::Edit => handle_edit(state, args, &classified),
            Command::Prioritize => handle_prioritize(state, &classified),
            Command::Help => return Outcome::Help,
        }
        Outcome::Render
    }
}

/// Run one invocation: load, apply, render, save
pub fn run() -> Result<()> {
    run_with(std::env::args().skip(1).collect())
}

/// Run one invocation on raw tokens
pub fn run_with(tokens: Vec<String>) -> Result<()> {
    let cli = Cli::from_tokens(tokens);
    if cli.wants_version() {
        print!("{}", Cli::command().render_version());
        return Ok(());
    }

    let config = Config::load()?;
    let use_color = config.color.enabled(is_tty());

    let command = Command::from_name(cli.command.as_deref())?;
    if command == Command::Help {
        // Usage never needs the data file
        return print_lines(&help_lines(), use_color);
    }

    let data_file = DataFile::connect(&config)?;
    let mut state = data_file.load()?;

    match command.execute(&mut state, &cli.args) {
        Outcome::Help => print_lines(&help_lines(), use_color),
        Outcome::Render => {
            print_lines(&render_boards(&state), use_color)?;
            data_file.save(&state)
        }
    }
}

/// Apply `f` to every task currently on each of `boards`
fn for_each_board_task(state: &mut State, boards: &[String], mut f: impl FnMut(&mut State, &str)) {
    for board in boards {
        for id in state.board_task_ids(board) {
            f(state, &id.to_string());
        }
    }
}

fn handle_task_add(state: &mut State, args: &[String], classified: &ClassifiedArgs) {
    let board = args.first().and_then(|arg| leading_board(arg));
    let rest = if board.is_some() { &args[1..] } else { args };
    let parts = strip_priority(rest, classified.priority);

    let description = if parts.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        join_description(parts)
    };
    let board = board.as_deref().unwrap_or(DEFAULT_BOARD);
    let priority = classified.priority.unwrap_or(DEFAULT_PRIORITY);

    TaskRepo::create(state, &description, board, priority);
}

fn handle_delete(state: &mut State, classified: &ClassifiedArgs) {
    for board in &classified.boards {
        TaskRepo::delete_by_board(state, board);
    }
    for id in &classified.task_ids {
        TaskRepo::delete_by_id(state, id);
    }
}

fn handle_check(state: &mut State, classified: &ClassifiedArgs) {
    for_each_board_task(state, &classified.boards, TaskRepo::toggle_checked);
    for id in &classified.task_ids {
        TaskRepo::toggle_checked(state, id);
    }
}

fn handle_move(state: &mut State, classified: &ClassifiedArgs) {
    let Some((target, sources)) = classified.boards.split_last() else {
        debug!("move without a destination board, nothing to do");
        return;
    };
    for_each_board_task(state, sources, |state, id| TaskRepo::set_board(state, id, target));
    for id in &classified.task_ids {
        TaskRepo::set_board(state, id, target);
    }
}

fn handle_edit(state: &mut State, args: &[String], classified: &ClassifiedArgs) {
    let Some(target) = args.first().and_then(|arg| leading_task_id(arg)) else {
        debug!("edit without a target task, nothing to do");
        return;
    };

    let parts = strip_priority(&args[1..], classified.priority);
    if !parts.is_empty() {
        TaskRepo::set_description(state, &target, &join_description(parts));
    }
    if let Some(priority) = classified.priority {
        TaskRepo::set_priority(state, &target, priority);
    }
}

fn handle_prioritize(state: &mut State, classified: &ClassifiedArgs) {
    let Some(priority) = classified.priority else {
        debug!("prioritize without p:N, nothing to do");
        return;
    };
    for_each_board_task(state, &classified.boards, |state, id| TaskRepo::set_priority(state, id, priority));
    for id in &classified.task_ids {
        TaskRepo::set_priority(state, id, priority);
    }
}
