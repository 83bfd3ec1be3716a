//! Bord - a tiny command-line task tracker
//!
//! Tasks live on named boards, carry a priority (1-3) and a checkbox, and
//! are kept in a single JSON document between invocations. This library
//! provides:
//! - Data models for tasks and the persisted state
//! - Store operations (create, toggle, move, prioritize, edit, delete)
//! - Classification of free-form arguments into boards, task IDs and priority
//! - Command resolution and the grouped, sorted board report
//! - Configuration and the JSON data file
//!
//! # Example
//!
//! ```no_run
//! use bord::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod config;
pub mod db;
pub mod models;
pub mod repo;
pub mod cli;
