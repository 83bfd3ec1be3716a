// Core data models for Bord
// Only tasks are persisted; boards are derived from `Task::board`

pub mod task;
pub mod state;

pub use task::*;
pub use state::*;
