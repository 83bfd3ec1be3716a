// Store operations on the in-memory state

pub mod task;

pub use task::*;
