pub mod commands;
pub mod error;
pub mod output;
pub mod parser;
pub mod abbrev;

pub use commands::*;
pub use parser::*;
pub use output::*;
pub use error::*;
