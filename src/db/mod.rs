// Persistence layer

pub mod connection;

pub use connection::*;
