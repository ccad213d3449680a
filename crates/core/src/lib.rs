//! Core library for the task board
//!
//! This crate holds the board's state and the rules that keep it consistent:
//! - Tasks and their status columns
//! - User-defined, colored categories
//! - Cascading category renames and deletes

pub mod category;
pub mod config;
pub mod error;
pub mod kanban;
pub mod task;

pub use config::BoardConfig;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
