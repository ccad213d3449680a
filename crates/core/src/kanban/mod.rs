//! Kanban board management
//!
//! This module provides the board state with its three-column layout
//! (To Do, In Progress, Done), the category cascade rules, and a
//! thread-safe store wrapping it.

mod model;
mod repository;
mod store;

pub use model::*;
pub use repository::BoardRepository;
pub use store::*;
