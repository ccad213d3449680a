//! Board repository trait
//!
//! Defines the operations views use to read and mutate the board.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::{BoardState, TaskColumns};
use crate::category::{Category, CategoryUpdate, NewCategory};
use crate::task::{NewTask, Task, TaskStatus};

/// Repository interface for the task board.
///
/// Mutations never fail: a missing task or category is reported through the
/// return value and otherwise ignored.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Create a new task
    async fn create_task(&self, request: NewTask) -> Task;

    /// Move a task to another column
    async fn set_task_status(&self, task_id: Uuid, status: TaskStatus) -> bool;

    /// Set or clear a task's due date
    async fn set_task_due_date(&self, task_id: Uuid, due_date: Option<DateTime<Utc>>) -> bool;

    /// Add a category unless the name is taken
    async fn create_category(&self, request: NewCategory) -> bool;

    /// Rename and recolor a category, retagging its tasks
    async fn rename_category(&self, update: CategoryUpdate) -> Option<usize>;

    /// Delete a category, untagging its tasks
    async fn delete_category(&self, name: &str) -> Option<Category>;

    /// Get a task by ID
    async fn get_task(&self, task_id: Uuid) -> Option<Task>;

    /// Get all categories
    async fn categories(&self) -> Vec<Category>;

    /// Tasks grouped into board columns
    async fn columns(&self) -> TaskColumns;

    /// Copy of the full board state
    async fn snapshot(&self) -> BoardState;
}
