//! Kanban board state
//!
//! `BoardState` owns both collections. Every mutation is a single method
//! call, so a category rename or delete updates categories and tasks
//! together before returning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::category::{default_categories, Category};
use crate::config::BoardConfig;
use crate::task::{NewTask, Task, TaskStatus};
use crate::{Error, Result};

/// Tasks partitioned by status, each column in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskColumns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl TaskColumns {
    /// Tasks in the column for `status`
    pub fn get(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    fn get_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete board state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    #[serde(skip)]
    strict_category_refs: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Create a board with the default configuration
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    pub fn with_config(config: BoardConfig) -> Self {
        let categories = if config.seed_default_categories {
            default_categories()
        } else {
            Vec::new()
        };

        Self {
            tasks: Vec::new(),
            categories,
            strict_category_refs: config.strict_category_refs,
        }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Get a task by ID
    pub fn get_task(&self, task_id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Get a category by name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Like `get_task`, but a missing task is an error
    pub fn require_task(&self, task_id: Uuid) -> Result<&Task> {
        self.get_task(task_id)
            .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))
    }

    /// Like `category`, but a missing category is an error
    pub fn require_category(&self, name: &str) -> Result<&Category> {
        self.category(name)
            .ok_or_else(|| Error::CategoryNotFound(name.to_string()))
    }

    /// Add a task, allocating its ID
    pub fn create_task(&mut self, mut request: NewTask) -> &Task {
        let unknown = request
            .category
            .as_deref()
            .is_some_and(|name| self.category(name).is_none());
        if unknown {
            if self.strict_category_refs {
                let name = request.category.take().unwrap_or_default();
                warn!("Dropping unknown category '{}' from new task", name);
            } else {
                warn!("Creating task with unknown category {:?}", request.category);
            }
        }

        let task = Task::from_request(request);
        debug!("Created task {} in {}", task.id, task.status);
        self.tasks.push(task);
        &self.tasks[self.tasks.len() - 1]
    }

    /// Move a task to another column.
    ///
    /// Returns false if no task has this ID.
    pub fn set_task_status(&mut self, task_id: Uuid, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            debug!("Ignoring status change for unknown task {}", task_id);
            return false;
        };

        task.status = status;
        task.touch();
        debug!("Moved task {} to {}", task_id, status);
        true
    }

    /// Set or clear a task's due date.
    ///
    /// Returns false if no task has this ID.
    pub fn set_task_due_date(&mut self, task_id: Uuid, due_date: Option<DateTime<Utc>>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) else {
            debug!("Ignoring due date change for unknown task {}", task_id);
            return false;
        };

        task.due_date = due_date;
        task.touch();
        debug!("Set due date of task {} to {:?}", task_id, due_date);
        true
    }

    /// Add a category unless one with the same name exists.
    ///
    /// An existing category keeps its color. Returns true if added.
    pub fn create_category(&mut self, category: Category) -> bool {
        if self.category(&category.name).is_some() {
            debug!("Category '{}' already exists", category.name);
            return false;
        }

        debug!("Created category '{}'", category.name);
        self.categories.push(category);
        true
    }

    /// Rename and recolor a category in place, retagging its tasks.
    ///
    /// Returns the number of tasks retagged, or `None` if `old_name` does not
    /// exist or `new_name` belongs to a different category.
    pub fn rename_category(
        &mut self,
        old_name: &str,
        new_name: &str,
        color: impl Into<String>,
    ) -> Option<usize> {
        let Some(index) = self.categories.iter().position(|c| c.name == old_name) else {
            debug!("Ignoring rename of unknown category '{}'", old_name);
            return None;
        };

        if new_name != old_name && self.category(new_name).is_some() {
            warn!(
                "Refusing to rename '{}' to '{}': name already in use",
                old_name, new_name
            );
            return None;
        }

        self.categories[index] = Category::new(new_name, color);

        let mut retagged = 0;
        if new_name != old_name {
            for task in self
                .tasks
                .iter_mut()
                .filter(|t| t.category.as_deref() == Some(old_name))
            {
                task.category = Some(new_name.to_string());
                task.touch();
                retagged += 1;
            }
        }

        info!(
            "Renamed category '{}' to '{}', retagged {} task(s)",
            old_name, new_name, retagged
        );
        Some(retagged)
    }

    /// Remove a category and untag every task that referenced it.
    ///
    /// Tasks are untagged even when no category by this name exists.
    /// Returns the removed category, if there was one.
    pub fn delete_category(&mut self, name: &str) -> Option<Category> {
        let removed = self
            .categories
            .iter()
            .position(|c| c.name == name)
            .map(|index| self.categories.remove(index));

        let mut cleared = 0;
        for task in self
            .tasks
            .iter_mut()
            .filter(|t| t.category.as_deref() == Some(name))
        {
            task.category = None;
            task.touch();
            cleared += 1;
        }

        if removed.is_some() || cleared > 0 {
            info!("Deleted category '{}', untagged {} task(s)", name, cleared);
        }
        removed
    }

    /// Partition tasks into the three board columns
    pub fn columns(&self) -> TaskColumns {
        let mut columns = TaskColumns::default();
        for task in &self.tasks {
            columns.get_mut(task.status).push(task.clone());
        }
        columns
    }

    /// Tasks with the given status, in insertion order
    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    /// IDs of tasks whose category does not exist
    pub fn dangling_category_refs(&self) -> Vec<Uuid> {
        self.tasks
            .iter()
            .filter(|t| {
                t.category
                    .as_deref()
                    .is_some_and(|name| self.category(name).is_none())
            })
            .map(|t| t.id)
            .collect()
    }
}
