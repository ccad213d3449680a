//! Kanban board store
//!
//! Shares one `BoardState` between views. Each operation holds the write
//! lock for its whole duration, so readers never observe a category
//! rename or delete half applied.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::category::{Category, CategoryUpdate, NewCategory};
use crate::config::BoardConfig;
use crate::task::{NewTask, Task, TaskStatus};

use super::model::{BoardState, TaskColumns};
use super::repository::BoardRepository;

/// Thread-safe board store
#[derive(Clone, Default)]
pub struct BoardStore {
    state: Arc<RwLock<BoardState>>,
}

impl BoardStore {
    /// Create a store with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::with_config(config))),
        }
    }

    /// Create a store configured from the environment
    pub fn from_env() -> Self {
        let config = BoardConfig::from_env();
        tracing::debug!("Creating board store with {:?}", config);
        Self::with_config(config)
    }

    /// IDs of tasks whose category does not exist
    pub async fn dangling_category_refs(&self) -> Vec<Uuid> {
        self.state.read().await.dangling_category_refs()
    }
}

#[async_trait]
impl BoardRepository for BoardStore {
    async fn create_task(&self, request: NewTask) -> Task {
        let mut state = self.state.write().await;
        state.create_task(request).clone()
    }

    async fn set_task_status(&self, task_id: Uuid, status: TaskStatus) -> bool {
        self.state.write().await.set_task_status(task_id, status)
    }

    async fn set_task_due_date(&self, task_id: Uuid, due_date: Option<DateTime<Utc>>) -> bool {
        self.state.write().await.set_task_due_date(task_id, due_date)
    }

    async fn create_category(&self, request: NewCategory) -> bool {
        self.state.write().await.create_category(request.into())
    }

    async fn rename_category(&self, update: CategoryUpdate) -> Option<usize> {
        self.state
            .write()
            .await
            .rename_category(&update.old_name, &update.new_name, update.color)
    }

    async fn delete_category(&self, name: &str) -> Option<Category> {
        self.state.write().await.delete_category(name)
    }

    async fn get_task(&self, task_id: Uuid) -> Option<Task> {
        self.state.read().await.get_task(task_id).cloned()
    }

    async fn categories(&self) -> Vec<Category> {
        self.state.read().await.categories().to_vec()
    }

    async fn columns(&self) -> TaskColumns {
        self.state.read().await.columns()
    }

    async fn snapshot(&self) -> BoardState {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_store() -> BoardStore {
        BoardStore::with_config(BoardConfig::empty())
    }

    #[tokio::test]
    async fn test_create_board_store() {
        let store = BoardStore::new();
        let state = store.snapshot().await;

        assert!(state.tasks().is_empty());
        assert_eq!(state.categories().len(), 4);
    }

    #[tokio::test]
    async fn test_create_and_move_task() {
        let store = BoardStore::new();
        let task = store
            .create_task(NewTask::new("Test Task").with_description("Description"))
            .await;

        assert_eq!(task.title, "Test Task");
        assert_eq!(task.description, "Description");

        assert!(store.set_task_status(task.id, TaskStatus::InProgress).await);
        let columns = store.columns().await;
        assert!(columns.todo.is_empty());
        assert_eq!(columns.in_progress[0].id, task.id);
    }

    #[tokio::test]
    async fn test_missing_task_is_noop() {
        let store = BoardStore::new();
        store.create_task(NewTask::new("Only task")).await;
        let before = store.snapshot().await;

        assert!(!store.set_task_status(Uuid::new_v4(), TaskStatus::Done).await);
        assert!(!store.set_task_due_date(Uuid::new_v4(), None).await);

        let after = store.snapshot().await;
        assert_eq!(after.tasks(), before.tasks());
    }

    #[tokio::test]
    async fn test_rename_through_store() {
        let store = empty_store();
        assert!(store.create_category(NewCategory::new("Work", "red")).await);
        let task = store
            .create_task(NewTask::new("Report").with_category("Work"))
            .await;

        let retagged = store
            .rename_category(CategoryUpdate::new("Work", "Job", "blue"))
            .await;

        assert_eq!(retagged, Some(1));
        assert_eq!(store.categories().await, vec![Category::new("Job", "blue")]);
        let task = store.get_task(task.id).await.unwrap();
        assert_eq!(task.category.as_deref(), Some("Job"));
    }

    #[tokio::test]
    async fn test_delete_through_store() {
        let store = empty_store();
        store.create_category(NewCategory::new("Work", "red")).await;
        let tagged = store
            .create_task(NewTask::new("A").with_category("Work"))
            .await;
        let untagged = store.create_task(NewTask::new("B")).await;

        let removed = store.delete_category("Work").await;

        assert_eq!(removed.map(|c| c.name), Some("Work".to_string()));
        assert!(store.get_task(tagged.id).await.unwrap().category.is_none());
        assert_eq!(store.get_task(untagged.id).await.unwrap(), untagged);
        assert!(store.dangling_category_refs().await.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_readers_never_see_partial_rename() {
        let store = empty_store();
        store.create_category(NewCategory::new("Cat-0", "red")).await;
        for i in 0..20 {
            store
                .create_task(NewTask::new(format!("Task {}", i)).with_category("Cat-0"))
                .await;
        }

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 0..100 {
                    let update =
                        CategoryUpdate::new(format!("Cat-{}", i), format!("Cat-{}", i + 1), "red");
                    assert_eq!(store.rename_category(update).await, Some(20));
                }
            })
        };

        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..200 {
                    let snapshot = store.snapshot().await;
                    assert!(snapshot.dangling_category_refs().is_empty());
                    tokio::task::yield_now().await;
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();

        assert_eq!(store.categories().await[0].name, "Cat-100");
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = empty_store();
        let other = store.clone();

        other.create_category(NewCategory::new("Work", "red")).await;
        assert!(!store.create_category(NewCategory::new("Work", "blue")).await);
        assert_eq!(store.categories().await, vec![Category::new("Work", "red")]);
    }

    #[tokio::test]
    async fn test_store_as_trait_object() {
        let repo: Arc<dyn BoardRepository> = Arc::new(BoardStore::new());
        let task = repo.create_task(NewTask::new("Via trait")).await;
        assert_eq!(repo.get_task(task.id).await.unwrap().title, "Via trait");
    }
}
