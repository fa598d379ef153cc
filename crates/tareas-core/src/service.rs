//! CRUD operations over the task store.
//!
//! [`TaskService`] layers id assignment and lookups on top of a [`TaskStore`].
//! Every mutation goes through the store, so subscribers see each change.

use std::{cell::Cell, rc::Rc};

use log::debug;

use crate::{
    error::{Result, TareaError},
    models::{Status, Task, TaskPatch},
    store::TaskStore,
};

/// Task operations backed by an injected [`TaskStore`].
///
/// Cloning a service shares both the store and the id counter. Services built
/// separately over the same store still hand out distinct ids: a new id is
/// always above every id already in the store.
#[derive(Debug, Clone)]
pub struct TaskService {
    store: TaskStore,
    counter: Rc<Cell<u64>>,
}

impl TaskService {
    /// Create a service over `store`. Ids start at 1.
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            counter: Rc::new(Cell::new(0)),
        }
    }

    /// Handle to the underlying store.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Assign the next id to `task`, append it, and return the updated list.
    ///
    /// Any id already set on `task` is overwritten. Ids are never reused,
    /// even after deletes.
    pub fn create(&self, mut task: Task) -> Vec<Task> {
        self.store.update(|tasks| {
            let highest = tasks.iter().map(|t| t.id).max().unwrap_or(0);
            let id = self.counter.get().max(highest) + 1;
            self.counter.set(id);
            task.id = id;
            debug!("create task {id}: {}", task.name);
            tasks.push(task);
        });
        self.store.get()
    }

    /// Find a task by id.
    pub fn find_by_id(&self, id: u64) -> Option<Task> {
        self.store
            .with(|tasks| tasks.iter().find(|task| task.id == id).cloned())
    }

    /// Like [`TaskService::find_by_id`], but a missing task is an error.
    pub fn get(&self, id: u64) -> Result<Task> {
        self.find_by_id(id).ok_or(TareaError::TaskNotFound { id })
    }

    /// All tasks with exactly this status, in list order.
    pub fn find_by_status(&self, status: Status) -> Vec<Task> {
        self.store.with(|tasks| {
            tasks
                .iter()
                .filter(|task| task.status == status)
                .cloned()
                .collect()
        })
    }

    /// Every task, in creation order.
    pub fn find_all(&self) -> Vec<Task> {
        self.store.get()
    }

    /// Search-bar query: a status filters, no status lists everything.
    pub fn search(&self, query: Option<Status>) -> Vec<Task> {
        match query {
            Some(status) => self.find_by_status(status),
            None => self.find_all(),
        }
    }

    /// Shallow-merge `patch` into the task with `id` and return the updated
    /// task, or `None` when no task has that id.
    pub fn update(&self, id: u64, patch: &TaskPatch) -> Option<Task> {
        let mut updated = None;
        self.store.update(|tasks| {
            if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
                let changes = patch.apply(task);
                debug!("update task {id}: {changes:?}");
                updated = Some(task.clone());
            }
        });
        updated
    }

    /// Flip a task between complete and pending.
    pub fn toggle_status(&self, id: u64) -> Option<Task> {
        let status = self.find_by_id(id)?.status.toggled();
        self.update(id, &TaskPatch::status(status))
    }

    /// Remove the task with `id`. A missing id leaves the list untouched.
    pub fn delete(&self, id: u64) {
        self.store.update(|tasks| {
            if let Some(index) = tasks.iter().position(|task| task.id == id) {
                debug!("delete task {id}");
                tasks.remove(index);
            }
        });
    }
}

impl Default for TaskService {
    fn default() -> Self {
        Self::new(TaskStore::default())
    }
}
