//! Main screen: the task list and its actions.

use std::{cell::RefCell, rc::Rc};

use log::info;

use super::TaskEditor;
use crate::{
    dialog::OnClose,
    error::Result,
    models::{Status, Task, TaskDraft, TaskPatch},
    service::TaskService,
    store::Subscription,
};

/// What a task dialog result did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSaved {
    Created(Task),
    Updated { task: Task, changes: Vec<String> },
}

/// Home view-model.
///
/// The visible list follows the store: any mutation, from here or from
/// anyone else holding the store, replaces it with the full list. A search
/// narrows it until the next mutation.
pub struct Home {
    service: TaskService,
    visible: Rc<RefCell<Vec<Task>>>,
    _subscription: Subscription,
}

impl Home {
    /// Build the view over `service` and start following its store.
    pub fn new(service: TaskService) -> Self {
        let visible = Rc::new(RefCell::new(service.find_all()));
        let subscription = {
            let visible = Rc::clone(&visible);
            service
                .store()
                .subscribe(move |tasks: &Vec<Task>| *visible.borrow_mut() = tasks.clone())
        };

        Self {
            service,
            visible,
            _subscription: subscription,
        }
    }

    /// The service the view acts through.
    pub fn service(&self) -> &TaskService {
        &self.service
    }

    /// Tasks currently shown.
    pub fn tasks(&self) -> Vec<Task> {
        self.visible.borrow().clone()
    }

    /// A task by id, from the full list rather than the visible one.
    pub fn task(&self, id: u64) -> Result<Task> {
        self.service.get(id)
    }

    /// Open the task editor, pre-filled with `existing` when editing.
    pub fn open_task_dialog(&self, existing: Option<&Task>) -> Result<(TaskEditor, OnClose<TaskDraft>)> {
        TaskEditor::open(existing)
    }

    /// Wait for the task editor to close and apply its result.
    pub async fn on_task_dialog_closed(&self, on_close: OnClose<TaskDraft>) -> Option<TaskSaved> {
        self.apply_task_dialog_result(on_close.result().await)
    }

    /// Apply a task editor result: a draft without id creates a pending
    /// task, a draft with an id edits that task. `None` changes nothing.
    pub fn apply_task_dialog_result(&self, result: Option<TaskDraft>) -> Option<TaskSaved> {
        let draft = result?;
        match draft.id {
            None => {
                let tasks = self.service.create(draft.into_task());
                let created = tasks.last().cloned()?;
                info!("created task {}", created.id);
                Some(TaskSaved::Created(created))
            }
            Some(id) => {
                let patch = TaskPatch::from(draft);
                let mut preview = self.service.find_by_id(id)?;
                let changes = patch.apply(&mut preview);
                let task = self.service.update(id, &patch)?;
                info!("updated task {id}");
                Some(TaskSaved::Updated { task, changes })
            }
        }
    }

    /// Label of the toggle button for `task`.
    pub fn toggle_label(task: &Task) -> String {
        format!("Marcar como {}", task.status.toggled().as_str())
    }

    /// Flip a task between Completa and Pendiente.
    pub fn toggle_status(&self, id: u64) -> Option<Task> {
        self.service.toggle_status(id)
    }

    /// Narrow the visible list to `query`, or show everything for `None`.
    pub fn search(&self, query: Option<Status>) -> Vec<Task> {
        let found = self.service.search(query);
        *self.visible.borrow_mut() = found.clone();
        found
    }

    /// Delete a task, returning it when it existed.
    pub fn delete(&self, id: u64) -> Option<Task> {
        let task = self.service.find_by_id(id)?;
        self.service.delete(id);
        info!("deleted task {id}");
        Some(task)
    }
}
