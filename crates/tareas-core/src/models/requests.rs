//! Request types for updating models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Person, Status, Task};

/// Value submitted by the task editor.
///
/// The editor has no status field: new tasks start pending and edits keep the
/// status they had.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Id of the task being edited, `None` when creating
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub due_date: Date,
    #[serde(default)]
    pub people: Vec<Person>,
}

impl TaskDraft {
    /// A new pending task built from the draft. The id is left for the
    /// service to assign.
    pub fn into_task(self) -> Task {
        Task::new(self.name, self.due_date).with_people(self.people)
    }
}

impl From<TaskDraft> for TaskPatch {
    /// Edits replace name, due date and people; the status is untouched.
    fn from(draft: TaskDraft) -> Self {
        Self {
            name: Some(draft.name),
            due_date: Some(draft.due_date),
            status: None,
            people: Some(draft.people),
        }
    }
}

/// Partial set of task fields, shallow-merged into an existing task.
///
/// Fields left as `None` keep their current value. The id is never part of a
/// patch: a task keeps the id the service gave it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub due_date: Option<Date>,
    pub status: Option<Status>,
    pub people: Option<Vec<Person>>,
}

impl TaskPatch {
    /// Patch that only changes the status.
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.people.is_none()
    }

    /// Merge the present fields into `task`, returning a description of each
    /// field that actually changed.
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use tareas_core::models::{Status, Task, TaskPatch};
    ///
    /// let mut task = Task::new("Informe", date(2026, 11, 1));
    /// let changes = TaskPatch::status(Status::Complete).apply(&mut task);
    /// assert_eq!(task.status, Status::Complete);
    /// assert_eq!(changes, vec!["Estado: Completa".to_string()]);
    /// ```
    pub fn apply(&self, task: &mut Task) -> Vec<String> {
        let mut changes = Vec::new();

        if let Some(name) = &self.name {
            if *name != task.name {
                task.name = name.clone();
                changes.push(format!("Nombre: {name}"));
            }
        }
        if let Some(due_date) = self.due_date {
            if due_date != task.due_date {
                task.due_date = due_date;
                changes.push(format!("Fecha límite: {due_date}"));
            }
        }
        if let Some(status) = self.status {
            if status != task.status {
                task.status = status;
                changes.push(format!("Estado: {}", status.as_str()));
            }
        }
        if let Some(people) = &self.people {
            if *people != task.people {
                task.people = people.clone();
                changes.push(format!("Personas: {}", people.len()));
            }
        }

        changes
    }
}

impl From<Task> for TaskPatch {
    /// A full task used as a patch replaces every mutable field, which is how
    /// the task editor commits an edit.
    fn from(task: Task) -> Self {
        Self {
            name: Some(task.name),
            due_date: Some(task.due_date),
            status: Some(task.status),
            people: Some(task.people),
        }
    }
}
