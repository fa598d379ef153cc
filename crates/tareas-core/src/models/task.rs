//! Task model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Person, Status};

/// A task ("tarea") with its due date and assigned people.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, assigned by the service on creation
    #[serde(default)]
    pub id: u64,

    /// Name of the task
    pub name: String,

    /// Day the task is due
    pub due_date: Date,

    /// Completion status
    #[serde(default)]
    pub status: Status,

    /// People assigned to the task, in the order they were added
    #[serde(default)]
    pub people: Vec<Person>,
}

impl Task {
    /// Create a pending task with no id yet.
    pub fn new(name: impl Into<String>, due_date: Date) -> Self {
        Self {
            id: 0,
            name: name.into(),
            due_date,
            status: Status::Pending,
            people: Vec::new(),
        }
    }

    /// Builder-style helper to attach people.
    pub fn with_people(mut self, people: Vec<Person>) -> Self {
        self.people = people;
        self
    }

    /// Whether the task is marked as complete.
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Whether a person with exactly this full name is already assigned.
    pub fn has_person(&self, full_name: &str) -> bool {
        self.people.iter().any(|p| p.full_name == full_name)
    }
}
