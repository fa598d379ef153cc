//! Person model definition.

use serde::{Deserialize, Serialize};

/// A person assigned to a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Full name, unique (exact match) within one task's people
    pub full_name: String,

    /// Age in years, at least 18 when entered through the person editor
    pub age: u32,

    /// Skills the person brings to the task
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Person {
    /// Create a person from its parts.
    pub fn new(full_name: impl Into<String>, age: u32, skills: Vec<String>) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            skills,
        }
    }
}
