//! Task status enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// The serialized form is the Spanish label shown to users, which doubles as
/// the option code in the search bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// Task has been finished
    #[serde(rename = "Completa")]
    Complete,

    /// Task still has work left
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completa" | "complete" => Ok(Status::Complete),
            "pendiente" | "pending" => Ok(Status::Pending),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl Status {
    /// Every status, in the order the search bar offers them.
    pub const ALL: [Status; 2] = [Status::Complete, Status::Pending];

    /// User-facing label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Complete => "Completa",
            Status::Pending => "Pendiente",
        }
    }

    /// The status a task moves to when its status is toggled.
    pub fn toggled(self) -> Self {
        match self {
            Status::Complete => Status::Pending,
            Status::Pending => Status::Complete,
        }
    }

    /// Get status with an icon for list display.
    ///
    /// ```rust
    /// use tareas_core::models::Status;
    ///
    /// assert_eq!(Status::Complete.with_icon(), "✓ Completa");
    /// assert_eq!(Status::Pending.with_icon(), "○ Pendiente");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::Complete => "✓ Completa",
            Status::Pending => "○ Pendiente",
        }
    }
}
