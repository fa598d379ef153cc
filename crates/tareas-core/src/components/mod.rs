//! Headless view-models for the application screens.
//!
//! Each component owns its form state and talks to the rest of the crate
//! through the [`TaskService`](crate::service::TaskService), the
//! [`MessageService`](crate::notify::MessageService) and dialog handles. A
//! front end (the `tareas` shell, or a test) drives them by calling methods
//! instead of clicking buttons.
//!
//! - [`Home`]: visible task list, search, toggle and delete.
//! - [`TaskEditor`]: create or edit one task, including its people.
//! - [`PersonEditor`]: create one person for the task editor.
//! - [`SearchBar`]: status filter.

pub mod home;
pub mod person_editor;
pub mod search_bar;
pub mod task_editor;

pub use home::{Home, TaskSaved};
pub use person_editor::PersonEditor;
pub use search_bar::{SearchBar, StatusOption};
pub use task_editor::TaskEditor;

/// What happened when a dialog was asked to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The dialog closed, with or without a result
    Closed,
    /// Validation failed; errors were shown and the dialog is still open
    KeptOpen,
}
