//! Data models for tasks and people.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data.
//!
//! Models serialize with camelCase keys so that a form's JSON value converts
//! straight into a model (and back) with `serde_json`.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use tareas_core::models::{Person, Status, Task};
//!
//! let task = Task::new("Preparar demo", date(2026, 11, 3))
//!     .with_people(vec![Person::new("Ana", 30, vec!["rust".to_string()])]);
//!
//! assert_eq!(task.status, Status::Pending);
//! assert!(task.has_person("Ana"));
//! assert!(!task.has_person("ana"));
//! ```

pub mod person;
pub mod requests;
pub mod status;
pub mod task;


pub use person::Person;
pub use requests::{TaskDraft, TaskPatch};
pub use status::Status;
pub use task::Task;
