//! Core library for the tareas task manager.
//!
//! Tasks live in an observable [`TaskStore`]; the [`TaskService`] assigns ids
//! and runs every create, read, update and delete through it, so anything
//! subscribed to the store sees each change. Forms are validated with the
//! [`validation`] helper, whose collector turns every invalid control of a
//! nested form into a warn notification.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): task lists and operation results
//! - **Terminal Rendering**: done by the `tareas` shell
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use tareas_core::{models::{Status, Task}, TaskService};
//!
//! let service = TaskService::default();
//! let tasks = service.create(Task::new("Preparar demo", date(2026, 11, 3)));
//! assert_eq!(tasks[0].id, 1);
//!
//! service.toggle_status(1);
//! assert_eq!(service.find_by_status(Status::Complete).len(), 1);
//!
//! service.delete(1);
//! assert!(service.find_all().is_empty());
//! ```

pub mod components;
pub mod dialog;
pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod service;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use components::{CloseOutcome, Home, PersonEditor, SearchBar, TaskEditor, TaskSaved};
pub use display::{CreateResult, DeleteResult, OperationStatus, Tasks, UpdateResult};
pub use error::{Result, TareaError};
pub use models::{Person, Status, Task, TaskDraft, TaskPatch};
pub use notify::{MessageService, Notification, Severity};
pub use service::TaskService;
pub use store::{Store, Subscription, TaskStore};
