//! Markdown formatting for tasks and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and the outcome of create/update/delete operations go through the wrapper
//! types below so the same task can be shown differently depending on
//! context. All output is markdown, rendered by the shell.
//!
//! - [`collections`]: [`Tasks`], a list of tasks
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`], one-line success/failure messages
//!
//! ```rust
//! use jiff::civil::date;
//! use tareas_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::Task,
//! };
//!
//! let mut task = Task::new("Preparar demo", date(2026, 11, 3));
//! task.id = 1;
//!
//! let created = format!("{}", CreateResult::new(task.clone()));
//! assert!(created.starts_with("Tarea creada con ID: 1"));
//!
//! let updated = UpdateResult::with_changes(task, vec!["Estado: Completa".to_string()]);
//! assert!(format!("{updated}").contains("- Estado: Completa"));
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Tasks;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
