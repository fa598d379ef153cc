//! Form validation helper.
//!
//! Three layers:
//!
//! - [`validators`]: factories returning validators for one value
//!   (`required`, `non_empty_array`, `min_length`, ...) or for a whole group
//!   (`fields_equal`).
//! - [`form`]: the form tree, a [`FormNode`] being a group, an array or a
//!   leaf control. Controls run their validators whenever their value changes.
//! - [`collector`]: walks a tree collecting every invalid control's errors and
//!   turns them into warn notifications.
//!
//! ```rust
//! use serde_json::{json, Value};
//! use tareas_core::{
//!     notify::MessageService,
//!     validation::{non_empty_array, required, show_errors, FormControl, FormGroup},
//! };
//!
//! let mut form = FormGroup::new()
//!     .with("name", FormControl::new(Value::Null).with_validator(required("nombre")))
//!     .with("people", FormControl::new(json!([])).with_validator(non_empty_array("personas")));
//!
//! let mut messages = MessageService::new();
//! assert_eq!(show_errors(&mut form, &mut messages), 2);
//! assert_eq!(messages.messages()[0].detail, "El campo \"nombre\" es requerido");
//! assert!(form.control("name").unwrap().is_touched());
//! ```

pub mod collector;
pub mod error;
pub mod form;
pub mod validators;

#[cfg(test)]
mod tests;

pub use collector::{
    collect_errors, collect_group_errors, present_errors, show_errors, show_errors_titled,
    show_node_errors, DEFAULT_ERROR_TITLE,
};
pub use error::{ErrorKind, ErrorNode, ValidationError};
pub use form::{FormArray, FormControl, FormGroup, FormNode};
pub use validators::{
    fields_equal, is_object, max_length, max_value, min_length, min_value, non_empty_array,
    required, GroupValidator, Validator,
};
