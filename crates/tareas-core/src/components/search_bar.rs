//! Status filter for the task list.

use serde_json::Value;

use crate::{
    error::{Result, TareaError},
    models::Status,
    validation::{FormControl, FormGroup},
};

/// One entry of the status dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub label: &'static str,
    pub code: &'static str,
}

/// Search form with a single `query` control holding a status code or null.
pub struct SearchBar {
    form: FormGroup,
}

impl SearchBar {
    /// A search bar with no status selected.
    pub fn new() -> Self {
        Self {
            form: FormGroup::new().with("query", FormControl::new(Value::Null)),
        }
    }

    /// Options offered by the dropdown, one per status.
    pub fn options() -> Vec<StatusOption> {
        Status::ALL
            .iter()
            .map(|status| StatusOption {
                label: status.as_str(),
                code: status.as_str(),
            })
            .collect()
    }

    /// Pick a status, or clear the filter with `None`.
    pub fn select(&mut self, status: Option<Status>) {
        let value = status.map_or(Value::Null, |s| Value::from(s.as_str()));
        self.form.set_value("query", value);
    }

    /// Select from free text. Blank text clears the filter.
    pub fn set_query(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            self.select(None);
            return Ok(());
        }
        let status = text.parse::<Status>().map_err(|reason| {
            TareaError::invalid_input("query").with_reason(reason)
        })?;
        self.select(Some(status));
        Ok(())
    }

    /// The query to hand to the task service.
    pub fn emit(&self) -> Option<Status> {
        self.form
            .control("query")
            .and_then(|control| control.value().as_str())
            .and_then(|code| code.parse().ok())
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}
