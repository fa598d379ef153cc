//! Collection wrapper for displaying task lists.

use std::{fmt, ops::Index};

use crate::models::Task;

/// Newtype wrapper for displaying a list of tasks.
///
/// ```rust
/// use jiff::civil::date;
/// use tareas_core::{display::Tasks, models::Task};
///
/// let tasks = Tasks(vec![Task::new("Informe", date(2026, 11, 1))]);
/// assert!(tasks.to_string().contains("Informe"));
/// assert_eq!(Tasks(vec![]).to_string(), "No hay tareas.\n");
/// ```
pub struct Tasks(pub Vec<Task>);

impl Tasks {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of tasks in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the tasks.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.0.iter()
    }
}

impl Index<usize> for Tasks {
    type Output = Task;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Tasks {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No hay tareas.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}
