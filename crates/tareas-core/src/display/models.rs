//! Display implementations for the domain models.

use std::fmt;

use crate::models::{Person, Status, Task};

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} años)", self.full_name, self.age)?;
        if !self.skills.is_empty() {
            write!(f, ": {}", self.skills.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", self.id, self.name, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- Fecha límite: {}", self.due_date)?;

        if self.people.is_empty() {
            writeln!(f, "- Sin personas asignadas")?;
        } else {
            writeln!(f, "- Personas:")?;
            for person in &self.people {
                writeln!(f, "  - {person}")?;
            }
        }
        writeln!(f)
    }
}
