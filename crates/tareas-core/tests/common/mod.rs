use jiff::civil::date;
use tareas_core::{Person, Task, TaskService};

/// Person with one skill, old enough for the person editor.
pub fn person(name: &str) -> Person {
    Person::new(name, 30, vec!["organización".to_string()])
}

/// Service holding `names.len()` pending tasks with ids 1..=n.
pub fn seeded_service(names: &[&str]) -> TaskService {
    let service = TaskService::default();
    for name in names {
        service.create(Task::new(*name, date(2026, 11, 15)).with_people(vec![person("Ana")]));
    }
    service
}
