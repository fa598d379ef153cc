//! Task editor dialog.

use jiff::civil::Date;
use log::debug;
use serde_json::{json, Value};

use super::{person_editor::PersonEditor, CloseOutcome};
use crate::{
    dialog::{self, DialogRef, OnClose},
    error::Result,
    models::{Person, Task, TaskDraft},
    notify::{MessageService, Notification},
    validation::{non_empty_array, required, show_errors, FormControl, FormGroup},
};

pub const DUPLICATE_PERSON_SUMMARY: &str = "Nombre duplicado";
pub const DUPLICATE_PERSON_DETAIL: &str = "Ya existe una persona con el mismo nombre";

/// Form for creating a task or editing an existing one.
pub struct TaskEditor {
    form: FormGroup,
    dialog: DialogRef<TaskDraft>,
}

impl TaskEditor {
    pub const HEADER: &'static str = "Tarea";

    /// Open the dialog, pre-filled from `task` when editing.
    pub fn open(task: Option<&Task>) -> Result<(Self, OnClose<TaskDraft>)> {
        let (dialog, on_close) = dialog::open(Self::HEADER);
        let mut editor = Self {
            form: Self::build_form(),
            dialog,
        };
        if let Some(task) = task {
            editor.form.reset(&serde_json::to_value(task)?);
        }
        Ok((editor, on_close))
    }

    fn build_form() -> FormGroup {
        FormGroup::new()
            .with("id", FormControl::new(Value::Null))
            .with(
                "name",
                FormControl::new(Value::Null).with_validator(required("nombre")),
            )
            .with(
                "dueDate",
                FormControl::new(Value::Null).with_validator(required("fecha límite")),
            )
            .with(
                "people",
                FormControl::new(Value::Null).with_validator(non_empty_array("personas")),
            )
    }

    /// The underlying form.
    pub fn form(&self) -> &FormGroup {
        &self.form
    }

    /// Whether the dialog is still open.
    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Set the task name as typed.
    pub fn set_name(&mut self, name: &str) {
        self.form.set_value("name", json!(name));
    }

    /// Set the due date as picked.
    pub fn set_due_date(&mut self, due_date: Date) {
        self.form.set_value("dueDate", json!(due_date.to_string()));
    }

    /// People currently in the form.
    pub fn people(&self) -> Vec<Person> {
        self.form
            .control("people")
            .and_then(|control| serde_json::from_value(control.value().clone()).ok())
            .unwrap_or_default()
    }

    fn set_people(&mut self, people: &[Person]) -> Result<()> {
        self.form.set_value("people", serde_json::to_value(people)?);
        Ok(())
    }

    /// Whether a person with exactly this full name is already in the form.
    pub fn has_person(&self, full_name: &str) -> bool {
        self.people().iter().any(|p| p.full_name == full_name)
    }

    /// Open the person dialog on top of this one.
    pub fn open_person_dialog(&self) -> Result<(PersonEditor, OnClose<Person>)> {
        PersonEditor::open(None)
    }

    /// Add `person` unless one with the same full name is already present, in
    /// which case a duplicate warning is shown. Returns whether it was added.
    pub fn add_person(&mut self, person: Person, messages: &mut MessageService) -> Result<bool> {
        if self.has_person(&person.full_name) {
            debug!("rejecting duplicate person {}", person.full_name);
            messages.add(Notification::warn(
                DUPLICATE_PERSON_SUMMARY,
                DUPLICATE_PERSON_DETAIL,
            ));
            return Ok(false);
        }

        let mut people = self.people();
        people.push(person);
        self.set_people(&people)?;
        Ok(true)
    }

    /// Handle the person dialog's result; a dialog closed without a person
    /// changes nothing.
    pub async fn on_person_dialog_closed(
        &mut self,
        on_close: OnClose<Person>,
        messages: &mut MessageService,
    ) -> Result<bool> {
        match on_close.result().await {
            Some(person) => self.add_person(person, messages),
            None => Ok(false),
        }
    }

    /// Remove the person at `index`, returning it when the index exists.
    pub fn remove_person(&mut self, index: usize) -> Result<Option<Person>> {
        let mut people = self.people();
        if index >= people.len() {
            return Ok(None);
        }
        let removed = people.remove(index);
        self.set_people(&people)?;
        Ok(Some(removed))
    }

    /// Close the dialog.
    ///
    /// With `register`, an invalid form shows its errors and the dialog stays
    /// open; a valid form closes with the draft. Without `register` the
    /// dialog closes with no result.
    pub fn close(&mut self, register: bool, messages: &mut MessageService) -> Result<CloseOutcome> {
        if !register {
            self.dialog.close(None);
            return Ok(CloseOutcome::Closed);
        }
        if !self.form.is_valid() {
            show_errors(&mut self.form, messages);
            return Ok(CloseOutcome::KeptOpen);
        }

        let draft: TaskDraft = serde_json::from_value(self.form.value())?;
        self.dialog.close(Some(draft));
        Ok(CloseOutcome::Closed)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn ana() -> Person {
        Person::new("Ana", 30, vec!["rust".to_string()])
    }

    #[test]
    fn test_duplicate_person_rejected_with_warning() {
        let (mut editor, _on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        assert!(editor.add_person(ana(), &mut messages).unwrap());
        assert!(!editor.add_person(ana(), &mut messages).unwrap());

        assert_eq!(editor.people().len(), 1);
        let toasts = messages.drain();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].summary, DUPLICATE_PERSON_SUMMARY);
        assert_eq!(toasts[0].detail, DUPLICATE_PERSON_DETAIL);
    }

    #[test]
    fn test_names_differing_in_case_are_distinct() {
        let (mut editor, _on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        editor.add_person(ana(), &mut messages).unwrap();
        let added = editor
            .add_person(Person::new("ANA", 22, vec!["sql".to_string()]), &mut messages)
            .unwrap();

        assert!(added);
        assert_eq!(editor.people().len(), 2);
    }

    #[test]
    fn test_remove_person() {
        let (mut editor, _on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();
        editor.add_person(ana(), &mut messages).unwrap();

        assert!(editor.remove_person(3).unwrap().is_none());
        assert_eq!(editor.remove_person(0).unwrap().map(|p| p.full_name), Some("Ana".to_string()));
        assert!(editor.people().is_empty());
    }

    #[test]
    fn test_empty_form_reports_in_declaration_order() {
        let (mut editor, _on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        let outcome = editor.close(true, &mut messages).unwrap();

        assert_eq!(outcome, CloseOutcome::KeptOpen);
        let details: Vec<String> = messages.drain().into_iter().map(|n| n.detail).collect();
        assert_eq!(
            details,
            vec![
                "El campo \"nombre\" es requerido",
                "El campo \"fecha límite\" es requerido",
                "El campo \"personas\" no puede estar vacío",
            ]
        );
    }

    #[tokio::test]
    async fn test_valid_form_closes_with_draft() {
        let (mut editor, on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();
        editor.set_name("Informe trimestral");
        editor.set_due_date(date(2026, 12, 31));
        editor.add_person(ana(), &mut messages).unwrap();

        assert_eq!(
            editor.close(true, &mut messages).unwrap(),
            CloseOutcome::Closed
        );

        let draft = on_close.result().await.expect("draft submitted");
        assert_eq!(draft.id, None);
        assert_eq!(draft.name, "Informe trimestral");
        assert_eq!(draft.due_date, date(2026, 12, 31));
        assert_eq!(draft.people, vec![ana()]);
    }

    #[tokio::test]
    async fn test_edit_prefills_and_keeps_id() {
        let mut task = Task::new("Original", date(2026, 1, 10)).with_people(vec![ana()]);
        task.id = 4;

        let (mut editor, on_close) = TaskEditor::open(Some(&task)).unwrap();
        assert!(editor.form().is_valid());
        editor.set_name("Editada");

        let mut messages = MessageService::new();
        editor.close(true, &mut messages).unwrap();

        let draft = on_close.result().await.unwrap();
        assert_eq!(draft.id, Some(4));
        assert_eq!(draft.name, "Editada");
    }

    #[tokio::test]
    async fn test_person_dialog_round_trip() {
        let (mut editor, _on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        let (mut person_editor, person_closed) = editor.open_person_dialog().unwrap();
        person_editor.set_full_name("Marta");
        person_editor.set_age(52);
        person_editor.set_skills(&["gestión"]);
        person_editor.close(true, &mut messages).unwrap();

        let added = editor
            .on_person_dialog_closed(person_closed, &mut messages)
            .await
            .unwrap();
        assert!(added);
        assert!(editor.has_person("Marta"));
    }

    #[tokio::test]
    async fn test_cancelled_person_dialog_changes_nothing() {
        let (mut editor, _on_close) = TaskEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        let (mut person_editor, person_closed) = editor.open_person_dialog().unwrap();
        person_editor.close(false, &mut messages).unwrap();

        let added = editor
            .on_person_dialog_closed(person_closed, &mut messages)
            .await
            .unwrap();
        assert!(!added);
        assert!(editor.people().is_empty());
    }
}
