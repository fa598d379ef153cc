//! Person editor dialog.

use serde_json::{json, Value};

use super::CloseOutcome;
use crate::{
    dialog::{self, DialogRef, OnClose},
    error::Result,
    models::Person,
    notify::MessageService,
    validation::{
        max_value, min_value, non_empty_array, required, show_errors, FormControl, FormGroup,
    },
};

/// Minimum age accepted for a person.
pub const MINIMUM_AGE: u32 = 18;

/// Form for creating or editing one person.
pub struct PersonEditor {
    form: FormGroup,
    dialog: DialogRef<Person>,
}

impl PersonEditor {
    pub const HEADER: &'static str = "Persona";

    /// Open the dialog, pre-filled from `person` when editing.
    pub fn open(person: Option<&Person>) -> Result<(Self, OnClose<Person>)> {
        let (dialog, on_close) = dialog::open(Self::HEADER);
        let mut editor = Self {
            form: Self::build_form(),
            dialog,
        };
        if let Some(person) = person {
            editor.form.reset(&serde_json::to_value(person)?);
        }
        Ok((editor, on_close))
    }

    fn build_form() -> FormGroup {
        FormGroup::new()
            .with(
                "fullName",
                FormControl::new(Value::Null).with_validator(required("nombre")),
            )
            .with(
                "age",
                FormControl::new(json!(0))
                    .with_validator(min_value(MINIMUM_AGE, "edad"))
                    .with_validator(max_value(u32::MAX, "edad")),
            )
            .with(
                "skills",
                FormControl::new(Value::Null).with_validator(non_empty_array("habilidades")),
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

    /// Set the full name as typed.
    pub fn set_full_name(&mut self, full_name: &str) {
        self.form.set_value("fullName", json!(full_name));
    }

    /// Set the age as typed; validation decides whether it is acceptable.
    pub fn set_age(&mut self, age: i64) {
        self.form.set_value("age", json!(age));
    }

    /// Replace the skills; blank entries are dropped.
    pub fn set_skills<S: AsRef<str>>(&mut self, skills: &[S]) {
        let skills: Vec<&str> = skills
            .iter()
            .map(|s| s.as_ref().trim())
            .filter(|s| !s.is_empty())
            .collect();
        self.form.set_value("skills", json!(skills));
    }

    /// Close the dialog.
    ///
    /// With `register`, an invalid form shows its errors and the dialog stays
    /// open; a valid form closes with the person. Without `register` the
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

        let person: Person = serde_json::from_value(self.form.value())?;
        self.dialog.close(Some(person));
        Ok(CloseOutcome::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;

    #[tokio::test]
    async fn test_valid_person_closes_with_result() {
        let (mut editor, on_close) = PersonEditor::open(None).unwrap();
        editor.set_full_name("Ana López");
        editor.set_age(30);
        editor.set_skills(&["rust", " ", "sql"]);

        let mut messages = MessageService::new();
        let outcome = editor.close(true, &mut messages).unwrap();

        assert_eq!(outcome, CloseOutcome::Closed);
        assert!(messages.is_empty());
        let person = on_close.result().await.expect("person submitted");
        assert_eq!(person.full_name, "Ana López");
        assert_eq!(person.age, 30);
        assert_eq!(person.skills, vec!["rust", "sql"]);
    }

    #[test]
    fn test_blank_form_shows_three_errors_and_stays_open() {
        let (mut editor, _on_close) = PersonEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        let outcome = editor.close(true, &mut messages).unwrap();

        assert_eq!(outcome, CloseOutcome::KeptOpen);
        assert!(editor.is_open());
        let details: Vec<String> = messages.drain().into_iter().map(|n| n.detail).collect();
        assert_eq!(
            details,
            vec![
                "El campo \"nombre\" es requerido",
                "El valor mínimo permitido del campo 'edad' es: 18",
                "El campo \"habilidades\" no puede estar vacío",
            ]
        );
    }

    #[test]
    fn test_underage_person_rejected() {
        let (mut editor, _on_close) = PersonEditor::open(None).unwrap();
        editor.set_full_name("Pepe");
        editor.set_age(17);
        editor.set_skills(&["dibujo"]);

        let mut messages = MessageService::new();
        assert_eq!(
            editor.close(true, &mut messages).unwrap(),
            CloseOutcome::KeptOpen
        );
        assert_eq!(messages.messages().len(), 1);
        assert_eq!(messages.messages()[0].severity, Severity::Warn);
    }

    #[test]
    fn test_age_beyond_range_is_a_form_error() {
        let (mut editor, _on_close) = PersonEditor::open(None).unwrap();
        editor.set_full_name("Matusalén");
        editor.set_age(5_000_000_000);
        editor.set_skills(&["paciencia"]);

        let mut messages = MessageService::new();
        let outcome = editor.close(true, &mut messages).unwrap();

        assert_eq!(outcome, CloseOutcome::KeptOpen);
        assert!(editor.is_open());
        assert_eq!(
            messages.messages()[0].detail,
            "El valor máximo permitido del campo 'edad' es: 4294967295"
        );
    }

    #[tokio::test]
    async fn test_cancel_closes_without_result() {
        let (mut editor, on_close) = PersonEditor::open(None).unwrap();
        let mut messages = MessageService::new();

        assert_eq!(
            editor.close(false, &mut messages).unwrap(),
            CloseOutcome::Closed
        );
        assert!(on_close.result().await.is_none());
    }

    #[test]
    fn test_open_prefilled() {
        let person = Person::new("Luis", 45, vec!["cocina".to_string()]);
        let (editor, _on_close) = PersonEditor::open(Some(&person)).unwrap();

        assert!(editor.form().is_valid());
        assert_eq!(editor.form().value()["fullName"], json!("Luis"));
    }
}
