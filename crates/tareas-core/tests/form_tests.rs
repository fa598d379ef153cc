use serde_json::{json, Value};
use tareas_core::{
    notify::{MessageService, Severity},
    validation::{
        collect_group_errors, min_value, required, show_errors, ErrorNode, FormArray,
        FormControl, FormGroup,
    },
};

fn nested_form() -> FormGroup {
    let member = |name: Value, age: Value| {
        FormGroup::new()
            .with("name", FormControl::new(name).with_validator(required("nombre")))
            .with("age", FormControl::new(age).with_validator(min_value(18, "edad")))
    };

    FormGroup::new()
        .with(
            "title",
            FormControl::new(json!("")).with_validator(required("título")),
        )
        .with(
            "members",
            FormArray::new(vec![
                member(json!("Ana"), json!(30)).into(),
                member(json!("Luis"), json!(12)).into(),
            ]),
        )
}

#[test]
fn test_nested_form_collects_two_errors_depth_first() {
    let mut form = nested_form();

    let errors = collect_group_errors(&mut form).expect("form is invalid");
    let flat: Vec<String> = errors
        .iter()
        .flat_map(ErrorNode::flatten)
        .map(|e| e.message.clone())
        .collect();

    assert_eq!(
        flat,
        vec![
            "El campo \"título\" es requerido",
            "El valor mínimo permitido del campo 'edad' es: 18",
        ]
    );
}

#[test]
fn test_nested_form_shows_two_warnings() {
    let mut form = nested_form();
    let mut messages = MessageService::new();

    assert_eq!(show_errors(&mut form, &mut messages), 2);

    let toasts = messages.drain();
    assert_eq!(toasts.len(), 2);
    assert!(toasts.iter().all(|n| n.severity == Severity::Warn));
    assert!(toasts
        .iter()
        .all(|n| n.summary == "No se pudo enviar el formulario"));
}

#[test]
fn test_valid_form_collects_nothing() {
    let mut form = nested_form();
    form.set_value("title", json!("Equipo"));
    if let Some(array) = form.get_mut("members") {
        array.reset(&json!([
            { "name": "Ana", "age": 30 },
            { "name": "Luis", "age": 19 }
        ]));
    }

    assert!(collect_group_errors(&mut form).is_none());
    assert!(form.is_valid());
}
