//! Tests for collecting and presenting errors over nested forms.

use serde_json::{json, Value};

use super::*;
use crate::notify::{MessageService, Severity};

/// Task-shaped form: a required name and an array of person groups.
fn nested_form(people: Vec<(Value, Value)>) -> FormGroup {
    let mut array = FormArray::default();
    for (name, age) in people {
        array.push(
            FormGroup::new()
                .with(
                    "fullName",
                    FormControl::new(name).with_validator(required("nombre")),
                )
                .with(
                    "age",
                    FormControl::new(age).with_validator(min_value(18, "edad")),
                ),
        );
    }

    FormGroup::new()
        .with(
            "name",
            FormControl::new(Value::Null).with_validator(required("nombre")),
        )
        .with("people", array)
}

#[test]
fn test_valid_form_collects_nothing() {
    let mut form = nested_form(vec![(json!("Ana"), json!(30))]);
    form.set_value("name", json!("Informe"));

    assert!(collect_group_errors(&mut form).is_none());

    let mut messages = MessageService::new();
    assert_eq!(show_errors(&mut form, &mut messages), 0);
    assert!(messages.is_empty());
}

#[test]
fn test_top_level_and_nested_errors_in_depth_first_order() {
    let mut form = nested_form(vec![
        (json!("Ana"), json!(30)),
        (json!("Luis"), json!(16)),
    ]);

    let errors = collect_group_errors(&mut form).expect("form is invalid");
    assert_eq!(errors.len(), 2);

    let mut messages = MessageService::new();
    let shown = present_errors(&errors, DEFAULT_ERROR_TITLE, &mut messages);
    assert_eq!(shown, 2);

    let toasts = messages.drain();
    assert_eq!(toasts.len(), 2);
    assert_eq!(toasts[0].detail, "El campo \"nombre\" es requerido");
    assert_eq!(
        toasts[1].detail,
        "El valor mínimo permitido del campo 'edad' es: 18"
    );
    assert!(toasts.iter().all(|t| t.severity == Severity::Warn));
    assert!(toasts.iter().all(|t| t.summary == DEFAULT_ERROR_TITLE));
}

#[test]
fn test_collection_marks_every_visited_control() {
    let mut form = nested_form(vec![(json!("Ana"), json!(30))]);

    collect_group_errors(&mut form);

    let name = form.control("name").unwrap();
    assert!(name.is_dirty() && name.is_touched());

    let Some(FormNode::Array(people)) = form.get("people") else {
        panic!("people should be an array");
    };
    let Some(FormNode::Group(person)) = people.get(0) else {
        panic!("person should be a group");
    };
    assert!(person.control("fullName").unwrap().is_touched());
    assert!(person.control("age").unwrap().is_dirty());
}

#[test]
fn test_control_with_several_errors_contributes_a_list() {
    let mut form = FormGroup::new().with(
        "code",
        FormControl::new(json!("a"))
            .with_validator(min_length(3, "código"))
            .with_validator(is_object("código")),
    );

    let errors = collect_group_errors(&mut form).unwrap();
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ErrorNode::List(items) if items.len() == 2));

    let mut messages = MessageService::new();
    assert_eq!(present_errors(&errors, "Código", &mut messages), 2);
    assert_eq!(messages.messages()[0].summary, "Código");
}

#[test]
fn test_group_rule_errors_follow_children() {
    let mut form = FormGroup::new()
        .with(
            "password",
            FormControl::new(Value::Null).with_validator(required("contraseña")),
        )
        .with("confirm", FormControl::new(json!("x")))
        .with_validator(fields_equal(
            ("password", "contraseña"),
            ("confirm", "confirmación"),
        ));

    let mut messages = MessageService::new();
    let shown = show_errors_titled(&mut form, "Registro", &mut messages);

    assert_eq!(shown, 2);
    let details: Vec<&str> = messages
        .messages()
        .iter()
        .map(|t| t.detail.as_str())
        .collect();
    assert_eq!(
        details,
        vec![
            "El campo \"contraseña\" es requerido",
            "El campo 'confirmación' no es igual al campo 'contraseña'",
        ]
    );
}

#[test]
fn test_collect_errors_on_bare_array() {
    let mut node = FormNode::Array(FormArray::new(vec![
        FormControl::new(json!("")).with_validator(required("a")).into(),
        FormControl::new(json!("ok")).with_validator(required("b")).into(),
        FormControl::new(Value::Null).with_validator(required("c")).into(),
    ]));

    let errors = collect_errors(&mut node).unwrap();
    let mut messages = MessageService::new();
    assert_eq!(show_node_errors(&mut node, "Lista", &mut messages), 2);
    assert_eq!(messages.messages()[1].to_string(), "[warn] Lista: El campo \"c\" es requerido");

    let details: Vec<String> = errors
        .iter()
        .flat_map(ErrorNode::flatten)
        .map(|e| e.message.clone())
        .collect();

    assert_eq!(
        details,
        vec![
            "El campo \"a\" es requerido".to_string(),
            "El campo \"c\" es requerido".to_string(),
        ]
    );
}
