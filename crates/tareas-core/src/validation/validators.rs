//! Validator factories.
//!
//! Each factory takes the field label used in messages (plus a threshold
//! where relevant) and returns a boxed closure over a control's current value.

use serde_json::Value;

use super::{
    error::{ErrorKind, ValidationError},
    form::FormGroup,
};

/// Validator of a single control value.
pub type Validator = Box<dyn Fn(&Value) -> Option<ValidationError>>;

/// Validator of a whole group, for rules spanning several controls.
///
/// Group validators get mutable access so they can flag the controls involved.
pub type GroupValidator = Box<dyn Fn(&mut FormGroup) -> Option<ValidationError>>;

/// Invalid on null or on a blank string.
pub fn required(label: &str) -> Validator {
    let message = format!("El campo \"{}\" es requerido", label.to_lowercase());
    Box::new(move |value| {
        let missing = match value {
            Value::Null => true,
            Value::String(text) => text.trim().is_empty(),
            _ => false,
        };
        missing.then(|| ValidationError::new(ErrorKind::Required, message.as_str()))
    })
}

/// Invalid unless the value is an array with at least one element.
pub fn non_empty_array(label: &str) -> Validator {
    let message = format!("El campo \"{}\" no puede estar vacío", label.to_lowercase());
    Box::new(move |value| {
        let empty = value.as_array().map_or(true, Vec::is_empty);
        empty.then(|| ValidationError::new(ErrorKind::ArrayEmpty, message.as_str()))
    })
}

/// Length of a string (in chars) or array; `None` for anything else.
fn length(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Invalid when a string or array is shorter than `min`.
pub fn min_length(min: usize, label: &str) -> Validator {
    let message = format!("El número de carácteres de '{label}' debe ser mayor a {min}");
    Box::new(move |value| {
        length(value)
            .filter(|len| *len < min)
            .map(|_| ValidationError::new(ErrorKind::MinLength, message.as_str()))
    })
}

/// Invalid when a string or array is longer than `max`.
pub fn max_length(max: usize, label: &str) -> Validator {
    let message = format!("El número de carácteres de '{label}' debe ser menor a {max}");
    Box::new(move |value| {
        length(value)
            .filter(|len| *len > max)
            .map(|_| ValidationError::new(ErrorKind::MaxLength, message.as_str()))
    })
}

/// Invalid when a number is below `min`. Non-numeric values pass.
pub fn min_value(min: impl Into<f64>, label: &str) -> Validator {
    let min = min.into();
    let message = format!("El valor mínimo permitido del campo '{label}' es: {min}");
    Box::new(move |value| {
        value
            .as_f64()
            .filter(|number| *number < min)
            .map(|_| ValidationError::new(ErrorKind::MinValue, message.as_str()))
    })
}

/// Invalid when a number is above `max`. Non-numeric values pass.
pub fn max_value(max: impl Into<f64>, label: &str) -> Validator {
    let max = max.into();
    let message = format!("El valor máximo permitido del campo '{label}' es: {max}");
    Box::new(move |value| {
        value
            .as_f64()
            .filter(|number| *number > max)
            .map(|_| ValidationError::new(ErrorKind::MaxValue, message.as_str()))
    })
}

/// Invalid when a value is present but is not an object, e.g. a selection
/// field holding raw text instead of the selected record.
pub fn is_object(label: &str) -> Validator {
    let message = format!("El campo '{label}' no ha sido seleccionado");
    Box::new(move |value| {
        (!value.is_null() && !value.is_object())
            .then(|| ValidationError::new(ErrorKind::NotObject, message.as_str()))
    })
}

/// Group rule: the two named controls must hold equal values.
///
/// Each field is `(control key, label used in the message)`. On mismatch the
/// second control is marked dirty so its error styling shows.
pub fn fields_equal(first: (&str, &str), second: (&str, &str)) -> GroupValidator {
    let (first_key, first_label) = (first.0.to_string(), first.1.to_string());
    let second_key = second.0.to_string();
    let message = format!(
        "El campo '{}' no es igual al campo '{first_label}'",
        second.1
    );
    Box::new(move |group| {
        let first_value = group.get(&first_key).map(|node| node.value());
        let second_value = group.get(&second_key).map(|node| node.value());
        if first_value == second_value {
            return None;
        }
        if let Some(control) = group.control_mut(&second_key) {
            control.mark_as_dirty();
        }
        Some(ValidationError::new(ErrorKind::FieldsNotEqual, message.as_str()))
    })
}
