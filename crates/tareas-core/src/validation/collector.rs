//! Error collection over a whole form tree and its presentation as toasts.

use log::debug;

use super::{
    error::ErrorNode,
    form::{FormGroup, FormNode},
};
use crate::notify::{MessageService, Notification};

/// Summary used for form-error toasts when the caller gives none.
pub const DEFAULT_ERROR_TITLE: &str = "No se pudo enviar el formulario";

/// Walk `node` depth-first and collect the errors of every invalid control.
///
/// Group children are visited in declaration order and array children by
/// index. Every visited control is re-validated and marked dirty and touched,
/// so error styling shows even on fields the user never edited. A group's own
/// cross-field errors follow its children as a nested list.
///
/// Returns `None` when the whole tree is valid.
pub fn collect_errors(node: &mut FormNode) -> Option<Vec<ErrorNode>> {
    let mut errors = Vec::new();
    collect_into(node, &mut errors);
    non_empty(errors)
}

/// [`collect_errors`] for a form whose root is a group.
pub fn collect_group_errors(group: &mut FormGroup) -> Option<Vec<ErrorNode>> {
    let mut errors = Vec::new();
    collect_group(group, &mut errors);
    non_empty(errors)
}

fn non_empty(errors: Vec<ErrorNode>) -> Option<Vec<ErrorNode>> {
    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

fn collect_group(group: &mut FormGroup, errors: &mut Vec<ErrorNode>) {
    for child in group.controls_mut() {
        collect_into(child, errors);
    }
    group.update_validity();
    if !group.errors().is_empty() {
        errors.push(ErrorNode::List(
            group.errors().iter().cloned().map(ErrorNode::Error).collect(),
        ));
    }
}

fn collect_into(node: &mut FormNode, errors: &mut Vec<ErrorNode>) {
    match node {
        FormNode::Group(group) => collect_group(group, errors),
        FormNode::Array(array) => {
            for child in array.iter_mut() {
                collect_into(child, errors);
            }
        }
        FormNode::Control(control) => {
            control.update_value_and_validity();
            control.mark_as_dirty();
            control.mark_as_touched();
            if !control.is_valid() {
                errors.push(ErrorNode::from_errors(control.errors().to_vec()));
            }
        }
    }
}

/// Emit one warn notification per leaf error, flattening nested lists in
/// order. Returns how many notifications were emitted.
pub fn present_errors(errors: &[ErrorNode], title: &str, messages: &mut MessageService) -> usize {
    let mut count = 0;
    for node in errors {
        match node {
            ErrorNode::List(nested) => count += present_errors(nested, title, messages),
            ErrorNode::Error(error) => {
                messages.add(Notification::warn(title, error.message.as_str()));
                count += 1;
            }
        }
    }
    count
}

/// Collect the errors of `form` and show them under `title`.
pub fn show_errors_titled(form: &mut FormGroup, title: &str, messages: &mut MessageService) -> usize {
    present_collected(collect_group_errors(form), title, messages)
}

/// Collect the errors of any form subtree and show them under `title`.
pub fn show_node_errors(node: &mut FormNode, title: &str, messages: &mut MessageService) -> usize {
    present_collected(collect_errors(node), title, messages)
}

fn present_collected(
    errors: Option<Vec<ErrorNode>>,
    title: &str,
    messages: &mut MessageService,
) -> usize {
    let Some(errors) = errors else {
        return 0;
    };
    let count = present_errors(&errors, title, messages);
    debug!("form rejected with {count} error(s)");
    count
}

/// [`show_errors_titled`] with [`DEFAULT_ERROR_TITLE`].
pub fn show_errors(form: &mut FormGroup, messages: &mut MessageService) -> usize {
    show_errors_titled(form, DEFAULT_ERROR_TITLE, messages)
}
