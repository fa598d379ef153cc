//! Form tree: groups, arrays and leaf controls.
//!
//! Values are JSON values so that a whole form converts into a model with
//! `serde_json::from_value` once it is valid.

use serde_json::{Map, Value};

use super::{
    error::ValidationError,
    validators::{GroupValidator, Validator},
};

/// Any node of a form tree.
pub enum FormNode {
    Group(FormGroup),
    Array(FormArray),
    Control(FormControl),
}

impl FormNode {
    /// Current value of the subtree.
    pub fn value(&self) -> Value {
        match self {
            FormNode::Group(group) => group.value(),
            FormNode::Array(array) => array.value(),
            FormNode::Control(control) => control.value().clone(),
        }
    }

    /// Whether this node and every descendant pass their validators.
    pub fn is_valid(&self) -> bool {
        match self {
            FormNode::Group(group) => group.is_valid(),
            FormNode::Array(array) => array.is_valid(),
            FormNode::Control(control) => control.is_valid(),
        }
    }

    /// Reset the subtree to `value`, clearing dirty/touched flags.
    pub fn reset(&mut self, value: &Value) {
        match self {
            FormNode::Group(group) => group.reset(value),
            FormNode::Array(array) => array.reset(value),
            FormNode::Control(control) => control.reset(value.clone()),
        }
    }

    /// Borrow the node as a leaf control.
    pub fn as_control(&self) -> Option<&FormControl> {
        match self {
            FormNode::Control(control) => Some(control),
            _ => None,
        }
    }

    /// Mutably borrow the node as a leaf control.
    pub fn as_control_mut(&mut self) -> Option<&mut FormControl> {
        match self {
            FormNode::Control(control) => Some(control),
            _ => None,
        }
    }
}

impl From<FormControl> for FormNode {
    fn from(control: FormControl) -> Self {
        FormNode::Control(control)
    }
}

impl From<FormGroup> for FormNode {
    fn from(group: FormGroup) -> Self {
        FormNode::Group(group)
    }
}

impl From<FormArray> for FormNode {
    fn from(array: FormArray) -> Self {
        FormNode::Array(array)
    }
}

/// Leaf control holding one value.
pub struct FormControl {
    value: Value,
    validators: Vec<Validator>,
    errors: Vec<ValidationError>,
    dirty: bool,
    touched: bool,
}

impl FormControl {
    /// A control with an initial value and no validators.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            validators: Vec::new(),
            errors: Vec::new(),
            dirty: false,
            touched: false,
        }
    }

    /// Add a validator and re-evaluate the control.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self.update_value_and_validity();
        self
    }

    /// Current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Set the value as user input would: re-validates and marks dirty.
    pub fn set_value(&mut self, value: Value) {
        self.value = value;
        self.dirty = true;
        self.update_value_and_validity();
    }

    /// Set the value without touching the interaction flags.
    pub fn reset(&mut self, value: Value) {
        self.value = value;
        self.dirty = false;
        self.touched = false;
        self.update_value_and_validity();
    }

    /// Re-run every validator against the current value.
    pub fn update_value_and_validity(&mut self) {
        self.errors = self
            .validators
            .iter()
            .filter_map(|validator| validator(&self.value))
            .collect();
    }

    /// Errors from the last validation run.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether the last validation run found no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Flag the control as changed by the user.
    pub fn mark_as_dirty(&mut self) {
        self.dirty = true;
    }

    /// Flag the control as visited by the user.
    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    /// Whether the value was changed since the last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the control was visited since the last reset.
    pub fn is_touched(&self) -> bool {
        self.touched
    }
}

/// Named children kept in declaration order, plus group-level rules.
#[derive(Default)]
pub struct FormGroup {
    controls: Vec<(String, FormNode)>,
    validators: Vec<GroupValidator>,
    errors: Vec<ValidationError>,
}

impl FormGroup {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named child. A child with the same key is replaced in place.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<FormNode>) -> Self {
        let key = key.into();
        let node = node.into();
        match self.controls.iter().position(|(k, _)| *k == key) {
            Some(index) => self.controls[index].1 = node,
            None => self.controls.push((key, node)),
        }
        self.update_validity();
        self
    }

    /// Add a cross-field rule and re-evaluate the group.
    pub fn with_validator(mut self, validator: GroupValidator) -> Self {
        self.validators.push(validator);
        self.update_validity();
        self
    }

    /// Child node by key.
    pub fn get(&self, key: &str) -> Option<&FormNode> {
        self.controls
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Mutable child node by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut FormNode> {
        self.controls
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Child by key, when it is a leaf control.
    pub fn control(&self, key: &str) -> Option<&FormControl> {
        self.get(key).and_then(FormNode::as_control)
    }

    /// Mutable child by key, when it is a leaf control.
    pub fn control_mut(&mut self, key: &str) -> Option<&mut FormControl> {
        self.get_mut(key).and_then(FormNode::as_control_mut)
    }

    /// Children in declaration order.
    pub fn controls(&self) -> impl Iterator<Item = (&str, &FormNode)> {
        self.controls.iter().map(|(k, node)| (k.as_str(), node))
    }

    /// Mutable children in declaration order.
    pub(crate) fn controls_mut(&mut self) -> impl Iterator<Item = &mut FormNode> {
        self.controls.iter_mut().map(|(_, node)| node)
    }

    /// Set a child control's value and re-evaluate the group rules.
    ///
    /// Returns `false` when `key` is not a control of this group.
    pub fn set_value(&mut self, key: &str, value: Value) -> bool {
        let Some(control) = self.control_mut(key) else {
            return false;
        };
        control.set_value(value);
        self.update_validity();
        true
    }

    /// Object value with one entry per child.
    pub fn value(&self) -> Value {
        let map: Map<String, Value> = self
            .controls
            .iter()
            .map(|(key, node)| (key.clone(), node.value()))
            .collect();
        Value::Object(map)
    }

    /// Reset every child from the matching entry of `value`; children with no
    /// entry are reset to null.
    pub fn reset(&mut self, value: &Value) {
        for (key, node) in &mut self.controls {
            node.reset(value.get(key.as_str()).unwrap_or(&Value::Null));
        }
        self.update_validity();
    }

    /// Re-run the group-level rules.
    pub fn update_validity(&mut self) {
        let validators = std::mem::take(&mut self.validators);
        let errors: Vec<ValidationError> = validators
            .iter()
            .filter_map(|validator| validator(self))
            .collect();
        self.validators = validators;
        self.errors = errors;
    }

    /// Errors of the group-level rules only.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether the group rules and every child pass.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.controls.iter().all(|(_, node)| node.is_valid())
    }
}

/// Ordered, index-addressed children.
#[derive(Default)]
pub struct FormArray {
    controls: Vec<FormNode>,
}

impl FormArray {
    /// An array holding `controls` in order.
    pub fn new(controls: Vec<FormNode>) -> Self {
        Self { controls }
    }

    /// Append a child.
    pub fn push(&mut self, node: impl Into<FormNode>) {
        self.controls.push(node.into());
    }

    /// Remove the child at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<FormNode> {
        (index < self.controls.len()).then(|| self.controls.remove(index))
    }

    /// Child at `index`.
    pub fn get(&self, index: usize) -> Option<&FormNode> {
        self.controls.get(index)
    }

    /// Mutable child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FormNode> {
        self.controls.get_mut(index)
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the array has no children.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Children in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, FormNode> {
        self.controls.iter()
    }

    /// Mutable children in index order.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, FormNode> {
        self.controls.iter_mut()
    }

    /// Array value with one element per child.
    pub fn value(&self) -> Value {
        Value::Array(self.controls.iter().map(FormNode::value).collect())
    }

    /// Reset each child from the element at the same index (null past the end).
    pub fn reset(&mut self, value: &Value) {
        for (index, node) in self.controls.iter_mut().enumerate() {
            node.reset(value.get(index).unwrap_or(&Value::Null));
        }
    }

    /// Whether every child passes.
    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(FormNode::is_valid)
    }
}
