//! Validation error payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Required,
    ArrayEmpty,
    MinLength,
    MaxLength,
    MinValue,
    MaxValue,
    NotObject,
    FieldsNotEqual,
}

impl ErrorKind {
    /// Key used for the error in serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::ArrayEmpty => "arrayEmpty",
            ErrorKind::MinLength => "minLength",
            ErrorKind::MaxLength => "maxLength",
            ErrorKind::MinValue => "minValue",
            ErrorKind::MaxValue => "maxValue",
            ErrorKind::NotObject => "notObject",
            ErrorKind::FieldsNotEqual => "fieldsNotEqual",
        }
    }
}

/// A broken rule with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    /// Create an error of `kind` with a user-facing message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Collected errors, possibly nested.
///
/// A control with a single broken rule contributes an [`ErrorNode::Error`];
/// a control with several, or a group with cross-field failures, contributes
/// an [`ErrorNode::List`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorNode {
    Error(ValidationError),
    List(Vec<ErrorNode>),
}

impl ErrorNode {
    /// Wrap a control's errors: one error stays a leaf, more become a list.
    pub fn from_errors(mut errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            ErrorNode::Error(errors.remove(0))
        } else {
            ErrorNode::List(errors.into_iter().map(ErrorNode::Error).collect())
        }
    }

    /// Depth-first flattening of this node into its leaf errors.
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a ValidationError>) {
        match self {
            ErrorNode::Error(error) => out.push(error),
            ErrorNode::List(nodes) => {
                for node in nodes {
                    node.flatten_into(out);
                }
            }
        }
    }
}

impl From<ValidationError> for ErrorNode {
    fn from(error: ValidationError) -> Self {
        ErrorNode::Error(error)
    }
}
