use std::fmt;

use serde_json::Value;

/// Which rule a field broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required field is absent (or `null`).
    MissingRequired,
    /// An empty string or array where emptiness is not allowed.
    EmptyValue,
    /// The JSON type is wrong, e.g. a string where a boolean belongs.
    TypeMismatch { expected: &'static str },
    /// Well-typed but malformed: URI syntax, extension, date, alphanumeric, cost grammar.
    FormatViolation { expected: &'static str },
    /// Well-formed but outside the field's token table.
    DomainViolation,
    /// The same token appears twice in an array that allows it once.
    UniquenessViolation,
    /// A container of the wrong shape or size.
    StructuralViolation { expected: &'static str },
}

/// The first rule a record broke.
///
/// `path` lists the containing fields from the outermost record down to the
/// one holding `field`, e.g. `["card_faces[1]"]` for a face's `name`. The
/// human-readable message is only assembled by [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    path: Vec<String>,
    field: String,
    kind: ViolationKind,
    value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: Vec::new(),
            field: field.into(),
            kind,
            value: None,
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, ViolationKind::MissingRequired)
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, ViolationKind::EmptyValue).with_value(&Value::String(String::new()))
    }

    /// Attach the offending value for the rendered message.
    pub fn with_value(mut self, value: &Value) -> Self {
        self.value = Some(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        });
        self
    }

    /// Prefix the path with the field that contains this error.
    pub fn in_context(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> &ViolationKind {
        &self.kind
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Dotted location of the offending leaf, e.g. `card_faces[1].name`.
    pub fn location(&self) -> String {
        let mut parts = self.path.clone();
        parts.push(self.field.clone());
        parts.join(".")
    }

    /// The rule text without path or value, e.g. `set_code must be alphanumeric`.
    pub fn description(&self) -> String {
        let field = &self.field;
        match &self.kind {
            ViolationKind::MissingRequired => format!("{field} is required"),
            ViolationKind::EmptyValue => format!("{field} must not be empty"),
            ViolationKind::TypeMismatch { expected }
            | ViolationKind::FormatViolation { expected }
            | ViolationKind::StructuralViolation { expected } => {
                format!("{field} must be {expected}")
            }
            ViolationKind::DomainViolation => format!("{field} is not a recognized value"),
            ViolationKind::UniquenessViolation => {
                format!("{field} must not contain the same value twice")
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "{} ", self.path.join(" > "))?;
        }
        write!(f, "{} invalid: {}.", self.field, self.description())?;
        if let Some(value) = &self.value {
            write!(f, " *** {} = {}", self.field, value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
