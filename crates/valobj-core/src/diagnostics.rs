//! Generation-time diagnostics.
//!
//! Every well-formedness violation becomes one [`Diagnostic`] with a stable
//! code, an interpolated message and the location of the offending
//! declaration or member. All diagnostics are errors: any of them blocks
//! emission for its declaration.

use crate::declaration::SourceLocation;
use serde::{Deserialize, Serialize};

/// Kind of well-formedness violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Declared in the global namespace
    MissingNamespace,
    /// Wrapped datatype missing or unresolvable
    UnresolvableDatatype,
    /// `Parsable` requested for a `string` datatype
    StringNotParsable,
    /// Multi-value field has a `set`/`init` accessor
    FieldNotReadOnly,
    /// Multi-value field returns by reference
    FieldReturnsByRef,
    /// Multi-value object without any field
    NoFields,
    /// Two multi-value fields map to the same parameter name
    FieldNameCollision,
}

impl DiagnosticKind {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingNamespace => "VO001",
            DiagnosticKind::UnresolvableDatatype => "VO002",
            DiagnosticKind::StringNotParsable => "VO003",
            DiagnosticKind::FieldNotReadOnly => "VO004",
            DiagnosticKind::FieldReturnsByRef => "VO005",
            DiagnosticKind::NoFields => "VO006",
            DiagnosticKind::FieldNameCollision => "VO007",
        }
    }

    /// Short title
    pub fn title(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingNamespace => "Value Object must be declared inside a namespace",
            DiagnosticKind::UnresolvableDatatype => "Value Object must have a valid data type",
            DiagnosticKind::StringNotParsable => {
                "Cannot specify the Parsable option for type string (System.String)"
            }
            DiagnosticKind::FieldNotReadOnly => "Value Object properties must be read-only",
            DiagnosticKind::FieldReturnsByRef => {
                "Value Object properties must not return by reference"
            }
            DiagnosticKind::NoFields => "Multi Value Object must declare properties",
            DiagnosticKind::FieldNameCollision => {
                "Value Object properties must map to distinct parameter names"
            }
        }
    }

    /// Whether this kind is reported against a single field
    pub fn is_field_level(&self) -> bool {
        matches!(
            self,
            DiagnosticKind::FieldNotReadOnly
                | DiagnosticKind::FieldReturnsByRef
                | DiagnosticKind::FieldNameCollision
        )
    }

    fn message(&self, subject: &str, field: Option<&str>) -> String {
        let field = field.unwrap_or_default();
        match self {
            DiagnosticKind::MissingNamespace => format!(
                "The value object '{subject}' must not be declared in the global namespace"
            ),
            DiagnosticKind::UnresolvableDatatype => format!(
                "The value object '{subject}' does not seem to have a data type: \
                 [ValueObject(typeof(data-type-here))] or [ValueObject<data-type-here>]"
            ),
            DiagnosticKind::StringNotParsable => format!(
                "The value object '{subject}' specified the Parsable option which is not \
                 compatible with the System.String type"
            ),
            DiagnosticKind::FieldNotReadOnly => format!(
                "The property '{field}' of value object '{subject}' must be read-only (get only)"
            ),
            DiagnosticKind::FieldReturnsByRef => format!(
                "The property '{field}' of value object '{subject}' must not return by reference"
            ),
            DiagnosticKind::NoFields => format!(
                "The multi value object '{subject}' does not declare any public partial properties"
            ),
            DiagnosticKind::FieldNameCollision => format!(
                "The property '{field}' of value object '{subject}' maps to the same parameter \
                 name as another property"
            ),
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One reported violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,

    /// Name of the value object
    pub subject: String,

    /// Offending field, for field-level kinds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl Diagnostic {
    /// Type-level diagnostic
    pub fn new(
        kind: DiagnosticKind,
        subject: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            field: None,
            location,
        }
    }

    /// Field-level diagnostic
    pub fn for_field(
        kind: DiagnosticKind,
        subject: impl Into<String>,
        field: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            field: Some(field.into()),
            location,
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// All value-object diagnostics block generation
    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Message with subject and field interpolated
    pub fn message(&self) -> String {
        self.kind.message(&self.subject, self.field.as_deref())
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(
            f,
            "{} {}: {}",
            self.severity(),
            self.code(),
            self.message()
        )
    }
}
