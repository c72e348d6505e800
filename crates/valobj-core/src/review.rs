//! Well-formedness review of a descriptor.
//!
//! Checks run in a fixed order and the first type-level failure is terminal:
//!
//! ```text
//! Pending ─(a) namespace──(b) datatype──(c) string/parsable──(d) fields──(e) no fields─→ Accepted
//!    │           │              │                 │                 │              │
//!    └───────────┴──────────────┴─────────────────┴─────────────────┴──────────────┴─→ Rejected
//! ```
//!
//! Field checks under (d) do not stop each other: every violating field is
//! reported, and any of them still rejects the descriptor. Only an
//! [`Accepted`] review reaches the emitter.

use crate::capability::{self, CapabilityConflict, InterfaceSet};
use crate::descriptor::{Descriptor, Field, Shape};
use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::options::{MultiValueObjectOptions, ValueObjectOptions};
use crate::validation::{FieldViolationKind, field_violations};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Review state of one descriptor
///
/// ```text
/// Pending → Accepted
/// Pending → Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewState {
    /// Not reviewed yet
    #[default]
    Pending,
    /// Well-formed; ready for emission
    Accepted,
    /// At least one diagnostic was raised
    Rejected,
}

impl ReviewState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: ReviewState) -> bool {
        use ReviewState::*;
        matches!((self, target), (Pending, Accepted) | (Pending, Rejected))
    }

    /// Check if the review is finished
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReviewState::Accepted | ReviewState::Rejected)
    }

    /// Whether the emitter may run in this state
    pub fn can_emit(&self) -> bool {
        matches!(self, ReviewState::Accepted)
    }
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewState::Pending => write!(f, "Pending"),
            ReviewState::Accepted => write!(f, "Accepted"),
            ReviewState::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Outcome of [`review`]
#[derive(Debug, Clone, PartialEq)]
pub enum Review<'a> {
    Accepted(Accepted<'a>),
    Rejected(Vec<Diagnostic>),
}

impl Review<'_> {
    pub fn state(&self) -> ReviewState {
        match self {
            Review::Accepted(_) => ReviewState::Accepted,
            Review::Rejected(_) => ReviewState::Rejected,
        }
    }

    /// Diagnostics raised; empty when accepted
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Review::Accepted(_) => &[],
            Review::Rejected(diagnostics) => diagnostics,
        }
    }
}

/// A well-formed descriptor with its resolved capabilities
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted<'a> {
    pub descriptor: &'a Descriptor,

    /// Non-blank containing namespace
    pub namespace: &'a str,

    pub model: Model<'a>,

    /// Capabilities the emitter must implement
    pub capabilities: InterfaceSet,
}

impl Accepted<'_> {
    /// Resolved markers the user has not already written on the type
    pub fn header_markers(&self) -> InterfaceSet {
        self.capabilities.difference(self.descriptor.declared)
    }
}

/// Validated shape of an accepted descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Model<'a> {
    Single {
        datatype: &'a str,
        /// Requested options plus those inferred from declared markers
        options: ValueObjectOptions,
    },
    Multi {
        /// Non-empty, every field read-only and returned by value
        fields: &'a IndexMap<String, Field>,
        options: MultiValueObjectOptions,
    },
}

/// Review a descriptor.
pub fn review(descriptor: &Descriptor) -> Review<'_> {
    let name = descriptor.name.as_str();
    let reject = |kind: DiagnosticKind| {
        debug!(value_object = name, code = %kind, "Review rejected descriptor");
        Review::Rejected(vec![Diagnostic::new(
            kind,
            name,
            descriptor.location.clone(),
        )])
    };

    // (a)
    let Some(namespace) = descriptor
        .namespace
        .as_deref()
        .map(str::trim)
        .filter(|ns| !ns.is_empty())
    else {
        return reject(DiagnosticKind::MissingNamespace);
    };

    match &descriptor.shape {
        Shape::Single { datatype, options } => {
            // (b)
            let Some(datatype) = datatype.as_deref() else {
                return reject(DiagnosticKind::UnresolvableDatatype);
            };

            // (c)
            let effective = capability::infer_options(*options, descriptor.declared);
            let capabilities = match capability::resolve_single(
                effective,
                descriptor.declared,
                datatype,
                descriptor.is_record,
            ) {
                Ok(capabilities) => capabilities,
                Err(CapabilityConflict::StringNotParsable) => {
                    return reject(DiagnosticKind::StringNotParsable);
                }
            };

            debug!(
                value_object = name,
                capabilities = capabilities.len(),
                "Review accepted single value object"
            );
            Review::Accepted(Accepted {
                descriptor,
                namespace,
                model: Model::Single {
                    datatype,
                    options: effective,
                },
                capabilities,
            })
        }
        Shape::Multi { fields, options } => {
            // (d)
            let diagnostics: Vec<Diagnostic> = field_violations(fields)
                .into_iter()
                .map(|violation| {
                    let kind = match violation.kind {
                        FieldViolationKind::NotReadOnly => DiagnosticKind::FieldNotReadOnly,
                        FieldViolationKind::ReturnsByRef => DiagnosticKind::FieldReturnsByRef,
                        FieldViolationKind::ParameterNameCollision => {
                            DiagnosticKind::FieldNameCollision
                        }
                    };
                    let location = violation
                        .location
                        .or(descriptor.location.as_ref())
                        .cloned();
                    Diagnostic::for_field(kind, name, violation.field, location)
                })
                .collect();
            if !diagnostics.is_empty() {
                debug!(value_object = name, count = diagnostics.len(), "Review rejected fields");
                return Review::Rejected(diagnostics);
            }

            // (e)
            if fields.is_empty() {
                return reject(DiagnosticKind::NoFields);
            }

            let capabilities = capability::resolve_multi(descriptor.is_record);
            debug!(value_object = name, fields = fields.len(), "Review accepted multi value object");
            Review::Accepted(Accepted {
                descriptor,
                namespace,
                model: Model::Multi {
                    fields,
                    options: *options,
                },
                capabilities,
            })
        }
    }
}
