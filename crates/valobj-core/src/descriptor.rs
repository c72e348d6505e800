//! Normalized view of one annotated type.
//!
//! A [`Descriptor`] is built once per declaration by
//! [`validation::describe`](crate::validation::describe) and never mutated
//! afterwards. It may still be malformed (no namespace, unresolved datatype,
//! mutable fields); [`review`](crate::review::review) decides whether it
//! reaches the emitter.

use crate::capability::InterfaceSet;
use crate::declaration::SourceLocation;
use crate::options::{MultiValueObjectOptions, ValueObjectOptions};
use crate::typename::{identifier, lower_first_char};
use indexmap::IndexMap;

/// Normalized declaration of a value object
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Generated type name
    pub name: String,

    /// Containing namespace; `None` (or blank) is a well-formedness violation
    pub namespace: Option<String>,

    /// Single wrapped value or ordered field set
    pub shape: Shape,

    /// `record struct` rather than plain `struct`
    pub is_record: bool,

    /// Capability marker interfaces already written on the type
    pub declared: InterfaceSet,

    /// User-authored static `IsValid` predicate with a matching signature
    pub validation: Option<ValidationPredicate>,

    /// User-authored `static partial From(...)` stub with a matching signature
    pub factory: Option<FactoryStub>,

    /// Location of the declaration
    pub location: Option<SourceLocation>,
}

impl Descriptor {
    /// Output unit hint name
    pub fn hint_name(&self) -> String {
        format!("{}_ValueObject.g.cs", self.name)
    }

    /// Whether this is a multi-value object
    pub fn is_multi(&self) -> bool {
        matches!(self.shape, Shape::Multi { .. })
    }
}

/// What the value object wraps
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// One wrapped value
    Single {
        /// Wrapped datatype as written; `None` when unresolvable
        datatype: Option<String>,
        options: ValueObjectOptions,
    },
    /// Several named fields, in declaration order
    Multi {
        fields: IndexMap<String, Field>,
        options: MultiValueObjectOptions,
    },
}

/// A field of a multi-value object (a public partial property)
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Property type as written
    pub type_name: String,

    /// Whether the type is a value type
    pub is_value_type: bool,

    /// No `set`/`init` accessor
    pub read_only: bool,

    /// Declared as `ref` / `ref readonly`
    pub returns_by_ref: bool,

    pub location: Option<SourceLocation>,
}

impl Field {
    /// Constructor/deconstruct parameter name for a property; keywords are
    /// `@`-escaped
    pub fn parameter_name(property: &str) -> String {
        identifier(&lower_first_char(property))
    }

    /// Backing field name for a property
    pub fn backing_name(property: &str) -> String {
        format!("_{}", lower_first_char(property))
    }
}

/// Detected `static bool IsValid(...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationPredicate {
    pub method: String,
}

/// Detected `static partial T From(...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryStub {
    pub method: String,
}

#[cfg(test)]
#[path = "descriptor/descriptor_tests.rs"]
mod descriptor_tests;
