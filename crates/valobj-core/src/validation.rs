//! Validation frontend.
//!
//! Builds a [`Descriptor`] from a [`TypeDeclaration`] by light structural
//! inspection of its member list:
//!
//! - an optional `static bool IsValid(...)` whose parameters match the wrapped
//!   datatype (single) or the ordered field types (multi)
//! - an optional `static partial T From(...)` stub with the same parameters
//! - for multi-value objects, the public partial properties that become fields
//!
//! Absence of a predicate or stub is not an error. Field well-formedness is
//! recorded on each [`Field`] and reported through [`field_violations`].

use crate::capability::InterfaceSet;
use crate::declaration::{
    Accessor, AttributeUsage, Member, MethodDeclaration, SourceLocation, TypeDeclaration,
};
use crate::descriptor::{Descriptor, FactoryStub, Field, Shape, ValidationPredicate};
use crate::options::{MultiValueObjectOptions, ValueObjectOptions};
use crate::typename::same_type;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::debug;

/// Conventional name of the validation predicate
pub const VALIDATION_METHOD: &str = "IsValid";

/// Conventional name of the factory method
pub const FACTORY_METHOD: &str = "From";

/// Build the descriptor for a declaration.
pub fn describe(decl: &TypeDeclaration) -> Descriptor {
    let (shape, datatype) = match &decl.attribute {
        AttributeUsage::ValueObject { datatype, options } => {
            let datatype = datatype
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string);
            let shape = Shape::Single {
                datatype: datatype.clone(),
                options: ValueObjectOptions::from_options(options),
            };
            (shape, datatype)
        }
        AttributeUsage::MultiValueObject { options } => {
            let shape = Shape::Multi {
                fields: collect_fields(decl),
                options: MultiValueObjectOptions::from_options(options),
            };
            (shape, None)
        }
    };

    let parameter_types: Option<Vec<&str>> = match &shape {
        Shape::Single { datatype, .. } => datatype.as_deref().map(|d| vec![d]),
        Shape::Multi { fields, .. } => {
            Some(fields.values().map(|f| f.type_name.as_str()).collect())
        }
    };

    let (validation, factory) = match &parameter_types {
        Some(types) => (
            find_validation_predicate(decl, types),
            find_factory_stub(decl, types),
        ),
        None => (None, None),
    };

    let declared = InterfaceSet::detect(&decl.interfaces, &decl.name, datatype.as_deref());

    debug!(
        name = %decl.name,
        has_validation = validation.is_some(),
        has_factory_stub = factory.is_some(),
        declared = declared.len(),
        "Described declaration"
    );

    Descriptor {
        name: decl.name.clone(),
        namespace: decl.namespace.clone(),
        shape,
        is_record: decl.is_record(),
        declared,
        validation,
        factory,
        location: decl.location.clone(),
    }
}

fn find_validation_predicate(
    decl: &TypeDeclaration,
    parameter_types: &[&str],
) -> Option<ValidationPredicate> {
    decl.methods()
        .find(|m| {
            m.name == VALIDATION_METHOD
                && m.is_static
                && !m.is_partial
                && same_type(m.return_type, "bool")
                && parameters_match(m, parameter_types)
        })
        .map(|m| ValidationPredicate {
            method: m.name.to_string(),
        })
}

fn find_factory_stub(decl: &TypeDeclaration, parameter_types: &[&str]) -> Option<FactoryStub> {
    decl.methods()
        .find(|m| {
            m.name == FACTORY_METHOD
                && m.is_static
                && m.is_partial
                && returns_self(m, &decl.name)
                && parameters_match(m, parameter_types)
        })
        .map(|m| FactoryStub {
            method: m.name.to_string(),
        })
}

fn parameters_match(method: &MethodDeclaration<'_>, expected: &[&str]) -> bool {
    method.parameters.len() == expected.len()
        && method
            .parameters
            .iter()
            .zip(expected)
            .all(|(parameter, expected)| same_type(&parameter.type_name, expected))
}

fn returns_self(method: &MethodDeclaration<'_>, name: &str) -> bool {
    let return_type = method.return_type.trim();
    return_type == name || return_type.ends_with(&format!(".{name}"))
}

/// Public partial properties, in declaration order.
fn collect_fields(decl: &TypeDeclaration) -> IndexMap<String, Field> {
    let mut fields = IndexMap::new();

    for member in &decl.members {
        if let Member::Property {
            name,
            type_name,
            is_public: true,
            is_partial: true,
            accessors,
            returns_by_ref,
            is_value_type,
            location,
        } = member
        {
            let read_only = accessors.iter().all(|a| *a == Accessor::Get);
            fields.insert(
                name.clone(),
                Field {
                    type_name: type_name.trim().to_string(),
                    is_value_type: *is_value_type,
                    read_only,
                    returns_by_ref: *returns_by_ref,
                    location: location.clone(),
                },
            );
        }
    }

    fields
}

/// A structural problem with one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation<'a> {
    pub field: &'a str,
    pub kind: FieldViolationKind,
    pub location: Option<&'a SourceLocation>,
}

/// Kind of a [`FieldViolation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolationKind {
    /// The property has a `set` or `init` accessor
    NotReadOnly,
    /// The property returns by reference
    ReturnsByRef,
    /// An earlier property maps to the same parameter name (`Id` and `id`)
    ParameterNameCollision,
}

/// Every field violation, field by field in declaration order.
///
/// A field that is both mutable and ref-returning yields two violations.
/// Of several fields sharing a parameter name, every one after the first is
/// reported.
pub fn field_violations(fields: &IndexMap<String, Field>) -> Vec<FieldViolation<'_>> {
    let mut violations = Vec::new();
    let mut parameters = HashSet::new();

    for (name, field) in fields {
        if !field.read_only {
            violations.push(FieldViolation {
                field: name,
                kind: FieldViolationKind::NotReadOnly,
                location: field.location.as_ref(),
            });
        }
        if field.returns_by_ref {
            violations.push(FieldViolation {
                field: name,
                kind: FieldViolationKind::ReturnsByRef,
                location: field.location.as_ref(),
            });
        }
        if !parameters.insert(Field::parameter_name(name)) {
            violations.push(FieldViolation {
                field: name,
                kind: FieldViolationKind::ParameterNameCollision,
                location: field.location.as_ref(),
            });
        }
    }

    violations
}

#[cfg(test)]
#[path = "validation/validation_tests.rs"]
mod validation_tests;
