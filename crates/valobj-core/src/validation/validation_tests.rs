#![allow(non_snake_case)]

use super::*;
use crate::capability::Capability;
use crate::declaration::{DeclarationKind, Parameter};
use crate::options::ValueObjectOption;

fn int_value_object() -> TypeDeclaration {
    TypeDeclaration::value_object("ValObj", Some("int")).in_namespace("Test")
}

fn id_name_multi() -> TypeDeclaration {
    TypeDeclaration::multi_value_object("MultiValObj")
        .in_namespace("Test")
        .with_member(Member::property("Id", "int").value_type())
        .with_member(Member::property("Name", "string"))
}

fn fields_of(descriptor: &Descriptor) -> &IndexMap<String, Field> {
    match &descriptor.shape {
        Shape::Multi { fields, .. } => fields,
        Shape::Single { .. } => panic!("expected multi-value shape"),
    }
}

// Single-value describe tests

#[test]
fn describe___single_value___keeps_name_namespace_datatype() {
    let descriptor = describe(&int_value_object());

    assert_eq!(descriptor.name, "ValObj");
    assert_eq!(descriptor.namespace.as_deref(), Some("Test"));
    assert!(descriptor.is_record);
    assert!(matches!(
        &descriptor.shape,
        Shape::Single { datatype: Some(d), options } if d == "int" && options.constructor
    ));
}

#[test]
fn describe___blank_datatype___treated_as_unresolved() {
    let descriptor = describe(&TypeDeclaration::value_object("ValObj", Some("  ")));

    assert!(matches!(
        descriptor.shape,
        Shape::Single { datatype: None, .. }
    ));
}

#[test]
fn describe___is_valid_matching_signature___detected() {
    let decl = int_value_object().with_member(Member::static_method(
        "IsValid",
        "bool",
        vec![Parameter::new("value", "System.Int32")],
    ));

    let descriptor = describe(&decl);

    assert_eq!(
        descriptor.validation,
        Some(ValidationPredicate {
            method: "IsValid".into()
        })
    );
}

#[test]
fn describe___is_valid_wrong_parameter___ignored() {
    let decl = int_value_object().with_member(Member::static_method(
        "IsValid",
        "bool",
        vec![Parameter::new("value", "long")],
    ));

    assert_eq!(describe(&decl).validation, None);
}

#[test]
fn describe___is_valid_not_static___ignored() {
    let decl = int_value_object().with_member(Member::Method {
        name: "IsValid".into(),
        is_static: false,
        is_partial: false,
        return_type: "bool".into(),
        parameters: vec![Parameter::new("value", "int")],
        location: None,
    });

    assert_eq!(describe(&decl).validation, None);
}

#[test]
fn describe___is_valid_returns_non_bool___ignored() {
    let decl = int_value_object().with_member(Member::static_method(
        "IsValid",
        "int",
        vec![Parameter::new("value", "int")],
    ));

    assert_eq!(describe(&decl).validation, None);
}

#[test]
fn describe___partial_from_stub___detected() {
    let decl = int_value_object().with_member(Member::partial_static_method(
        "From",
        "ValObj",
        vec![Parameter::new("value", "int")],
    ));

    let descriptor = describe(&decl);

    assert_eq!(
        descriptor.factory,
        Some(FactoryStub {
            method: "From".into()
        })
    );
}

#[test]
fn describe___non_partial_from___not_a_stub() {
    let decl = int_value_object().with_member(Member::static_method(
        "From",
        "ValObj",
        vec![Parameter::new("value", "int")],
    ));

    assert_eq!(describe(&decl).factory, None);
}

#[test]
fn describe___unresolved_datatype___no_signature_matches() {
    let decl = TypeDeclaration::value_object("ValObj", None).with_member(Member::static_method(
        "IsValid",
        "bool",
        vec![Parameter::new("value", "int")],
    ));

    assert_eq!(describe(&decl).validation, None);
}

#[test]
fn describe___declared_markers___detected() {
    let decl = int_value_object()
        .with_interface("IComparable<ValObj>")
        .with_interface("IEquatable<int>");

    let descriptor = describe(&decl);

    assert!(descriptor.declared.contains(Capability::SelfComparable));
    assert!(descriptor.declared.contains(Capability::ValueEquatable));
}

#[test]
fn describe___options___folded() {
    let decl = int_value_object().with_options(&[ValueObjectOption::ExplicitFrom]);

    let descriptor = describe(&decl);

    match descriptor.shape {
        Shape::Single { options, .. } => {
            assert!(options.explicit_from);
            assert!(!options.constructor);
        }
        Shape::Multi { .. } => panic!("expected single-value shape"),
    }
}

// Multi-value describe tests

#[test]
fn describe___multi_value___fields_in_declaration_order() {
    let descriptor = describe(&id_name_multi());

    let names: Vec<&str> = fields_of(&descriptor).keys().map(String::as_str).collect();

    assert_eq!(names, vec!["Id", "Name"]);
    assert!(fields_of(&descriptor)["Id"].is_value_type);
    assert!(!fields_of(&descriptor)["Name"].is_value_type);
}

#[test]
fn describe___multi_value___skips_non_public_or_non_partial_properties() {
    let decl = id_name_multi()
        .with_member(Member::Property {
            name: "Hidden".into(),
            type_name: "int".into(),
            is_public: false,
            is_partial: true,
            accessors: vec![Accessor::Get],
            returns_by_ref: false,
            is_value_type: true,
            location: None,
        })
        .with_member(Member::Property {
            name: "Computed".into(),
            type_name: "int".into(),
            is_public: true,
            is_partial: false,
            accessors: vec![Accessor::Get],
            returns_by_ref: false,
            is_value_type: true,
            location: None,
        });

    assert_eq!(fields_of(&describe(&decl)).len(), 2);
}

#[test]
fn describe___multi_is_valid_over_all_fields___detected() {
    let decl = id_name_multi().with_member(Member::static_method(
        "IsValid",
        "bool",
        vec![Parameter::new("id", "int"), Parameter::new("name", "string")],
    ));

    assert!(describe(&decl).validation.is_some());
}

#[test]
fn describe___multi_is_valid_wrong_order___ignored() {
    let decl = id_name_multi().with_member(Member::static_method(
        "IsValid",
        "bool",
        vec![Parameter::new("name", "string"), Parameter::new("id", "int")],
    ));

    assert!(describe(&decl).validation.is_none());
}

#[test]
fn describe___multi_from_stub___detected() {
    let decl = id_name_multi().with_member(Member::partial_static_method(
        "From",
        "MultiValObj",
        vec![Parameter::new("id", "int"), Parameter::new("name", "string")],
    ));

    assert!(describe(&decl).factory.is_some());
}

#[test]
fn describe___plain_struct___not_record() {
    let decl = id_name_multi().with_kind(DeclarationKind::Struct);

    assert!(!describe(&decl).is_record);
}

// Field violation tests

#[test]
fn field_violations___read_only_fields___none() {
    let descriptor = describe(&id_name_multi());

    assert!(field_violations(fields_of(&descriptor)).is_empty());
}

#[test]
fn field_violations___init_accessor___not_read_only() {
    let decl = TypeDeclaration::multi_value_object("MultiValObj")
        .in_namespace("Test")
        .with_member(Member::property("Id", "int").with_accessors(&[Accessor::Get, Accessor::Init]))
        .with_member(Member::property("Name", "string"));
    let descriptor = describe(&decl);

    let violations = field_violations(fields_of(&descriptor));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "Id");
    assert_eq!(violations[0].kind, FieldViolationKind::NotReadOnly);
}

#[test]
fn field_violations___every_field___reported() {
    let decl = TypeDeclaration::multi_value_object("MultiValObj")
        .in_namespace("Test")
        .with_member(Member::property("Id", "int").by_ref())
        .with_member(Member::property("Name", "string").with_accessors(&[Accessor::Get, Accessor::Set]))
        .with_member(Member::property("Code", "string").by_ref().with_accessors(&[Accessor::Set]));
    let descriptor = describe(&decl);

    let violations: Vec<(&str, FieldViolationKind)> = field_violations(fields_of(&descriptor))
        .into_iter()
        .map(|v| (v.field, v.kind))
        .collect();

    assert_eq!(
        violations,
        vec![
            ("Id", FieldViolationKind::ReturnsByRef),
            ("Name", FieldViolationKind::NotReadOnly),
            ("Code", FieldViolationKind::NotReadOnly),
            ("Code", FieldViolationKind::ReturnsByRef),
        ]
    );
}

#[test]
fn field_violations___names_differing_in_first_letter_case___collision_on_later_field() {
    let decl = TypeDeclaration::multi_value_object("MultiValObj")
        .in_namespace("Test")
        .with_member(Member::property("Id", "int").value_type())
        .with_member(Member::property("id", "int").value_type())
        .with_member(Member::property("Name", "string"));
    let descriptor = describe(&decl);

    let violations: Vec<(&str, FieldViolationKind)> = field_violations(fields_of(&descriptor))
        .into_iter()
        .map(|v| (v.field, v.kind))
        .collect();

    assert_eq!(
        violations,
        vec![("id", FieldViolationKind::ParameterNameCollision)]
    );
}
