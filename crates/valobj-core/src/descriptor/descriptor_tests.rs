#![allow(non_snake_case)]

use super::*;

fn single(name: &str) -> Descriptor {
    Descriptor {
        name: name.into(),
        namespace: Some("Test".into()),
        shape: Shape::Single {
            datatype: Some("int".into()),
            options: ValueObjectOptions::from_options(&[]),
        },
        is_record: true,
        declared: InterfaceSet::EMPTY,
        validation: None,
        factory: None,
        location: None,
    }
}

#[test]
fn Descriptor___hint_name___uses_value_object_suffix() {
    assert_eq!(single("ProductId").hint_name(), "ProductId_ValueObject.g.cs");
}

#[test]
fn Descriptor___single_shape___is_not_multi() {
    assert!(!single("ProductId").is_multi());
}

#[test]
fn Descriptor___multi_shape___is_multi() {
    let mut descriptor = single("OrderLine");
    descriptor.shape = Shape::Multi {
        fields: IndexMap::new(),
        options: MultiValueObjectOptions::from_options(&[]),
    };

    assert!(descriptor.is_multi());
}

#[test]
fn Field___parameter_name___lowers_first_char() {
    assert_eq!(Field::parameter_name("CustomerId"), "customerId");
}

#[test]
fn Field___backing_name___prefixes_underscore() {
    assert_eq!(Field::backing_name("Name"), "_name");
}

#[test]
fn Field___parameter_name_keyword___escaped() {
    assert_eq!(Field::parameter_name("String"), "@string");
    assert_eq!(Field::parameter_name("Default"), "@default");
}

#[test]
fn Field___backing_name_keyword___not_escaped() {
    assert_eq!(Field::backing_name("String"), "_string");
}
