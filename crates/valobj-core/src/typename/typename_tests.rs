#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("int", "System.Int32")]
#[test_case("string", "System.String")]
#[test_case("float", "System.Single")]
#[test_case("global::System.Guid", "System.Guid")]
#[test_case("  decimal ", "System.Decimal")]
#[test_case("Shop.Domain.ProductId", "Shop.Domain.ProductId")]
fn canonical___type_name___maps_to_system_name(input: &str, expected: &str) {
    assert_eq!(canonical(input), expected);
}

#[test]
fn same_type___alias_and_system_name___match() {
    assert!(same_type("long", "System.Int64"));
    assert!(same_type("global::System.Int64", "long"));
}

#[test]
fn same_type___different_types___do_not_match() {
    assert!(!same_type("int", "long"));
}

#[test_case("string", true)]
#[test_case("System.String", true)]
#[test_case("global::System.String", true)]
#[test_case("String", false)]
#[test_case("int", false)]
fn is_string___type_name___detects_textual_type(input: &str, expected: bool) {
    assert_eq!(is_string(input), expected);
}

#[test]
fn split_generic___qualified_interface___strips_system_prefix() {
    assert_eq!(
        split_generic("System.IEquatable<int>"),
        Some(("IEquatable", "int"))
    );
}

#[test]
fn split_generic___global_qualified___strips_prefixes() {
    assert_eq!(
        split_generic("global::System.IComparable< Shop.Id >"),
        Some(("IComparable", "Shop.Id"))
    );
}

#[test]
fn split_generic___non_generic___returns_none() {
    assert_eq!(split_generic("IDisposable"), None);
}

#[test]
fn split_generic___unterminated___returns_none() {
    assert_eq!(split_generic("IEquatable<int"), None);
}

#[test]
fn lower_first_char___pascal_case___lowers_first_only() {
    assert_eq!(lower_first_char("OrderLineId"), "orderLineId");
}

#[test]
fn lower_first_char___already_lower___unchanged() {
    assert_eq!(lower_first_char("name"), "name");
}

#[test_case("string", "@string")]
#[test_case("default", "@default")]
#[test_case("params", "@params")]
#[test_case("id", "id")]
#[test_case("value", "value")]
#[test_case("String", "String")]
fn identifier___name___escapes_reserved_keywords(input: &str, expected: &str) {
    assert_eq!(identifier(input), expected);
}

#[test]
fn is_keyword___contextual_keyword___not_reserved() {
    assert!(!is_keyword("var"));
    assert!(!is_keyword("record"));
    assert!(is_keyword("event"));
}

#[test_case("int", "int?")]
#[test_case("int?", "int?")]
#[test_case("string?", "string?")]
#[test_case(" System.Guid ", "System.Guid?")]
fn nullable___type_name___single_question_mark(input: &str, expected: &str) {
    assert_eq!(nullable(input), expected);
}
