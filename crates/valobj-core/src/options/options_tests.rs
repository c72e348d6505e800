#![allow(non_snake_case)]

use super::*;

#[test]
fn ValueObjectOptions___no_options___defaults_to_constructor() {
    let options = ValueObjectOptions::from_options(&[]);

    assert!(options.constructor);
    assert_eq!(
        options,
        ValueObjectOptions {
            constructor: true,
            ..Default::default()
        }
    );
}

#[test]
fn ValueObjectOptions___explicit_from_only___no_public_constructor() {
    let options = ValueObjectOptions::from_options(&[ValueObjectOption::ExplicitFrom]);

    assert!(options.explicit_from);
    assert!(!options.constructor);
}

#[test]
fn ValueObjectOptions___duplicates___fold_once() {
    let options = ValueObjectOptions::from_options(&[
        ValueObjectOption::Comparable,
        ValueObjectOption::Comparable,
    ]);

    assert!(options.comparable);
    assert!(!options.constructor);
}

#[test]
fn ValueObjectOptions___implicit_as___has_conversion() {
    let options = ValueObjectOptions::from_options(&[ValueObjectOption::ImplicitAs]);

    assert!(options.has_conversion());
}

#[test]
fn ValueObjectOptions___to_string_only___has_no_conversion() {
    let options = ValueObjectOptions::from_options(&[ValueObjectOption::ToString]);

    assert!(!options.has_conversion());
}

#[test]
fn ValueObjectOption___bits___are_distinct_powers_of_two() {
    let mut seen = 0u32;
    for option in ValueObjectOption::ALL {
        let bit = option.bit();
        assert_eq!(bit.count_ones(), 1, "{option} is not a single bit");
        assert_eq!(seen & bit, 0, "{option} reuses a bit");
        seen |= bit;
    }
}

#[test]
fn ValueObjectOption___deserialize___uses_pascal_case_names() {
    let option: ValueObjectOption = serde_json::from_str("\"ImplicitFrom\"").unwrap();

    assert_eq!(option, ValueObjectOption::ImplicitFrom);
}

#[test]
fn MultiValueObjectOptions___no_options___defaults_to_constructor() {
    let options = MultiValueObjectOptions::from_options(&[]);

    assert!(options.constructor);
    assert!(!options.deconstruct);
    assert!(!options.explicit_from);
}

#[test]
fn MultiValueObjectOptions___deconstruct_and_constructor___both_set() {
    let options = MultiValueObjectOptions::from_options(&[
        MultiValueObjectOption::Deconstruct,
        MultiValueObjectOption::Constructor,
    ]);

    assert!(options.deconstruct);
    assert!(options.constructor);
}

#[test]
fn MultiValueObjectOption___display___matches_runtime_enum_names() {
    let names: Vec<String> = MultiValueObjectOption::ALL
        .iter()
        .map(|o| o.to_string())
        .collect();

    assert_eq!(names, vec!["ExplicitFrom", "Constructor", "Deconstruct"]);
}
