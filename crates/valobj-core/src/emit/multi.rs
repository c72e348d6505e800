//! Multi-value bodies.
//!
//! Field order is declaration order everywhere: constructor parameters,
//! backing fields, `ToString`, `Deconstruct`, hashing and equality.

use super::{CodeBuilder, default_constructor, throw, type_header};
use crate::capability::Capability;
use crate::config::GeneratorConfig;
use crate::descriptor::Field;
use crate::options::MultiValueObjectOptions;
use crate::review::Accepted;
use crate::typename::nullable;
use indexmap::IndexMap;

/// `System.HashCode.Combine` takes at most this many values
const HASH_COMBINE_MAX: usize = 8;

/// Out parameter of `Try`, unless a field parameter already uses it
const TRY_OUT_PARAMETER: &str = "valueObject";

/// Emit the type for a set of named fields.
pub(super) fn emit(
    code: &mut CodeBuilder,
    accepted: &Accepted<'_>,
    fields: &IndexMap<String, Field>,
    options: &MultiValueObjectOptions,
    config: &GeneratorConfig,
) {
    let descriptor = accepted.descriptor;
    let name = descriptor.name.as_str();
    let predicate = descriptor.validation.as_ref().map(|v| v.method.as_str());

    let parameters = join(fields, ", ", |property, field| {
        format!("{} {}", field.type_name, Field::parameter_name(property))
    });
    let arguments = join(fields, ", ", |property, _| Field::parameter_name(property));

    let display = join(fields, ", ", |property, _| format!("{property} = {{{property}}}"));
    type_header(code, accepted, "", &display, config);
    default_constructor(code, name, config);

    let visibility = if options.constructor { "public" } else { "private" };
    code.open(format!("{visibility} {name}({parameters})"));
    match predicate {
        Some(predicate) => {
            code.open(format!("if ({name}.{predicate}({arguments}))"));
            assignments(code, fields);
            code.end_scope();
            code.line(format!(
                "else {};",
                throw(
                    config,
                    &format!(
                        "\"Validation Failed. The specified values are not valid for Value Object '{name}'.\""
                    )
                )
            ));
        }
        None => assignments(code, fields),
    }
    code.end_scope();

    for (property, field) in fields {
        code.line(format!(
            "private readonly {} {};",
            nullable(&field.type_name),
            Field::backing_name(property)
        ));
        code.line(format!(
            "public partial {} {property} => {} ?? {};",
            field.type_name,
            Field::backing_name(property),
            throw(
                config,
                &format!(
                    "\"ValueObject '{name}' was not initialized with a valid value for property '{property}'.\""
                )
            )
        ));
    }

    if !descriptor.is_record {
        structural_overrides(code, name, fields);
    }

    if options.explicit_from || descriptor.factory.is_some() {
        let partial = if descriptor.factory.is_some() { "partial " } else { "" };
        code.line(format!(
            "public static {partial}{name} From({parameters}) => new({arguments});"
        ));
    }

    if options.deconstruct {
        let outs = join(fields, ", ", |property, field| {
            format!("out {} {}", field.type_name, Field::parameter_name(property))
        });
        code.open(format!("public void Deconstruct({outs})"));
        for property in fields.keys() {
            code.line(format!("{} = {property};", Field::parameter_name(property)));
        }
        code.end_scope();
    }

    if let Some(predicate) = predicate {
        let out = out_parameter(fields);
        code.open(format!(
            "public static bool Try({parameters}, out {name} {out})"
        ));
        code.line(format!(
            "if ({name}.{predicate}({arguments})) {{ {out} = new({arguments}); return true; }}"
        ));
        code.line(format!("{out} = default;"));
        code.line("return false;");
        code.end_scope();
    }

    if accepted.capabilities.contains(Capability::SelfEquatable) {
        let comparisons = join(fields, " && ", |property, field| {
            if field.is_value_type {
                format!("{property}.Equals(other.{property})")
            } else {
                format!(
                    "System.Collections.Generic.EqualityComparer<{}>.Default.Equals({property}, other.{property})",
                    field.type_name
                )
            }
        });
        code.line(format!("public bool Equals({name} other) => {comparisons};"));
        code.line(format!(
            "public static bool operator ==({name} left, {name} right) => left.Equals(right);"
        ));
        code.line(format!(
            "public static bool operator !=({name} left, {name} right) => !left.Equals(right);"
        ));
    }
}

/// [`TRY_OUT_PARAMETER`], numbered until it names no parameter or backing field
fn out_parameter(fields: &IndexMap<String, Field>) -> String {
    let taken = |candidate: &str| {
        fields.keys().any(|property| {
            Field::parameter_name(property) == candidate
                || Field::backing_name(property) == candidate
        })
    };

    let mut out = TRY_OUT_PARAMETER.to_string();
    let mut suffix = 1;
    while taken(&out) {
        out = format!("{TRY_OUT_PARAMETER}{suffix}");
        suffix += 1;
    }
    out
}

fn assignments(code: &mut CodeBuilder, fields: &IndexMap<String, Field>) {
    for property in fields.keys() {
        code.line(format!(
            "{} = {};",
            Field::backing_name(property),
            Field::parameter_name(property)
        ));
    }
}

/// `ToString`, `Equals(object?)` and `GetHashCode` over all fields.
fn structural_overrides(code: &mut CodeBuilder, name: &str, fields: &IndexMap<String, Field>) {
    let members = join(fields, ", ", |property, _| format!("{property} = {{{property}}}"));
    code.line(format!(
        "public override string ToString() => $\"{name} {{{{ {members} }}}}\";"
    ));
    code.line(format!(
        "public override bool Equals(object? obj) => obj is {name} other && Equals(other);"
    ));

    if fields.len() <= HASH_COMBINE_MAX {
        let backing = join(fields, ", ", |property, _| Field::backing_name(property));
        code.line(format!(
            "public override int GetHashCode() => System.HashCode.Combine({backing});"
        ));
    } else {
        code.open("public override int GetHashCode()");
        code.line("var hash = new System.HashCode();");
        for property in fields.keys() {
            code.line(format!("hash.Add({});", Field::backing_name(property)));
        }
        code.line("return hash.ToHashCode();");
        code.end_scope();
    }
}

fn join(
    fields: &IndexMap<String, Field>,
    separator: &str,
    render: impl Fn(&str, &Field) -> String,
) -> String {
    fields
        .iter()
        .map(|(property, field)| render(property.as_str(), field))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::declaration::{DeclarationKind, Member, Parameter, TypeDeclaration};
    use crate::options::MultiValueObjectOption;
    use crate::review::{Review, review};
    use crate::validation::describe;

    fn render(decl: &TypeDeclaration) -> String {
        let descriptor = describe(decl);
        let Review::Accepted(accepted) = review(&descriptor) else {
            panic!("expected accepted review");
        };
        super::super::emit(&accepted, &GeneratorConfig::default())
    }

    fn id_name() -> TypeDeclaration {
        TypeDeclaration::multi_value_object("MultiValObj")
            .in_namespace("Test")
            .with_member(Member::property("Id", "int").value_type())
            .with_member(Member::property("Name", "string"))
    }

    #[test]
    fn emit___default_options___constructor_in_field_order() {
        let code = render(&id_name());

        assert!(code.contains("public MultiValObj(int id, string name)\n"));
        assert!(code.find("_id = id;") < code.find("_name = name;"));
        assert!(code.contains("private readonly int? _id;"));
        assert!(code.contains(
            "public partial string Name => _name ?? throw new ValueObjects.ValueObjectException(\"ValueObject 'MultiValObj' was not initialized with a valid value for property 'Name'.\");"
        ));
        assert!(code.contains(
            "[System.Diagnostics.DebuggerDisplay(\"Id = {Id}, Name = {Name}\")]"
        ));
    }

    #[test]
    fn emit___record___no_structural_overrides() {
        let code = render(&id_name());

        assert!(code.contains("readonly partial record struct MultiValObj\n"));
        assert!(!code.contains("GetHashCode"));
        assert!(!code.contains("ToString"));
    }

    #[test]
    fn emit___deconstruct___out_params_in_declaration_order() {
        let code = render(&id_name().with_multi_options(&[MultiValueObjectOption::Deconstruct]));

        assert!(code.contains("public void Deconstruct(out int id, out string name)"));
        assert!(code.find("id = Id;") < code.find("name = Name;"));
        // only Deconstruct requested: constructor is private
        assert!(code.contains("private MultiValObj(int id, string name)"));
    }

    #[test]
    fn emit___validation_predicate___guarded_constructor_and_try() {
        let code = render(&id_name().with_member(Member::static_method(
            "IsValid",
            "bool",
            vec![Parameter::new("id", "int"), Parameter::new("name", "string")],
        )));

        assert!(code.contains("if (MultiValObj.IsValid(id, name))"));
        assert!(code.contains(
            "else throw new ValueObjects.ValueObjectException(\"Validation Failed. The specified values are not valid for Value Object 'MultiValObj'.\");"
        ));
        assert!(code.contains(
            "public static bool Try(int id, string name, out MultiValObj valueObject)"
        ));
        assert!(code.contains(
            "if (MultiValObj.IsValid(id, name)) { valueObject = new(id, name); return true; }"
        ));
    }

    #[test]
    fn emit___explicit_from___factory_over_all_fields() {
        let code = render(&id_name().with_multi_options(&[MultiValueObjectOption::ExplicitFrom]));

        assert!(code.contains(
            "public static MultiValObj From(int id, string name) => new(id, name);"
        ));
    }

    #[test]
    fn emit___plain_struct___structural_to_string_and_equality() {
        let code = render(&id_name().with_kind(DeclarationKind::Struct));

        assert!(code.contains(
            "readonly partial struct MultiValObj : System.IEquatable<MultiValObj>\n"
        ));
        assert!(code.contains(
            "public override string ToString() => $\"MultiValObj {{ Id = {Id}, Name = {Name} }}\";"
        ));
        assert!(code.contains(
            "public override int GetHashCode() => System.HashCode.Combine(_id, _name);"
        ));
        assert!(code.contains(
            "public bool Equals(MultiValObj other) => Id.Equals(other.Id) && System.Collections.Generic.EqualityComparer<string>.Default.Equals(Name, other.Name);"
        ));
    }

    #[test]
    fn emit___more_than_eight_fields___accumulating_hash() {
        let decl = (1..=9).fold(
            TypeDeclaration::multi_value_object("Wide")
                .in_namespace("Test")
                .with_kind(DeclarationKind::Struct),
            |decl, i| decl.with_member(Member::property(format!("F{i}"), "int").value_type()),
        );

        let code = render(&decl);

        assert!(!code.contains("System.HashCode.Combine"));
        assert!(code.contains("var hash = new System.HashCode();"));
        assert!(code.contains("hash.Add(_f9);"));
        assert!(code.contains("return hash.ToHashCode();"));
    }

    #[test]
    fn emit___keyword_property_names___escaped_parameters() {
        let code = render(
            &TypeDeclaration::multi_value_object("Pair")
                .in_namespace("Test")
                .with_multi_options(&[
                    MultiValueObjectOption::Constructor,
                    MultiValueObjectOption::Deconstruct,
                    MultiValueObjectOption::ExplicitFrom,
                ])
                .with_member(Member::property("String", "string"))
                .with_member(Member::property("Default", "int").value_type()),
        );

        assert!(!code.contains("string string"));
        assert!(!code.contains("int default"));
        assert!(code.contains("public Pair(string @string, int @default)\n"));
        assert!(code.contains("_string = @string;"));
        assert!(code.contains("private readonly string? _string;"));
        assert!(code.contains("public void Deconstruct(out string @string, out int @default)"));
        assert!(code.contains("@default = Default;"));
        assert!(code.contains(
            "public static Pair From(string @string, int @default) => new(@string, @default);"
        ));
    }

    #[test]
    fn emit___field_named_value_object___try_out_parameter_renamed() {
        let code = render(
            &TypeDeclaration::multi_value_object("Wrapper")
                .in_namespace("Test")
                .with_member(Member::property("ValueObject", "int").value_type())
                .with_member(Member::static_method(
                    "IsValid",
                    "bool",
                    vec![Parameter::new("valueObject", "int")],
                )),
        );

        assert!(code.contains(
            "public static bool Try(int valueObject, out Wrapper valueObject1)"
        ));
        assert!(code.contains(
            "if (Wrapper.IsValid(valueObject)) { valueObject1 = new(valueObject); return true; }"
        ));
        assert!(code.contains("valueObject1 = default;"));
    }

    #[test]
    fn emit___nullable_field_types___single_question_mark() {
        let code = render(
            &TypeDeclaration::multi_value_object("Contact")
                .in_namespace("Test")
                .with_member(Member::property("Note", "string?"))
                .with_member(Member::property("Count", "int?").value_type()),
        );

        assert!(!code.contains("string??"));
        assert!(!code.contains("int??"));
        assert!(code.contains("private readonly string? _note;"));
        assert!(code.contains("private readonly int? _count;"));
        assert!(code.contains("public partial int? Count => _count ?? throw "));
    }
}
