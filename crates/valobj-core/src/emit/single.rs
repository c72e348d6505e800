//! Single-value bodies.

use super::{CodeBuilder, default_constructor, throw, type_header};
use crate::capability::Capability;
use crate::config::GeneratorConfig;
use crate::options::ValueObjectOptions;
use crate::review::Accepted;
use crate::typename::nullable;

/// Emit the type for a single wrapped value.
pub(super) fn emit(
    code: &mut CodeBuilder,
    accepted: &Accepted<'_>,
    datatype: &str,
    options: &ValueObjectOptions,
    config: &GeneratorConfig,
) {
    let descriptor = accepted.descriptor;
    let name = descriptor.name.as_str();
    let predicate = descriptor.validation.as_ref().map(|v| v.method.as_str());

    type_header(code, accepted, datatype, "Value = {Value}", config);
    default_constructor(code, name, config);
    constructor(code, name, datatype, options.constructor, predicate, config);
    value_property(code, name, datatype, config);

    if options.implicit_from {
        code.line(format!(
            "public static implicit operator {name}({datatype} value) => new(value);"
        ));
    }
    if options.implicit_as {
        code.line(format!(
            "public static implicit operator {datatype}({name} valueObject) => valueObject.Value;"
        ));
    }
    if options.explicit_from || descriptor.factory.is_some() {
        let partial = if descriptor.factory.is_some() { "partial " } else { "" };
        code.line(format!(
            "public static {partial}{name} From({datatype} value) => new(value);"
        ));
    }
    if options.to_string {
        code.line("public override string ToString() => Value.ToString();");
    }
    if let Some(predicate) = predicate {
        try_create(code, name, datatype, predicate);
    }

    for capability in accepted.capabilities.iter() {
        match capability {
            Capability::SelfEquatable => self_equatable(code, name),
            Capability::ValueEquatable => value_equatable(code, name, datatype),
            Capability::SelfComparable => comparable(code, name, name, "other.Value"),
            Capability::ValueComparable => comparable(code, name, datatype, "other"),
            Capability::Parsable => parsable(code, name, datatype, "string?", predicate),
            Capability::SpanParsable => {
                parsable(code, name, datatype, "System.ReadOnlySpan<char>", predicate)
            }
        }
    }
}

fn constructor(
    code: &mut CodeBuilder,
    name: &str,
    datatype: &str,
    is_public: bool,
    predicate: Option<&str>,
    config: &GeneratorConfig,
) {
    let visibility = if is_public { "public" } else { "private" };
    let signature = format!("{visibility} {name}({datatype} value)");

    match predicate {
        None => {
            code.line(format!("{signature} => _value = value;"));
        }
        Some(predicate) => {
            code.open(signature);
            code.line(format!("if ({name}.{predicate}(value)) _value = value;"));
            code.line(format!(
                "else {};",
                throw(
                    config,
                    &format!(
                        "$\"Validation Failed. The value '{{value}}' is not valid for Value Object '{name}'.\""
                    )
                )
            ));
            code.end_scope();
        }
    }
}

fn value_property(code: &mut CodeBuilder, name: &str, datatype: &str, config: &GeneratorConfig) {
    code.line(format!("private readonly {} _value;", nullable(datatype)));
    code.line(format!(
        "public {datatype} Value => _value ?? {};",
        throw(
            config,
            &format!("\"ValueObject '{name}' was not initialized with a valid value.\"")
        )
    ));
}

fn try_create(code: &mut CodeBuilder, name: &str, datatype: &str, predicate: &str) {
    code.open(format!(
        "public static bool Try({datatype} value, out {name} valueObject)"
    ));
    code.line(format!(
        "if ({name}.{predicate}(value)) {{ valueObject = new(value); return true; }}"
    ));
    code.line("valueObject = default;");
    code.line("return false;");
    code.end_scope();
}

fn self_equatable(code: &mut CodeBuilder, name: &str) {
    code.line(format!(
        "public bool Equals({name} other) => Value.Equals(other.Value);"
    ));
    code.line(format!(
        "public override bool Equals(object? obj) => obj is {name} other && Equals(other);"
    ));
    code.line("public override int GetHashCode() => _value?.GetHashCode() ?? 0;");
    equality_operators(code, name, name);
}

fn value_equatable(code: &mut CodeBuilder, name: &str, datatype: &str) {
    code.line(format!(
        "public bool Equals({datatype} other) => Value.Equals(other);"
    ));
    equality_operators(code, name, datatype);
}

fn equality_operators(code: &mut CodeBuilder, name: &str, right: &str) {
    code.line(format!(
        "public static bool operator ==({name} left, {right} right) => left.Equals(right);"
    ));
    code.line(format!(
        "public static bool operator !=({name} left, {right} right) => !left.Equals(right);"
    ));
}

/// `CompareTo(other)` and the four relational operators derived from it.
fn comparable(code: &mut CodeBuilder, name: &str, other_type: &str, other_value: &str) {
    code.line(format!(
        "public int CompareTo({other_type} other) => Value.CompareTo({other_value});"
    ));
    for op in ["<", ">", "<=", ">="] {
        code.line(format!(
            "public static bool operator {op}({name} left, {other_type} right) => left.CompareTo(right) {op} 0;"
        ));
    }
}

/// `Parse`/`TryParse` pair for one input type.
fn parsable(
    code: &mut CodeBuilder,
    name: &str,
    datatype: &str,
    input: &str,
    predicate: Option<&str>,
) {
    code.line(format!(
        "public static {name} Parse({input} s, System.IFormatProvider? provider) => new({datatype}.Parse(s, provider));"
    ));
    code.open(format!(
        "public static bool TryParse({input} s, System.IFormatProvider? provider, out {name} result)"
    ));
    match predicate {
        // a parsed but invalid value must not throw from TryParse
        Some(_) => code.line(format!(
            "if ({datatype}.TryParse(s, provider, out var dtResult)) return {name}.Try(dtResult, out result);"
        )),
        None => code.line(format!(
            "if ({datatype}.TryParse(s, provider, out var dtResult)) {{ result = new(dtResult); return true; }}"
        )),
    };
    code.line("result = default;");
    code.line("return false;");
    code.end_scope();
}
