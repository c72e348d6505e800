//! Runtime support unit.
//!
//! Declares the exception type and attributes that generated code and
//! annotated declarations refer to. The options enums are written from
//! [`ValueObjectOption::ALL`] and [`MultiValueObjectOption::ALL`] so their bit
//! values cannot drift from the generator's own.

use super::CodeBuilder;
use crate::config::GeneratorConfig;
use crate::options::{MultiValueObjectOption, ValueObjectOption};

/// Hint name of the runtime support unit
pub const RUNTIME_HINT_NAME: &str = "ValueObject.Runtime.g.cs";

const ATTRIBUTE_USAGE: &str = "[System.AttributeUsage(System.AttributeTargets.Struct, AllowMultiple = false, Inherited = false)]";

/// Emit the runtime support unit into `config.runtime_namespace`.
pub fn emit_runtime(config: &GeneratorConfig) -> String {
    let mut code = CodeBuilder::new();
    code.line("// <auto-generated/>");
    code.line("#nullable enable");
    code.open(format!("namespace {}", config.runtime_namespace));

    let generated_code = format!(
        "[System.CodeDom.Compiler.GeneratedCode(\"{}\", \"{}\")]",
        config.tool_name, config.tool_version
    );

    code.line(&generated_code);
    code.line("[System.Serializable]");
    code.open("public class ValueObjectException : System.Exception");
    code.line("public ValueObjectException() { }");
    code.line("public ValueObjectException(string message) : base(message) { }");
    code.line(
        "public ValueObjectException(string message, System.Exception inner) : base(message, inner) { }",
    );
    code.end_scope();
    code.line("");

    code.line(&generated_code);
    code.line(ATTRIBUTE_USAGE);
    code.open("public sealed class ValueObjectAttribute : System.Attribute");
    code.open("public ValueObjectAttribute(System.Type dataType)");
    code.line("DataType = dataType;");
    code.line("Options = ValueObjectOptions.Constructor;");
    code.end_scope();
    code.line("public System.Type DataType { get; }");
    code.line("public ValueObjectOptions Options { get; set; }");
    code.end_scope();
    code.line("");

    code.line(&generated_code);
    code.line(ATTRIBUTE_USAGE);
    code.open("public sealed class ValueObjectAttribute<T> : System.Attribute");
    code.open("public ValueObjectAttribute()");
    code.line("DataType = typeof(T);");
    code.line("Options = ValueObjectOptions.Constructor;");
    code.end_scope();
    code.line("public System.Type DataType { get; }");
    code.line("public ValueObjectOptions Options { get; set; }");
    code.end_scope();
    code.line("");

    code.line(&generated_code);
    code.line(ATTRIBUTE_USAGE);
    code.open("public sealed class MultiValueObjectAttribute : System.Attribute");
    code.line(
        "public MultiValueObjectAttribute() { Options = MultiValueObjectOptions.Constructor; }",
    );
    code.line(
        "public MultiValueObjectAttribute(MultiValueObjectOptions options) { Options = options; }",
    );
    code.line("public MultiValueObjectOptions Options { get; }");
    code.end_scope();
    code.line("");

    let single: Vec<(String, u32)> = ValueObjectOption::ALL
        .iter()
        .map(|option| (option.to_string(), option.bit()))
        .collect();
    flags_enum(&mut code, "ValueObjectOptions", &single);
    code.line("");

    let multi: Vec<(String, u32)> = MultiValueObjectOption::ALL
        .iter()
        .map(|option| (option.to_string(), option.bit()))
        .collect();
    flags_enum(&mut code, "MultiValueObjectOptions", &multi);

    code.close_all();
    code.line("#nullable restore");
    code.build()
}

fn flags_enum(code: &mut CodeBuilder, name: &str, members: &[(String, u32)]) {
    code.line("[System.Flags]");
    code.open(format!("public enum {name}"));
    code.line("None = 0,");
    for (member, bit) in members {
        code.line(format!("{member} = 0x{bit:02X},"));
    }
    code.end_scope();
}
