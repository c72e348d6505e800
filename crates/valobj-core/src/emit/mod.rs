//! C# emission for accepted value objects.
//!
//! One call produces one complete, self-contained compilation unit:
//!
//! ```text
//! // <auto-generated/>
//! #nullable enable
//! #pragma warning disable CS8604 ...
//! namespace Shop.Domain
//! {
//!     [System.CodeDom.Compiler.GeneratedCode("valobj", "0.3.0")]
//!     [System.Diagnostics.DebuggerDisplay("Value = {Value}")]
//!     readonly partial record struct ProductId : System.IComparable<ProductId>
//!     {
//!         ...
//!     }
//! }
//! #pragma warning restore CS8604 ...
//! #nullable restore
//! ```
//!
//! The emitter trusts its input: everything it receives went through
//! [`review`](crate::review::review), so it performs no validation and
//! cannot fail.
//!
//! - [`single`] writes single-value bodies
//! - [`multi`] writes multi-value bodies
//! - [`runtime`] writes the support unit the generated code depends on

pub mod builder;
mod multi;
mod runtime;
mod single;

pub use builder::CodeBuilder;
pub use runtime::{RUNTIME_HINT_NAME, emit_runtime};

use crate::capability::InterfaceSet;
use crate::config::GeneratorConfig;
use crate::review::{Accepted, Model};

const NULLABLE_WARNING: &str = "CS8604 // Possible null reference argument for parameter";

/// Emit the compilation unit for an accepted value object.
pub fn emit(accepted: &Accepted<'_>, config: &GeneratorConfig) -> String {
    let mut code = CodeBuilder::new();
    file_header(&mut code);
    code.open(format!("namespace {}", accepted.namespace));

    match &accepted.model {
        Model::Single { datatype, options } => {
            single::emit(&mut code, accepted, datatype, options, config);
        }
        Model::Multi { fields, options } => {
            multi::emit(&mut code, accepted, fields, options, config);
        }
    }

    file_footer(&mut code);
    code.build()
}

fn file_header(code: &mut CodeBuilder) {
    code.line("// <auto-generated/>");
    code.line("#nullable enable");
    code.line(format!("#pragma warning disable {NULLABLE_WARNING}"));
}

fn file_footer(code: &mut CodeBuilder) {
    code.close_all();
    code.line(format!("#pragma warning restore {NULLABLE_WARNING}"));
    code.line("#nullable restore");
}

/// Attributes, type header with marker list, and the opening brace.
fn type_header(
    code: &mut CodeBuilder,
    accepted: &Accepted<'_>,
    datatype: &str,
    debugger_display: &str,
    config: &GeneratorConfig,
) {
    let descriptor = accepted.descriptor;

    code.line(format!(
        "[System.CodeDom.Compiler.GeneratedCode(\"{}\", \"{}\")]",
        config.tool_name, config.tool_version
    ));
    code.line(format!(
        "[System.Diagnostics.DebuggerDisplay(\"{debugger_display}\")]"
    ));

    let record = if descriptor.is_record { "record " } else { "" };
    let mut header = format!("readonly partial {record}struct {}", descriptor.name);
    let markers = marker_list(accepted.header_markers(), &descriptor.name, datatype);
    if !markers.is_empty() {
        header.push_str(" : ");
        header.push_str(&markers);
    }
    code.open(header);
}

fn marker_list(markers: InterfaceSet, name: &str, datatype: &str) -> String {
    markers
        .iter()
        .map(|capability| capability.marker(name, datatype))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `throw new <runtime>.ValueObjectException(<message>)`
fn throw(config: &GeneratorConfig, message: &str) -> String {
    format!(
        "throw new {}.ValueObjectException({message})",
        config.runtime_namespace
    )
}

/// Disabled default constructor
fn default_constructor(code: &mut CodeBuilder, name: &str, config: &GeneratorConfig) {
    code.line(format!(
        "public {name}() => {};",
        throw(
            config,
            &format!("\"Do not call the default constructor for ValueObject '{name}'.\"")
        )
    ));
}
