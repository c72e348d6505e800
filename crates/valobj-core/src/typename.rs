//! C# type-name handling.
//!
//! The host hands over type names as written in source, so the same type may
//! arrive as `int`, `System.Int32` or `global::System.Int32`. Everything that
//! compares type names (signature matching, marker-interface detection, the
//! string/parsable check) goes through [`canonical`].
//!
//! # Keyword Aliases
//!
//! | Keyword | System type |
//! |---------|-------------|
//! | `bool` | `System.Boolean` |
//! | `int` | `System.Int32` |
//! | `long` | `System.Int64` |
//! | `string` | `System.String` |
//! | `...` | see [`ALIASES`] |

/// Keyword alias for a `System` type
struct TypeAlias {
    keyword: &'static str,
    system: &'static str,
}

const ALIASES: &[TypeAlias] = &[
    TypeAlias {
        keyword: "bool",
        system: "System.Boolean",
    },
    TypeAlias {
        keyword: "byte",
        system: "System.Byte",
    },
    TypeAlias {
        keyword: "sbyte",
        system: "System.SByte",
    },
    TypeAlias {
        keyword: "char",
        system: "System.Char",
    },
    TypeAlias {
        keyword: "decimal",
        system: "System.Decimal",
    },
    TypeAlias {
        keyword: "double",
        system: "System.Double",
    },
    TypeAlias {
        keyword: "float",
        system: "System.Single",
    },
    TypeAlias {
        keyword: "int",
        system: "System.Int32",
    },
    TypeAlias {
        keyword: "uint",
        system: "System.UInt32",
    },
    TypeAlias {
        keyword: "nint",
        system: "System.IntPtr",
    },
    TypeAlias {
        keyword: "nuint",
        system: "System.UIntPtr",
    },
    TypeAlias {
        keyword: "long",
        system: "System.Int64",
    },
    TypeAlias {
        keyword: "ulong",
        system: "System.UInt64",
    },
    TypeAlias {
        keyword: "short",
        system: "System.Int16",
    },
    TypeAlias {
        keyword: "ushort",
        system: "System.UInt16",
    },
    TypeAlias {
        keyword: "object",
        system: "System.Object",
    },
    TypeAlias {
        keyword: "string",
        system: "System.String",
    },
];

const GLOBAL_PREFIX: &str = "global::";

/// Reserved C# keywords; contextual keywords are valid identifiers
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Canonical spelling of a type name.
///
/// Keyword aliases map to their `System.*` name, `global::` is stripped and
/// surrounding whitespace removed. Unknown names are returned trimmed.
///
/// # Examples
///
/// ```
/// use valobj_core::typename::canonical;
///
/// assert_eq!(canonical("int"), "System.Int32");
/// assert_eq!(canonical("global::System.Int32"), "System.Int32");
/// assert_eq!(canonical(" Shop.ProductId "), "Shop.ProductId");
/// ```
pub fn canonical(type_name: &str) -> String {
    let trimmed = type_name.trim();
    let trimmed = trimmed.strip_prefix(GLOBAL_PREFIX).unwrap_or(trimmed);

    ALIASES
        .iter()
        .find(|alias| alias.keyword == trimmed)
        .map(|alias| alias.system.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Whether two type names denote the same type.
pub fn same_type(a: &str, b: &str) -> bool {
    canonical(a) == canonical(b)
}

/// Whether the type is the textual `string` / `System.String` type.
pub fn is_string(type_name: &str) -> bool {
    canonical(type_name) == "System.String"
}

/// Split a single-argument generic like `System.IEquatable<int>` into its
/// base name (without `System.`/`global::` qualification) and its argument.
///
/// Returns `None` for non-generic names.
pub fn split_generic(type_name: &str) -> Option<(&str, &str)> {
    let trimmed = type_name.trim();
    let open = trimmed.find('<')?;
    let inner = trimmed[open + 1..].strip_suffix('>')?;
    let base = trimmed[..open].trim();
    let base = base.strip_prefix(GLOBAL_PREFIX).unwrap_or(base);
    let base = base.strip_prefix("System.").unwrap_or(base);
    Some((base, inner.trim()))
}

/// Lower-case the first character (`Id` → `id`, `ProductName` → `productName`).
///
/// # Examples
///
/// ```
/// use valobj_core::typename::lower_first_char;
///
/// assert_eq!(lower_first_char("ProductName"), "productName");
/// assert_eq!(lower_first_char(""), "");
/// ```
pub fn lower_first_char(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Whether `name` is a reserved C# keyword.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// `name` as a usable identifier: reserved keywords get the verbatim `@`
/// prefix (`string` → `@string`).
pub fn identifier(name: &str) -> String {
    if is_keyword(name) {
        format!("@{name}")
    } else {
        name.to_string()
    }
}

/// `type_name` as a nullable type; already-nullable names are kept as is.
///
/// # Examples
///
/// ```
/// use valobj_core::typename::nullable;
///
/// assert_eq!(nullable("int"), "int?");
/// assert_eq!(nullable("string?"), "string?");
/// ```
pub fn nullable(type_name: &str) -> String {
    let trimmed = type_name.trim();
    if trimmed.ends_with('?') {
        trimmed.to_string()
    } else {
        format!("{trimmed}?")
    }
}

#[cfg(test)]
#[path = "typename/typename_tests.rs"]
mod typename_tests;
