//! Host-side view of an annotated type declaration.
//!
//! This is what the host toolchain hands over after parsing and binding: the
//! attribute and its arguments, the containing namespace, the base list and
//! the member list with modifiers. Nothing here is validated; the
//! [`validation`](crate::validation) frontend turns it into a
//! [`Descriptor`](crate::Descriptor).
//!
//! # Example (TOML)
//!
//! ```toml
//! name = "ProductId"
//! namespace = "Shop.Domain"
//! kind = "record_struct"
//! interfaces = ["IComparable<ProductId>"]
//!
//! [attribute.value_object]
//! datatype = "int"
//! options = ["ImplicitFrom", "Constructor"]
//! ```

use crate::options::{MultiValueObjectOption, ValueObjectOption};
use serde::{Deserialize, Serialize};

/// An annotated type declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Type identifier
    pub name: String,

    /// Containing namespace; `None` for the global namespace
    #[serde(default)]
    pub namespace: Option<String>,

    /// `struct` or `record struct`
    #[serde(default)]
    pub kind: DeclarationKind,

    /// The value-object attribute and its arguments
    pub attribute: AttributeUsage,

    /// Base list as written (`IComparable<ProductId>`, ...)
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Declared members
    #[serde(default)]
    pub members: Vec<Member>,

    /// Location of the declaration
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl TypeDeclaration {
    /// A `[ValueObject<T>]` record struct in the global namespace
    pub fn value_object(name: impl Into<String>, datatype: Option<&str>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind: DeclarationKind::RecordStruct,
            attribute: AttributeUsage::ValueObject {
                datatype: datatype.map(str::to_string),
                options: Vec::new(),
            },
            interfaces: Vec::new(),
            members: Vec::new(),
            location: None,
        }
    }

    /// A `[MultiValueObject]` record struct in the global namespace
    pub fn multi_value_object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind: DeclarationKind::RecordStruct,
            attribute: AttributeUsage::MultiValueObject {
                options: Vec::new(),
            },
            interfaces: Vec::new(),
            members: Vec::new(),
            location: None,
        }
    }

    /// Set the containing namespace
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the declaration kind
    pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
        self.kind = kind;
        self
    }

    /// Add `[ValueObject]` options; ignored for multi-value declarations
    pub fn with_options(mut self, extra: &[ValueObjectOption]) -> Self {
        if let AttributeUsage::ValueObject { options, .. } = &mut self.attribute {
            options.extend_from_slice(extra);
        }
        self
    }

    /// Add `[MultiValueObject]` options; ignored for single-value declarations
    pub fn with_multi_options(mut self, extra: &[MultiValueObjectOption]) -> Self {
        if let AttributeUsage::MultiValueObject { options } = &mut self.attribute {
            options.extend_from_slice(extra);
        }
        self
    }

    /// Add a base-list entry
    pub fn with_interface(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a member
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Set the declaration location
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Whether this is the record variant
    pub fn is_record(&self) -> bool {
        matches!(self.kind, DeclarationKind::RecordStruct)
    }

    /// Declared methods
    pub fn methods(&self) -> impl Iterator<Item = MethodDeclaration<'_>> {
        self.members.iter().filter_map(|member| match member {
            Member::Method {
                name,
                is_static,
                is_partial,
                return_type,
                parameters,
                ..
            } => Some(MethodDeclaration {
                name,
                is_static: *is_static,
                is_partial: *is_partial,
                return_type,
                parameters,
            }),
            Member::Property { .. } => None,
        })
    }
}

/// Kind of the annotated type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `partial struct`
    Struct,
    /// `partial record struct`
    #[default]
    RecordStruct,
}

/// The value-object attribute applied to the declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeUsage {
    /// `[ValueObject<T>]` / `[ValueObject(typeof(T))]`
    ValueObject {
        /// Wrapped datatype; `None` when the host could not resolve it
        #[serde(default)]
        datatype: Option<String>,
        #[serde(default)]
        options: Vec<ValueObjectOption>,
    },
    /// `[MultiValueObject]`
    MultiValueObject {
        #[serde(default)]
        options: Vec<MultiValueObjectOption>,
    },
}

/// A declared member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    /// A method declaration
    Method {
        name: String,
        #[serde(default)]
        is_static: bool,
        #[serde(default)]
        is_partial: bool,
        return_type: String,
        #[serde(default)]
        parameters: Vec<Parameter>,
        #[serde(default)]
        location: Option<SourceLocation>,
    },
    /// A property declaration
    Property {
        name: String,
        type_name: String,
        #[serde(default = "default_true")]
        is_public: bool,
        #[serde(default = "default_true")]
        is_partial: bool,
        #[serde(default = "default_accessors")]
        accessors: Vec<Accessor>,
        #[serde(default)]
        returns_by_ref: bool,
        /// Whether the property type is a value type (struct)
        #[serde(default)]
        is_value_type: bool,
        #[serde(default)]
        location: Option<SourceLocation>,
    },
}

impl Member {
    /// `public partial T Name { get; }`
    pub fn property(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Member::Property {
            name: name.into(),
            type_name: type_name.into(),
            is_public: true,
            is_partial: true,
            accessors: default_accessors(),
            returns_by_ref: false,
            is_value_type: false,
            location: None,
        }
    }

    /// `public static R Name(params)`
    pub fn static_method(
        name: impl Into<String>,
        return_type: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Member::Method {
            name: name.into(),
            is_static: true,
            is_partial: false,
            return_type: return_type.into(),
            parameters,
            location: None,
        }
    }

    /// `public static partial R Name(params);`
    pub fn partial_static_method(
        name: impl Into<String>,
        return_type: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Member::Method {
            name: name.into(),
            is_static: true,
            is_partial: true,
            return_type: return_type.into(),
            parameters,
            location: None,
        }
    }

    /// Mark a property type as a value type
    pub fn value_type(mut self) -> Self {
        if let Member::Property { is_value_type, .. } = &mut self {
            *is_value_type = true;
        }
        self
    }

    /// Replace a property's accessor list
    pub fn with_accessors(mut self, list: &[Accessor]) -> Self {
        if let Member::Property { accessors, .. } = &mut self {
            *accessors = list.to_vec();
        }
        self
    }

    /// Mark a property as returning by reference
    pub fn by_ref(mut self) -> Self {
        if let Member::Property { returns_by_ref, .. } = &mut self {
            *returns_by_ref = true;
        }
        self
    }

    /// Set the member location
    pub fn at(mut self, at: SourceLocation) -> Self {
        match &mut self {
            Member::Method { location, .. } | Member::Property { location, .. } => {
                *location = Some(at);
            }
        }
        self
    }
}

fn default_true() -> bool {
    true
}

fn default_accessors() -> Vec<Accessor> {
    vec![Accessor::Get]
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Property accessor keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessor {
    Get,
    Set,
    Init,
}

/// Borrowed view of a [`Member::Method`]
#[derive(Debug, Clone, Copy)]
pub struct MethodDeclaration<'a> {
    pub name: &'a str,
    pub is_static: bool,
    pub is_partial: bool,
    pub return_type: &'a str,
    pub parameters: &'a [Parameter],
}

/// Position in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    #[serde(default = "default_column")]
    pub column: u32,
}

fn default_column() -> u32 {
    1
}

impl SourceLocation {
    /// Create a location
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
