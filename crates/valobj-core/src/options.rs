//! Capability flags requested through the value-object attributes.
//!
//! The attribute carries a list of option names; they fold into a struct of
//! named booleans so the rest of the generator never does bit arithmetic on
//! user input. An empty request means "constructor only".

use serde::{Deserialize, Serialize};

/// A single option of the `[ValueObject]` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueObjectOption {
    /// Implicit conversion from the raw value
    ImplicitFrom,
    /// Implicit conversion to the raw value
    ImplicitAs,
    /// Static `From` factory method
    ExplicitFrom,
    /// `ToString()` override returning the raw value as text
    ToString,
    /// Public primary constructor (default)
    Constructor,
    /// Ordering (`IComparable<T>` and relational operators)
    Comparable,
    /// `Parse`/`TryParse` for text and character spans
    Parsable,
}

impl ValueObjectOption {
    /// Bit value used by the runtime `ValueObjectOptions` enum
    pub fn bit(&self) -> u32 {
        match self {
            ValueObjectOption::ImplicitFrom => 0x01,
            ValueObjectOption::ImplicitAs => 0x02,
            ValueObjectOption::ExplicitFrom => 0x04,
            ValueObjectOption::ToString => 0x08,
            ValueObjectOption::Constructor => 0x10,
            ValueObjectOption::Comparable => 0x20,
            ValueObjectOption::Parsable => 0x40,
        }
    }

    /// All options in declaration order
    pub const ALL: [ValueObjectOption; 7] = [
        ValueObjectOption::ImplicitFrom,
        ValueObjectOption::ImplicitAs,
        ValueObjectOption::ExplicitFrom,
        ValueObjectOption::ToString,
        ValueObjectOption::Constructor,
        ValueObjectOption::Comparable,
        ValueObjectOption::Parsable,
    ];
}

impl std::fmt::Display for ValueObjectOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueObjectOption::ImplicitFrom => write!(f, "ImplicitFrom"),
            ValueObjectOption::ImplicitAs => write!(f, "ImplicitAs"),
            ValueObjectOption::ExplicitFrom => write!(f, "ExplicitFrom"),
            ValueObjectOption::ToString => write!(f, "ToString"),
            ValueObjectOption::Constructor => write!(f, "Constructor"),
            ValueObjectOption::Comparable => write!(f, "Comparable"),
            ValueObjectOption::Parsable => write!(f, "Parsable"),
        }
    }
}

/// A single option of the `[MultiValueObject]` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiValueObjectOption {
    /// Static `From` factory method over all fields
    ExplicitFrom,
    /// Public primary constructor (default)
    Constructor,
    /// `Deconstruct` method emitting all fields in order
    Deconstruct,
}

impl MultiValueObjectOption {
    /// Bit value used by the runtime `MultiValueObjectOptions` enum
    pub fn bit(&self) -> u32 {
        match self {
            MultiValueObjectOption::ExplicitFrom => 0x01,
            MultiValueObjectOption::Constructor => 0x02,
            MultiValueObjectOption::Deconstruct => 0x04,
        }
    }

    /// All options in declaration order
    pub const ALL: [MultiValueObjectOption; 3] = [
        MultiValueObjectOption::ExplicitFrom,
        MultiValueObjectOption::Constructor,
        MultiValueObjectOption::Deconstruct,
    ];
}

impl std::fmt::Display for MultiValueObjectOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultiValueObjectOption::ExplicitFrom => write!(f, "ExplicitFrom"),
            MultiValueObjectOption::Constructor => write!(f, "Constructor"),
            MultiValueObjectOption::Deconstruct => write!(f, "Deconstruct"),
        }
    }
}

/// Requested capabilities of a single-value object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValueObjectOptions {
    pub implicit_from: bool,
    pub implicit_as: bool,
    pub explicit_from: bool,
    pub to_string: bool,
    pub constructor: bool,
    pub comparable: bool,
    pub parsable: bool,
}

impl ValueObjectOptions {
    /// Fold attribute options, applying the constructor-only default when
    /// nothing was requested.
    pub fn from_options(options: &[ValueObjectOption]) -> Self {
        let mut result = Self::default();
        for option in options {
            match option {
                ValueObjectOption::ImplicitFrom => result.implicit_from = true,
                ValueObjectOption::ImplicitAs => result.implicit_as = true,
                ValueObjectOption::ExplicitFrom => result.explicit_from = true,
                ValueObjectOption::ToString => result.to_string = true,
                ValueObjectOption::Constructor => result.constructor = true,
                ValueObjectOption::Comparable => result.comparable = true,
                ValueObjectOption::Parsable => result.parsable = true,
            }
        }
        if result.is_empty() {
            result.constructor = true;
        }
        result
    }

    /// Whether no option is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a conversion from or to the raw value was requested
    pub fn has_conversion(&self) -> bool {
        self.implicit_from || self.implicit_as
    }
}

/// Requested capabilities of a multi-value object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MultiValueObjectOptions {
    pub explicit_from: bool,
    pub constructor: bool,
    pub deconstruct: bool,
}

impl MultiValueObjectOptions {
    /// Fold attribute options, applying the constructor-only default when
    /// nothing was requested.
    pub fn from_options(options: &[MultiValueObjectOption]) -> Self {
        let mut result = Self::default();
        for option in options {
            match option {
                MultiValueObjectOption::ExplicitFrom => result.explicit_from = true,
                MultiValueObjectOption::Constructor => result.constructor = true,
                MultiValueObjectOption::Deconstruct => result.deconstruct = true,
            }
        }
        if result.is_empty() {
            result.constructor = true;
        }
        result
    }

    /// Whether no option is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "options/options_tests.rs"]
mod options_tests;
