//! Capability resolution.
//!
//! Maps the requested options, the marker interfaces already declared on the
//! type, the wrapped datatype and the record flag to the exact set of
//! capability interfaces the emitter must implement.
//!
//! Rules for single-value objects:
//!
//! ```text
//! self-equatable    plain struct only (records synthesize it)
//! value-equatable   ImplicitFrom | ImplicitAs          | declared IEquatable<T>
//! self-comparable   Comparable                         | declared IComparable<Self>
//! value-comparable  Comparable & (ImplicitFrom|As)     | declared IComparable<T>
//! parsable          Parsable                           | declared I(Span)Parsable<Self>
//! span-parsable     always together with parsable
//! ```
//!
//! Multi-value objects only ever resolve self-equatable (plain struct only).

use crate::options::ValueObjectOptions;
use crate::typename::{canonical, is_string, same_type, split_generic};

/// One capability interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// `IEquatable<Self>`
    SelfEquatable,
    /// `IEquatable<T>` for the wrapped datatype
    ValueEquatable,
    /// `IComparable<Self>`
    SelfComparable,
    /// `IComparable<T>` for the wrapped datatype
    ValueComparable,
    /// `IParsable<Self>`
    Parsable,
    /// `ISpanParsable<Self>`
    SpanParsable,
}

impl Capability {
    /// All capabilities in emission order
    pub const ALL: [Capability; 6] = [
        Capability::SelfEquatable,
        Capability::ValueEquatable,
        Capability::SelfComparable,
        Capability::ValueComparable,
        Capability::Parsable,
        Capability::SpanParsable,
    ];

    fn bit(&self) -> u8 {
        match self {
            Capability::SelfEquatable => 0x01,
            Capability::ValueEquatable => 0x02,
            Capability::SelfComparable => 0x04,
            Capability::ValueComparable => 0x08,
            Capability::Parsable => 0x10,
            Capability::SpanParsable => 0x20,
        }
    }

    /// Fully qualified marker interface for a type and its datatype
    pub fn marker(&self, name: &str, datatype: &str) -> String {
        match self {
            Capability::SelfEquatable => format!("System.IEquatable<{name}>"),
            Capability::ValueEquatable => format!("System.IEquatable<{datatype}>"),
            Capability::SelfComparable => format!("System.IComparable<{name}>"),
            Capability::ValueComparable => format!("System.IComparable<{datatype}>"),
            Capability::Parsable => format!("System.IParsable<{name}>"),
            Capability::SpanParsable => format!("System.ISpanParsable<{name}>"),
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::SelfEquatable => write!(f, "self-equatable"),
            Capability::ValueEquatable => write!(f, "value-equatable"),
            Capability::SelfComparable => write!(f, "self-comparable"),
            Capability::ValueComparable => write!(f, "value-comparable"),
            Capability::Parsable => write!(f, "parsable"),
            Capability::SpanParsable => write!(f, "span-parsable"),
        }
    }
}

/// Set of capabilities, iterated in [`Capability::ALL`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InterfaceSet(u8);

impl InterfaceSet {
    pub const EMPTY: InterfaceSet = InterfaceSet(0);

    /// Set containing the given capabilities
    pub fn of(capabilities: &[Capability]) -> Self {
        capabilities
            .iter()
            .fold(Self::EMPTY, |set, capability| set.with(*capability))
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Copy of this set with `capability` added
    #[must_use]
    pub fn with(self, capability: Capability) -> Self {
        Self(self.0 | capability.bit())
    }

    pub fn insert(&mut self, capability: Capability) {
        self.0 |= capability.bit();
    }

    /// Capabilities in `self` that are not in `other`
    #[must_use]
    pub fn difference(self, other: InterfaceSet) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(*capability))
    }

    /// Detect capability markers in a declared base list.
    ///
    /// A generic argument naming the type itself (short or namespace
    /// qualified) selects the self-level capability; one naming the wrapped
    /// datatype selects the value-level capability. Anything else is ignored.
    pub fn detect(interfaces: &[String], name: &str, datatype: Option<&str>) -> Self {
        let mut declared = Self::EMPTY;

        for interface in interfaces {
            let Some((base, argument)) = split_generic(interface) else {
                continue;
            };
            let is_self = names_type(argument, name);
            let is_value = datatype.is_some_and(|d| same_type(argument, d));

            let capability = match (base, is_self, is_value) {
                ("IEquatable", true, _) => Capability::SelfEquatable,
                ("IEquatable", false, true) => Capability::ValueEquatable,
                ("IComparable", true, _) => Capability::SelfComparable,
                ("IComparable", false, true) => Capability::ValueComparable,
                ("IParsable", true, _) => Capability::Parsable,
                ("ISpanParsable", true, _) => Capability::SpanParsable,
                _ => continue,
            };
            declared.insert(capability);
        }

        declared
    }
}

impl FromIterator<Capability> for InterfaceSet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::EMPTY, |set, capability| set.with(capability))
    }
}

fn names_type(argument: &str, name: &str) -> bool {
    let argument = canonical(argument);
    argument == name || argument.ends_with(&format!(".{name}"))
}

/// Why a capability request cannot be honored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityConflict {
    /// Parsing was requested for a `string` datatype
    StringNotParsable,
}

/// Add the options a user expressed structurally through marker interfaces.
pub fn infer_options(options: ValueObjectOptions, declared: InterfaceSet) -> ValueObjectOptions {
    let mut effective = options;
    if declared.contains(Capability::SelfComparable) {
        effective.comparable = true;
    }
    if declared.contains(Capability::Parsable) || declared.contains(Capability::SpanParsable) {
        effective.parsable = true;
    }
    effective
}

/// Resolve the capabilities of a single-value object.
///
/// `options` are the requested options after [`infer_options`]. Requesting
/// parsing for a `string` datatype is rejected.
pub fn resolve_single(
    options: ValueObjectOptions,
    declared: InterfaceSet,
    datatype: &str,
    is_record: bool,
) -> Result<InterfaceSet, CapabilityConflict> {
    if options.parsable && is_string(datatype) {
        return Err(CapabilityConflict::StringNotParsable);
    }

    let mut resolved = InterfaceSet::EMPTY;

    if !is_record {
        resolved.insert(Capability::SelfEquatable);
    }
    if options.has_conversion() || declared.contains(Capability::ValueEquatable) {
        resolved.insert(Capability::ValueEquatable);
    }
    if options.comparable || declared.contains(Capability::SelfComparable) {
        resolved.insert(Capability::SelfComparable);
    }
    if (options.comparable && options.has_conversion())
        || declared.contains(Capability::ValueComparable)
    {
        resolved.insert(Capability::ValueComparable);
    }
    if options.parsable
        || declared.contains(Capability::Parsable)
        || declared.contains(Capability::SpanParsable)
    {
        resolved.insert(Capability::Parsable);
        resolved.insert(Capability::SpanParsable);
    }

    Ok(resolved)
}

/// Resolve the capabilities of a multi-value object.
pub fn resolve_multi(is_record: bool) -> InterfaceSet {
    if is_record {
        InterfaceSet::EMPTY
    } else {
        InterfaceSet::of(&[Capability::SelfEquatable])
    }
}
