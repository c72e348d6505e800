//! valobj-core - Value-object code generation
//!
//! Turns annotated type declarations into C# value-object implementations:
//! - [`TypeDeclaration`] is the host's view of one annotated type
//! - [`Descriptor`] is its normalized form, built by [`validation::describe`]
//! - [`review::review`] checks well-formedness and resolves capabilities
//! - [`emit::emit`] writes the compilation unit
//! - [`Generator`] drives the whole pass, in parallel across declarations
//!
//! Malformed declarations never produce broken output; they produce
//! [`Diagnostic`]s instead.

mod capability;
mod config;
mod declaration;
mod descriptor;
mod diagnostics;
pub mod emit;
mod error;
mod generator;
mod options;
pub mod review;
pub mod typename;
pub mod validation;

pub use capability::{
    Capability, CapabilityConflict, InterfaceSet, infer_options, resolve_multi, resolve_single,
};
pub use config::GeneratorConfig;
pub use declaration::{
    Accessor, AttributeUsage, DeclarationKind, Member, MethodDeclaration, Parameter,
    SourceLocation, TypeDeclaration,
};
pub use descriptor::{Descriptor, FactoryStub, Field, Shape, ValidationPredicate};
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::{GeneratedUnit, Generator, Outcome};
pub use options::{
    MultiValueObjectOption, MultiValueObjectOptions, ValueObjectOption, ValueObjectOptions,
};
pub use review::{Accepted, Model, Review, ReviewState};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Diagnostic, DiagnosticKind, GeneratedUnit, Generator, GeneratorConfig, GeneratorError,
        GeneratorResult, Member, MultiValueObjectOption, Outcome, Parameter, SourceLocation,
        TypeDeclaration, ValueObjectOption,
    };
}
