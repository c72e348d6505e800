//! Generation pass.
//!
//! [`Generator::generate`] runs one declaration through the whole pipeline:
//!
//! ```text
//! TypeDeclaration ─describe→ Descriptor ─review→ Accepted ─emit→ GeneratedUnit
//!                                          └──→ Rejected(diagnostics)
//! ```
//!
//! Declarations are independent of each other, so [`Generator::generate_all`]
//! fans them out over the rayon pool and returns the outcomes in input order.

use crate::config::GeneratorConfig;
use crate::declaration::TypeDeclaration;
use crate::diagnostics::Diagnostic;
use crate::emit::{RUNTIME_HINT_NAME, emit, emit_runtime};
use crate::error::GeneratorResult;
use crate::review::{Review, review};
use crate::validation::describe;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// One generated compilation unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// Output unit name (`{TypeName}_ValueObject.g.cs`)
    pub hint_name: String,

    /// Complete source text
    pub source: String,
}

/// Result of generating one declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Accepted(GeneratedUnit),
    Rejected { diagnostics: Vec<Diagnostic> },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    /// The generated unit, if accepted
    pub fn unit(&self) -> Option<&GeneratedUnit> {
        match self {
            Outcome::Accepted(unit) => Some(unit),
            Outcome::Rejected { .. } => None,
        }
    }

    /// Diagnostics raised; empty when accepted
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Outcome::Accepted(_) => &[],
            Outcome::Rejected { diagnostics } => diagnostics,
        }
    }
}

/// Value-object generator
///
/// Holds only its configuration; every call is independent and
/// deterministic.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator after validating the configuration
    pub fn new(config: GeneratorConfig) -> GeneratorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the unit for one declaration, or report why it cannot be.
    pub fn generate(&self, declaration: &TypeDeclaration) -> Outcome {
        let descriptor = describe(declaration);

        match review(&descriptor) {
            Review::Accepted(accepted) => {
                let source = emit(&accepted, &self.config);
                let hint_name = descriptor.hint_name();
                debug!(
                    value_object = %descriptor.name,
                    hint_name = %hint_name,
                    bytes = source.len(),
                    "Generated value object"
                );
                Outcome::Accepted(GeneratedUnit { hint_name, source })
            }
            Review::Rejected(diagnostics) => {
                for diagnostic in &diagnostics {
                    warn!(
                        value_object = %diagnostic.subject,
                        code = diagnostic.code(),
                        "{}",
                        diagnostic.message()
                    );
                }
                Outcome::Rejected { diagnostics }
            }
        }
    }

    /// Generate every declaration in parallel; outcomes keep input order.
    pub fn generate_all(&self, declarations: &[TypeDeclaration]) -> Vec<Outcome> {
        let outcomes: Vec<Outcome> = declarations
            .par_iter()
            .map(|declaration| self.generate(declaration))
            .collect();

        let accepted = outcomes.iter().filter(|o| o.is_accepted()).count();
        info!(
            total = outcomes.len(),
            accepted,
            rejected = outcomes.len() - accepted,
            "Generation pass complete"
        );

        outcomes
    }

    /// The runtime support unit for this configuration
    pub fn runtime_unit(&self) -> GeneratedUnit {
        GeneratedUnit {
            hint_name: RUNTIME_HINT_NAME.to_string(),
            source: emit_runtime(&self.config),
        }
    }
}
