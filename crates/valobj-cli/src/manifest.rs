//! Manifest parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use valobj_core::{Generator, GeneratorConfig, Outcome, TypeDeclaration};

/// Declaration manifest: generator settings plus the annotated types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default, rename = "declaration")]
    pub declarations: Vec<TypeDeclaration>,
}

impl Manifest {
    /// Load manifest from a file; `.json` files are read as JSON, anything
    /// else as TOML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {path:?}"))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parse manifest from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Parse manifest from JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        self.generator
            .validate()
            .context("Invalid [generator] section")?;

        let mut seen = HashSet::new();
        for declaration in &self.declarations {
            if declaration.name.trim().is_empty() {
                anyhow::bail!("Declaration name cannot be empty");
            }
            // one output file per type name
            if !seen.insert(declaration.name.as_str()) {
                anyhow::bail!("Duplicate declaration: {}", declaration.name);
            }
        }

        Ok(())
    }
}

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "valobj.toml";

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let manifest_path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
    println!("Checking manifest: {manifest_path}");

    let manifest = Manifest::from_file(&manifest_path)?;
    manifest.validate()?;

    let generator = Generator::new(manifest.generator.clone())?;
    let outcomes = generator.generate_all(&manifest.declarations);
    let rejected = report(&outcomes);

    println!("✓ Declarations: {}", manifest.declarations.len());
    println!("✓ Runtime namespace: {}", generator.config().runtime_namespace);

    if rejected > 0 {
        anyhow::bail!("{rejected} declaration(s) rejected");
    }
    println!("\nManifest is valid!");

    Ok(())
}

/// Print every diagnostic to stderr; returns the number of rejected declarations
pub fn report(outcomes: &[Outcome]) -> usize {
    let mut rejected = 0;
    for outcome in outcomes {
        if !outcome.is_accepted() {
            rejected += 1;
        }
        for diagnostic in outcome.diagnostics() {
            eprintln!("{diagnostic}");
        }
    }
    rejected
}
