//! Generate command: write one `.g.cs` file per accepted declaration

use crate::manifest::{DEFAULT_MANIFEST, Manifest, report};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use valobj_core::{GeneratedUnit, Generator, GeneratorConfig, Outcome};

/// Command-line overrides for the manifest's `[generator]` table
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub runtime_namespace: Option<String>,
    pub emit_runtime: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(namespace) = &self.runtime_namespace {
            config.runtime_namespace = namespace.clone();
        }
        if self.emit_runtime {
            config.emit_runtime = true;
        }
    }
}

/// Generate command implementation
pub fn run(output: &str, manifest_path: Option<String>, overrides: &ConfigOverrides) -> Result<()> {
    let manifest_path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
    let mut manifest = Manifest::from_file(&manifest_path)?;
    overrides.apply(&mut manifest.generator);
    manifest.validate()?;

    println!(
        "Generating {} value object(s) from {manifest_path}",
        manifest.declarations.len()
    );

    let output_dir = Path::new(output);
    let (written, rejected) = generate_into(&manifest, output_dir)?;

    for path in &written {
        println!("✓ Generated: {}", path.display());
    }

    if rejected > 0 {
        anyhow::bail!("{rejected} declaration(s) rejected");
    }

    Ok(())
}

/// Generate every declaration of `manifest` into `output_dir`.
///
/// Accepted units are written even when other declarations are rejected.
/// Returns the written paths and the number of rejected declarations.
pub fn generate_into(manifest: &Manifest, output_dir: &Path) -> Result<(Vec<PathBuf>, usize)> {
    let generator = Generator::new(manifest.generator.clone())?;
    let outcomes = generator.generate_all(&manifest.declarations);
    let rejected = report(&outcomes);

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {output_dir:?}"))?;

    let mut written = outcomes
        .iter()
        .filter_map(Outcome::unit)
        .map(|unit| write_unit(unit, output_dir))
        .collect::<Result<Vec<_>>>()?;

    if generator.config().emit_runtime {
        written.push(write_unit(&generator.runtime_unit(), output_dir)?);
    }

    tracing::info!(
        written = written.len(),
        rejected,
        output = %output_dir.display(),
        "Wrote generated units"
    );

    Ok((written, rejected))
}

/// Runtime command implementation: write only the support unit
pub fn runtime(output: &str, runtime_namespace: Option<String>) -> Result<()> {
    let mut config = GeneratorConfig::default();
    if let Some(namespace) = runtime_namespace {
        config.runtime_namespace = namespace;
    }
    let generator = Generator::new(config).context("Invalid runtime namespace")?;

    let output_dir = Path::new(output);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {output_dir:?}"))?;

    let path = write_unit(&generator.runtime_unit(), output_dir)?;
    println!("✓ Generated: {}", path.display());

    Ok(())
}

fn write_unit(unit: &GeneratedUnit, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(&unit.hint_name);
    std::fs::write(&path, &unit.source)
        .with_context(|| format!("Failed to write {path:?}"))?;
    Ok(path)
}
