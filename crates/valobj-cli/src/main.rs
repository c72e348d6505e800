//! valobj CLI - Value-object code generator
//!
//! Commands:
//! - `valobj generate` - Generate C# value objects from a manifest
//! - `valobj check` - Validate a manifest and report diagnostics
//! - `valobj runtime` - Write the runtime support unit

use clap::{ArgAction, Parser, Subcommand};

mod generate;
mod logging;
mod manifest;

#[derive(Parser)]
#[command(name = "valobj")]
#[command(author, version, about = "Value-object code generator for C#", long_about = None)]
struct Cli {
    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate value objects from a manifest
    Generate {
        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// Path to the manifest (default: ./valobj.toml)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Override the runtime support namespace
        #[arg(long)]
        runtime_namespace: Option<String>,

        /// Also write the runtime support unit
        #[arg(long)]
        emit_runtime: bool,
    },

    /// Validate a manifest and report diagnostics
    Check {
        /// Path to the manifest (default: ./valobj.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Write the runtime support unit
    Runtime {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: String,

        /// Runtime support namespace
        #[arg(long)]
        runtime_namespace: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate {
            output,
            manifest,
            runtime_namespace,
            emit_runtime,
        } => {
            let overrides = generate::ConfigOverrides {
                runtime_namespace,
                emit_runtime,
            };
            generate::run(&output, manifest, &overrides)?;
        }
        Commands::Check { manifest } => {
            manifest::check(manifest)?;
        }
        Commands::Runtime {
            output,
            runtime_namespace,
        } => {
            generate::runtime(&output, runtime_namespace)?;
        }
    }

    Ok(())
}
