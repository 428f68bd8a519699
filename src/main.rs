use clap::{Parser, Subcommand};
use component_spec::Result;
use component_spec::spec;

use anyhow::Context;
use std::fs::File;

#[derive(Parser)]
#[command(name = "component-spec")]
#[command(about = "Pipeline component specification checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a component specification and report whether it is valid.
    Check {
        #[arg(long)]
        spec: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check { spec: path } => {
            let file = File::open(&path).with_context(|| format!("open spec file {}", path))?;
            let specification = spec::read_single_specification(file)
                .with_context(|| format!("invalid spec file {}", path))?;

            println!(
                "OK {}: cmd has {} arg(s), {} env var(s), {} mountpoint(s)",
                path,
                specification.run.cmd.len(),
                specification.run.env.len(),
                specification.run.mountpoints.len()
            );
        }
    }

    Ok(())
}
