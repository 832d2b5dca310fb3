mod check;
mod generate;
mod list;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use exgen::config::{GeneratorConfig, load_config};

#[derive(Parser)]
#[command(name = "exgen")]
#[command(about = "Generate a multi-module Maven exercise project from exercises.yml", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Exercise definition file (default: exercises.yml)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate every module (the default)
    Generate {
        #[command(flatten)]
        source: InputArgs,
        /// Output root for the aggregate pom and exercises/ directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Report what generation would record, without writing anything
    Check {
        #[command(flatten)]
        source: InputArgs,
    },
    /// List the modules the definition file describes
    List {
        #[command(flatten)]
        source: InputArgs,
    },
}

pub fn run(cli: Cli) {
    match cli.command {
        None => generate::generate(resolve_config(&InputArgs::default(), None)),
        Some(Commands::Generate { source, out }) => {
            generate::generate(resolve_config(&source, out))
        }
        Some(Commands::Check { source }) => check::check_definitions(resolve_config(&source, None)),
        Some(Commands::List { source }) => list::list_modules(resolve_config(&source, None)),
    }
}

fn resolve_config(source: &InputArgs, out: Option<PathBuf>) -> GeneratorConfig {
    let mut config = load_config();
    if let Some(input) = &source.input {
        config.input = input.clone();
    }
    if let Some(out) = out {
        config.output_dir = out;
    }
    config
}
