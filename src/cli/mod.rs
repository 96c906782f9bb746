//! CLI tools for pipegen
//!
//! - `generate`: Render a pipeline config into a Jenkinsfile
//! - `check`: Validate a pipeline config
//! - `sample`: Print the bundled Flask pipeline
//! - `completions`: Generate shell completions

pub mod check;
pub mod completions;
pub mod generate;
pub mod sample;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use pipegen::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI arguments for pipegen
#[derive(Parser, Debug)]
#[command(name = "pipegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a YAML or JSON pipeline config into a Jenkinsfile
    Generate {
        /// Pipeline config file (.yaml, .yml or .json)
        file: PathBuf,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Validate the config before rendering
        #[arg(long)]
        strict: bool,
    },

    /// Validate a pipeline config
    Check {
        /// Pipeline config file (.yaml, .yml or .json)
        file: PathBuf,
    },

    /// Print the bundled Flask pipeline
    Sample {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SampleFormatArg::Jenkinsfile)]
        format: SampleFormatArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SampleFormatArg {
    Jenkinsfile,
    Yaml,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    Args::command()
}

/// Writes `content` to `output`, or prints it when no file is given
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write to: {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

/// Parse and execute CLI arguments
pub fn run(config: &Config) -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Generate {
            file,
            output,
            strict,
        } => {
            let jenkinsfile = generate::generate(&file, strict || config.strict)?;
            let output = output.or_else(|| config.output.clone());
            emit(&jenkinsfile, output.as_deref())?;
        }
        Command::Check { file } => {
            let pipeline = check::check_pipeline(&file)?;
            println!("{}: OK - {}", file.display(), pipeline);
        }
        Command::Sample { format, output } => {
            let sample_format = match format {
                SampleFormatArg::Jenkinsfile => sample::SampleFormat::Jenkinsfile,
                SampleFormatArg::Yaml => sample::SampleFormat::Yaml,
                SampleFormatArg::Json => sample::SampleFormat::Json,
            };
            let text = sample::render_sample(sample_format)?;
            emit(&text, output.as_deref())?;
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let completions = completions::generate_completions(shell_enum)?;
            emit(&completions, output.as_deref())?;
        }
    }

    Ok(())
}
