//! CLI commands.
//!
//! Each command returns a process exit code and reports errors on stderr.

pub mod build;
pub mod imports;
pub mod translate;

use crate::config::PitaoConfig;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Command {
    /// Translate a Pitão file, and the Pitão modules it imports, to Python
    Build {
        /// Entry file (.pt or .pit)
        file: PathBuf,

        /// Prefix for output file names (overrides config)
        #[arg(long)]
        prefix: Option<String>,

        /// Output file name for the entry file
        #[arg(short, long)]
        output: Option<String>,

        /// Only translate the entry file
        #[arg(long)]
        no_follow: bool,

        /// Print the build report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate a Python file to Pitão
    Reverse {
        /// Python file
        file: PathBuf,

        /// Prefix for the output file name (overrides config)
        #[arg(long)]
        prefix: Option<String>,

        /// Output file name
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Translate a file (or stdin) and print the result
    Translate {
        /// Input file (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Translate Python to Pitão instead
        #[arg(short, long)]
        reverse: bool,
    },

    /// List the Pitão files a source imports
    Imports {
        /// Source file (Pitão or Python)
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate every source file under a directory
    Tree {
        /// Directory to walk (respects .gitignore)
        dir: PathBuf,

        /// Translate .py files to Pitão instead
        #[arg(short, long)]
        reverse: bool,
    },
}

/// Run a command with the loaded project config.
pub fn run(command: Command, config: &PitaoConfig) -> i32 {
    match command {
        Command::Build {
            file,
            prefix,
            output,
            no_follow,
            json,
        } => build::cmd_build(&file, prefix, output, no_follow, json, config),
        Command::Reverse {
            file,
            prefix,
            output,
        } => build::cmd_reverse(&file, prefix, output, config),
        Command::Translate { file, reverse } => {
            translate::cmd_translate(file.as_deref(), reverse, config)
        }
        Command::Imports { file, json } => imports::cmd_imports(&file, json),
        Command::Tree { dir, reverse } => build::cmd_tree(&dir, reverse, config),
    }
}
