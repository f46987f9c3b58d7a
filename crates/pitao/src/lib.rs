//! Pitão project tooling.
//!
//! File-level driver around [`pitao_syntax`]: output naming, reading and
//! writing sources, following imports between Pitão modules, and project
//! configuration. The `pitao` binary is a thin CLI over this crate.

pub mod commands;
pub mod compile;
pub mod config;
pub mod paths;

pub use compile::{
    BuildReport, CompileError, CompileOptions, Translated, build, reverse_translate_file,
    translate_file, translate_source, translate_tree,
};
pub use config::{BuildConfig, PitaoConfig};
pub use paths::{is_dialect_file, output_file_name, output_path};
