//! Commands that write translated files: build, reverse, tree.

use crate::compile::{self, CompileOptions};
use crate::config::PitaoConfig;
use pitao_syntax::Direction;
use std::path::Path;

fn options(config: &PitaoConfig, prefix: Option<String>, output: Option<String>) -> CompileOptions {
    let mut options = CompileOptions::from_config(config);
    if let Some(prefix) = prefix {
        options.prefix = prefix;
    }
    options.output_name = output;
    options
}

pub fn cmd_build(
    file: &Path,
    prefix: Option<String>,
    output: Option<String>,
    no_follow: bool,
    json: bool,
    config: &PitaoConfig,
) -> i32 {
    let mut options = options(config, prefix, output);
    if no_follow {
        options.follow_imports = false;
    }

    match compile::build(file, &options) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("error: {e}");
                        return 1;
                    }
                }
            } else {
                for t in &report.translated {
                    println!("{} -> {}", t.input.display(), t.output.display());
                }
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

pub fn cmd_reverse(
    file: &Path,
    prefix: Option<String>,
    output: Option<String>,
    config: &PitaoConfig,
) -> i32 {
    let options = options(config, prefix, output);
    match compile::reverse_translate_file(file, &options) {
        Ok(out) => {
            println!("{} -> {}", file.display(), out.display());
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

pub fn cmd_tree(dir: &Path, reverse: bool, config: &PitaoConfig) -> i32 {
    if !dir.is_dir() {
        eprintln!("error: {} is not a directory", dir.display());
        return 1;
    }
    let direction = if reverse {
        Direction::StandardToDialect
    } else {
        Direction::DialectToStandard
    };

    let outcomes = compile::translate_tree(dir, direction, &options(config, None, None));
    let mut failed = 0;
    for (input, result) in &outcomes {
        match result {
            Ok(out) => println!("{} -> {}", input.display(), out.display()),
            Err(e) => {
                eprintln!("error: {e}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        eprintln!("{failed} of {} files failed", outcomes.len());
        1
    } else {
        0
    }
}
