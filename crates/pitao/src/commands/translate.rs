//! Translate a single source to stdout.

use crate::compile::translate_source;
use crate::config::PitaoConfig;
use anyhow::Context;
use pitao_syntax::{Direction, translate};
use std::io::Read;
use std::path::Path;

pub fn cmd_translate(file: Option<&Path>, reverse: bool, config: &PitaoConfig) -> i32 {
    match run(file, reverse, config) {
        Ok(out) => {
            print!("{out}");
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            1
        }
    }
}

fn run(file: Option<&Path>, reverse: bool, config: &PitaoConfig) -> anyhow::Result<String> {
    let source = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    Ok(if reverse {
        translate(&source, Direction::StandardToDialect)
    } else {
        translate_source(&source, &config.aliases)
    })
}
