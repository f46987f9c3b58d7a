//! List imported Pitão modules.

use pitao_syntax::imports::candidate_files;
use pitao_syntax::scan_modules;
use std::path::Path;

pub fn cmd_imports(file: &Path, json: bool) -> i32 {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", file.display());
            return 1;
        }
    };

    let modules = scan_modules(&source);
    let candidates = candidate_files(&modules);

    if json {
        let response = serde_json::json!({
            "modules": modules,
            "candidates": candidates,
        });
        match serde_json::to_string_pretty(&response) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                return 1;
            }
        }
    } else {
        for candidate in &candidates {
            println!("{candidate}");
        }
    }
    0
}
