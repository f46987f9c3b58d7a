//! Output file naming.
//!
//! Translated files are written next to their input. Pitão sources use
//! `.pt` or `.pit`; Python output uses `.py`. Reverse translation always
//! produces `.pt`.

use pitao_syntax::{DIALECT_EXTENSIONS, Direction};
use std::path::{Path, PathBuf};

/// Extension of standard Python sources.
pub const STANDARD_EXTENSION: &str = "py";

/// Whether `name` ends in a Pitão extension.
pub fn is_dialect_file(name: &str) -> bool {
    DIALECT_EXTENSIONS
        .iter()
        .any(|ext| name.ends_with(&format!(".{ext}")))
}

/// Whether `name` ends in `.py`.
pub fn is_standard_file(name: &str) -> bool {
    name.ends_with(".py")
}

/// Whether `path` is an input for translating in `direction`.
pub fn is_input_file(path: &Path, direction: Direction) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    match direction {
        Direction::DialectToStandard => is_dialect_file(name),
        Direction::StandardToDialect => is_standard_file(name),
    }
}

/// Output file name for input `name`.
///
/// `override_name` wins when given. Otherwise the input extension is swapped
/// for the target one, or the target extension is appended when the input
/// has none of the expected extensions.
pub fn output_file_name(name: &str, override_name: Option<&str>, direction: Direction) -> String {
    if let Some(name) = override_name {
        return name.to_string();
    }
    match direction {
        Direction::DialectToStandard => {
            // ".pit" is checked before ".pt" so it is stripped whole.
            let stem = name
                .strip_suffix(".pit")
                .or_else(|| name.strip_suffix(".pt"))
                .unwrap_or(name);
            format!("{stem}.{STANDARD_EXTENSION}")
        }
        Direction::StandardToDialect => {
            let stem = name.strip_suffix(".py").unwrap_or(name);
            format!("{stem}.{}", DIALECT_EXTENSIONS[0])
        }
    }
}

/// Output path for `input`: same directory, `prefix` + translated file name.
pub fn output_path(
    input: &Path,
    prefix: &str,
    override_name: Option<&str>,
    direction: Direction,
) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let file_name = format!(
        "{prefix}{}",
        output_file_name(&name, override_name, direction)
    );
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
