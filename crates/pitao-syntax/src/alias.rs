//! Redirecting imported modules to replacement modules.
//!
//! Runs on standard Python text after translation. With `turtle` mapped to
//! `tartaruga_compat`:
//!
//! ```text
//! import turtle              ->  import tartaruga_compat as turtle
//! import turtle as t         ->  import tartaruga_compat as t
//! from turtle import Screen  ->  from tartaruga_compat import Screen
//! ```
//!
//! A dotted name cannot be an `as` target, so `import pkg.mod` mapped to
//! `pkg.gen_mod` becomes plain `import pkg.gen_mod`.
//!
//! Module names are compared whole (dotted names included), so a mapping for
//! `a` leaves `import a.b` and `import ab` alone. Each statement is rewritten
//! at most once; a replacement is never looked up again.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn statement_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r"\bimport\s(?P<import>[\w.]+)(?P<alias>\s+as\b)?",
            r"|\bfrom\s(?P<from>[\w.]+)\s+import\b",
        ))
        .expect("import statement pattern compiles")
    })
}

/// Rewrite imports of every module in `aliases` to its replacement.
///
/// Borrows the input when `aliases` is empty or the text has no import
/// statements.
pub fn rewrite_import_aliases<'a>(
    source: &'a str,
    aliases: &BTreeMap<String, String>,
) -> Cow<'a, str> {
    if aliases.is_empty() {
        return Cow::Borrowed(source);
    }
    statement_pattern().replace_all(source, |caps: &Captures<'_>| {
        let whole = &caps[0];
        let (module, replacement) = match caps.name("import").or_else(|| caps.name("from")) {
            Some(m) => match aliases.get(m.as_str()) {
                Some(target) => (m, target),
                None => return whole.to_string(),
            },
            None => return whole.to_string(),
        };

        let offset = caps.get(0).map_or(0, |m| m.start());
        let before = &whole[..module.start() - offset];
        let after = &whole[module.end() - offset..];
        if caps.name("import").is_some()
            && caps.name("alias").is_none()
            && !module.as_str().contains('.')
        {
            format!("{before}{replacement} as {}{after}", module.as_str())
        } else {
            format!("{before}{replacement}{after}")
        }
    })
}
