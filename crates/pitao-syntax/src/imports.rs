//! Module references in import statements.
//!
//! Recognizes two statement shapes, each in both spellings:
//!
//! - `importe foo.bar` / `import foo.bar`
//! - `de foo importe x` / `from foo import x`
//!
//! The scan runs on raw text. Import statements are not expected inside
//! strings or comments, so no partitioning is done; a match there is a false
//! positive the caller tolerates (the candidate file simply won't exist).
//!
//! Matching is deliberately literal:
//!
//! - the keyword must be followed by exactly one whitespace character, then
//!   the module name (word characters and dots);
//! - for `import`, the name must end at `;`, whitespace or end of text, so
//!   `import a, b` and `import a.b(…)` yield nothing;
//! - for `from`, the name must be followed by whitespace and the import
//!   keyword. That import keyword does not start a second reference:
//!   `de utils importe helper` names `utils` only.
//!
//! The keyword is not required to start a word, so `reimporte x` counts.

use crate::KeywordMap;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// File extensions of Pitão sources, in probe order.
pub const DIALECT_EXTENSIONS: &[&str] = &["pt", "pit"];

const IMPORT: &str = "import";
const FROM: &str = "from";

fn module_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w.]+").expect("module pattern compiles"))
}

/// Statement shape an import was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportForm {
    /// `import foo`
    Import,
    /// `from foo import …`
    From,
}

/// Which spelling the statement keyword used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    Dialect,
    Standard,
}

/// A module name found in an import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReference {
    pub module: String,
    pub form: ImportForm,
    pub spelling: Spelling,
    /// Byte offset of the module name.
    pub offset: usize,
}

impl ImportReference {
    /// `module.ext` for every dialect extension.
    pub fn candidate_files(&self) -> impl Iterator<Item = String> + '_ {
        DIALECT_EXTENSIONS
            .iter()
            .map(move |ext| format!("{}.{}", self.module, ext))
    }
}

/// Import scanner for one keyword table.
#[derive(Debug, Clone, Copy)]
pub struct ImportScanner<'m> {
    keywords: &'m KeywordMap,
}

impl Default for ImportScanner<'static> {
    fn default() -> Self {
        Self::new(KeywordMap::builtin())
    }
}

impl<'m> ImportScanner<'m> {
    pub fn new(keywords: &'m KeywordMap) -> Self {
        Self { keywords }
    }

    /// Every module reference, grouped by statement keyword.
    ///
    /// Order: dialect `import`, standard `import`, dialect `from`, standard
    /// `from`; text order within each group. Duplicates are kept.
    pub fn scan_modules(&self, source: &str) -> Vec<ImportReference> {
        let mut found = Vec::new();
        for (lead, spelling) in self.spellings(IMPORT) {
            let from_kw = self.spelled(FROM, spelling);
            scan_after(
                source,
                lead,
                |before, rest| {
                    ends_statement(rest)
                        && !from_kw.is_some_and(|kw| closes_from_clause(before, kw))
                },
                |module, offset| {
                    found.push(ImportReference {
                        module: module.to_string(),
                        form: ImportForm::Import,
                        spelling,
                        offset,
                    });
                },
            );
        }
        for (lead, spelling) in self.spellings(FROM) {
            let Some(import_kw) = self.spelled(IMPORT, spelling) else {
                continue;
            };
            scan_after(
                source,
                lead,
                |_, rest| {
                    let trimmed = rest.trim_start();
                    trimmed.len() < rest.len() && trimmed.starts_with(import_kw)
                },
                |module, offset| {
                    found.push(ImportReference {
                        module: module.to_string(),
                        form: ImportForm::From,
                        spelling,
                        offset,
                    });
                },
            );
        }
        found
    }

    /// Candidate file names for every referenced module.
    ///
    /// All names with the first extension come first, then all with the
    /// second, each in [`scan_modules`](Self::scan_modules) order.
    pub fn scan_imports(&self, source: &str) -> Vec<String> {
        candidate_files(&self.scan_modules(source))
    }

    /// `(keyword, spelling)` pairs to scan for a standard keyword, dialect
    /// first. A keyword spelled the same in both is scanned once.
    fn spellings(&self, standard: &'static str) -> Vec<(&'static str, Spelling)> {
        let mut out = Vec::with_capacity(2);
        if let Some(dialect) = self.keywords.dialect_of(standard)
            && dialect != standard
        {
            out.push((dialect, Spelling::Dialect));
        }
        out.push((standard, Spelling::Standard));
        out
    }

    fn spelled(&self, standard: &'static str, spelling: Spelling) -> Option<&'static str> {
        match spelling {
            Spelling::Dialect => self.keywords.dialect_of(standard),
            Spelling::Standard => Some(standard),
        }
    }
}

/// Candidate file names for `refs`, grouped by extension.
pub fn candidate_files(refs: &[ImportReference]) -> Vec<String> {
    DIALECT_EXTENSIONS
        .iter()
        .flat_map(|ext| refs.iter().map(move |r| format!("{}.{}", r.module, ext)))
        .collect()
}

/// Module references in `source`, using the builtin table.
pub fn scan_modules(source: &str) -> Vec<ImportReference> {
    ImportScanner::default().scan_modules(source)
}

/// Candidate Pitão file names imported by `source`, using the builtin table.
pub fn scan_imports(source: &str) -> Vec<String> {
    ImportScanner::default().scan_imports(source)
}

/// Call `emit` for each module name preceded by `lead` plus one whitespace
/// character and accepted by `accept`, which sees the text before `lead` and
/// the text after the name.
fn scan_after(
    source: &str,
    lead: &str,
    accept: impl Fn(&str, &str) -> bool,
    mut emit: impl FnMut(&str, usize),
) {
    for (i, c) in source.char_indices() {
        if !c.is_whitespace() || !source[..i].ends_with(lead) {
            continue;
        }
        let start = i + c.len_utf8();
        let Some(m) = module_pattern().find(&source[start..]) else {
            continue;
        };
        let end = start + m.end();
        if accept(&source[..i - lead.len()], &source[end..]) {
            emit(m.as_str(), start);
        }
    }
}

/// Whether `before` ends with `<from_kw> <module>` plus whitespace, i.e. the
/// import keyword that follows it belongs to a `from` statement.
fn closes_from_clause(before: &str, from_kw: &str) -> bool {
    let trimmed = before.trim_end();
    if trimmed.len() == before.len() {
        return false;
    }
    let head = trimmed.trim_end_matches(|c: char| c.is_alphanumeric() || c == '_' || c == '.');
    if head.len() == trimmed.len() {
        return false;
    }
    let mut chars = head.chars();
    match chars.next_back() {
        Some(c) if c.is_whitespace() => chars.as_str().ends_with(from_kw),
        _ => false,
    }
}

/// `;`, whitespace, or end of text.
fn ends_statement(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => c == ';' || c.is_whitespace(),
    }
}
