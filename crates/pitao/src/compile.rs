//! Translating files on disk.
//!
//! `build` translates an entry file and every local Pitão module it imports,
//! transitively. `translate_tree` translates every matching file under a
//! directory, in parallel.

use crate::config::PitaoConfig;
use crate::paths::{is_input_file, output_path};
use pitao_syntax::{
    DIALECT_EXTENSIONS, Direction, ImportReference, rewrite_import_aliases, scan_modules, translate,
};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

/// Error reading or writing a source file.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl CompileError {
    pub fn path(&self) -> &Path {
        match self {
            CompileError::Read { path, .. } | CompileError::Write { path, .. } => path,
        }
    }
}

/// How files are named and post-processed.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Prepended to every output file name.
    pub prefix: String,
    /// Output file name for the entry file only.
    pub output_name: Option<String>,
    /// Imported module -> replacement, applied to Python output.
    pub aliases: BTreeMap<String, String>,
    /// Whether `build` follows imports of local Pitão modules.
    pub follow_imports: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            output_name: None,
            aliases: BTreeMap::new(),
            follow_imports: true,
        }
    }
}

impl CompileOptions {
    pub fn from_config(config: &PitaoConfig) -> Self {
        Self {
            prefix: config.build.prefix().to_string(),
            output_name: None,
            aliases: config.aliases.clone(),
            follow_imports: config.build.follow_imports(),
        }
    }
}

/// One translated file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Translated {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Result of [`build`].
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct BuildReport {
    /// Files written, entry first, then in import discovery order.
    pub translated: Vec<Translated>,
    /// Imported modules with no Pitão file next to the importer
    /// (standard library, installed packages).
    pub external: Vec<String>,
}

/// Translate Pitão source text to Python, applying `aliases`.
pub fn translate_source(source: &str, aliases: &BTreeMap<String, String>) -> String {
    let python = translate(source, Direction::DialectToStandard);
    rewrite_import_aliases(&python, aliases).into_owned()
}

/// Translate one Pitão file to Python. Returns the output path.
pub fn translate_file(path: &Path, options: &CompileOptions) -> Result<PathBuf, CompileError> {
    let source = read_source(path)?;
    let output = output_path(
        path,
        &options.prefix,
        options.output_name.as_deref(),
        Direction::DialectToStandard,
    );
    write_output(&output, &translate_source(&source, &options.aliases))?;
    tracing::debug!(input = %path.display(), output = %output.display(), "translated");
    Ok(output)
}

/// Translate one Python file to Pitão. Returns the output path.
///
/// Aliases are not applied; they only make sense for Python output.
pub fn reverse_translate_file(path: &Path, options: &CompileOptions) -> Result<PathBuf, CompileError> {
    let source = read_source(path)?;
    let output = output_path(
        path,
        &options.prefix,
        options.output_name.as_deref(),
        Direction::StandardToDialect,
    );
    write_output(&output, &translate(&source, Direction::StandardToDialect))?;
    tracing::debug!(input = %path.display(), output = %output.display(), "reverse translated");
    Ok(output)
}

/// Translate `entry` and, if enabled, every local Pitão module it imports.
///
/// Imports resolve relative to the importing file's directory, with dots in
/// module names as directory separators (`pkg.mod` -> `pkg/mod.pt`). Each
/// file is translated once even if imported from several places.
///
/// With a non-empty prefix and imports followed, imports of resolved local
/// modules are redirected to the prefixed output names
/// (`import util` -> `import gen_util as util`). Without following, nothing
/// is redirected since the imported modules are not written.
pub fn build(entry: &Path, options: &CompileOptions) -> Result<BuildReport, CompileError> {
    let mut report = BuildReport::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut external_seen: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<PathBuf> = VecDeque::new();

    seen.insert(identity(entry));
    queue.push_back(entry.to_path_buf());

    while let Some(path) = queue.pop_front() {
        let source = read_source(&path)?;
        let dir = path.parent().unwrap_or(Path::new(""));

        let mut aliases = options.aliases.clone();
        let mut local = Vec::new();
        for reference in scan_modules(&source) {
            match resolve_module(dir, &reference) {
                Some(dep) => {
                    if options.follow_imports {
                        redirect_to_prefixed(&mut aliases, &reference.module, &options.prefix);
                    }
                    local.push(dep);
                }
                None => {
                    if external_seen.insert(reference.module.clone()) {
                        report.external.push(reference.module);
                    }
                }
            }
        }

        let is_entry = report.translated.is_empty();
        let output_name = if is_entry {
            options.output_name.as_deref()
        } else {
            None
        };
        let output = output_path(&path, &options.prefix, output_name, Direction::DialectToStandard);
        write_output(&output, &translate_source(&source, &aliases))?;
        tracing::debug!(input = %path.display(), output = %output.display(), "translated");
        report.translated.push(Translated {
            input: path.clone(),
            output,
        });

        if options.follow_imports {
            for dep in local {
                if seen.insert(identity(&dep)) {
                    queue.push_back(dep);
                }
            }
        }
    }

    tracing::info!(
        entry = %entry.display(),
        files = report.translated.len(),
        external = report.external.len(),
        "build finished"
    );
    Ok(report)
}

/// Translate every input file for `direction` under `root`.
///
/// Honors `.gitignore`. Files are translated in parallel; each outcome is
/// reported separately so one failure doesn't stop the rest. With a prefix,
/// Python output redirects imports of modules translated in the same walk.
pub fn translate_tree(
    root: &Path,
    direction: Direction,
    options: &CompileOptions,
) -> Vec<(PathBuf, Result<PathBuf, CompileError>)> {
    let inputs: Vec<PathBuf> = ignore::WalkBuilder::new(root)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| is_input_file(path, direction))
        .collect();

    // Per-file output names make no sense for a whole tree.
    let options = CompileOptions {
        output_name: None,
        ..options.clone()
    };

    let walked: HashSet<PathBuf> = inputs.iter().map(|path| identity(path)).collect();

    let mut outcomes: Vec<_> = inputs
        .into_par_iter()
        .map(|path| {
            let result = match direction {
                Direction::DialectToStandard => translate_tree_file(&path, &options, &walked),
                Direction::StandardToDialect => reverse_translate_file(&path, &options),
            };
            (path, result)
        })
        .collect();
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));

    let failed = outcomes.iter().filter(|(_, r)| r.is_err()).count();
    tracing::info!(
        root = %root.display(),
        %direction,
        files = outcomes.len(),
        failed,
        "tree finished"
    );
    outcomes
}

/// Translate one Pitão file of a tree walk, redirecting imports of the
/// other files in `walked` when a prefix is set.
fn translate_tree_file(
    path: &Path,
    options: &CompileOptions,
    walked: &HashSet<PathBuf>,
) -> Result<PathBuf, CompileError> {
    let source = read_source(path)?;
    let dir = path.parent().unwrap_or(Path::new(""));

    let mut aliases = options.aliases.clone();
    for reference in scan_modules(&source) {
        if resolve_module(dir, &reference).is_some_and(|dep| walked.contains(&identity(&dep))) {
            redirect_to_prefixed(&mut aliases, &reference.module, &options.prefix);
        }
    }

    let output = output_path(path, &options.prefix, None, Direction::DialectToStandard);
    write_output(&output, &translate_source(&source, &aliases))?;
    tracing::debug!(input = %path.display(), output = %output.display(), "translated");
    Ok(output)
}

/// Alias `module` to its prefixed output name. Explicit aliases win.
fn redirect_to_prefixed(aliases: &mut BTreeMap<String, String>, module: &str, prefix: &str) {
    if prefix.is_empty() {
        return;
    }
    aliases
        .entry(module.to_string())
        .or_insert_with(|| prefixed_module(module, prefix));
}

/// First existing Pitão file for `reference`, relative to `dir`.
///
/// Relative imports (`from . import x`, `from ..pkg import y`) never resolve.
fn resolve_module(dir: &Path, reference: &ImportReference) -> Option<PathBuf> {
    if reference.module.split('.').any(str::is_empty) {
        return None;
    }
    let relative: PathBuf = reference.module.split('.').collect();
    DIALECT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(&relative).with_extension(ext))
        .find(|candidate| candidate.is_file())
}

/// `pkg.mod` with prefix `gen_` -> `pkg.gen_mod`.
fn prefixed_module(module: &str, prefix: &str) -> String {
    match module.rsplit_once('.') {
        Some((parent, last)) => format!("{parent}.{prefix}{last}"),
        None => format!("{prefix}{module}"),
    }
}

fn identity(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn read_source(path: &Path) -> Result<String, CompileError> {
    std::fs::read_to_string(path).map_err(|source| CompileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_output(path: &Path, content: &str) -> Result<(), CompileError> {
    std::fs::write(path, content).map_err(|source| CompileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_translate_file_writes_next_to_input() {
        let dir = TempDir::new().unwrap();
        let input = write(dir.path(), "ola.pt", "se Verdadeiro:\n    print('se')\n");

        let output = translate_file(&input, &CompileOptions::default()).unwrap();
        assert_eq!(output, dir.path().join("ola.py"));
        assert_eq!(read(&output), "if True:\n    print('se')\n");
    }

    #[test]
    fn test_output_name_and_prefix() {
        let dir = TempDir::new().unwrap();
        let input = write(dir.path(), "ola.pit", "passe\n");
        let options = CompileOptions {
            prefix: "gen_".into(),
            output_name: Some("saida.py".into()),
            ..CompileOptions::default()
        };
        let output = translate_file(&input, &options).unwrap();
        assert_eq!(output, dir.path().join("gen_saida.py"));
    }

    #[test]
    fn test_reverse_translate_file() {
        let dir = TempDir::new().unwrap();
        let input = write(dir.path(), "ola.py", "while x is not None:\n    break\n");
        let output = reverse_translate_file(&input, &CompileOptions::default()).unwrap();
        assert_eq!(output, dir.path().join("ola.pt"));
        assert_eq!(read(&output), "enquanto x eh nao Nulo:\n    quebre\n");
    }

    #[test]
    fn test_missing_input_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = translate_file(&dir.path().join("nope.pt"), &CompileOptions::default())
            .unwrap_err();
        assert!(matches!(err, CompileError::Read { .. }));
        assert_eq!(err.path(), dir.path().join("nope.pt"));
        assert!(err.to_string().contains("nope.pt"));
    }

    #[test]
    fn test_aliases_applied_to_python_output() {
        let mut aliases = BTreeMap::new();
        aliases.insert("tartaruga".to_string(), "turtle".to_string());
        assert_eq!(
            translate_source("importe tartaruga\nde tartaruga importe Tela\n", &aliases),
            "import turtle as tartaruga\nfrom turtle import Tela\n"
        );
    }

    #[test]
    fn test_build_follows_local_imports() {
        let dir = TempDir::new().unwrap();
        let main = write(
            dir.path(),
            "main.pt",
            "importe math\nimporte util\nde pacote.modelo importe Pessoa\n",
        );
        write(dir.path(), "util.pit", "de util2 importe x\ndef f():\n    retorne Nulo\n");
        write(dir.path(), "util2.pt", "x = Verdadeiro\n");
        write(dir.path(), "pacote/modelo.pt", "classe Pessoa:\n    passe\n");

        let report = build(&main, &CompileOptions::default()).unwrap();
        let outputs: Vec<_> = report
            .translated
            .iter()
            .map(|t| t.output.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            outputs,
            vec![
                PathBuf::from("main.py"),
                PathBuf::from("util.py"),
                PathBuf::from("pacote/modelo.py"),
                PathBuf::from("util2.py"),
            ]
        );
        assert_eq!(report.external, vec!["math".to_string()]);
        assert_eq!(read(&dir.path().join("util2.py")), "x = True\n");
        assert_eq!(
            read(&dir.path().join("util.py")),
            "from util2 import x\ndef f():\n    return None\n"
        );
    }

    #[test]
    fn test_build_handles_import_cycles() {
        let dir = TempDir::new().unwrap();
        let a = write(dir.path(), "a.pt", "importe b\n");
        write(dir.path(), "b.pt", "importe a\n");

        let report = build(&a, &CompileOptions::default()).unwrap();
        assert_eq!(report.translated.len(), 2);
        assert!(report.external.is_empty());
    }

    #[test]
    fn test_build_without_following_imports() {
        let dir = TempDir::new().unwrap();
        let main = write(dir.path(), "main.pt", "importe util\n");
        write(dir.path(), "util.pt", "passe\n");

        let options = CompileOptions {
            follow_imports: false,
            ..CompileOptions::default()
        };
        let report = build(&main, &options).unwrap();
        assert_eq!(report.translated.len(), 1);
        assert!(!dir.path().join("util.py").exists());
    }

    #[test]
    fn test_build_without_following_keeps_imports_with_prefix() {
        let dir = TempDir::new().unwrap();
        let main = write(dir.path(), "main.pt", "importe util\n");
        write(dir.path(), "util.pt", "passe\n");

        let options = CompileOptions {
            prefix: "gen_".into(),
            follow_imports: false,
            ..CompileOptions::default()
        };
        build(&main, &options).unwrap();
        assert_eq!(read(&dir.path().join("gen_main.py")), "import util\n");
        assert!(!dir.path().join("gen_util.py").exists());
    }

    #[test]
    fn test_build_skips_relative_imports() {
        let dir = TempDir::new().unwrap();
        let main = write(dir.path(), "pacote/main.pt", "de . importe vizinho\n");
        write(dir.path(), "pacote.pt", "passe\n");

        let report = build(&main, &CompileOptions::default()).unwrap();
        assert_eq!(report.translated.len(), 1);
        assert_eq!(report.external, vec![".".to_string()]);
        assert!(!dir.path().join("pacote.py").exists());
    }

    #[test]
    fn test_build_with_prefix_redirects_local_imports() {
        let dir = TempDir::new().unwrap();
        let main = write(
            dir.path(),
            "main.pt",
            "importe util\nimporte math\nde pacote.modelo importe Pessoa\nimporte pacote.modelo\n",
        );
        write(dir.path(), "util.pt", "passe\n");
        write(dir.path(), "pacote/modelo.pt", "passe\n");

        let options = CompileOptions {
            prefix: "gen_".into(),
            ..CompileOptions::default()
        };
        build(&main, &options).unwrap();
        assert_eq!(
            read(&dir.path().join("gen_main.py")),
            "import gen_util as util\nimport math\nfrom pacote.gen_modelo import Pessoa\nimport pacote.gen_modelo\n"
        );
        assert!(dir.path().join("gen_util.py").exists());
        assert!(dir.path().join("pacote/gen_modelo.py").exists());
    }

    #[test]
    fn test_translate_tree_both_directions() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.pt", "se x: passe\n");
        write(dir.path(), "sub/b.pit", "enquanto Verdadeiro: quebre\n");
        write(dir.path(), "notes.txt", "se\n");

        let outcomes = translate_tree(dir.path(), Direction::DialectToStandard, &CompileOptions::default());
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|(_, r)| r.is_ok()));
        assert_eq!(read(&dir.path().join("a.py")), "if x: pass\n");
        assert_eq!(read(&dir.path().join("sub/b.py")), "while True: break\n");

        std::fs::remove_file(dir.path().join("a.pt")).unwrap();
        let outcomes = translate_tree(dir.path(), Direction::StandardToDialect, &CompileOptions::default());
        assert_eq!(outcomes.len(), 2);
        assert_eq!(read(&dir.path().join("a.pt")), "se x: passe\n");
    }

    #[test]
    fn test_translate_tree_with_prefix_redirects_walked_modules() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "main.pt", "importe util\nimporte math\n");
        write(dir.path(), "util.pt", "passe\n");

        let options = CompileOptions {
            prefix: "gen_".into(),
            ..CompileOptions::default()
        };
        let outcomes = translate_tree(dir.path(), Direction::DialectToStandard, &options);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            read(&dir.path().join("gen_main.py")),
            "import gen_util as util\nimport math\n"
        );
        assert_eq!(read(&dir.path().join("gen_util.py")), "pass\n");
    }

    #[test]
    fn test_translate_tree_without_prefix_keeps_imports() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "main.pt", "importe util\n");
        write(dir.path(), "util.pt", "passe\n");

        translate_tree(dir.path(), Direction::DialectToStandard, &CompileOptions::default());
        assert_eq!(read(&dir.path().join("main.py")), "import util\n");
    }

    #[test]
    fn test_prefixed_module() {
        assert_eq!(prefixed_module("util", "gen_"), "gen_util");
        assert_eq!(prefixed_module("a.b.c", "gen_"), "a.b.gen_c");
    }
}
