//! Keyword-level translation between Pitão and Python.
//!
//! Pitão is Python with Portuguese keywords (`se`, `senao`, `para`, ...).
//! `pitao-syntax` rewrites keyword tokens in either direction and leaves all
//! other text alone: identifiers, literals, operators, whitespace, and the
//! contents of strings and comments.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────┐   Code    ┌─────────────┐
//! source ───────> │  partition   │ ────────> │ substitute  │ ──┐
//!                 │ (strings and │           │ (keywords)  │   ├─> output
//!                 │  comments)   │ ────────────────────────────┘
//!                 └──────────────┘   Opaque (verbatim)
//!
//! source ───────> imports ───────> candidate files (foo.pt, foo.pit)
//! ```
//!
//! # Example
//!
//! ```
//! use pitao_syntax::{Direction, scan_imports, translate};
//!
//! let python = translate("se Verdadeiro e nao Falso:\n    passe", Direction::DialectToStandard);
//! assert_eq!(python, "if True and not False:\n    pass");
//!
//! assert_eq!(scan_imports("importe math"), vec!["math.pt", "math.pit"]);
//! ```
//!
//! # Note on Fidelity
//!
//! This is lexical translation, not parsing. Malformed input is translated
//! as well as the partitioner can split it, without diagnostics.

pub mod alias;
pub mod direction;
pub mod imports;
pub mod keywords;
pub mod partition;
pub mod substitute;
pub mod translate;

pub use alias::rewrite_import_aliases;
pub use direction::{Direction, ParseDirectionError};
pub use imports::{
    DIALECT_EXTENSIONS, ImportForm, ImportReference, ImportScanner, Spelling, scan_imports,
    scan_modules,
};
pub use keywords::{KEYWORD_PAIRS, KeywordMap};
pub use partition::{OpaqueKind, Segment, SegmentKind, Segments, partition};
pub use substitute::substitute;
pub use translate::{Translator, translate};
