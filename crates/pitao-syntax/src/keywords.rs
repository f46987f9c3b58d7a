//! The fixed Pitão keyword table.
//!
//! Pitão spells Python's keywords in Portuguese. The table is a closed set of
//! pairs built once per process; [`KeywordMap::builtin`] hands out a shared
//! reference, so every translation reads the same immutable value.

use crate::Direction;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Keyword pairs as `(dialect, standard)`.
///
/// Some Python keywords keep their spelling in Pitão (`def`, `del`, ...); they
/// still appear here so the inverse table covers every standard keyword.
pub const KEYWORD_PAIRS: &[(&str, &str)] = &[
    // Boolean and None literals
    ("Falso", "False"),
    ("Nulo", "None"),
    ("Verdadeiro", "True"),
    // Logical operators
    ("e", "and"),
    ("ou", "or"),
    ("nao", "not"),
    // Control flow
    ("se", "if"),
    ("senaose", "elif"),
    ("senao", "else"),
    ("para", "for"),
    ("enquanto", "while"),
    ("quebre", "break"),
    ("continue", "continue"),
    ("passe", "pass"),
    // Exceptions
    ("tente", "try"),
    ("exceto", "except"),
    ("finalmente", "finally"),
    ("levante", "raise"),
    // Functions and classes
    ("def", "def"),
    ("classe", "class"),
    ("retorne", "return"),
    ("produza", "yield"),
    // Async
    ("assincrono", "async"),
    ("aguarde", "await"),
    // Everything else
    ("como", "as"),
    ("afirme", "assert"),
    ("del", "del"),
    ("importe", "import"),
    ("de", "from"),
    ("em", "in"),
    ("eh", "is"),
    ("com", "with"),
    ("global", "global"),
    ("naolocal", "nonlocal"),
    ("lambda", "lambda"),
];

static BUILTIN: OnceLock<KeywordMap> = OnceLock::new();

/// Bidirectional keyword lookup.
///
/// `forward` maps dialect spellings to standard ones and `inverse` is its
/// exact inverse. Construction rejects tables where either side repeats.
#[derive(Debug, Clone)]
pub struct KeywordMap {
    forward: HashMap<&'static str, &'static str>,
    inverse: HashMap<&'static str, &'static str>,
}

impl KeywordMap {
    /// The process-wide Pitão table.
    pub fn builtin() -> &'static KeywordMap {
        BUILTIN.get_or_init(|| Self {
            forward: KEYWORD_PAIRS.iter().copied().collect(),
            inverse: KEYWORD_PAIRS.iter().map(|&(d, s)| (s, d)).collect(),
        })
    }

    /// Build a map from `(dialect, standard)` pairs.
    ///
    /// Returns `None` if a dialect or standard spelling occurs twice, since the
    /// two tables would no longer be inverses of each other.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Option<Self> {
        let mut forward = HashMap::with_capacity(pairs.len());
        let mut inverse = HashMap::with_capacity(pairs.len());
        for &(dialect, standard) in pairs {
            if forward.insert(dialect, standard).is_some()
                || inverse.insert(standard, dialect).is_some()
            {
                return None;
            }
        }
        Some(Self { forward, inverse })
    }

    /// The table that substitution uses for `direction`.
    pub fn table(&self, direction: Direction) -> &HashMap<&'static str, &'static str> {
        match direction {
            Direction::DialectToStandard => &self.forward,
            Direction::StandardToDialect => &self.inverse,
        }
    }

    /// Counterpart of `word` when translating in `direction`.
    pub fn lookup(&self, word: &str, direction: Direction) -> Option<&'static str> {
        self.table(direction).get(word).copied()
    }

    /// Dialect spelling of a standard keyword (`"import"` -> `"importe"`).
    pub fn dialect_of(&self, standard: &str) -> Option<&'static str> {
        self.inverse.get(standard).copied()
    }

    /// Standard spelling of a dialect keyword (`"se"` -> `"if"`).
    pub fn standard_of(&self, dialect: &str) -> Option<&'static str> {
        self.forward.get(dialect).copied()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
