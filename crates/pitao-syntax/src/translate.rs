//! Whole-text translation: partition, substitute code spans, reassemble.

use crate::partition::Segments;
use crate::substitute::substitute;
use crate::{Direction, KeywordMap};

/// Translates source text with a fixed keyword table.
///
/// Holds only a shared reference to the table, so it is `Copy` and can be
/// handed to as many threads as needed.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'m> {
    keywords: &'m KeywordMap,
}

impl Default for Translator<'static> {
    fn default() -> Self {
        Self::new(KeywordMap::builtin())
    }
}

impl<'m> Translator<'m> {
    pub fn new(keywords: &'m KeywordMap) -> Self {
        Self { keywords }
    }

    /// Translate `source` in `direction`.
    ///
    /// Code spans are rewritten; strings and comments are copied verbatim.
    pub fn translate(&self, source: &str, direction: Direction) -> String {
        let mut out = String::with_capacity(source.len() + source.len() / 8);
        for segment in Segments::new(source) {
            if segment.is_code() {
                out.push_str(&substitute(segment.text, self.keywords, direction));
            } else {
                out.push_str(segment.text);
            }
        }
        out
    }
}

/// Translate `source` with the builtin Pitão table.
pub fn translate(source: &str, direction: Direction) -> String {
    Translator::default().translate(source, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_condition() {
        assert_eq!(
            translate(
                "se Verdadeiro e nao Falso:\n    passe",
                Direction::DialectToStandard
            ),
            "if True and not False:\n    pass"
        );
    }

    #[test]
    fn test_string_and_comment_untouched() {
        let source = "x = \"se isso for Falso\"  # se comentário";
        assert_eq!(translate(source, Direction::DialectToStandard), source);
    }

    #[test]
    fn test_code_around_strings_still_translated() {
        assert_eq!(
            translate(
                "se x == 'senao': retorne \"e\" # nao",
                Direction::DialectToStandard
            ),
            "if x == 'senao': return \"e\" # nao"
        );
    }

    #[test]
    fn test_custom_table() {
        let map = KeywordMap::from_pairs(&[("si", "if")]).unwrap();
        let translator = Translator::new(&map);
        assert_eq!(
            translator.translate("si se:", Direction::DialectToStandard),
            "if se:"
        );
        assert_eq!(
            translator.translate("if x: # if", Direction::StandardToDialect),
            "si x: # if"
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(translate("", Direction::StandardToDialect), "");
    }

    #[test]
    fn test_line_structure_preserved() {
        let source = "para i em range(3):\r\n\tse i:\r\n\t\tquebre\r\n";
        let out = translate(source, Direction::DialectToStandard);
        assert_eq!(out, "for i in range(3):\r\n\tif i:\r\n\t\tbreak\r\n");
        assert_eq!(out.lines().count(), source.lines().count());
    }
}
