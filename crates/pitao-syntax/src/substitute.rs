//! Whole-word keyword substitution within a code span.
//!
//! Every maximal run of word characters (Unicode letters, digits, marks,
//! underscore) is looked up once in the keyword table. Replacements are
//! written to a fresh buffer, so the rewritten text is never rescanned and a
//! replacement cannot create a match for another pair. This makes the result
//! independent of the order of the table, whatever spellings it holds.

use crate::{Direction, KeywordMap};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+").expect("word pattern compiles"))
}

/// Replace every whole-word keyword in `code` with its counterpart.
///
/// Matching is case-sensitive. Borrows the input when nothing changes.
pub fn substitute<'a>(code: &'a str, keywords: &KeywordMap, direction: Direction) -> Cow<'a, str> {
    let table = keywords.table(direction);
    let mut out: Option<String> = None;
    let mut last = 0;

    for word in word_pattern().find_iter(code) {
        let Some(&target) = table.get(word.as_str()) else {
            continue;
        };
        if target == word.as_str() {
            continue;
        }
        let buf = out.get_or_insert_with(|| String::with_capacity(code.len() + 16));
        buf.push_str(&code[last..word.start()]);
        buf.push_str(target);
        last = word.end();
    }

    match out {
        None => Cow::Borrowed(code),
        Some(mut buf) => {
            buf.push_str(&code[last..]);
            Cow::Owned(buf)
        }
    }
}
