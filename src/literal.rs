//! Backtick literal escaping.
//!
//! Every `` `...` `` segment of a string is swapped for a placeholder token
//! `__{keyword}{n}__` (numbered from 0 in order of appearance) so keyword
//! matching can run over the text without tripping on identifiers such as
//! `` `from` ``. [`LiteralMap::restore`] reverses the substitution.
//!
//! Limitation: text that already contains `__{keyword}{n}__` is
//! indistinguishable from a placeholder. Callers pick a keyword absent from
//! their input.
use crate::*;
use regex::{Captures, Match, Regex};

const BACKTICK: char = '`';

/// Call-scoped store of the literals removed by [`escape`].
///
/// The placeholder index doubles as the position in `literals`, so the map is
/// ordered by appearance and lookups never need hashing.
#[derive(Debug, Clone)]
pub struct LiteralMap {
    keyword: String,
    literals: Vec<String>,
    pattern: Regex,
}

impl LiteralMap {
    pub fn new(keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let pattern = Regex::new(&format!(r"__{}(\d+)__", regex::escape(&keyword)))
            .expect("escaped placeholder pattern is always a valid regex");
        Self {
            keyword,
            literals: Vec::new(),
            pattern,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Placeholder token for the `index`th literal.
    pub fn token(&self, index: usize) -> String {
        format!("__{}{}__", self.keyword, index)
    }

    /// Inner text of the literal a placeholder token stands for.
    pub fn get(&self, token: &str) -> Option<&str> {
        let caps = self.pattern.captures(token)?;
        if caps.get(0)?.as_str() != token {
            return None;
        }
        self.lookup(&caps)
    }

    /// `(token, literal)` pairs in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.literals
            .iter()
            .enumerate()
            .map(|(i, lit)| (self.token(i), lit.as_str()))
    }

    fn push(&mut self, literal: &str) -> String {
        let token = self.token(self.literals.len());
        self.literals.push(literal.to_string());
        token
    }

    fn lookup(&self, caps: &Captures<'_>) -> Option<&str> {
        let index = caps.get(1)?.as_str().parse::<usize>().ok()?;
        self.literals.get(index).map(String::as_str)
    }

    /// Case-insensitive matcher for `pattern` as a whole word, where a
    /// placeholder token counts as a word break just like whitespace or
    /// punctuation. `FROM__ref0__` still has `FROM` on a boundary.
    pub fn boundary(&self, pattern: &str) -> KeywordBoundary {
        let token = format!(r"__{}\d+__", regex::escape(&self.keyword));
        let regex = Regex::new(&format!(
            r"(?i)(?:^|\W|{token})({pattern})(?:$|\W|{token})"
        ))
        .expect("keyword boundary patterns are valid");
        KeywordBoundary { regex }
    }

    /// Put every known literal back, re-wrapped in backticks.
    ///
    /// All tokens are replaced in one scan, so the text of a restored literal is
    /// never itself rescanned for placeholders. Tokens that are not in the map
    /// are left untouched.
    pub fn restore(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| match self.lookup(caps) {
                Some(lit) => format!("{BACKTICK}{lit}{BACKTICK}"),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

/// A keyword matcher built by [`LiteralMap::boundary`].
#[derive(Debug, Clone)]
pub struct KeywordBoundary {
    regex: Regex,
}

impl KeywordBoundary {
    /// First occurrence of the keyword, without its surrounding context.
    pub fn find<'h>(&self, haystack: &'h str) -> Option<Match<'h>> {
        self.regex.captures(haystack)?.get(1)
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.find(haystack).is_some()
    }
}

/// Replace each backtick-delimited literal in `text` with a fresh placeholder.
///
/// A dangling backtick with no partner is left in place together with the rest
/// of the text after it.
pub fn escape(text: &str, keyword: &str) -> (String, LiteralMap) {
    let mut map = LiteralMap::new(keyword);
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(BACKTICK) {
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find(BACKTICK) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&map.push(&after_open[..close]));
        rest = &after_open[close + 1..];
    }
    out.push_str(rest);

    trace!("Escaped {} literal(s) with keyword {keyword:?}", map.len());
    (out, map)
}

/// Convenience inverse of [`escape`].
pub fn restore(text: &str, map: &LiteralMap) -> String {
    map.restore(text)
}

/// Inner texts of every backtick literal on `line`, in order.
///
/// Fails with [`Error::NoLiteralFound`] when the line holds none, which is
/// how callers that require at least one quoted name detect malformed input.
pub fn extract_literals(line: &str) -> Result<Vec<String>> {
    let (_, map) = escape(line, "lit");
    if map.is_empty() {
        return Err(Error::NoLiteralFound(format!(
            "expected a backtick-quoted name in {:?}",
            line.trim()
        )));
    }
    Ok(map.literals)
}

/// Strip one layer of surrounding backticks, if present.
pub fn trim_backticks(text: &str) -> &str {
    text.strip_prefix(BACKTICK)
        .and_then(|t| t.strip_suffix(BACKTICK))
        .unwrap_or(text)
}

impl PartialEq for LiteralMap {
    fn eq(&self, other: &Self) -> bool {
        self.keyword == other.keyword && self.literals == other.literals
    }
}

impl Eq for LiteralMap {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_literals_in_order() {
        let (escaped, map) = escape("SELECT `a`, `from` FROM `t`", "ref");
        assert_eq!(escaped, "SELECT __ref0__, __ref1__ FROM __ref2__");
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![
                ("__ref0__".to_string(), "a"),
                ("__ref1__".to_string(), "from"),
                ("__ref2__".to_string(), "t"),
            ]
        );
        assert_eq!(map.get("__ref1__"), Some("from"));
        assert_eq!(map.get("__ref9__"), None);
        assert_eq!(map.get("x__ref1__"), None);
    }

    #[test]
    fn restore_is_inverse_of_escape() {
        for text in [
            "SELECT `a` FROM `db`.`t` WHERE `b` = 'x'",
            "no literals at all",
            "``",
            "`a``b`",
            "SELECT `weird `` name`",
        ] {
            let (escaped, map) = escape(text, "ref");
            assert_eq!(restore(&escaped, &map), text, "round trip of {text:?}");
        }
    }

    #[test]
    fn dangling_backtick_is_left_in_place() {
        let (escaped, map) = escape("SELECT `a` FROM `t", "ref");
        assert_eq!(escaped, "SELECT __ref0__ FROM `t");
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn restore_does_not_rescan_restored_text() {
        // The second literal's content looks like a placeholder for the first.
        let (escaped, map) = escape("`x` `__ref0__`", "ref");
        assert_eq!(escaped, "__ref0__ __ref1__");
        assert_eq!(map.restore(&escaped), "`x` `__ref0__`");
    }

    #[test]
    fn unknown_placeholders_survive_restore() {
        let (_, map) = escape("`a`", "ref");
        assert_eq!(map.restore("__ref0__ __ref7__"), "`a` __ref7__");
    }

    #[test]
    fn keyword_is_regex_escaped() {
        let (escaped, map) = escape("`a`", "r.f");
        assert_eq!(escaped, "__r.f0__");
        assert_eq!(map.restore("__r.f0__ __rxf0__"), "`a` __rxf0__");
    }

    #[test]
    fn boundary_treats_placeholders_as_word_breaks() {
        let (escaped, map) = escape("SELECT `a`FROM`t` WHERE`x`=1", "ref");
        let from = map.boundary("FROM");
        let found = from.find(&escaped).expect("FROM touches two literals");
        assert_eq!(found.as_str(), "FROM");
        assert_eq!(&escaped[..found.start()], "SELECT __ref0__");
        assert!(map.boundary("WHERE").is_match(&escaped));
        assert!(map.boundary("from").is_match("from t"));
        assert!(!from.is_match("a_from fromage __ref0__x"));
        assert!(!map.boundary("FROM").is_match("__lit0__FROM"));
    }

    #[test]
    fn extract_literals_requires_one() {
        assert_eq!(
            extract_literals("PRIMARY KEY (`id`,`uid`)").unwrap(),
            vec!["id".to_string(), "uid".to_string()]
        );
        let err = extract_literals("PRIMARY KEY ()").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoLiteralFound);
    }

    #[test]
    fn trims_one_layer_of_backticks() {
        assert_eq!(trim_backticks("`uid`"), "uid");
        assert_eq!(trim_backticks("uid"), "uid");
        assert_eq!(trim_backticks("`uid"), "`uid");
    }
}
