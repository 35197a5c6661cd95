use super::*;

/// A single table reference: `[database.]table [[AS] alias]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromDescriptor {
    pub database: Option<String>,
    pub table: String,
    pub table_alias: Option<String>,
}

/// Describe the table named by a from clause.
///
/// The alias is the last whitespace-delimited token after the table
/// reference, which covers both `t AS a` and `t a`. Joins are expected to have
/// been split off already.
pub fn from_to_descriptor(from: &str, keyword: &str) -> FromDescriptor {
    let (escaped, literals) = escape(from.trim(), keyword);
    let (reference, rest) = match escaped.split_once(char::is_whitespace) {
        Some((reference, rest)) => (reference, rest),
        None => (escaped.as_str(), ""),
    };

    let table_alias = rest
        .split_whitespace()
        .last()
        .filter(|alias| !alias.eq_ignore_ascii_case("as"))
        .map(|alias| literals.restore(alias));

    let (database, table) = match reference.split_once('.') {
        Some((database, table)) => (Some(literals.restore(database)), table),
        None => (None, reference),
    };

    FromDescriptor {
        database,
        table: literals.restore(table),
        table_alias,
    }
}
