use super::*;
use itertools::Itertools;

fn prefix(pattern: &str) -> Regex {
    Regex::new(&format!(r"(?i)^{pattern}\b")).expect("line prefix patterns are valid")
}

static PRIMARY_KEY: LazyLock<Regex> = LazyLock::new(|| prefix(r"PRIMARY\s+KEY"));
static UNIQUE_INDEX: LazyLock<Regex> = LazyLock::new(|| prefix(r"UNIQUE\s+(?:INDEX|KEY)"));
static FOREIGN_KEY: LazyLock<Regex> = LazyLock::new(|| prefix(r"FOREIGN\s+KEY"));
static CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| prefix("CONSTRAINT"));
static REFERENCES: LazyLock<Regex> = LazyLock::new(|| prefix("REFERENCES"));
static INLINE_REFERENCES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bREFERENCES\b").expect("inline references pattern is valid")
});
static COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^`([^`]+)`\s+(\S.*)$").expect("column declaration pattern is valid")
});
static UNQUOTED_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*CREATE\s+(?:TEMPORARY\s+)?TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?([^\s(]+)")
        .expect("table head pattern is valid")
});

/// What a trimmed CREATE TABLE body line declares.
///
/// `Unrecognized` covers engine options, plain indexes, closing parentheses
/// and anything else the reader has no use for. Lines that have a recognised
/// prefix but lack their quoted names are errors instead, see [`classify_line`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape {
    PrimaryKey(Vec<String>),
    UniqueIndex(Vec<String>),
    /// `target` is set when `REFERENCES` sits on the same line.
    ForeignKey {
        column: String,
        target: Option<ForeignKeyTarget>,
    },
    Column(ColumnDecl),
    Unrecognized,
}

/// Classify a body line read while no foreign key is pending.
///
/// Fails with [`Error::NoLiteralFound`] when a key or foreign key line has no
/// backtick-quoted names.
pub fn classify_line(line: &str) -> Result<LineShape> {
    let line = strip_constraint_name(line.trim());

    if let Some(m) = PRIMARY_KEY.find(line) {
        return Ok(LineShape::PrimaryKey(extract_literals(&line[m.end()..])?));
    }
    if let Some(m) = UNIQUE_INDEX.find(line) {
        // The first quoted name is the index itself.
        let columns = extract_literals(&line[m.end()..])?
            .into_iter()
            .skip(1)
            .collect_vec();
        return Ok(LineShape::UniqueIndex(columns));
    }
    if let Some(m) = FOREIGN_KEY.find(line) {
        let body = &line[m.end()..];
        let (local, target) = match INLINE_REFERENCES.find(body) {
            Some(r) => (&body[..r.start()], Some(reference_target(&body[r.end()..])?)),
            None => (body, None),
        };
        let column = extract_literals(local)?.swap_remove(0);
        return Ok(LineShape::ForeignKey { column, target });
    }

    Ok(parse_column(line)
        .map(LineShape::Column)
        .unwrap_or(LineShape::Unrecognized))
}

/// Parse a line read while a foreign key waits for its `REFERENCES` line.
///
/// `Ok(None)` means the line is something else and should be skipped.
pub fn parse_references(line: &str) -> Result<Option<ForeignKeyTarget>> {
    let line = line.trim();
    match REFERENCES.find(line) {
        Some(m) => reference_target(&line[m.end()..]).map(Some),
        None => Ok(None),
    }
}

/// Database and table named on the `CREATE TABLE` line.
///
/// The quoted span is split on `.`: one segment is the table, otherwise the
/// first is the database and the rest, rejoined, is the table. Table names
/// containing dots survive this way.
pub fn parse_table_name(head: &str) -> Result<(Option<String>, String)> {
    // Only look before the column list opens.
    let (escaped, literals) = escape(head, "tbl");
    let head = literals.restore(escaped.split('(').next().unwrap_or_default());

    let qualified = match (head.find('`'), head.rfind('`')) {
        (Some(open), Some(close)) if open < close => head[open + 1..close].replace('`', ""),
        _ => UNQUOTED_TABLE
            .captures(&head)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| {
                Error::NoLiteralFound(format!("no table name in {:?}", head.trim()))
            })?,
    };

    let segments = qualified.split('.').collect_vec();
    match segments.split_first() {
        Some((table, [])) => Ok((None, table.to_string())),
        Some((database, table)) => Ok((Some(database.to_string()), table.iter().join("."))),
        None => Err(Error::NoLiteralFound(format!(
            "no table name in {:?}",
            head.trim()
        ))),
    }
}

fn reference_target(segment: &str) -> Result<ForeignKeyTarget> {
    let names = extract_literals(segment)?;
    let (database, table, column) = match names.as_slice() {
        [table, column] => (None, table, column),
        [database, table, column, ..] => (Some(database.clone()), table, column),
        _ => {
            return Err(Error::NoLiteralFound(format!(
                "expected a referenced table and column in {:?}",
                segment.trim()
            )));
        }
    };
    Ok(ForeignKeyTarget {
        database,
        table: table.clone(),
        column: column.clone(),
    })
}

/// `CONSTRAINT name FOREIGN KEY ...` reads as `FOREIGN KEY ...`.
fn strip_constraint_name(line: &str) -> &str {
    let Some(m) = CONSTRAINT.find(line) else {
        return line;
    };
    let rest = line[m.end()..].trim_start();
    if [&*PRIMARY_KEY, &*UNIQUE_INDEX, &*FOREIGN_KEY]
        .iter()
        .any(|re| re.is_match(rest))
    {
        return rest;
    }
    let name_end = match rest.strip_prefix('`') {
        Some(quoted) => quoted.find('`').map(|i| i + 2).unwrap_or(rest.len()),
        None => rest.find(char::is_whitespace).unwrap_or(rest.len()),
    };
    rest[name_end..].trim_start()
}

/// `` `name` TYPE ... `` with the type lowercased. A parenthesised
/// precision may contain spaces; a trailing comma is dropped.
fn parse_column(line: &str) -> Option<ColumnDecl> {
    let caps = COLUMN.captures(line)?;
    let name = caps.get(1)?.as_str().to_string();
    let rest = caps.get(2)?.as_str();

    let mut depth = 0usize;
    let type_end = rest
        .char_indices()
        .find_map(|(i, c)| match c {
            '(' => {
                depth += 1;
                None
            }
            ')' => {
                depth = depth.saturating_sub(1);
                None
            }
            c if c.is_whitespace() && depth == 0 => Some(i),
            _ => None,
        })
        .unwrap_or(rest.len());
    let data_type = rest[..type_end].trim_end_matches(',').to_lowercase();

    let options = rest.to_uppercase();
    Some(ColumnDecl {
        name,
        data_type,
        nullable: !options.contains(" NOT NULL"),
        auto_increment: options.contains(" AUTO_INCREMENT"),
    })
}
