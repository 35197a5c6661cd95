use super::*;

/// One entry of a fields clause: `[table_alias.]column [AS alias]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub column: String,
    pub table_alias: Option<String>,
    pub alias: Option<String>,
}

impl FieldDescriptor {
    /// The name this field is exposed under: its alias, else its column.
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.column)
    }
}

/// Break a fields clause into descriptors, one per comma-separated entry.
///
/// The clause is escaped again with a fresh map, so commas, dots and `AS`
/// inside backtick literals are ignored. Commas inside function calls are not
/// and will split the call apart.
///
/// `column` and `table_alias` keep their backticks when they were quoted;
/// `alias` has them trimmed.
pub fn fields_to_descriptors(fields: &str, keyword: &str) -> Vec<FieldDescriptor> {
    let (escaped, literals) = escape(fields, keyword);
    let alias_separator = literals.boundary("AS");
    escaped
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (expr, alias) = match alias_separator.find(entry) {
                Some(m) => (entry[..m.start()].trim(), Some(entry[m.end()..].trim())),
                None => (entry, None),
            };
            let alias = alias
                .map(|alias| trim_backticks(&literals.restore(alias)).to_string())
                .filter(|alias| !alias.is_empty());

            let (table_alias, column) = match expr.split_once('.') {
                Some((table_alias, column)) => (Some(literals.restore(table_alias)), column),
                None => (None, expr),
            };

            FieldDescriptor {
                column: literals.restore(column),
                table_alias,
                alias,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(column: &str, table_alias: Option<&str>, alias: Option<&str>) -> FieldDescriptor {
        FieldDescriptor {
            column: column.into(),
            table_alias: table_alias.map(Into::into),
            alias: alias.map(Into::into),
        }
    }

    #[test]
    fn aliased_and_bare_fields() {
        assert_eq!(
            fields_to_descriptors("u.id AS uid, name", "ref"),
            vec![field("id", Some("u"), Some("uid")), field("name", None, None)]
        );
    }

    #[test]
    fn quoted_parts_keep_or_lose_backticks() {
        assert_eq!(
            fields_to_descriptors("`u`.`select` as `a.b`, `x,y`", "ref"),
            vec![
                field("`select`", Some("`u`"), Some("a.b")),
                field("`x,y`", None, None),
            ]
        );
    }

    #[test]
    fn lowercase_as_and_trailing_comma() {
        let fields = fields_to_descriptors("count(*) as total,", "ref");
        assert_eq!(fields, vec![field("count(*)", None, Some("total"))]);
        assert_eq!(fields[0].output_name(), "total");
    }

    #[test]
    fn alias_touching_literals() {
        assert_eq!(
            fields_to_descriptors("`a`AS`b`, t.c AS`d`", "ref"),
            vec![
                field("`a`", None, Some("b")),
                field("c", Some("t"), Some("d")),
            ]
        );
    }

    #[test]
    fn as_inside_identifier_is_not_an_alias() {
        assert_eq!(
            fields_to_descriptors("t.alias_asx", "ref"),
            vec![field("alias_asx", Some("t"), None)]
        );
    }
}
