use super::*;

/// The referenced side of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKeyTarget {
    pub database: Option<String>,
    pub table: String,
    pub column: String,
}

/// A single parsed column declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDecl {
    pub name: String,
    /// Lowercased, including any parenthesised size or precision.
    pub data_type: String,
    pub nullable: bool,
    pub auto_increment: bool,
}

/// Structured summary of one CREATE TABLE block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDescriptor {
    pub database: Option<String>,
    pub table: String,
    pub primary_key_columns: Vec<String>,
    pub unique_indexes: Vec<Vec<String>>,
    /// Keyed by the local column name.
    pub foreign_keys: HashMap<String, ForeignKeyTarget>,
    // Declaration order; the authoritative iteration order for the two maps below.
    pub column_names: Vec<String>,
    pub column_types: HashMap<String, String>,
    pub column_nullable: HashMap<String, bool>,
    pub auto_increment_column: Option<String>,
}

impl TableDescriptor {
    pub fn new(database: Option<String>, table: impl Into<String>) -> Self {
        Self {
            database,
            table: table.into(),
            ..Default::default()
        }
    }

    /// `database.table`, or just `table` when no database was named.
    pub fn qualified_name(&self) -> String {
        match &self.database {
            Some(database) => format!("{database}.{}", self.table),
            None => self.table.clone(),
        }
    }

    /// `(name, type, nullable)` for every column, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str, bool)> + '_ {
        self.column_names.iter().filter_map(|name| {
            let data_type = self.column_types.get(name)?;
            let nullable = self.column_nullable.get(name).copied().unwrap_or(true);
            Some((name.as_str(), data_type.as_str(), nullable))
        })
    }

    pub fn is_primary_key(&self, column: &str) -> bool {
        self.primary_key_columns.iter().any(|c| c == column)
    }

    /// Record a column. A redeclared name keeps its first position.
    pub fn push_column(&mut self, column: ColumnDecl) {
        if !self.column_types.contains_key(&column.name) {
            self.column_names.push(column.name.clone());
        }
        if column.auto_increment {
            self.auto_increment_column = Some(column.name.clone());
        }
        self.column_nullable
            .insert(column.name.clone(), column.nullable);
        self.column_types.insert(column.name, column.data_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str, nullable: bool) -> ColumnDecl {
        ColumnDecl {
            name: name.into(),
            data_type: data_type.into(),
            nullable,
            auto_increment: false,
        }
    }

    #[test]
    fn columns_follow_declaration_order() {
        let mut table = TableDescriptor::new(None, "t");
        table.push_column(column("b", "int", false));
        table.push_column(column("a", "text", true));
        table.push_column(column("b", "bigint", true));
        assert_eq!(
            table.columns().collect::<Vec<_>>(),
            vec![("b", "bigint", true), ("a", "text", true)]
        );
        assert_eq!(table.auto_increment_column, None);
    }

    #[test]
    fn qualified_name() {
        assert_eq!(TableDescriptor::new(None, "t").qualified_name(), "t");
        assert_eq!(
            TableDescriptor::new(Some("db".into()), "a.b").qualified_name(),
            "db.a.b"
        );
    }
}
