use super::*;
use std::path::Path;

// Lazy so each block stops at the first line ending in `;`.
static CREATE_TABLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ims)^[ \t]*CREATE\s+(?:TEMPORARY\s+)?TABLE\b.*?;[ \t]*\r?$")
        .expect("create table block pattern is valid")
});

#[derive(Debug)]
enum State {
    Regular,
    AwaitingReference { column: String },
}

/// Read every CREATE TABLE block in `content`, in order of appearance.
///
/// Any malformed key line aborts the whole read: one bad table fails the file.
pub fn read_tables(content: &str) -> Result<Vec<TableDescriptor>> {
    CREATE_TABLE_BLOCK
        .find_iter(content)
        .map(|block| read_block(block.as_str()))
        .collect()
}

/// Read a schema file, strip its `--` comments and parse its tables.
pub fn read_tables_file(path: impl AsRef<Path>) -> Result<Vec<TableDescriptor>> {
    let path = path.as_ref();
    debug!("Reading tables from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    read_tables(&strip_line_comments(&content))
}

fn read_block(block: &str) -> Result<TableDescriptor> {
    let mut lines = block.lines();
    let (database, table) = parse_table_name(lines.next().unwrap_or_default())?;
    let mut descriptor = TableDescriptor::new(database, table);
    let mut state = State::Regular;

    for line in lines.map(str::trim).filter(|line| !line.is_empty()) {
        state = match state {
            State::Regular => match classify_line(line)? {
                LineShape::PrimaryKey(columns) => {
                    descriptor.primary_key_columns = columns;
                    State::Regular
                }
                LineShape::UniqueIndex(columns) => {
                    descriptor.unique_indexes.push(columns);
                    State::Regular
                }
                LineShape::ForeignKey {
                    column,
                    target: Some(target),
                } => {
                    descriptor.foreign_keys.insert(column, target);
                    State::Regular
                }
                LineShape::ForeignKey { column, target: None } => {
                    State::AwaitingReference { column }
                }
                LineShape::Column(column) => {
                    descriptor.push_column(column);
                    State::Regular
                }
                LineShape::Unrecognized => {
                    trace!("Skipping line {line:?}");
                    State::Regular
                }
            },
            State::AwaitingReference { column } => match parse_references(line)? {
                Some(target) => {
                    descriptor.foreign_keys.insert(column, target);
                    State::Regular
                }
                None => State::AwaitingReference { column },
            },
        };
    }

    if let State::AwaitingReference { column } = state {
        warn!(
            "Dropping foreign key on {}.{column}: no REFERENCES line before the end of the table",
            descriptor.qualified_name()
        );
    }

    debug!(
        "Read table {} with {} column(s)",
        descriptor.qualified_name(),
        descriptor.column_names.len()
    );
    Ok(descriptor)
}
