use super::*;

/// One top-level section of a SELECT statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Clause {
    #[display("SELECT")]
    Fields,
    #[display("FROM")]
    From,
    #[display("JOIN")]
    Joins,
    #[display("WHERE")]
    Where,
    #[display("GROUP BY")]
    GroupBy,
    #[display("HAVING")]
    Having,
    #[display("ORDER BY")]
    OrderBy,
    #[display("LIMIT")]
    Limit,
}

impl Clause {
    /// The order clauses are cut off the statement in. Each search only sees
    /// the text left over by the clauses before it.
    pub const SPLIT_ORDER: [Self; 8] = [
        Clause::Limit,
        Clause::OrderBy,
        Clause::Having,
        Clause::GroupBy,
        Clause::Joins,
        Clause::Where,
        Clause::From,
        Clause::Fields,
    ];

    /// Conventional reading order, used when iterating a `ClauseSet`.
    pub const STATEMENT_ORDER: [Self; 8] = [
        Clause::Fields,
        Clause::From,
        Clause::Joins,
        Clause::Where,
        Clause::GroupBy,
        Clause::Having,
        Clause::OrderBy,
        Clause::Limit,
    ];

    /// Clauses without which a statement cannot be described.
    pub const MANDATORY: [Self; 2] = [Clause::Fields, Clause::From];

    /// Pattern of the keyword opening this clause. Compile it with
    /// [`LiteralMap::boundary`] so placeholders count as word breaks.
    pub const fn pattern(self) -> &'static str {
        match self {
            Clause::Fields => "SELECT",
            Clause::From => "FROM",
            Clause::Joins => r"(?:(?:INNER|CROSS|(?:LEFT|RIGHT)(?:\s+OUTER)?)\s+)?JOIN",
            Clause::Where => "WHERE",
            Clause::GroupBy => r"GROUP\s+BY",
            Clause::Having => "HAVING",
            Clause::OrderBy => r"ORDER\s+BY",
            Clause::Limit => "LIMIT",
        }
    }

    /// Whether the matched keyword stays at the front of the clause text.
    /// Only joins keep it, so `LEFT JOIN` and `INNER JOIN` remain distinguishable.
    pub const fn retains_keyword(self) -> bool {
        matches!(self, Clause::Joins)
    }
}

/// The clauses found in one SELECT statement, literals restored and trimmed.
///
/// `fields` and `from` are always present on a set produced by [`split_select`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    pub fields: Option<String>,
    pub from: Option<String>,
    pub joins: Option<String>,
    pub r#where: Option<String>,
    pub group_by: Option<String>,
    pub having: Option<String>,
    pub order_by: Option<String>,
    pub limit: Option<String>,
}

impl ClauseSet {
    fn slot_mut(&mut self, clause: Clause) -> &mut Option<String> {
        match clause {
            Clause::Fields => &mut self.fields,
            Clause::From => &mut self.from,
            Clause::Joins => &mut self.joins,
            Clause::Where => &mut self.r#where,
            Clause::GroupBy => &mut self.group_by,
            Clause::Having => &mut self.having,
            Clause::OrderBy => &mut self.order_by,
            Clause::Limit => &mut self.limit,
        }
    }

    pub fn get(&self, clause: Clause) -> Option<&str> {
        let slot = match clause {
            Clause::Fields => &self.fields,
            Clause::From => &self.from,
            Clause::Joins => &self.joins,
            Clause::Where => &self.r#where,
            Clause::GroupBy => &self.group_by,
            Clause::Having => &self.having,
            Clause::OrderBy => &self.order_by,
            Clause::Limit => &self.limit,
        };
        slot.as_deref()
    }

    pub fn set(&mut self, clause: Clause, text: impl Into<String>) {
        *self.slot_mut(clause) = Some(text.into());
    }

    pub fn contains(&self, clause: Clause) -> bool {
        self.get(clause).is_some()
    }

    /// Present clauses in statement order.
    pub fn iter(&self) -> impl Iterator<Item = (Clause, &str)> + '_ {
        Clause::STATEMENT_ORDER
            .into_iter()
            .filter_map(|clause| self.get(clause).map(|text| (clause, text)))
    }

    /// Decompose the fields clause, see [`fields_to_descriptors`].
    pub fn field_descriptors(&self, keyword: &str) -> Result<Vec<FieldDescriptor>> {
        let fields = self.required(Clause::Fields)?;
        Ok(fields_to_descriptors(fields, keyword))
    }

    /// Decompose the from clause, see [`from_to_descriptor`].
    pub fn from_descriptor(&self, keyword: &str) -> Result<FromDescriptor> {
        let from = self.required(Clause::From)?;
        Ok(from_to_descriptor(from, keyword))
    }

    fn required(&self, clause: Clause) -> Result<&str> {
        self.get(clause)
            .ok_or_else(|| Error::MalformedQuery(format!("query has no {clause} clause")))
    }
}
