use super::*;

/// Split a SELECT statement into its top-level clauses.
///
/// Strategy:
/// 1. Escape backtick literals so keyword lookalikes inside them are invisible.
/// 2. For each clause in [`Clause::SPLIT_ORDER`], find the first boundary match
///    in what is left of the statement. The text after the keyword becomes the
///    clause and the text before it becomes the new remainder.
/// 3. Drop whatever precedes `SELECT`.
/// 4. Fail if `fields` or `from` is missing or empty. Any other clause whose
///    keyword has nothing after it is left absent.
/// 5. Restore the literals into every clause found.
///
/// A keyword written against a backtick literal (`` WHERE`x`=1 ``) is still
/// a boundary.
///
/// Only the first occurrence of a keyword is a boundary; a second `WHERE` stays
/// inside the where clause text. Because joins are peeled before `WHERE`, a
/// `WHERE` written after a join ends up inside the joins clause.
pub fn split_select(query: &str, keyword: &str) -> Result<ClauseSet> {
    let (escaped, literals) = escape(query, keyword);
    let mut remainder = escaped.as_str();
    let mut pieces: Vec<(Clause, &str)> = Vec::with_capacity(Clause::SPLIT_ORDER.len());

    for clause in Clause::SPLIT_ORDER {
        let Some(found) = literals.boundary(clause.pattern()).find(remainder) else {
            trace!("No {clause} boundary in {remainder:?}");
            continue;
        };
        let body = if clause.retains_keyword() {
            &remainder[found.start()..]
        } else {
            &remainder[found.end()..]
        };
        trace!("Split {clause} at byte {}", found.start());
        let body = body.trim();
        if !body.is_empty() {
            pieces.push((clause, body));
        }
        remainder = &remainder[..found.start()];
    }

    if !remainder.trim().is_empty() {
        warn!("Discarding text before SELECT: {:?}", remainder.trim());
    }

    for clause in Clause::MANDATORY {
        if !pieces.iter().any(|(c, _)| *c == clause) {
            return Err(Error::MalformedQuery(format!(
                "missing {clause} clause in {:?}",
                query.trim()
            )));
        }
    }

    let mut clauses = ClauseSet::default();
    for (clause, body) in pieces {
        clauses.set(clause, literals.restore(body));
    }
    debug!("Split SELECT into {} clause(s)", clauses.iter().count());
    Ok(clauses)
}
