//! SELECT statement decomposition.
//!
//! Modules:
//! - `clause`   : The clause kinds, their keyword patterns and the `ClauseSet` result.
//! - `splitter` : Peels clauses off the tail of an escaped statement.
//! - `field`    : Breaks a fields clause into column / table alias / alias triples.
//! - `from`     : Breaks a single-table from clause into database / table / alias.
//!
//! NOTE: Subqueries, function calls with nested commas and `UNION`s are not
//! understood. A keyword inside a backtick literal is always safe; one inside a
//! quoted string or a subquery is not.

crate::reexport!(clause);
crate::reexport!(splitter);
crate::reexport!(field);
crate::reexport!(from);
crate::reexport!(splitter_tests, test);

use crate::*;
