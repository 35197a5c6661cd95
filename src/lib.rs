//! Lenient structural extraction for SELECT statements and CREATE TABLE blocks.
//!
//! No grammar is involved: backtick literals are swapped out for placeholder
//! tokens, the statement is cut at keyword boundaries, and the literals are put
//! back into each piece.
//!
//! ```rust
//! let clauses = qsplit::split_select("SELECT `from` FROM t WHERE a = 1", "ref").unwrap();
//! assert_eq!(clauses.fields.as_deref(), Some("`from`"));
//! assert_eq!(clauses.from.as_deref(), Some("t"));
//! assert_eq!(clauses.r#where.as_deref(), Some("a = 1"));
//! ```

reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(literal);
reexport!(comment);
reexport!(select);
reexport!(table);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
