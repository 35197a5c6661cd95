//! CREATE TABLE block reading.
//!
//! Modules:
//! - `descriptor` : `TableDescriptor` and `ForeignKeyTarget`, the reader's output.
//! - `line`       : Classifies one body line into a key, constraint or column shape.
//! - `reader`     : Finds every CREATE TABLE block and folds its lines into a descriptor.
//!
//! The input is expected in the multi-line layout dump tools emit: the table
//! name on the `CREATE TABLE` line, one declaration per line, and a `;` ending
//! the last line of the block. Comments must be stripped first, see
//! [`strip_line_comments`](crate::strip_line_comments).

crate::reexport!(descriptor);
crate::reexport!(line);
crate::reexport!(reader);
crate::reexport!(reader_tests, test);

use crate::*;
use regex::Regex;
use std::{collections::HashMap, sync::LazyLock};
