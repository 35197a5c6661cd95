/// Remove `--` line comments from SQL text.
///
/// A `--` inside a single-quoted, double-quoted or backtick-quoted span is
/// kept. Line breaks are preserved so later line-based readers see the same
/// layout.
pub fn strip_line_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    for (i, line) in sql.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&line[..comment_start(line).unwrap_or(line.len())]);
    }
    out
}

fn comment_start(line: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"' | '`') => quote = Some(c),
            (None, '-') if matches!(chars.peek(), Some((_, '-'))) => return Some(i),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_and_full_line_comments() {
        let sql = "-- dump header\nCREATE TABLE `t` ( -- the table\n  `a` int\n);";
        assert_eq!(
            strip_line_comments(sql),
            "\nCREATE TABLE `t` ( \n  `a` int\n);"
        );
    }

    #[test]
    fn keeps_dashes_inside_quotes() {
        let sql = "`a--b` varchar(3) DEFAULT '--', -- real comment";
        assert_eq!(
            strip_line_comments(sql),
            "`a--b` varchar(3) DEFAULT '--', "
        );
    }

    #[test]
    fn single_dash_is_not_a_comment() {
        assert_eq!(strip_line_comments("a - b"), "a - b");
    }
}
