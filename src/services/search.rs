/// Escapes LIKE/ILIKE metacharacters in a user-supplied search query so it
/// matches literally inside a `%...%` pattern.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_queries_pass_through() {
        assert_eq!(escape_like("jane doe"), "jane doe");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn metacharacters_are_escaped() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("j_doe"), "j\\_doe");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
