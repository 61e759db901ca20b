/// Remove every whitespace run; `None` becomes an empty string.
pub fn strip_whitespace(value: Option<&str>) -> String {
    value
        .map(|v| v.chars().filter(|c| !c.is_whitespace()).collect())
        .unwrap_or_default()
}

/// `2024-05-01` -> `2024/05/01`
pub fn normalize_date_separators(value: &str) -> String {
    value.replace('-', "/")
}
