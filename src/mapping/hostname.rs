// FQDN character normalization

/// Lowercases ASCII letters and drops everything except `a-z`, `0-9`, `.` and `-`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            'A'..='Z' => Some(c.to_ascii_lowercase()),
            'a'..='z' | '0'..='9' | '.' | '-' => Some(c),
            _ => None,
        })
        .collect()
}
