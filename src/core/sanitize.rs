// src/core/sanitize.rs

/// First whitespace-separated token, e.g. `"12 LABS"` → `"12"`.
pub fn leading_token(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// Whatever follows the last `of`, trimmed: `"of 52"` → `"52"`, `"52"` → `"52"`.
pub fn after_last_of(s: &str) -> &str {
    match s.rfind("of") {
        Some(i) => s[i + 2..].trim(),
        None => s.trim(),
    }
}
