const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_MARKERS: [(&str, &str); 5] = [
    ("Bearer ", "Bearer [REDACTED]"),
    ("api_key=", "api_key=[REDACTED]"),
    ("password=", "password=[REDACTED]"),
    ("secret=", "secret=[REDACTED]"),
    ("token=", "token=[REDACTED]"),
];

/// Shortens article text for log lines and masks anything that looks like a
/// credential. Lengths are counted in characters so CJK text is never split
/// inside a code point.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for (marker, replacement) in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let start = search_from + found;
            let value_start = start + marker.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(start..end, replacement);
            search_from = start + replacement.len();
        }
    }

    result
}
