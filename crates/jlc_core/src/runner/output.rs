//! Truncation of captured converter output for display.

/// First `n` non-empty lines of `text`, joined with newlines.
pub fn head_lines(text: &str, n: usize) -> String {
    non_empty_lines(text).take(n).collect::<Vec<_>>().join("\n")
}

/// Last `n` non-empty lines of `text`, joined with newlines.
pub fn tail_lines(text: &str, n: usize) -> String {
    let lines: Vec<&str> = non_empty_lines(text).collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim_end).filter(|line| !line.trim().is_empty())
}
