//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Hours with one decimal, `-` when unknown.
pub fn hours_or_dash(hours: Option<f64>) -> String {
    match hours {
        Some(h) => format!("{h:.1}"),
        None => "-".to_string(),
    }
}

/// Cut `s` to `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
