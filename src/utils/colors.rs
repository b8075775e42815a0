/// ANSI color helper utilities for terminal output.
use crate::models::category::Category;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Highlight for today's cell in the calendar grid.
pub const TODAY: &str = "\x1b[7m";

pub fn color_for_category(category: Category) -> &'static str {
    match category {
        Category::FlightCompleted => GREEN,
        Category::FlightScheduled => BLUE,
        Category::FlightCancelled => RED,
        Category::Maintenance => YELLOW,
        Category::Unknown => MAGENTA,
    }
}

/// Wrap `value` in the category color.
pub fn colorize_category(value: &str, category: Category) -> String {
    format!("{}{value}{RESET}", color_for_category(category))
}

/// Greys out empty placeholders (`""`, `-`, `--:--`).
pub fn colorize_optional(value: &str) -> String {
    match value.trim() {
        "" | "-" | "--:--" => format!("{GREY}{value}{RESET}"),
        _ => value.to_string(),
    }
}
