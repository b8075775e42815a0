//! One-line status output and the yes/no prompt used before destructive
//! operations (delete, overwrite).

use crate::utils::colors::{BLUE, GREEN, RED, RESET, YELLOW};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

fn tagged(color: &str, tag: &str, msg: impl Display) -> String {
    format!("{color}{tag}{RESET} {msg}")
}

pub fn info(msg: impl Display) {
    println!("{}", tagged(BLUE, "ℹ️", msg));
}

pub fn success(msg: impl Display) {
    println!("{}", tagged(GREEN, "✅", msg));
}

pub fn warning(msg: impl Display) {
    println!("{}", tagged(YELLOW, "⚠️", msg));
}

/// Errors go to stderr so they never mix with exported or listed data.
pub fn error(msg: impl Display) {
    eprintln!("{}", tagged(RED, "❌", msg));
}

/// Ask `question` on stdout and read one line from stdin.
pub fn confirm(question: &str) -> io::Result<bool> {
    confirm_from(question, &mut io::stdin().lock())
}

/// Only `y` or `yes` (any case) count as consent; EOF is a no.
pub fn confirm_from<R: BufRead>(question: &str, input: &mut R) -> io::Result<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
