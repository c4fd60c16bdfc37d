//! ANSI color helper utilities for terminal output.

use regex::Regex;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Highlight marked calendar days (`12*`) in cyan.
pub fn colorize_marked_days(text: &str) -> String {
    match Regex::new(r"(\d{1,2})\*") {
        Ok(re) => re
            .replace_all(text, format!("{CYAN}${{1}}*{RESET}").as_str())
            .into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Remove ANSI escape sequences (for width computations).
pub fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_days_roundtrip_through_strip() {
        let line = "  1*   2  10*";
        let colored = colorize_marked_days(line);
        assert!(colored.contains(&format!("{CYAN}10*{RESET}")));
        assert_eq!(strip_ansi(&colored), line);
    }
}
