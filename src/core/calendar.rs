//! Month view marking the days that have entries.

use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

const MARK: char = '*';
const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Render one month, Monday first. Each day cell is 4 columns wide:
/// a space, the day right-aligned on 2 columns, then `*` or a space.
pub fn render_month(year: i32, month: u32, marked: &BTreeSet<NaiveDate>) -> String {
    let days = all_days_of_month(year, month);
    let Some(first) = days.first() else {
        return String::new();
    };

    let mut out = format!("{} {}\n", first.format("%B"), year);

    let header: Vec<String> = WEEKDAYS.iter().map(|w| format!(" {} ", w)).collect();
    out.push_str(header.concat().trim_end());
    out.push('\n');

    let offset = first.weekday().num_days_from_monday() as usize;
    let mut row = "    ".repeat(offset);

    for d in &days {
        let mark = if marked.contains(d) { MARK } else { ' ' };
        row.push_str(&format!(" {:>2}{}", d.day(), mark));

        if d.weekday().num_days_from_monday() == 6 {
            out.push_str(row.trim_end());
            out.push('\n');
            row.clear();
        }
    }

    if !row.trim().is_empty() {
        out.push_str(row.trim_end());
        out.push('\n');
    }

    let logged = days.iter().filter(|d| marked.contains(d)).count();
    out.push_str(&format!("\n{} = entries logged ({} day(s))\n", MARK, logged));

    out
}

/// One ISO date per line, ascending.
pub fn list_dates(dates: &BTreeSet<NaiveDate>) -> String {
    dates
        .iter()
        .map(|d| format!("{}\n", d.format("%Y-%m-%d")))
        .collect()
}
