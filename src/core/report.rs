//! Grouped daily report.
//!
//! Entries are grouped by unit. The [`GENERAL_UNIT`] group always comes first,
//! the others follow in ascending order of their name. Inside a group entries
//! keep the order they were passed in.

use crate::models::entry::Entry;
use crate::models::unit::{GENERAL_UNIT, is_general};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// With entry ids, for review inside the tool.
    Internal,
    /// Without ids, for sharing.
    Export,
}

#[derive(Debug)]
pub struct UnitGroup<'a> {
    pub unit: &'a str,
    pub entries: Vec<&'a Entry>,
}

pub fn group_by_unit(entries: &[Entry]) -> Vec<UnitGroup<'_>> {
    // (false, "Allgemein") sorts before any (true, _)
    let mut groups: BTreeMap<(bool, &str), Vec<&Entry>> = BTreeMap::new();

    for e in entries {
        groups
            .entry((e.unit != GENERAL_UNIT, e.unit.as_str()))
            .or_default()
            .push(e);
    }

    groups
        .into_iter()
        .map(|((_, unit), entries)| UnitGroup { unit, entries })
        .collect()
}

fn render_line(unit: &str, e: &Entry, mode: RenderMode) -> String {
    match (mode, is_general(unit)) {
        (RenderMode::Internal, true) => format!("- [{}] {}", e.id, e.task),
        (RenderMode::Internal, false) => format!("- [{}] Ticket [{}]: {}", e.id, e.ticket, e.task),
        (RenderMode::Export, true) => format!("- {}", e.task),
        (RenderMode::Export, false) => format!("- Ticket [{}]: {}", e.ticket, e.task),
    }
}

/// Render the report. An empty slice gives an empty string.
pub fn render(entries: &[Entry], mode: RenderMode) -> String {
    let mut out = String::new();

    for group in group_by_unit(entries) {
        out.push_str(group.unit);
        out.push_str(":\n");

        for e in &group.entries {
            out.push_str(&render_line(group.unit, e, mode));
            out.push('\n');
        }

        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: i64, unit: &str, ticket: &str, task: &str) -> Entry {
        Entry {
            id,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            unit: unit.into(),
            ticket: ticket.into(),
            task: task.into(),
        }
    }

    fn headers(text: &str) -> Vec<&str> {
        text.lines().filter(|l| l.ends_with(':')).collect()
    }

    #[test]
    fn general_group_first_then_alphabetical() {
        let entries = vec![
            entry(1, "ODL", "T9", "Switch"),
            entry(2, "Allgemein", "Keine", "Mails"),
            entry(3, "FVM", "T1", "Printer"),
        ];

        let text = render(&entries, RenderMode::Internal);
        assert_eq!(headers(&text), vec!["Allgemein:", "FVM:", "ODL:"]);
    }

    #[test]
    fn grouping_keeps_arrival_order() {
        let entries = vec![
            entry(4, "FVM", "T2", "second"),
            entry(5, "ODL", "T3", "other"),
            entry(6, "FVM", "T1", "third"),
        ];

        let groups = group_by_unit(&entries);
        let fvm: Vec<i64> = groups[0].entries.iter().map(|e| e.id).collect();
        assert_eq!(groups[0].unit, "FVM");
        assert_eq!(fvm, vec![4, 6]);
    }

    #[test]
    fn internal_and_export_lines() {
        let entries = vec![
            entry(7, "Allgemein", "Keine", "Team meeting"),
            entry(8, "GRG", "Keine", "Beamer"),
        ];

        assert_eq!(
            render(&entries, RenderMode::Internal),
            "Allgemein:\n- [7] Team meeting\n\nGRG:\n- [8] Ticket [Keine]: Beamer\n\n"
        );
        assert_eq!(
            render(&entries, RenderMode::Export),
            "Allgemein:\n- Team meeting\n\nGRG:\n- Ticket [Keine]: Beamer\n\n"
        );
    }

    #[test]
    fn export_never_shows_ids() {
        let entries = vec![
            entry(10, "Allgemein", "Keine", "[draft] notes"),
            entry(11, "VIS", "T4", "Laptop"),
        ];

        let export = render(&entries, RenderMode::Export);
        let internal = render(&entries, RenderMode::Internal);
        let has_id = |text: &str| {
            text.lines().any(|l| {
                l.strip_prefix("- [")
                    .and_then(|rest| rest.split_once(']'))
                    .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
            })
        };

        assert!(!has_id(&export));
        assert!(has_id(&internal));
    }

    #[test]
    fn unit_names_sort_bytewise() {
        let entries = vec![
            entry(1, "fvm", "x", "lower"),
            entry(2, "FVM", "x", "upper"),
            entry(3, "BSF", "x", "b"),
        ];

        let text = render(&entries, RenderMode::Export);
        assert_eq!(headers(&text), vec!["BSF:", "FVM:", "fvm:"]);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render(&[], RenderMode::Internal), "");
        assert_eq!(render(&[], RenderMode::Export), "");
    }
}
