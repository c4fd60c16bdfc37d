use crate::db::store::Store;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::strip_ansi;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// Colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "migration_applied" | "legacy_import" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    /// Most recent `limit` rows (all when `None`), oldest first.
    pub fn load(store: &Store, limit: Option<usize>) -> AppResult<Vec<LogRow>> {
        let mut stmt = store.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id DESC LIMIT ?1",
        )?;

        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let rows = stmt.query_map([limit], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogRow {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out.reverse();
        Ok(out)
    }

    /// Aligned, coloured lines: `id: date | operation (target) => message`.
    pub fn format_rows(rows: &[LogRow]) -> Vec<String> {
        let op_targets: Vec<String> = rows
            .iter()
            .map(|r| {
                if r.target.is_empty() {
                    r.operation.clone()
                } else {
                    format!("{} ({})", r.operation, r.target)
                }
            })
            .map(|s| {
                if s.chars().count() > OP_MAX_WIDTH {
                    let mut t: String = s.chars().take(OP_MAX_WIDTH - 3).collect();
                    t.push_str("...");
                    t
                } else {
                    s
                }
            })
            .collect();

        let op_w = op_targets.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(0);

        rows.iter()
            .zip(op_targets)
            .map(|(r, op_target)| {
                let color = color_for_operation(&r.operation);

                // only the operation word is coloured
                let colored = match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(op_target.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    r.id,
                    r.date,
                    colored,
                    padding,
                    r.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(store: &Store, limit: Option<usize>) -> AppResult<()> {
        let rows = Self::load(store, limit)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format_rows(&rows) {
            println!("{}", line);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::log::ttlog;

    #[test]
    fn rows_are_aligned_and_limited() {
        let store = Store::open_in_memory().unwrap();
        ttlog(&store.conn, "add", "#1", "2024-06-01 | FVM | Printer").unwrap();
        ttlog(&store.conn, "del", "", "gone").unwrap();

        let all = LogLogic::load(&store, None).unwrap();
        // migration row + the two above
        assert_eq!(all.len(), 3);
        assert_eq!(all.last().unwrap().operation, "del");

        let last = LogLogic::load(&store, Some(1)).unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].message, "gone");

        let lines: Vec<String> = LogLogic::format_rows(&all)
            .iter()
            .map(|l| strip_ansi(l))
            .collect();
        let arrows: Vec<usize> = lines.iter().map(|l| l.find("=>").unwrap()).collect();
        assert!(arrows.windows(2).all(|w| w[0] == w[1]));
        assert!(lines[1].contains("add (#1)"));
    }
}
