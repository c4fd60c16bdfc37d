use crate::core::report::{RenderMode, group_by_unit, render};
use crate::db::log::ttlog_quiet;
use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::unit::is_general;
use crate::ui::messages::{success, warning};
use crate::utils::fs::{ensure_parent_dir, ensure_writable};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Export view of one day: grouped, no ids.
#[derive(Serialize, Debug)]
pub struct DayExport<'a> {
    pub date: String,
    pub units: Vec<UnitExport<'a>>,
}

#[derive(Serialize, Debug)]
pub struct UnitExport<'a> {
    pub unit: &'a str,
    pub entries: Vec<TaskExport<'a>>,
}

#[derive(Serialize, Debug)]
pub struct TaskExport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<&'a str>,
    pub task: &'a str,
}

/// Flat CSV row, in report order. The general group has no ticket column value.
#[derive(Serialize, Debug)]
struct CsvRow<'a> {
    date: String,
    unit: &'a str,
    ticket: &'a str,
    task: &'a str,
}

pub struct ExportLogic;

impl ExportLogic {
    pub fn day_export(date: NaiveDate, entries: &[Entry]) -> DayExport<'_> {
        let units = group_by_unit(entries)
            .into_iter()
            .map(|g| {
                let unit = g.unit;
                UnitExport {
                    unit,
                    entries: g
                        .entries
                        .into_iter()
                        .map(|e| TaskExport {
                            ticket: (!is_general(unit)).then_some(e.ticket.as_str()),
                            task: e.task.as_str(),
                        })
                        .collect(),
                }
            })
            .collect();

        DayExport {
            date: date.format("%Y-%m-%d").to_string(),
            units,
        }
    }

    pub fn to_json(date: NaiveDate, entries: &[Entry]) -> AppResult<String> {
        serde_json::to_string_pretty(&Self::day_export(date, entries))
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
    }

    pub fn to_csv(entries: &[Entry]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(Vec::new());

        for g in group_by_unit(entries) {
            for e in &g.entries {
                wtr.serialize(CsvRow {
                    date: e.date.format("%Y-%m-%d").to_string(),
                    unit: g.unit,
                    ticket: if is_general(g.unit) { "" } else { &e.ticket },
                    task: &e.task,
                })
                .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
            }
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

        String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
    }

    pub fn render(format: ExportFormat, date: NaiveDate, entries: &[Entry]) -> AppResult<String> {
        match format {
            ExportFormat::Text => Ok(render(entries, RenderMode::Export)),
            ExportFormat::Json => Self::to_json(date, entries),
            ExportFormat::Csv => Self::to_csv(entries),
        }
    }

    /// Export one day to stdout, or to `file` when given.
    pub fn export(
        store: &Store,
        date: NaiveDate,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let entries = store.query_by_date(date)?;

        if entries.is_empty() {
            warning(format!("No entries for {}, nothing to export.", date));
            return Ok(());
        }

        let content = Self::render(format, date, &entries)?;

        let Some(file) = file else {
            print!("{}", content);
            return Ok(());
        };

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;
        ensure_parent_dir(&path)?;
        fs::write(&path, content)?;

        ttlog_quiet(
            &store.conn,
            "export",
            &path.to_string_lossy(),
            &format!("{} export of {} ({} entries)", format.as_str(), date, entries.len()),
        );

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}
