mod csv;
mod json;
mod model;
mod xlsx;

pub use model::AgendaRowExport;

use crate::errors::AppResult;
use crate::models::agenda::Agenda;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all exporters.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn export(&self, agenda: &Agenda, path: &Path) -> AppResult<()> {
        match self {
            ExportFormat::Csv => csv::export_csv(agenda, path),
            ExportFormat::Json => json::export_json(agenda, path),
            ExportFormat::Xlsx => xlsx::export_xlsx(agenda, path),
        }
    }
}
