// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ReportExport, day_rows};
use crate::models::PayrollReport;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the per-day table of `report` to `file`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is overwritten only with `force` or after confirmation
    pub fn export_report(
        report: &PayrollReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(&day_rows(report), path)?,
            ExportFormat::Json => export_json(&ReportExport::from(report), path)?,
        }

        Ok(())
    }
}
