// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::ClientExport;
use crate::models::client::ClientRecord;
use crate::ui::messages::warning;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use std::io;
use std::path::Path;

/// High-level export logic over an already reconciled view.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the reconciled view.
    ///
    /// - `format`: "csv" | "json" | "xlsx"
    /// - `file`: absolute path of the output file
    pub fn export(
        view: &[ClientRecord],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let rows: Vec<ClientExport> = view.iter().map(ClientExport::from).collect();

        if rows.is_empty() {
            warning("⚠️  No clients in the reconciled view.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
