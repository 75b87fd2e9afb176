// src/export/logic.rs

use crate::core::session::Session;
use crate::errors::AppResult;
use crate::export::csv::write_csv_file;
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::json::write_json_file;
use crate::export::model::days_to_export;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// High-level export of a month overview.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every day of the session's month to `file`.
    ///
    /// Without `file` the default name `shift_overzicht_<year>_<MM>.<ext>`
    /// is used inside `dir`. Returns the path that was written.
    pub fn export(
        session: &Session,
        format: &ExportFormat,
        file: Option<&Path>,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(p) => p.to_path_buf(),
            None => dir.join(session.export_file_name(format.as_str())),
        };

        ensure_parent_dir(&path)?;
        ensure_writable(&path, force)?;

        let rows = days_to_export(&session.computed_days());

        info(format!(
            "Exporting {} days of {} to {}: {}",
            rows.len(),
            session.month_key(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => write_csv_file(&path, &rows)?,
            ExportFormat::Json => write_json_file(&path, &rows)?,
        }

        tracing::debug!(path = %path.display(), rows = rows.len(), "export written");
        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path)
    }
}
