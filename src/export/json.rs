use crate::errors::AppResult;
use crate::export::model::DayExport;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub fn write_json<W: Write>(mut out: W, rows: &[DayExport]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn write_json_file(path: &Path, rows: &[DayExport]) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_json(file, rows)
}
