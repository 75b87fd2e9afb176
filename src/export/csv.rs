use crate::errors::AppResult;
use crate::export::model::DayExport;
use std::io::{Read, Write};
use std::path::Path;

/// Write the rows as CSV (header included thanks to serde).
pub fn write_csv<W: Write>(out: W, rows: &[DayExport]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_writer(out);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[DayExport]) -> AppResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv(file, rows)
}

/// Read back a file produced by [`write_csv`].
pub fn read_csv<R: Read>(input: R) -> AppResult<Vec<DayExport>> {
    let mut rdr = ::csv::Reader::from_reader(input);
    let mut rows = Vec::new();

    for rec in rdr.deserialize::<DayExport>() {
        rows.push(rec?);
    }

    Ok(rows)
}

pub fn read_csv_file(path: &Path) -> AppResult<Vec<DayExport>> {
    let file = std::fs::File::open(path)?;
    read_csv(file)
}
