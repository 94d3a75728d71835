use linepath_core::ComparisonRow;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::error::ReportError;
use crate::utils::format_path_length;

pub const CSV_HEADER: &str = "target_index,target_position,method,path_length,opened,visited";

/// Writes comparison rows as CSV, one line per engine run.
///
/// Every field is numeric or a fixed label (`none` for a missing path), so no quoting is needed.
pub fn write_csv<W: Write>(mut writer: W, rows: &[ComparisonRow]) -> Result<(), ReportError> {
    writeln!(writer, "{}", CSV_HEADER)?;

    for row in rows {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            row.target,
            row.target_position,
            row.algorithm.label(),
            format_path_length(row),
            row.opened,
            row.visited
        )?;
    }

    writer.flush()?;
    Ok(())
}

pub fn save_csv(path: &Path, rows: &[ComparisonRow]) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    write_csv(BufWriter::new(file), rows)?;
    debug!(path = %path.display(), rows = rows.len(), "saved csv report");
    Ok(())
}
