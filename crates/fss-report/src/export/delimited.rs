//! Semicolon-delimited text for one flattened row.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{ExportError, Result};
use crate::flatten::FlattenedRow;

/// Field separator of the exported file.
pub const DELIMITER: u8 = b';';

/// Header line of keys followed by a line of values.
///
/// Nothing is quoted or escaped, so a value that itself contains the
/// delimiter or a newline corrupts the row. Such values are logged.
pub fn to_delimited(row: &FlattenedRow) -> Result<String> {
    if row.is_empty() {
        return Ok("\n\n".to_string());
    }

    for (key, value) in row.iter() {
        if value.contains(DELIMITER as char) || value.contains('\n') {
            tracing::warn!(column = key, "exported value contains a delimiter or newline");
        }
    }

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(row.keys())?;
    writer.write_record(row.values())?;

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Encode(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Encode(err.to_string()))
}
