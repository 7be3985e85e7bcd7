//! Delimited text reading into [`RawTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use mapcel_model::RawTable;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

fn open_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Rejects UTF-16 input, which would otherwise parse as garbage.
///
/// A UTF-8 BOM is accepted and stripped from the first header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read == 2 {
        let encoding = match buffer {
            [0xFF, 0xFE] => Some("UTF-16 LE"),
            [0xFE, 0xFF] => Some("UTF-16 BE"),
            _ => None,
        };
        if let Some(encoding) = encoding {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding,
            });
        }
    }
    Ok(())
}

/// Reads a comma-delimited file. The first record is the header row.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    read_csv_table_with_options(path, &IngestOptions::default())
}

pub fn read_csv_table_with_options(path: &Path, options: &IngestOptions) -> Result<RawTable> {
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    read_csv_reader(file, &path.display().to_string(), options)
}

/// Reads delimited text from any reader; `source_name` only labels errors.
///
/// Cells are kept verbatim (no trimming) so validation can report the exact
/// offending value. Records may have any number of fields. Empty lines are
/// skipped by the parser; whitespace-only rows are kept for the caller.
pub fn read_csv_reader<R: Read>(
    reader: R,
    source_name: &str,
    options: &IngestOptions,
) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            source_name: source_name.to_string(),
            source,
        })?;
        records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    let mut records = records.into_iter();
    let Some(mut headers) = records.next() else {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    };
    if let Some(first) = headers.first_mut()
        && let Some(stripped) = first.strip_prefix(UTF8_BOM)
    {
        *first = stripped.to_string();
    }
    let rows: Vec<Vec<String>> = records.collect();

    debug!(
        source = source_name,
        columns = headers.len(),
        rows = rows.len(),
        "read delimited table"
    );
    Ok(RawTable::new(headers, rows))
}
