//! Delimited-text reader.
//!
//! Reads a headered CSV file into a [`ColumnBatch`]. The dialect defaults to
//! comma-separated, double-quote-quoted, backslash-escaped text, which is how
//! the restaurant dataset is published.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::batch::{BatchSchema, Column, ColumnBatch};
use crate::error::{Result, TabularError};

/// Cell contents read as missing, matching the usual dataframe defaults.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Dialect and null-handling options for [`read_csv`].
#[derive(Debug, Clone)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Escape character inside quoted fields; doubled quotes are accepted too.
    pub escape: Option<u8>,
    /// Treat [`DEFAULT_NA_VALUES`] as missing.
    pub keep_default_na: bool,
    /// Additional cell contents treated as missing.
    pub na_values: Vec<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: Some(b'\\'),
            keep_default_na: true,
            na_values: Vec::new(),
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_keep_default_na(mut self, keep: bool) -> Self {
        self.keep_default_na = keep;
        self
    }

    pub fn with_na_value(mut self, value: impl Into<String>) -> Self {
        self.na_values.push(value.into());
        self
    }

    /// Whether a raw cell is read as missing.
    pub fn is_missing(&self, cell: &str) -> bool {
        (self.keep_default_na && DEFAULT_NA_VALUES.contains(&cell))
            || self.na_values.iter().any(|v| v == cell)
    }

    fn to_value(&self, cell: &str) -> Option<String> {
        if self.is_missing(cell) {
            None
        } else {
            Some(cell.to_string())
        }
    }
}

/// Read a headered CSV from any reader.
///
/// Every record must have as many fields as the header; a ragged or
/// otherwise malformed record aborts the read with [`TabularError::Csv`].
pub fn read_csv<R: Read>(reader: R, options: &CsvOptions) -> Result<ColumnBatch> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .quote(options.quote)
        .escape(options.escape)
        .double_quote(true)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let schema = Arc::new(BatchSchema::from_names(headers.iter()));
    let mut columns = vec![Column::default(); schema.num_fields()];

    for result in rdr.records() {
        let record = result?;
        for (col, cell) in columns.iter_mut().zip(record.iter()) {
            col.push(options.to_value(cell));
        }
    }

    let batch = ColumnBatch::new(schema, columns)?;
    debug!(
        rows = batch.num_rows,
        columns = batch.schema.num_fields(),
        "parsed delimited text"
    );
    Ok(batch)
}

/// Open and read a headered CSV file.
pub fn read_csv_path(path: impl AsRef<Path>, options: &CsvOptions) -> Result<ColumnBatch> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TabularError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let batch = read_csv(file, options)?;
    info!(
        path = %path.display(),
        rows = batch.num_rows,
        columns = batch.schema.num_fields(),
        "loaded source table"
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<ColumnBatch> {
        read_csv(text.as_bytes(), &CsvOptions::default())
    }

    #[test]
    fn test_basic_read() {
        let batch = read("name,city\nPizza Place,London\nSlice,Paris\n").unwrap();
        assert_eq!(batch.num_rows, 2);
        assert_eq!(
            batch.schema.names().collect::<Vec<_>>(),
            vec!["name", "city"]
        );
        assert_eq!(batch.column_by_name("city").unwrap().get(1), Some("Paris"));
    }

    #[test]
    fn test_quoted_and_escaped_fields() {
        let text = "name,item description\n\"Joe's, Downtown\",\"The \\\"best\\\" slice\"\n\"Ann\",\"say \"\"hi\"\"\"\n";
        let batch = read(text).unwrap();
        let name = batch.column_by_name("name").unwrap();
        let desc = batch.column_by_name("item description").unwrap();
        assert_eq!(name.get(0), Some("Joe's, Downtown"));
        assert_eq!(desc.get(0), Some("The \"best\" slice"));
        assert_eq!(desc.get(1), Some("say \"hi\""));
    }

    #[test]
    fn test_missing_values_are_null() {
        let batch = read("city,state\nLondon,\nParis,NaN\nAustin,TX\nLeeds,N/A\n").unwrap();
        let state = batch.column_by_name("state").unwrap();
        assert!(state.is_null(0));
        assert!(state.is_null(1));
        assert_eq!(state.get(2), Some("TX"));
        assert!(state.is_null(3));
    }

    #[test]
    fn test_keep_default_na_disabled() {
        let options = CsvOptions::default().with_keep_default_na(false);
        let batch = read_csv("state\nNA\n\"\"\n".as_bytes(), &options).unwrap();
        let state = batch.column_by_name("state").unwrap();
        assert_eq!(state.get(0), Some("NA"));
        assert_eq!(state.get(1), Some(""));
    }

    #[test]
    fn test_extra_na_values() {
        let options = CsvOptions::default().with_na_value("-");
        let batch = read_csv("postcode\n-\nSW1A\n".as_bytes(), &options).unwrap();
        let postcode = batch.column_by_name("postcode").unwrap();
        assert!(postcode.is_null(0));
        assert_eq!(postcode.get(1), Some("SW1A"));
    }

    #[test]
    fn test_no_trimming() {
        let batch = read("city\n  London \n").unwrap();
        assert_eq!(batch.column_by_name("city").unwrap().get(0), Some("  London "));
    }

    #[test]
    fn test_wrong_column_count_is_fatal() {
        let err = read("name,city\nPizza Place,London,extra\n").unwrap_err();
        assert!(matches!(err, TabularError::Csv(_)));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let bytes: &[u8] = b"city\n\xff\xfe\n";
        let err = read_csv(bytes, &CsvOptions::default()).unwrap_err();
        assert!(matches!(err, TabularError::Csv(_)));
    }

    #[test]
    fn test_header_only() {
        let batch = read("name,city\n").unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.schema.num_fields(), 2);
    }
}
