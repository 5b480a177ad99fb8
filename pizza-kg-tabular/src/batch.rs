//! Columnar batch of nullable text cells.
//!
//! A `ColumnBatch` holds the whole source table for one mapping pass. It is
//! read-only once built; mapping rules borrow columns by header name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Result, TabularError};

/// Field information for a column in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Header name as it appears in the source file.
    pub name: String,
    /// Zero-based position in the source file.
    pub position: usize,
}

/// Schema for a column batch.
#[derive(Debug, Clone)]
pub struct BatchSchema {
    /// Field definitions in column order.
    pub fields: Vec<FieldInfo>,
    /// Lookup by header name (first occurrence wins).
    name_to_index: HashMap<String, usize>,
}

impl BatchSchema {
    /// Create a new batch schema from field definitions.
    pub fn new(fields: Vec<FieldInfo>) -> Self {
        let mut name_to_index = HashMap::with_capacity(fields.len());
        for (i, f) in fields.iter().enumerate() {
            name_to_index.entry(f.name.clone()).or_insert(i);
        }
        Self {
            fields,
            name_to_index,
        }
    }

    /// Build a schema from header names in order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields = names
            .into_iter()
            .enumerate()
            .map(|(position, name)| FieldInfo {
                name: name.into(),
                position,
            })
            .collect();
        Self::new(fields)
    }

    /// Get field index by name.
    #[inline]
    pub fn index_by_name(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    /// Number of fields in the schema.
    #[inline]
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Header names in column order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// One column of nullable text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column(Vec<Option<String>>);

impl Column {
    pub fn new(values: Vec<Option<String>>) -> Self {
        Self(values)
    }

    /// Create an empty column with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, value: Option<String>) {
        self.0.push(value);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the cell at `idx`; `None` if null or out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.0.get(idx).and_then(|v| v.as_deref())
    }

    /// Check if value at index is null.
    #[inline]
    pub fn is_null(&self, idx: usize) -> bool {
        self.get(idx).is_none()
    }

    /// Iterate over cells in row order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.0.iter().map(|v| v.as_deref())
    }
}

/// Columnar batch - the in-memory table for one mapping pass.
#[derive(Debug, Clone)]
pub struct ColumnBatch {
    /// Schema for this batch.
    pub schema: Arc<BatchSchema>,
    /// Column data in schema order.
    pub columns: Vec<Column>,
    /// Number of rows in the batch.
    pub num_rows: usize,
}

impl ColumnBatch {
    /// Create a new column batch.
    pub fn new(schema: Arc<BatchSchema>, columns: Vec<Column>) -> Result<Self> {
        if columns.len() != schema.num_fields() {
            return Err(TabularError::Schema(format!(
                "Column count mismatch: schema has {} fields, got {} columns",
                schema.num_fields(),
                columns.len()
            )));
        }

        let num_rows = columns.first().map_or(0, |c| c.len());

        for (i, col) in columns.iter().enumerate() {
            if col.len() != num_rows {
                return Err(TabularError::Schema(format!(
                    "Row count mismatch: column {} has {} rows, expected {}",
                    i,
                    col.len(),
                    num_rows
                )));
            }
        }

        Ok(Self {
            schema,
            columns,
            num_rows,
        })
    }

    /// Build a batch from header names and row-major cells.
    ///
    /// Convenient for small in-memory tables; `None` marks a missing cell.
    pub fn from_rows<S: AsRef<str>>(headers: &[S], rows: &[Vec<Option<&str>>]) -> Result<Self> {
        let schema = Arc::new(BatchSchema::from_names(
            headers.iter().map(|h| h.as_ref().to_string()),
        ));
        let mut columns = vec![Column::with_capacity(rows.len()); headers.len()];
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TabularError::Schema(format!(
                    "Row {} has {} cells, expected {}",
                    row_idx,
                    row.len(),
                    headers.len()
                )));
            }
            for (col, cell) in columns.iter_mut().zip(row) {
                col.push(cell.map(str::to_string));
            }
        }
        Self::new(schema, columns)
    }

    /// Get column by header name.
    #[inline]
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.schema.index_by_name(name).map(|i| &self.columns[i])
    }

    /// Check that every named column is present.
    pub fn require_columns(&self, names: &[&str]) -> Result<()> {
        let missing: Vec<String> = names
            .iter()
            .filter(|n| self.schema.index_by_name(n).is_none())
            .map(|n| n.to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(TabularError::MissingColumns(missing))
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }
}
