//! Load interface consumed during table construction.
//!
//! The component that parses external input into packed rows lives outside
//! this crate; it hands the table a [`DataLoader`] yielding one [`RowBuffer`]
//! per row. [`MemoryLoader`] covers callers that already hold materialized
//! rows, including the test suites.

use crate::format::{self, FIELD_WIDTH};

/// A single packed row: consecutive fixed-width fields addressed by column.
#[derive(Debug, Clone)]
pub struct RowBuffer {
    data: Vec<u8>,
}

impl RowBuffer {
    /// Packs a slice of field values into a row buffer.
    pub fn from_ints(fields: &[i32]) -> Self {
        let mut data = Vec::with_capacity(fields.len() * FIELD_WIDTH);
        for &field in fields {
            data.extend_from_slice(&format::encode_field(field));
        }
        Self { data }
    }

    /// Number of fields in the row.
    pub fn num_cols(&self) -> usize {
        self.data.len() / FIELD_WIDTH
    }

    /// Reads the field at the given column offset, or `None` if the column
    /// is outside the row.
    pub fn int_at(&self, col_id: usize) -> Option<i32> {
        let start = col_id.checked_mul(FIELD_WIDTH)?;
        let end = start.checked_add(FIELD_WIDTH)?;
        let bytes = self.data.get(start..end)?;
        let mut field = [0u8; FIELD_WIDTH];
        field.copy_from_slice(bytes);
        Some(format::decode_field(field))
    }
}

/// Source of packed rows for table construction.
///
/// The loader's row count defines the table's row count; its column count
/// must match every row it yields.
pub trait DataLoader {
    /// Number of columns in every row this loader yields.
    fn num_cols(&self) -> usize;

    /// The packed rows, in row-id order.
    fn rows(&self) -> &[RowBuffer];
}

/// Loader over rows already materialized in memory.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    num_cols: usize,
    rows: Vec<RowBuffer>,
}

impl MemoryLoader {
    /// Creates a loader from pre-packed rows.
    pub fn new(num_cols: usize, rows: Vec<RowBuffer>) -> Self {
        Self { num_cols, rows }
    }

    /// Creates a loader by packing unencoded field values.
    pub fn from_ints(num_cols: usize, rows: &[&[i32]]) -> Self {
        Self {
            num_cols,
            rows: rows.iter().map(|fields| RowBuffer::from_ints(fields)).collect(),
        }
    }
}

impl DataLoader for MemoryLoader {
    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn rows(&self) -> &[RowBuffer] {
        &self.rows
    }
}
