//! Flat row-major field buffer.

use crate::error::TableError;
use crate::format::{self, FIELD_WIDTH};
use crate::loader::RowBuffer;

/// Row-major buffer of `num_rows * num_cols` fixed-width fields.
///
/// Owns all cell data; dimensions are fixed once loaded. Cell access is
/// bounds-checked and returns [`TableError::OutOfRange`] rather than leaving
/// out-of-bounds reads undefined.
#[derive(Debug)]
pub struct RowStore {
    data: Vec<u8>,
    num_rows: usize,
    num_cols: usize,
}

impl RowStore {
    /// Builds the buffer by copying every field from the source rows in
    /// row-major order.
    ///
    /// Allocates exactly `num_rows * num_cols` fields. Fails with
    /// [`TableError::SchemaMismatch`] if any source row's column count
    /// disagrees with `num_cols`.
    pub fn load(rows: &[RowBuffer], num_cols: usize) -> Result<Self, TableError> {
        let num_rows = rows.len();
        let mut data = Vec::with_capacity(FIELD_WIDTH * num_rows * num_cols);

        for (row_id, row) in rows.iter().enumerate() {
            if row.num_cols() != num_cols {
                return Err(TableError::SchemaMismatch {
                    row_id,
                    expected: num_cols,
                    got: row.num_cols(),
                });
            }
            for col_id in 0..num_cols {
                let field = row.int_at(col_id).ok_or(TableError::OutOfRange {
                    row_id,
                    col_id,
                    num_rows,
                    num_cols,
                })?;
                data.extend_from_slice(&format::encode_field(field));
            }
        }

        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Number of rows in the buffer.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns per row.
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Reads the field at (`row_id`, `col_id`).
    pub fn get(&self, row_id: usize, col_id: usize) -> Result<i32, TableError> {
        self.check_bounds(row_id, col_id)?;
        let start = format::field_offset(self.num_cols, row_id, col_id);
        let mut field = [0u8; FIELD_WIDTH];
        field.copy_from_slice(&self.data[start..start + FIELD_WIDTH]);
        Ok(format::decode_field(field))
    }

    /// Overwrites the field at (`row_id`, `col_id`) in place.
    pub fn set(&mut self, row_id: usize, col_id: usize, value: i32) -> Result<(), TableError> {
        self.check_bounds(row_id, col_id)?;
        let start = format::field_offset(self.num_cols, row_id, col_id);
        self.data[start..start + FIELD_WIDTH].copy_from_slice(&format::encode_field(value));
        Ok(())
    }

    fn check_bounds(&self, row_id: usize, col_id: usize) -> Result<(), TableError> {
        if row_id >= self.num_rows || col_id >= self.num_cols {
            return Err(TableError::OutOfRange {
                row_id,
                col_id,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            });
        }
        Ok(())
    }
}
