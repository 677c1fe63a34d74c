//! Byte-layout convention for row-major field storage.
//!
//! Every field is a signed 32-bit integer occupying [`FIELD_WIDTH`] bytes.
//! Rows are packed back to back, so a cell lives at
//! `FIELD_WIDTH * (row_id * num_cols + col_id)`. The buffer never leaves the
//! process, so fields are stored in native byte order.

/// Width of a single stored field in bytes.
pub const FIELD_WIDTH: usize = 4;

/// Returns the byte offset of a cell within the flat row-major buffer.
pub(crate) fn field_offset(num_cols: usize, row_id: usize, col_id: usize) -> usize {
    FIELD_WIDTH * (row_id * num_cols + col_id)
}

/// Encodes a field value into its stored byte representation.
pub(crate) fn encode_field(value: i32) -> [u8; FIELD_WIDTH] {
    value.to_ne_bytes()
}

/// Decodes a field value from its stored byte representation.
pub(crate) fn decode_field(bytes: [u8; FIELD_WIDTH]) -> i32 {
    i32::from_ne_bytes(bytes)
}
