//! Table state, load, and point mutation.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::index::OrderedIndex;
use crate::loader::DataLoader;
use crate::store::RowStore;

/// Row-major table with an ordered secondary index on one column.
///
/// Composes the flat field buffer with the index and keeps the two
/// consistent across point writes. All mutation goes through `&mut self`
/// methods, so in the single-threaded execution model no query can observe
/// the index mid-repair.
#[derive(Debug)]
pub struct IndexedRowTable {
    pub(crate) store: RowStore,
    pub(crate) index: OrderedIndex,
    pub(crate) index_column: usize,
}

impl IndexedRowTable {
    /// Loads a table from the given data loader.
    ///
    /// The loader's row count defines the table's row count; every source
    /// field is read exactly once while the buffer is built, and the index
    /// on `config.index_column` is bulk-populated from the fresh buffer.
    /// This is the only bulk index population; all later changes are
    /// incremental. Either fully succeeds or returns an error with no table
    /// constructed.
    pub fn load(config: &TableConfig, loader: &impl DataLoader) -> Result<Self, TableError> {
        let num_cols = loader.num_cols();
        if config.index_column >= num_cols {
            return Err(TableError::InvalidIndexColumn {
                index_column: config.index_column,
                num_cols,
            });
        }

        let store = RowStore::load(loader.rows(), num_cols)?;

        let mut index = OrderedIndex::new();
        for row_id in 0..store.num_rows() {
            index.insert(store.get(row_id, config.index_column)?, row_id);
        }

        tracing::debug!(
            "Loaded {} rows x {} cols, index on column {}",
            store.num_rows(),
            num_cols,
            config.index_column
        );

        Ok(Self {
            store,
            index,
            index_column: config.index_column,
        })
    }

    /// Number of rows in the table.
    pub fn num_rows(&self) -> usize {
        self.store.num_rows()
    }

    /// Number of columns per row.
    pub fn num_cols(&self) -> usize {
        self.store.num_cols()
    }

    /// Column the ordered index is maintained on.
    pub fn index_column(&self) -> usize {
        self.index_column
    }

    /// Read-only view of the ordered index.
    pub fn index(&self) -> &OrderedIndex {
        &self.index
    }

    /// Returns the field at (`row_id`, `col_id`).
    pub fn get_int_field(&self, row_id: usize, col_id: usize) -> Result<i32, TableError> {
        self.store.get(row_id, col_id)
    }

    /// Writes the field at (`row_id`, `col_id`), repairing the index when
    /// the indexed column changes.
    ///
    /// Writing the value already present in the indexed column is an
    /// explicit no-op that leaves the index untouched. Otherwise the row id
    /// moves from the old value's bucket (collapsing it if emptied) to the
    /// new value's bucket before the field is overwritten.
    pub fn put_int_field(
        &mut self,
        row_id: usize,
        col_id: usize,
        value: i32,
    ) -> Result<(), TableError> {
        if col_id == self.index_column {
            let old = self.store.get(row_id, col_id)?;
            if old == value {
                return Ok(());
            }
            self.index.remove(old, row_id)?;
            self.index.insert(value, row_id);
        }
        self.store.set(row_id, col_id, value)
    }
}
