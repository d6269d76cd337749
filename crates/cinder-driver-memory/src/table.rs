use cinder_core::{
    schema::app::Model,
    stmt::{Value, ValueRecord},
    Result,
};

use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug)]
pub(crate) struct Table {
    pub(crate) name: String,

    /// Number of columns in every row
    columns: usize,

    /// Row positions of the key fields, in key order
    key: Vec<usize>,

    /// Rows, ordered by key
    pub(crate) rows: BTreeMap<ValueRecord, ValueRecord>,

    /// Secondary indexes, by row position of the indexed column
    pub(crate) indexes: HashMap<usize, SecondaryIndex>,
}

/// Column value to the keys of the rows holding it. Null is never indexed.
#[derive(Debug, Default)]
pub(crate) struct SecondaryIndex {
    entries: BTreeMap<Value, BTreeSet<ValueRecord>>,
}

impl Table {
    pub(crate) fn new(model: &Model) -> Self {
        Self {
            name: model.table_name.clone(),
            columns: model.fields.len(),
            key: model.primary_key_indices(),
            rows: BTreeMap::new(),
            indexes: model
                .indexed
                .iter()
                .map(|field| (field.index, SecondaryIndex::default()))
                .collect(),
        }
    }

    /// Stores `row`, replacing the row with the same key. Returns `true` if a
    /// row was replaced.
    pub(crate) fn upsert(&mut self, row: ValueRecord) -> Result<bool> {
        if row.len() != self.columns {
            cinder_core::bail!(
                "row has {} columns; table `{}` has {}",
                row.len(),
                self.name,
                self.columns
            );
        }

        let key = row.project(&self.key);
        let previous = self.rows.remove(&key);

        if let Some(previous) = &previous {
            for (column, index) in &mut self.indexes {
                index.remove(&previous[*column], &key);
            }
        }

        for (column, index) in &mut self.indexes {
            index.insert(row[*column].clone(), key.clone());
        }

        self.rows.insert(key, row);
        Ok(previous.is_some())
    }
}

impl SecondaryIndex {
    fn insert(&mut self, value: Value, key: ValueRecord) {
        if value.is_null() {
            return;
        }

        self.entries.entry(value).or_default().insert(key);
    }

    fn remove(&mut self, value: &Value, key: &ValueRecord) {
        if let Some(keys) = self.entries.get_mut(value) {
            keys.remove(key);

            if keys.is_empty() {
                self.entries.remove(value);
            }
        }
    }

    /// Keys of the rows whose column equals `value`, in key order.
    pub(crate) fn lookup(&self, value: &Value) -> impl Iterator<Item = &ValueRecord> {
        self.entries.get(value).into_iter().flatten()
    }
}
