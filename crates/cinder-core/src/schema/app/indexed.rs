use super::FieldId;

use indexmap::IndexSet;

/// The columns of a model that carry a secondary index, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedColumns {
    fields: IndexSet<FieldId>,
}

impl IndexedColumns {
    /// Adds a column. Returns `false` if it was already present.
    pub(crate) fn insert(&mut self, field: FieldId) -> bool {
        self.fields.insert(field)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
