use super::{Accessor, Accessors, Field, FieldId, IndexedColumns, Name, PrimaryKey};

use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Table the model's rows are stored in
    pub table_name: String,

    /// Fields contained by the model, in declaration order
    pub fields: Vec<Field>,

    /// The model's primary key
    pub primary_key: PrimaryKey,

    /// Columns carrying a secondary index
    pub indexed: IndexedColumns,

    /// The model's query namespace
    pub accessors: Accessors,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    /// Like [`field`](Self::field), but `None` for a field of another model.
    pub fn get_field(&self, field: FieldId) -> Option<&Field> {
        if field.model != self.id {
            return None;
        }

        self.fields.get(field.index)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// Iterate over the fields used for the model's primary key.
    pub fn primary_key_fields(&self) -> impl ExactSizeIterator<Item = &'_ Field> {
        self.primary_key
            .fields
            .iter()
            .map(|field_id| &self.fields[field_id.index])
    }

    /// Positions of the key fields within a row, in key order.
    pub fn primary_key_indices(&self) -> Vec<usize> {
        self.primary_key.fields.iter().map(|f| f.index).collect()
    }

    pub fn is_key(&self, field: FieldId) -> bool {
        self.primary_key.contains(field)
    }

    pub fn is_indexed(&self, field: FieldId) -> bool {
        self.indexed.contains(field)
    }

    /// Look up an entry of the model's query namespace.
    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.get(name)
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
