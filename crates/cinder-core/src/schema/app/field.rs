use super::{ColumnOptions, ColumnType, ModelId};
use crate::stmt::Type;

use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name
    pub name: FieldName,

    /// Declared column type
    pub column_ty: ColumnType,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Options the column was declared with
    pub options: ColumnOptions,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub app_name: String,
    pub storage_name: Option<String>,
}

impl FieldName {
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_ref().unwrap_or(&self.app_name)
    }
}

impl Field {
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The value type the column stores.
    pub fn ty(&self) -> Type {
        self.column_ty.ty()
    }

    pub fn nullable(&self) -> bool {
        !self.primary_key && self.options.nullable
    }
}

impl From<&Field> for FieldId {
    fn from(field: &Field) -> Self {
        field.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
