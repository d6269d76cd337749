use super::*;

use crate::schema::app::FieldId;

#[derive(Debug, Clone)]
pub struct FindByIndex {
    /// Model whose table is queried
    pub model: ModelId,

    /// The secondary-indexed column to look up
    pub field: FieldId,

    /// Value the column must equal
    pub value: stmt::Value,

    /// Maximum number of rows to return
    pub limit: Option<usize>,
}

impl From<FindByIndex> for Operation {
    fn from(value: FindByIndex) -> Self {
        Self::FindByIndex(value)
    }
}
