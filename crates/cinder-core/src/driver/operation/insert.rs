use super::*;

#[derive(Debug, Clone)]
pub struct Insert {
    /// Model whose table receives the row
    pub model: ModelId,

    /// Row values, in field order
    pub row: stmt::ValueRecord,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
