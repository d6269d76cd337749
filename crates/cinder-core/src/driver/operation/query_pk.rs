use super::*;

#[derive(Debug, Clone)]
pub struct QueryPk {
    /// Model whose table is queried
    pub model: ModelId,

    /// Values of every key field, in key order
    pub key: stmt::ValueRecord,
}

impl From<QueryPk> for Operation {
    fn from(value: QueryPk) -> Self {
        Self::QueryPk(value)
    }
}
