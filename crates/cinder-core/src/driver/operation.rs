mod find_by_index;
pub use find_by_index::FindByIndex;

mod insert;
pub use insert::Insert;

mod query_pk;
pub use query_pk::QueryPk;

mod scan;
pub use scan::Scan;

use crate::{schema::app::ModelId, stmt};

#[derive(Debug, Clone)]
pub enum Operation {
    /// Store a row, replacing any row with the same key
    Insert(Insert),

    /// Read every row of a table
    Scan(Scan),

    /// Read the row identified by a full primary key
    QueryPk(QueryPk),

    /// Read the rows whose indexed column equals a value
    FindByIndex(FindByIndex),
}

impl Operation {
    /// The model whose table the operation touches.
    pub fn model(&self) -> ModelId {
        match self {
            Self::Insert(op) => op.model,
            Self::Scan(op) => op.model,
            Self::QueryPk(op) => op.model,
            Self::FindByIndex(op) => op.model,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }

    pub fn is_find_by_index(&self) -> bool {
        matches!(self, Self::FindByIndex(_))
    }
}
