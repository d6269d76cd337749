use super::Value;
use crate::schema::app::{FieldId, ModelId};

/// "All rows of a model", narrowed by zero or more equality restrictions.
///
/// A query is only a description. Nothing runs until it is handed to a
/// database handle, so restrictions can be added freely; whether the store
/// can serve the resulting combination is decided at execution time.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Model being queried
    pub model: ModelId,

    /// Field equality restrictions, all of which must hold
    pub restrictions: Vec<Restriction>,

    /// Maximum number of rows to return
    pub limit: Option<usize>,
}

/// Restricts a query to rows where `field` equals `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    pub field: FieldId,
    pub value: Value,
}

impl Query {
    /// A query for every row of the model.
    pub fn all(model: impl Into<ModelId>) -> Self {
        Self {
            model: model.into(),
            restrictions: vec![],
            limit: None,
        }
    }

    /// Narrow the query to rows where `field == value`.
    ///
    /// The field is not checked against the model here. A field of another
    /// model is rejected when the query runs.
    pub fn restrict(mut self, field: impl Into<FieldId>, value: impl Into<Value>) -> Self {
        self.restrictions.push(Restriction {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.restrictions.is_empty()
    }

    /// Returns the restriction on `field`, if any.
    pub fn restriction(&self, field: FieldId) -> Option<&Restriction> {
        self.restrictions.iter().find(|r| r.field == field)
    }
}
