//! The three shapes of secondary-index lookup.
//!
//! Generated `with_*`, `find_by_*` and `find_all_by_*` methods are thin typed
//! wrappers over these functions, and [`Db::call`] dispatches to them by
//! accessor name.

use crate::{stmt::Value, Db, Model, Result, Select};

use cinder_core::schema::app::FieldId;

/// A lazy query for the rows whose `field` equals `value`.
pub fn with<M: Model>(field: FieldId, value: impl Into<Value>) -> Select<M> {
    Select::all().restrict(field, value)
}

/// The first row of [`with`], if any.
pub async fn find_by<M: Model>(
    db: &Db,
    field: FieldId,
    value: impl Into<Value>,
) -> Result<Option<M>> {
    with::<M>(field, value).first(db).await
}

/// Every row of [`with`], in the store's order.
pub async fn find_all_by<M: Model>(
    db: &Db,
    field: FieldId,
    value: impl Into<Value>,
) -> Result<Vec<M>> {
    with::<M>(field, value).collect(db).await
}

/// The result of invoking an accessor through [`Db::call`].
#[derive(Debug)]
pub enum Found<M> {
    /// From `with_*`: the query, not yet executed
    Select(Select<M>),

    /// From `find_by_*`
    First(Option<M>),

    /// From `find_all_by_*`
    All(Vec<M>),
}

impl<M> Found<M> {
    pub fn into_select(self) -> Option<Select<M>> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    pub fn into_first(self) -> Option<Option<M>> {
        match self {
            Self::First(first) => Some(first),
            _ => None,
        }
    }

    pub fn into_all(self) -> Option<Vec<M>> {
        match self {
            Self::All(all) => Some(all),
            _ => None,
        }
    }
}
