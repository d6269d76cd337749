use super::*;
use crate::{cursor::FromCursor, Cursor, Db, Result};

use cinder_core::schema::app::FieldId;

use std::{fmt, marker::PhantomData};

/// A lazy query over the rows of `M`.
///
/// Building a `Select` never touches the database. Restrictions accumulate
/// until the query is executed with one of [`exec`](Self::exec),
/// [`first`](Self::first), [`get`](Self::get) or [`collect`](Self::collect).
pub struct Select<M> {
    /// How to filter the data source
    pub(crate) untyped: stmt::Query,

    _p: PhantomData<M>,
}

impl<M: Model> Select<M> {
    /// Every row of the model.
    pub fn all() -> Self {
        Self::from_untyped(stmt::Query::all(M::id()))
    }

    pub const fn from_untyped(untyped: stmt::Query) -> Self {
        Self {
            untyped,
            _p: PhantomData,
        }
    }

    /// Narrow the query to rows whose `field` equals `value`.
    ///
    /// Any number of restrictions may be stacked. Whether the combination
    /// can be served is checked when the query runs.
    pub fn restrict(mut self, field: impl Into<FieldId>, value: impl Into<Value>) -> Self {
        self.untyped = self.untyped.restrict(field, value);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.untyped = self.untyped.limit(limit);
        self
    }

    pub fn untyped(&self) -> &stmt::Query {
        &self.untyped
    }

    pub fn into_untyped(self) -> stmt::Query {
        self.untyped
    }

    pub async fn exec(self, db: &Db) -> Result<Cursor<M>> {
        db.all(self).await
    }

    pub async fn first(self, db: &Db) -> Result<Option<M>> {
        db.first(self).await
    }

    pub async fn get(self, db: &Db) -> Result<M> {
        db.get(self).await
    }

    pub async fn collect<B>(self, db: &Db) -> Result<B>
    where
        B: FromCursor<M>,
    {
        db.all(self).await?.collect().await
    }
}

impl<M> Clone for Select<M> {
    fn clone(&self) -> Self {
        Self {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<M> PartialEq for Select<M> {
    fn eq(&self, other: &Self) -> bool {
        self.untyped == other.untyped
    }
}

impl<M> fmt::Debug for Select<M> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.untyped.fmt(fmt)
    }
}
