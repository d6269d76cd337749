use crate::{Error, Model};
use cinder_core::{stmt, Schema};

use std::sync::Arc;
use tokio_stream::Stream;

/// Rows of `M` returned by a query, loaded one at a time.
pub struct Cursor<M> {
    schema: Arc<Schema>,
    records: stmt::RecordStream,
    _p: std::marker::PhantomData<M>,
}

pub trait FromCursor<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromCursor<A> for T {}

impl<M: Model> Cursor<M> {
    pub(crate) fn new(schema: Arc<Schema>, records: stmt::RecordStream) -> Self {
        Self {
            schema,
            records,
            _p: std::marker::PhantomData,
        }
    }

    pub async fn next(&mut self) -> Option<Result<M, Error>> {
        Some(match self.records.next().await? {
            Ok(row) => {
                self.validate_row(&row);
                M::load(row)
            }
            Err(e) => Err(e),
        })
    }

    /// Collect all values
    pub async fn collect<B>(mut self) -> Result<B, Error>
    where
        B: FromCursor<M>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }

    /// Adapt the cursor into a [`Stream`] of loaded models.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<M, Error>> + Send {
        async_stream::stream! {
            while let Some(res) = self.next().await {
                yield res;
            }
        }
    }

    #[track_caller]
    fn validate_row(&self, record: &stmt::ValueRecord) {
        if cfg!(debug_assertions) {
            let expect_num_columns = self.schema.model(M::id()).fields.len();

            if record.len() != expect_num_columns {
                panic!("expected row to have {expect_num_columns} columns; {record:#?}");
            }
        }
    }
}

impl<M> std::fmt::Debug for Cursor<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("records", &self.records)
            .finish()
    }
}
