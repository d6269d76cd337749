mod lower;
mod verify;

use crate::Result;
use cinder_core::{
    driver::{operation, Driver},
    schema::app::{self, ModelId},
    stmt::{Query, RecordStream, ValueRecord},
    Schema,
};

use std::sync::Arc;
use tracing::{debug, trace};

/// Checks statements against the schema, lowers them to driver operations
/// and runs them.
#[derive(Clone)]
pub(crate) struct Engine {
    /// The schema being managed by this DB instance.
    pub(crate) schema: Arc<Schema>,

    /// Handle to the underlying database driver.
    pub(crate) driver: Arc<dyn Driver>,
}

impl Engine {
    pub(crate) fn new(schema: Arc<Schema>, driver: Arc<dyn Driver>) -> Self {
        Self { schema, driver }
    }

    /// Execute a read.
    ///
    /// Restriction combinations the store cannot serve are rejected here,
    /// before the driver sees anything.
    pub(crate) async fn exec_query(&self, query: &Query) -> Result<RecordStream> {
        let model = self.model(query.model)?;
        verify::query(model, query)?;

        if query.limit == Some(0) {
            return Ok(RecordStream::default());
        }

        let op = lower::query(model, query);
        debug!(model = %model.name.upper_camel_case(), ?op, "executing query");

        let response = self.driver.exec(&self.schema, op).await?;
        response.rows.into_values()
    }

    pub(crate) async fn exec_insert(&self, model: ModelId, row: ValueRecord) -> Result<()> {
        let model = self.model(model)?;
        verify::row(model, &row)?;

        trace!(model = %model.name.upper_camel_case(), ?row, "inserting row");

        let op = operation::Insert {
            model: model.id,
            row,
        };
        self.driver.exec(&self.schema, op.into()).await?;
        Ok(())
    }

    pub(crate) fn model(&self, id: ModelId) -> Result<&app::Model> {
        self.schema
            .get_model(id)
            .ok_or_else(|| cinder_core::err!("{id:?} is not registered with this database"))
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("schema", &self.schema)
            .field("driver", &self.driver)
            .finish()
    }
}
