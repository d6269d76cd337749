mod builder;
pub use builder::Builder;

mod connect;

use crate::{engine::Engine, finder, stmt, Cursor, Found, Model, Result};

use cinder_core::{driver::Driver, schema::app::AccessorKind, Schema};

use std::sync::Arc;

/// A database handle.
///
/// Cloning is cheap. Every clone shares the same schema and driver.
#[derive(Clone)]
pub struct Db {
    engine: Engine,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Execute a query, returning all matching records
    pub async fn all<M: Model>(&self, query: stmt::Select<M>) -> Result<Cursor<M>> {
        let records = self.engine.exec_query(&query.untyped).await?;
        Ok(Cursor::new(self.engine.schema.clone(), records))
    }

    pub async fn first<M: Model>(&self, query: stmt::Select<M>) -> Result<Option<M>> {
        let mut res = self.all(query.limit(1)).await?;
        match res.next().await {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(err)) => Err(err),
            None => Ok(None),
        }
    }

    pub async fn get<M: Model>(&self, query: stmt::Select<M>) -> Result<M> {
        let mut res = self.all(query).await?;

        match res.next().await {
            Some(Ok(value)) => Ok(value),
            Some(Err(err)) => Err(err),
            None => Err(cinder_core::Error::record_not_found(
                "query returned no results",
            )),
        }
    }

    /// Store a record, replacing any record with the same key.
    pub async fn create<M: Model>(&self, record: &M) -> Result<()> {
        self.engine.exec_insert(M::id(), record.store()).await
    }

    /// Invoke an entry of `M`'s query namespace by name.
    ///
    /// `with_*` accessors return the lazy query without running it.
    /// `find_by_*` and `find_all_by_*` run it.
    pub async fn call<M: Model>(
        &self,
        name: &str,
        value: impl Into<stmt::Value>,
    ) -> Result<Found<M>> {
        let model = self.engine.model(M::id())?;

        let Some(accessor) = model.accessor(name) else {
            return Err(cinder_core::Error::unknown_accessor(
                model.name.upper_camel_case(),
                name,
            ));
        };

        let field = accessor.field;
        tracing::trace!(accessor = name, ?field, "dispatching accessor");

        Ok(match accessor.kind {
            AccessorKind::With => Found::Select(finder::with(field, value)),
            AccessorKind::FindBy => Found::First(finder::find_by(self, field, value).await?),
            AccessorKind::FindAllBy => Found::All(finder::find_all_by(self, field, value).await?),
        })
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.engine.driver
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.engine.schema
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").field("engine", &self.engine).finish()
    }
}
