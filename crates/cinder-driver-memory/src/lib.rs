//! In-process storage driver.
//!
//! Rows live in per-table ordered maps keyed by primary key, and every
//! secondary-indexed column keeps its own map from column value to the keys
//! of the rows holding that value. Lookups through an index therefore never
//! scan the table.

mod op;
mod table;

use table::Table;

use cinder_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    schema::app::ModelId,
    Result, Schema,
};

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};
use url::Url;

#[derive(Debug, Default)]
pub struct Memory {
    tables: Mutex<HashMap<ModelId, Table>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an in-memory store from a `memory:` URL.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|err| {
            cinder_core::Error::invalid_connection_url(format!("{err}; url={url}"))
        })?;

        if url.scheme() != "memory" {
            return Err(cinder_core::Error::invalid_connection_url(format!(
                "connection URL does not have a `memory` scheme; url={url}"
            )));
        }

        Ok(Self::new())
    }

    fn tables(&self) -> Result<MutexGuard<'_, HashMap<ModelId, Table>>> {
        self.tables
            .lock()
            .map_err(|_| cinder_core::err!("memory store lock poisoned"))
    }
}

#[async_trait]
impl Driver for Memory {
    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        let mut tables = self.tables()?;

        for model in schema.models() {
            tracing::debug!(table = %model.table_name, "creating table");
            tables.insert(model.id, Table::new(model));
        }

        Ok(())
    }

    async fn exec(&self, _schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let mut tables = self.tables()?;
        let model = op.model();

        let Some(table) = tables.get_mut(&model) else {
            cinder_core::bail!("no table registered for {model:?}");
        };

        match op {
            Operation::Insert(op) => self.exec_insert(table, op),
            Operation::Scan(op) => self.exec_scan(table, op),
            Operation::QueryPk(op) => self.exec_query_pk(table, op),
            Operation::FindByIndex(op) => self.exec_find_by_index(table, op),
        }
    }
}
