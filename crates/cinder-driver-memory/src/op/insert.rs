use super::{operation, Memory, Response, Result, Table};

impl Memory {
    pub(crate) fn exec_insert(&self, table: &mut Table, op: operation::Insert) -> Result<Response> {
        let replaced = table.upsert(op.row)?;

        tracing::debug!(table = %table.name, replaced, "inserted row");

        Ok(Response::count(1))
    }
}
