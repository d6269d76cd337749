use super::{operation, Memory, Response, Result, Table};

impl Memory {
    pub(crate) fn exec_query_pk(
        &self,
        table: &mut Table,
        op: operation::QueryPk,
    ) -> Result<Response> {
        let rows: Vec<_> = table.rows.get(&op.key).cloned().into_iter().collect();

        tracing::debug!(table = %table.name, key = ?op.key, found = rows.len(), "queried key");

        Ok(Response::record_stream(rows))
    }
}
