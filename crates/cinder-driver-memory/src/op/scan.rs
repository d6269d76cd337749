use super::{operation, Memory, Response, Result, Table};

impl Memory {
    pub(crate) fn exec_scan(&self, table: &mut Table, op: operation::Scan) -> Result<Response> {
        let limit = op.limit.unwrap_or(usize::MAX);
        let rows: Vec<_> = table.rows.values().take(limit).cloned().collect();

        tracing::debug!(table = %table.name, rows = rows.len(), "scanned table");

        Ok(Response::record_stream(rows))
    }
}
