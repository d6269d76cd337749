use super::{operation, Memory, Response, Result, Table};

impl Memory {
    pub(crate) fn exec_find_by_index(
        &self,
        table: &mut Table,
        op: operation::FindByIndex,
    ) -> Result<Response> {
        let Some(index) = table.indexes.get(&op.field.index) else {
            return Err(cinder_core::Error::unsupported_query(format!(
                "table `{}` has no secondary index on column {}",
                table.name, op.field.index
            )));
        };

        let limit = op.limit.unwrap_or(usize::MAX);
        let rows: Vec<_> = index
            .lookup(&op.value)
            .filter_map(|key| table.rows.get(key))
            .take(limit)
            .cloned()
            .collect();

        tracing::debug!(
            table = %table.name,
            column = op.field.index,
            value = ?op.value,
            found = rows.len(),
            "queried secondary index"
        );

        Ok(Response::record_stream(rows))
    }
}
