use crate::stmt::RecordStream;

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a stream of rows
    Values(RecordStream),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn record_stream(records: impl Into<RecordStream>) -> Self {
        Self {
            rows: Rows::Values(records.into()),
        }
    }

    pub fn empty_record_stream() -> Self {
        Self {
            rows: Rows::Values(RecordStream::default()),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    pub fn into_count(self) -> crate::Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            rows => Err(crate::err!("expected a row count; rows={rows:?}")),
        }
    }

    pub fn into_values(self) -> crate::Result<RecordStream> {
        match self {
            Self::Values(values) => Ok(values),
            rows => Err(crate::err!("expected a row stream; rows={rows:?}")),
        }
    }
}
