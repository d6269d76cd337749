use async_trait::async_trait;
use cinder_core::{
    driver::{Driver, Operation, Response, Rows},
    stmt::RecordStream,
    Result, Schema,
};

use std::sync::{Arc, Mutex};

/// A driver wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Response,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        self.inner.register_schema(schema).await
    }

    async fn exec(&self, schema: &Arc<Schema>, operation: Operation) -> Result<Response> {
        // Clone the operation for logging
        let operation_clone = operation.clone();

        // Execute the operation on the underlying driver
        let response = self.inner.exec(schema, operation).await?;

        let (response, duplicated_response) = duplicate_response(response).await?;

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation: operation_clone,
                response: duplicated_response,
            });

        Ok(response)
    }
}

/// Buffer a response so one copy can be returned and one logged.
async fn duplicate_response(response: Response) -> Result<(Response, Response)> {
    Ok(match response.rows {
        Rows::Count(count) => (Response::count(count), Response::count(count)),
        Rows::Values(stream) => {
            let records = stream.collect().await?;
            (
                Response::record_stream(RecordStream::from_vec(records.clone())),
                Response::record_stream(records),
            )
        }
    })
}
