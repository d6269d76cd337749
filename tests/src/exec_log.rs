use crate::logging_driver::DriverOp;

use cinder_core::driver::Operation;

use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Check if any operation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.operation))
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Check if there's an Insert operation
    pub fn has_insert(&self) -> bool {
        self.any(|op| matches!(op, Operation::Insert(_)))
    }

    /// Check if there's a Scan operation
    pub fn has_scan(&self) -> bool {
        self.any(|op| matches!(op, Operation::Scan(_)))
    }

    /// Check if there's a QueryPk operation
    pub fn has_query_pk(&self) -> bool {
        self.any(|op| matches!(op, Operation::QueryPk(_)))
    }

    /// Check if there's a FindByIndex operation
    pub fn has_find_by_index(&self) -> bool {
        self.any(|op| matches!(op, Operation::FindByIndex(_)))
    }

    /// Remove and return the most recent operation
    pub fn pop(&self) -> Option<Operation> {
        self.ops.lock().unwrap().pop().map(|op| op.operation)
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
