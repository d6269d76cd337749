use crate::{logging_driver::DriverOp, ExecLog, LoggingDriver};

use cinder::Db;
use cinder_driver_memory::Memory;

use std::sync::{Arc, Mutex, Once};

/// Per-test database state.
///
/// Every test gets a fresh in-memory store wrapped in a [`LoggingDriver`],
/// so tests can assert on the operations their queries lowered to.
pub struct DbTest {
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl DbTest {
    pub fn new() -> Self {
        init_tracing();

        Self {
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Try to setup a database with models, returns Result for error handling
    pub async fn try_setup_db(&mut self, mut builder: cinder::db::Builder) -> cinder::Result<Db> {
        let driver = Memory::connect("memory:")?;

        let logging_driver = LoggingDriver::new(Box::new(driver));
        self.ops_log = logging_driver.ops_log_handle();

        builder.build(logging_driver).await
    }

    /// Setup a database with models, always with logging enabled
    pub async fn setup_db(&mut self, builder: cinder::db::Builder) -> Db {
        self.try_setup_db(builder).await.unwrap()
    }

    /// Operations executed by the driver so far
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

impl Default for DbTest {
    fn default() -> Self {
        Self::new()
    }
}

/// Route `tracing` output through the test harness. Filtered by `RUST_LOG`.
fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
