//! Values, rows, and the untyped query representation shared by the runtime
//! and the drivers.

mod query;
pub use query::{Query, Restriction};

mod record_stream;
pub use record_stream::RecordStream;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;
