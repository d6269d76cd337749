//! Application-level schema: models, their columns, and the query namespace
//! synthesized for indexed columns.

mod accessor;
pub use accessor::{Accessor, AccessorKind, Accessors};

mod builder;
pub use builder::ModelBuilder;

mod column_options;
pub use column_options::ColumnOptions;

mod column_type;
pub use column_type::ColumnType;

mod field;
pub use field::{Field, FieldId, FieldName};

mod indexed;
pub use indexed::IndexedColumns;

mod model;
pub use model::{Model, ModelId};

mod pk;
pub use pk::PrimaryKey;

use super::Name;
