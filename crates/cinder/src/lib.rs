pub mod cursor;
pub use cursor::Cursor;

pub mod db;
pub use db::Db;

mod engine;

pub mod finder;
pub use finder::Found;

mod model;
pub use model::{generate_unique_id, Model};

pub mod stmt;
pub use stmt::Select;

pub use cinder_core::schema;

pub use cinder_macros::Model;

pub use cinder_core::{Error, Result};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        cursor::{Cursor, FromCursor},
        finder,
        model::{column_type, generate_unique_id, load_field},
        stmt::{IntoValue, Primitive, Select},
        Db, Error, Model, Result,
    };
    pub use cinder_core::{
        schema::app::{self, ColumnOptions, ColumnType, FieldId, ModelBuilder, ModelId},
        stmt::{Type, Value, ValueRecord},
    };
    pub use std::{option::Option, sync::OnceLock, vec::Vec};
}
