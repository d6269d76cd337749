mod into_value;
pub use into_value::IntoValue;

mod primitive;
pub use primitive::Primitive;

mod select;
pub use select::Select;

pub use cinder_core::stmt::{Type, Value, ValueRecord};

use crate::Model;

use cinder_core::stmt;
