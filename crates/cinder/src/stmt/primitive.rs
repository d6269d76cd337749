use crate::Result;

use cinder_core::stmt;
use uuid::Uuid;

/// A Rust type that maps to a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;
    const NULLABLE: bool = false;

    fn load(value: stmt::Value) -> Result<Self>;

    fn into_value(self) -> stmt::Value;
}

macro_rules! impl_primitive {
    ( $( $var:ident($t:ty) ;)* ) => {
        $(
            impl Primitive for $t {
                const TYPE: stmt::Type = stmt::Type::$var;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn into_value(self) -> stmt::Value {
                    stmt::Value::$var(self)
                }
            }
        )*
    };
}

impl_primitive! {
    Bool(bool);
    I32(i32);
    I64(i64);
    String(String);
    Uuid(Uuid);
    Bytes(Vec<u8>);
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;
    const NULLABLE: bool = true;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn into_value(self) -> stmt::Value {
        match self {
            Some(value) => value.into_value(),
            None => stmt::Value::Null,
        }
    }
}
