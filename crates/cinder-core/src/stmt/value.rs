use super::Type;
use crate::{Error, Result};

use uuid::Uuid;

/// A single column value.
///
/// Values are totally ordered so that they can key rows and secondary index
/// entries. Values of different variants order by variant.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// String value
    String(String),

    /// UUID value
    Uuid(Uuid),

    /// Arbitrary bytes
    Bytes(Vec<u8>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the type of the value, `None` for `Null`.
    pub fn infer_ty(&self) -> Option<Type> {
        Some(match self {
            Self::Null => return None,
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
            Self::Bytes(_) => Type::Bytes,
        })
    }

    /// Returns `true` if the value can be stored in a column of type `ty`.
    /// `Null` is accepted by every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        match self.infer_ty() {
            Some(value_ty) => value_ty == *ty,
            None => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Takes the value out, leaving `Null` in its place.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

macro_rules! impl_value_conversions {
    ( $( $variant:ident($t:ty) ;)* ) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Value> for $t {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }
            }
        )*
    };
}

impl_value_conversions! {
    Bool(bool);
    I32(i32);
    I64(i64);
    String(String);
    Uuid(Uuid);
    Bytes(Vec<u8>);
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
