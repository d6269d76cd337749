use crate::{stmt::Type, Error};

use std::{fmt, str::FromStr};

/// Column type tag, named after the store's column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Ascii,
    BigInt,
    Blob,
    Boolean,
    Int,
    Text,
    TimeUuid,
    Uuid,
    VarChar,
}

impl ColumnType {
    /// The value type stored in columns of this type.
    pub fn ty(self) -> Type {
        match self {
            Self::Ascii | Self::Text | Self::VarChar => Type::String,
            Self::BigInt => Type::I64,
            Self::Int => Type::I32,
            Self::Blob => Type::Bytes,
            Self::Boolean => Type::Bool,
            Self::TimeUuid | Self::Uuid => Type::Uuid,
        }
    }

    /// The default column type for a value type.
    pub fn default_for(ty: Type) -> ColumnType {
        match ty {
            Type::Bool => Self::Boolean,
            Type::I32 => Self::Int,
            Type::I64 => Self::BigInt,
            Type::String => Self::Text,
            Type::Uuid => Self::Uuid,
            Type::Bytes => Self::Blob,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::BigInt => "bigint",
            Self::Blob => "blob",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Text => "text",
            Self::TimeUuid => "timeuuid",
            Self::Uuid => "uuid",
            Self::VarChar => "varchar",
        }
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match &*s.to_ascii_lowercase() {
            "ascii" => Self::Ascii,
            "bigint" => Self::BigInt,
            "blob" => Self::Blob,
            "boolean" => Self::Boolean,
            "int" => Self::Int,
            "text" => Self::Text,
            "timeuuid" => Self::TimeUuid,
            "uuid" => Self::Uuid,
            "varchar" => Self::VarChar,
            _ => return Err(Error::invalid_schema(format!("unknown column type `{s}`"))),
        })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
