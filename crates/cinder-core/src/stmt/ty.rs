use std::fmt;

/// The semantic type of a column value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I32,
    I64,
    String,
    Uuid,
    Bytes,
}

impl Type {
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::String => "String",
            Self::Uuid => "Uuid",
            Self::Bytes => "Bytes",
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "Bool",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::String => "String",
            Self::Uuid => "Uuid",
            Self::Bytes => "Bytes",
        };

        f.write_str(name)
    }
}
