/// Options accepted when declaring a data column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOptions {
    /// Give the column a secondary index and synthesize its query accessors
    pub index: bool,

    /// Column name in storage, when it differs from the field name
    pub storage_name: Option<String>,

    /// Whether the column may hold `Null`
    pub nullable: bool,
}

impl ColumnOptions {
    /// Options for a secondary-indexed column.
    pub fn indexed() -> Self {
        Self {
            index: true,
            ..Self::default()
        }
    }

    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn storage_name(mut self, name: impl Into<String>) -> Self {
        self.storage_name = Some(name.into());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}
