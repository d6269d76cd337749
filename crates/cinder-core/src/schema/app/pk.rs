use super::FieldId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryKey {
    /// Key fields, in key order
    pub fields: Vec<FieldId>,
}

impl PrimaryKey {
    pub fn contains(&self, field: FieldId) -> bool {
        self.fields.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
