use super::*;

#[derive(Debug, Clone)]
pub struct Scan {
    /// Model whose table is scanned
    pub model: ModelId,

    /// Maximum number of rows to return
    pub limit: Option<usize>,
}

impl From<Scan> for Operation {
    fn from(value: Scan) -> Self {
        Self::Scan(value)
    }
}
