use super::FieldId;
use crate::{Error, Result};

use indexmap::IndexMap;
use tracing::debug;

/// The shape of a synthesized query accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// `with_<column>`: a lazy query restricted to one column value
    With,

    /// `find_by_<column>`: the first matching row, if any
    FindBy,

    /// `find_all_by_<column>`: every matching row, in order
    FindAllBy,
}

/// One entry of a model's query namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Name the accessor is bound to
    pub name: String,

    /// What the accessor returns
    pub kind: AccessorKind,

    /// The indexed column the accessor restricts on
    pub field: FieldId,
}

/// A model's query namespace: accessor name to accessor.
///
/// Every indexed column contributes exactly three entries, one per
/// [`AccessorKind`]. Entries are kept in the order they were synthesized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accessors {
    entries: IndexMap<String, Accessor>,
}

impl AccessorKind {
    pub const ALL: [AccessorKind; 3] = [Self::With, Self::FindBy, Self::FindAllBy];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::With => "with_",
            Self::FindBy => "find_by_",
            Self::FindAllBy => "find_all_by_",
        }
    }

    /// The accessor name for `column`.
    pub fn name_for(self, column: &str) -> String {
        format!("{}{column}", self.prefix())
    }
}

impl Accessors {
    /// Bind the accessor triple for an indexed column.
    ///
    /// Re-synthesizing the same column replaces its three entries with
    /// identical ones. If any of the three names is already bound to a
    /// different column nothing is installed and an invalid-schema error is
    /// returned.
    pub fn synthesize(&mut self, field: FieldId, column: &str) -> Result<()> {
        let triple = AccessorKind::ALL.map(|kind| Accessor {
            name: kind.name_for(column),
            kind,
            field,
        });

        for accessor in &triple {
            if let Some(existing) = self.entries.get(&accessor.name) {
                if existing.field != field {
                    return Err(Error::invalid_schema(format!(
                        "accessor `{}` for column `{column}` is already bound to {:?}",
                        accessor.name, existing.field
                    )));
                }
            }
        }

        for accessor in triple {
            debug!(accessor = %accessor.name, ?field, "synthesized accessor");
            self.entries.insert(accessor.name.clone(), accessor);
        }

        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Accessor> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The accessor of the given kind for `field`, if the field is indexed.
    pub fn for_field(&self, field: FieldId, kind: AccessorKind) -> Option<&Accessor> {
        self.entries
            .values()
            .find(|accessor| accessor.field == field && accessor.kind == kind)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Accessor> {
        self.entries.values()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
