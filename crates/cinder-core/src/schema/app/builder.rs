use super::{
    Accessors, ColumnOptions, ColumnType, Field, FieldId, FieldName, IndexedColumns, Model,
    ModelId, Name, PrimaryKey,
};
use crate::{Error, Result};

use tracing::debug;

/// Declares the columns of one model.
///
/// Columns are registered with [`ModelBuilder::declare_column`]. Model
/// definitions go through [`ModelBuilder::column`] instead, which registers
/// the column the same way and then, for columns declared with
/// `index: true`, binds the column's query accessors into the model's
/// namespace.
#[derive(Debug)]
pub struct ModelBuilder {
    id: ModelId,
    name: Name,
    table_name: Option<String>,
    fields: Vec<Field>,
    primary_key: PrimaryKey,
    indexed: IndexedColumns,
    accessors: Accessors,
}

impl ModelBuilder {
    pub fn new(id: ModelId, name: &str) -> Self {
        Self {
            id,
            name: Name::new(name),
            table_name: None,
            fields: vec![],
            primary_key: PrimaryKey::default(),
            indexed: IndexedColumns::default(),
            accessors: Accessors::default(),
        }
    }

    pub fn id(&self) -> ModelId {
        self.id
    }

    /// Map the model to a table other than its snake-cased name.
    pub fn table_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.table_name = Some(name.into());
        self
    }

    /// Declare a primary key column. Key columns are declared in key order.
    pub fn key(&mut self, name: &str, ty: ColumnType) -> Result<FieldId> {
        self.declare(name, ty, ColumnOptions::default(), true)
    }

    /// Declare a data column.
    ///
    /// Declaring a column that already exists with the same definition
    /// returns the existing field. A conflicting definition, a name already
    /// used by a key column, or an empty name is an invalid-schema error.
    ///
    /// This only records the column. It never touches the query namespace,
    /// so the recorded field is only marked indexed by [`column`](Self::column).
    pub fn declare_column(
        &mut self,
        name: &str,
        ty: ColumnType,
        options: ColumnOptions,
    ) -> Result<FieldId> {
        self.declare(name, ty, options, false)
    }

    /// Declare a data column and, when `options.index` is set, synthesize its
    /// `with_`, `find_by_` and `find_all_by_` accessors.
    ///
    /// If the declaration itself fails, its error is returned unchanged and
    /// the namespace is left as it was.
    pub fn column(
        &mut self,
        name: &str,
        ty: ColumnType,
        options: ColumnOptions,
    ) -> Result<FieldId> {
        let field = self.declare_column(name, ty, options.clone())?;

        if options.index {
            self.accessors.synthesize(field, name)?;
            self.indexed.insert(field);
            self.fields[field.index].options.index = true;
        }

        Ok(field)
    }

    /// The query namespace as declared so far.
    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    /// The indexed columns declared so far.
    pub fn indexed(&self) -> &IndexedColumns {
        &self.indexed
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub fn build(self) -> Result<Model> {
        if self.primary_key.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` must declare at least one key column",
                self.name.upper_camel_case()
            )));
        }

        let table_name = self
            .table_name
            .unwrap_or_else(|| self.name.snake_case());

        Ok(Model {
            id: self.id,
            name: self.name,
            table_name,
            fields: self.fields,
            primary_key: self.primary_key,
            indexed: self.indexed,
            accessors: self.accessors,
        })
    }

    fn declare(
        &mut self,
        name: &str,
        ty: ColumnType,
        options: ColumnOptions,
        primary_key: bool,
    ) -> Result<FieldId> {
        if name.is_empty() {
            return Err(Error::invalid_schema(format!(
                "model `{}` declares a column with an empty name",
                self.name.upper_camel_case()
            )));
        }

        if let Some(existing) = self.fields.iter_mut().find(|f| f.name.app_name == name) {
            if existing.primary_key != primary_key {
                return Err(Error::invalid_schema(format!(
                    "column `{name}` is declared both as a key and as a data column"
                )));
            }

            let conflicting = existing.column_ty != ty
                || existing.options.storage_name != options.storage_name
                || existing.options.nullable != options.nullable;

            if conflicting {
                return Err(Error::invalid_schema(format!(
                    "column `{name}` redeclared as {ty}; previously declared as {}",
                    existing.column_ty
                )));
            }

            // Re-opening a column never drops an index set by `column`.
            return Ok(existing.id);
        }

        let id = self.id.field(self.fields.len());

        debug!(
            model = %self.name.upper_camel_case(),
            column = name,
            ty = %ty,
            key = primary_key,
            index = options.index,
            "declared column"
        );

        self.fields.push(Field {
            id,
            name: FieldName {
                app_name: name.to_string(),
                storage_name: options.storage_name.clone(),
            },
            column_ty: ty,
            primary_key,
            options: ColumnOptions {
                index: false,
                ..options
            },
        });

        if primary_key {
            self.primary_key.fields.push(id);
        }

        Ok(id)
    }
}
