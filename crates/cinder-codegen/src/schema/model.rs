use super::{ErrorSet, Field, ModelAttr};

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Model {
    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,

    /// Optional table to map the model to
    pub(crate) table: Option<syn::LitStr>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for (index, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, &ast.ident, index) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        verify_names(&fields)?;

        if !fields.iter().any(Field::is_key) {
            return Err(syn::Error::new_spanned(
                ast,
                "model must have at least one field-level `#[key]` attribute",
            ));
        }

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            table: model_attr.table,
        })
    }

    pub(crate) fn indexed_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.accessors.is_some())
    }
}

/// Two fields may not share a column, and no two indexed fields may
/// generate the same accessor.
fn verify_names(fields: &[Field]) -> syn::Result<()> {
    let mut errs = ErrorSet::new();
    let mut columns = HashMap::new();
    let mut accessors = HashMap::new();

    for field in fields {
        let column = field.storage_name();

        if let Some(prev) = columns.insert(column.clone(), &field.ident) {
            errs.push(syn::Error::new_spanned(
                &field.ident,
                format!("column `{column}` is already mapped to field `{prev}`"),
            ));
        }

        let Some(field_accessors) = &field.accessors else {
            continue;
        };

        for ident in field_accessors.idents() {
            if let Some(prev) = accessors.insert(ident.to_string(), &field.ident) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("accessor `{ident}` is already generated for field `{prev}`"),
                ));
                break;
            }
        }
    }

    match errs.collect() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
