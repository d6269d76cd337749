use super::{Column, ErrorSet, Name};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Identifier as written on the struct
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field name
    pub(crate) name: Name,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Query accessors, present when the field is indexed
    pub(crate) accessors: Option<Accessors>,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Set if the field is annotated with `#[index]`
    pub(crate) index: Option<syn::Attribute>,

    /// Optional column name and / or type
    pub(crate) column: Option<Column>,
}

/// Identifiers of the three lookup methods generated for an indexed field.
#[derive(Debug)]
pub(crate) struct Accessors {
    pub(crate) with_ident: syn::Ident,
    pub(crate) find_by_ident: syn::Ident,
    pub(crate) find_all_by_ident: syn::Ident,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, model_ident: &syn::Ident, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let name = Name::from_ident(ident);

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            key: None,
            index: None,
            column: None,
        };

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("index") {
                if attrs.index.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[index] attribute",
                    ));
                } else {
                    attrs.index = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let (Some(_), Some(index)) = (&attrs.key, &attrs.index) {
            errs.push(syn::Error::new_spanned(
                index,
                "key fields cannot be secondary indexed; remove `#[index]`",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let accessors = attrs.index.as_ref().map(|_| Accessors {
            with_ident: name.prefixed("with_"),
            find_by_ident: name.prefixed("find_by_"),
            find_all_by_ident: name.prefixed("find_all_by_"),
        });

        let mut ty = field.ty.clone();
        rewrite_self(&mut ty, model_ident);

        Ok(Self {
            id,
            ident: ident.clone(),
            attrs,
            name,
            ty,
            accessors,
        })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }

    /// Name of the column the field is stored in.
    pub(crate) fn storage_name(&self) -> String {
        match self.attrs.column.as_ref().and_then(|column| column.name.as_ref()) {
            Some(name) => name.value(),
            None => self.name.as_column(),
        }
    }
}

impl Accessors {
    pub(crate) fn idents(&self) -> [&syn::Ident; 3] {
        [&self.with_ident, &self.find_by_ident, &self.find_all_by_ident]
    }
}

fn rewrite_self(ty: &mut syn::Type, model: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(model).visit_type_mut(ty);
}
