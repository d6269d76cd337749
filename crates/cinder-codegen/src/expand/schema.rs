use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `Model::schema`: replays every field through the model builder, in
    /// declaration order, so field ids match struct positions.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let cinder = &self.cinder;
        let model_name = self.model.ident.to_string();
        let declarations = self.model.fields.iter().map(|field| self.expand_declaration(field));
        let table_name = self.model.table.as_ref().map(|table| {
            quote!(builder.table_name(#table);)
        });

        quote! {
            fn schema() -> #cinder::Result<#cinder::app::Model> {
                #[allow(unused_imports)]
                use #cinder::{ColumnOptions, ColumnType, ModelBuilder, Primitive};

                let mut builder = ModelBuilder::new(<Self as #cinder::Model>::id(), #model_name);

                #( #declarations )*
                #table_name

                builder.build()
            }
        }
    }

    fn expand_declaration(&self, field: &Field) -> TokenStream {
        let cinder = &self.cinder;
        let ty = &field.ty;
        let column = field.name.as_column();
        let declared_ty = match field.attrs.column.as_ref().and_then(|column| column.ty) {
            Some(ty) => quote!(Some(#ty)),
            None => quote!(None),
        };
        let column_ty = quote!(#cinder::column_type::<#ty>(#column, #declared_ty)?);

        if field.is_key() {
            return quote! {
                builder.key(#column, #column_ty)?;
            };
        }

        let index = field.accessors.is_some();
        let storage_name = field
            .attrs
            .column
            .as_ref()
            .and_then(|column| column.name.as_ref())
            .map(|name| quote!(.storage_name(#name)));

        quote! {
            builder.column(
                #column,
                #column_ty,
                ColumnOptions::default()
                    .index(#index)
                    .nullable(<#ty as Primitive>::NULLABLE)
                    #storage_name,
            )?;
        }
    }
}
