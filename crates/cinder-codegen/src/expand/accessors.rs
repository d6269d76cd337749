use super::{util, Expand};
use crate::schema::{Accessors, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `with_*`, `find_by_*` and `find_all_by_*` for every indexed field.
    pub(super) fn expand_accessor_methods(&self) -> TokenStream {
        let model_ident = &self.model.ident;
        let methods = self.model.indexed_fields().filter_map(|field| {
            let accessors = field.accessors.as_ref()?;
            Some(self.expand_field_accessors(field, accessors))
        });

        quote! {
            impl #model_ident {
                #( #methods )*
            }
        }
    }

    fn expand_field_accessors(&self, field: &Field, accessors: &Accessors) -> TokenStream {
        let cinder = &self.cinder;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let ty = &field.ty;
        let index = util::int(field.id);
        let Accessors {
            with_ident,
            find_by_ident,
            find_all_by_ident,
        } = accessors;

        let field_id = quote!(<#model_ident as #cinder::Model>::id().field(#index));
        let value = quote!(#cinder::IntoValue::<#ty>::into_value(value));

        quote! {
            #vis fn #with_ident(value: impl #cinder::IntoValue<#ty>) -> #cinder::Select<#model_ident> {
                #cinder::finder::with(#field_id, #value)
            }

            #vis async fn #find_by_ident(
                db: &#cinder::Db,
                value: impl #cinder::IntoValue<#ty>,
            ) -> #cinder::Result<#cinder::Option<#model_ident>> {
                #cinder::finder::find_by(db, #field_id, #value).await
            }

            #vis async fn #find_all_by_ident(
                db: &#cinder::Db,
                value: impl #cinder::IntoValue<#ty>,
            ) -> #cinder::Result<#cinder::Vec<#model_ident>> {
                #cinder::finder::find_all_by(db, #field_id, #value).await
            }
        }
    }
}
