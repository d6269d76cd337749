use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impls(&self) -> TokenStream {
        let cinder = &self.cinder;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();
        let struct_load_fields = self.expand_struct_load_fields();
        let store_values = self.expand_store_values();

        quote! {
            impl #model_ident {
                #vis fn all() -> #cinder::Select<#model_ident> {
                    #cinder::Select::all()
                }
            }

            impl #cinder::Model for #model_ident {
                fn id() -> #cinder::ModelId {
                    static ID: #cinder::OnceLock<#cinder::ModelId> = #cinder::OnceLock::new();
                    *ID.get_or_init(|| #cinder::generate_unique_id())
                }

                #model_schema

                fn load(mut record: #cinder::ValueRecord) -> #cinder::Result<Self> {
                    Ok(Self {
                        #struct_load_fields
                    })
                }

                fn store(&self) -> #cinder::ValueRecord {
                    #cinder::ValueRecord::from_vec(#cinder::Vec::from([
                        #store_values
                    ]))
                }
            }
        }
    }

    fn expand_struct_load_fields(&self) -> TokenStream {
        let cinder = &self.cinder;

        self.model
            .fields
            .iter()
            .map(|field| {
                let index = util::int(field.id);
                let ident = &field.ident;
                let ty = &field.ty;
                let column = field.name.as_column();

                quote!(#ident: #cinder::load_field::<#ty>(&mut record, #index, #column)?,)
            })
            .collect()
    }

    fn expand_store_values(&self) -> TokenStream {
        let cinder = &self.cinder;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;
                let ty = &field.ty;

                quote!(<#ty as #cinder::IntoValue<#ty>>::by_ref(&self.#ident),)
            })
            .collect()
    }
}
