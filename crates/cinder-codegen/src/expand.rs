mod accessors;
mod model;
mod schema;
mod util;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for cinder types
    cinder: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impls = self.expand_model_impls();
        let accessor_methods = self.expand_accessor_methods();

        wrap_in_const(quote! {
            #model_impls
            #accessor_methods
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        cinder: quote!(_cinder::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use cinder as _cinder;
            #code
        };
    }
}
