use proc_macro2::Span;
use std_util::str;

#[derive(Debug)]
pub(crate) struct Name {
    /// Name parts
    pub(crate) parts: Vec<String>,

    /// Snake-cased identifier
    pub(crate) ident: syn::Ident,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident) -> Self {
        let src = ident.to_string();
        Self::from_str(src.trim_start_matches("r#"), ident.span())
    }

    pub(crate) fn from_str(src: &str, span: Span) -> Self {
        let snake = str::snake_case(src);
        let parts: Vec<_> = snake.split('_').map(String::from).collect();

        let ident = syn::Ident::new(&parts.join("_"), span);

        Self { parts, ident }
    }

    /// The name as written in the schema.
    pub(crate) fn as_column(&self) -> String {
        self.parts.join("_")
    }

    /// Identifier made of `prefix` followed by this name.
    pub(crate) fn prefixed(&self, prefix: &str) -> syn::Ident {
        syn::Ident::new(&format!("{prefix}{}", self.as_column()), self.ident.span())
    }
}
