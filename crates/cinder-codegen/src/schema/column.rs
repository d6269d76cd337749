use quote::quote;

#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) ty: Option<ColumnType>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            ty: None,
        };

        // Allowed syntax:
        //
        // #[column("name")]
        // #[column(type = timeuuid)]
        // #[column("name", type = timeuuid)]
        // #[column(type = timeuuid, "name")]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(syn::Token![type]) {
                if result.ty.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column type"));
                }
                let _type_token: syn::Token![type] = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.ty = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}

mod kw {
    syn::custom_keyword!(ascii);
    syn::custom_keyword!(bigint);
    syn::custom_keyword!(blob);
    syn::custom_keyword!(boolean);
    syn::custom_keyword!(int);
    syn::custom_keyword!(text);
    syn::custom_keyword!(timeuuid);
    syn::custom_keyword!(uuid);
    syn::custom_keyword!(varchar);
}

/// Column type keyword, named after the store's column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnType {
    Ascii,
    BigInt,
    Blob,
    Boolean,
    Int,
    Text,
    TimeUuid,
    Uuid,
    VarChar,
}

impl syn::parse::Parse for ColumnType {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::ascii) {
            let _kw: kw::ascii = input.parse()?;
            Ok(Self::Ascii)
        } else if lookahead.peek(kw::bigint) {
            let _kw: kw::bigint = input.parse()?;
            Ok(Self::BigInt)
        } else if lookahead.peek(kw::blob) {
            let _kw: kw::blob = input.parse()?;
            Ok(Self::Blob)
        } else if lookahead.peek(kw::boolean) {
            let _kw: kw::boolean = input.parse()?;
            Ok(Self::Boolean)
        } else if lookahead.peek(kw::int) {
            let _kw: kw::int = input.parse()?;
            Ok(Self::Int)
        } else if lookahead.peek(kw::text) {
            let _kw: kw::text = input.parse()?;
            Ok(Self::Text)
        } else if lookahead.peek(kw::timeuuid) {
            let _kw: kw::timeuuid = input.parse()?;
            Ok(Self::TimeUuid)
        } else if lookahead.peek(kw::uuid) {
            let _kw: kw::uuid = input.parse()?;
            Ok(Self::Uuid)
        } else if lookahead.peek(kw::varchar) {
            let _kw: kw::varchar = input.parse()?;
            Ok(Self::VarChar)
        } else {
            Err(lookahead.error())
        }
    }
}

impl quote::ToTokens for ColumnType {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        match self {
            Self::Ascii => quote! { ColumnType::Ascii },
            Self::BigInt => quote! { ColumnType::BigInt },
            Self::Blob => quote! { ColumnType::Blob },
            Self::Boolean => quote! { ColumnType::Boolean },
            Self::Int => quote! { ColumnType::Int },
            Self::Text => quote! { ColumnType::Text },
            Self::TimeUuid => quote! { ColumnType::TimeUuid },
            Self::Uuid => quote! { ColumnType::Uuid },
            Self::VarChar => quote! { ColumnType::VarChar },
        }
        .to_tokens(tokens);
    }
}
