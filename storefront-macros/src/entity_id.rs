use crate::derive_utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[entity_id] 宏实现
///
/// 仅支持单字段 tuple struct，且内部类型为 `uuid::Uuid`。
/// nil UUID 即“空标识”，由领域工厂负责拒绝。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityIdAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity_id] only on struct")
                .to_compile_error()
                .into();
        }
    };

    match &st.fields {
        syn::Fields::Unnamed(f) if f.unnamed.len() == 1 => {}
        syn::Fields::Unnamed(f) => {
            return syn::Error::new(
                f.span(),
                "#[entity_id] requires a tuple struct with exactly one field",
            )
            .to_compile_error()
            .into();
        }
        _ => {
            return syn::Error::new(
                st.span(),
                "#[entity_id] supports only tuple struct, e.g., struct OrderId(Uuid);",
            )
            .to_compile_error()
            .into();
        }
    }

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(Copy),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(Eq),
        syn::parse_quote!(Hash),
    ];
    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let name = ident.to_string();

    let out = quote! {
        #st

        impl #ident {
            /// 生成新的随机标识（UUID v4）
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4())
            }

            /// 空标识
            pub const fn nil() -> Self {
                Self(::uuid::Uuid::nil())
            }

            /// 是否为空标识
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            pub const fn into_inner(self) -> ::uuid::Uuid {
                self.0
            }
        }

        impl ::std::str::FromStr for #ident {
            type Err = ::uuid::Error;
            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::uuid::Uuid::parse_str(s.trim()).map(Self)
            }
        }

        impl ::std::fmt::Display for #ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::AsRef<::uuid::Uuid> for #ident {
            fn as_ref(&self) -> &::uuid::Uuid {
                &self.0
            }
        }

        impl ::core::convert::From<::uuid::Uuid> for #ident {
            fn from(value: ::uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<#ident> for ::uuid::Uuid {
            fn from(value: #ident) -> Self {
                value.0
            }
        }

        impl #ident {
            /// 类型名（用于错误信息与日志）
            pub const TYPE_NAME: &'static str = #name;
        }
    };

    TokenStream::from(out)
}

// -------- parsing --------

struct EntityIdAttrConfig {
    derive_debug: Option<bool>,
}

impl Parse for EntityIdAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug = None;
        if input.is_empty() {
            return Ok(Self { derive_debug });
        }

        let pairs = syn::punctuated::Punctuated::<syn::MetaNameValue, Token![,]>::parse_terminated(
            input,
        )?;
        for pair in pairs {
            if !pair.path.is_ident("debug") {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "unknown key in attribute; expected 'debug'",
                ));
            }
            if derive_debug.is_some() {
                return Err(syn::Error::new(
                    pair.path.span(),
                    "duplicate key 'debug' in attribute",
                ));
            }
            match &pair.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Bool(b),
                    ..
                }) => derive_debug = Some(b.value()),
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected boolean literal for 'debug'",
                    ));
                }
            }
        }

        Ok(Self { derive_debug })
    }
}
