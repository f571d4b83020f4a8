use quote::ToTokens;
use syn::{Attribute, Token};

// 拆分出 derive 列表与其余属性
fn split_derives(attrs: &[Attribute]) -> (Vec<Attribute>, Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("derive") {
            retained.push(attr.clone());
            continue;
        }
        if let Ok(list) = attr
            .parse_args_with(syn::punctuated::Punctuated::<syn::Path, Token![,]>::parse_terminated)
        {
            existing.extend(list);
        }
    }
    (retained, existing)
}

// 按最后一段路径去重，`Serialize` 与 `serde::Serialize` 视为同一项
fn derive_key(p: &syn::Path) -> String {
    match p.segments.last() {
        Some(last) => last.ident.to_string(),
        None => p.to_token_stream().to_string(),
    }
}

/// 合并必需派生与用户已有派生，必需项在前
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let (retained, existing) = split_derives(attrs);

    let mut seen = std::collections::HashSet::new();
    let merged: Vec<syn::Path> = required
        .into_iter()
        .chain(existing)
        .filter(|p| seen.insert(derive_key(p)))
        .collect();

    let derive: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    *attrs = std::iter::once(derive).chain(retained).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_without_duplicates() {
        let mut attrs: Vec<Attribute> = vec![
            syn::parse_quote!(#[derive(Debug, serde::Serialize, PartialOrd)]),
            syn::parse_quote!(#[doc = "id"]),
        ];
        apply_derives(
            &mut attrs,
            vec![syn::parse_quote!(Debug), syn::parse_quote!(Serialize)],
        );

        assert_eq!(attrs.len(), 2);
        let derive = attrs[0].to_token_stream().to_string();
        assert_eq!(derive.matches("Debug").count(), 1);
        assert_eq!(derive.matches("Serialize").count(), 1);
        assert!(derive.contains("PartialOrd"));
        assert!(attrs[1].path().is_ident("doc"));
    }
}
