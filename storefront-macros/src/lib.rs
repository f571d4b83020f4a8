//! storefront 过程宏
//!
//! 目前只提供 `#[entity_id]`，用于声明基于 `uuid::Uuid` 的实体标识类型。

use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;

/// 实体 ID 宏
///
/// 用于 `struct OrderId(Uuid);` 这类单字段 tuple struct，自动生成：
/// - 派生：Default, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash
/// - `generate()`（v4）、`nil()`、`is_nil()`、`into_inner()`
/// - `Display`、`FromStr`、`AsRef<Uuid>`、`From<Uuid>` 与反向转换
///
/// 支持参数 `#[entity_id(debug = false)]`，关闭 Debug 派生以便手写实现。
///
/// 使用方需依赖 `uuid`（启用 `v4`、`serde`）与 `serde`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
