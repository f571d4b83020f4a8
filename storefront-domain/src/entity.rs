//! 实体（Entity）基础抽象
//!
//! 以标识区分的领域对象；仓储按标识存取。
//!
use std::fmt::Display;

/// 具备唯一标识的实体
pub trait Entity: Clone + Send + Sync + 'static {
    /// 实体类型名（用于错误信息与日志）
    const TYPE: &'static str;

    /// 实体标识类型
    type Id: Copy + Eq + Display + Send + Sync + 'static;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}
