//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的不可变对象。只能经由校验工厂创建，
//! 因此任何已存在的实例都满足自身不变量。
//!
mod email;
mod money;

pub use email::{Email, is_valid_email};
pub use money::Money;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 重新校验不变量（用于从存储恢复等场景）
    fn validate(&self) -> Result<(), Self::Error>;
}
