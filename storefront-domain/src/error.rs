//! 领域层统一错误定义
//!
//! 前七个变体构成“不变量违例”（InvariantViolation）：值对象/聚合的工厂与变更方法
//! 同步抛出，不重试、不修正，直接作为本次操作的拒绝返回给调用方。
//! 其余变体由仓储协作者产生，领域层只负责透传。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // --- 不变量违例 ---
    #[error("{reason}")]
    Missing { field: &'static str, reason: String },
    #[error("{reason}")]
    InvalidFormat { field: &'static str, reason: String },
    #[error("{reason}")]
    OutOfRange { field: &'static str, reason: String },
    #[error("{reason}")]
    InvalidArgument { field: &'static str, reason: String },
    #[error("Money values must share the same currency ({left} vs {right}).")]
    CurrencyMismatch { left: String, right: String },
    #[error("Resulting amount cannot be negative.")]
    NegativeResult,
    #[error("Order status cannot change from {from} to {to}.")]
    InvalidTransition { from: &'static str, to: &'static str },

    // --- 仓储/协作者 ---
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error("operation cancelled")]
    Cancelled,
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

impl DomainError {
    pub(crate) fn missing(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Missing {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_format(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// 是否属于不变量违例（值对象/聚合规则被破坏）
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::Missing { .. }
                | Self::InvalidFormat { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidArgument { .. }
                | Self::CurrencyMismatch { .. }
                | Self::NegativeResult
                | Self::InvalidTransition { .. }
        )
    }

    /// 出错字段（仅字段级违例有值）
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Missing { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
