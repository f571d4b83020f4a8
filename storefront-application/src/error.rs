use storefront_domain::entity::Entity;
use storefront_domain::error::DomainError;

/// 错误类别，供（范围外的）控制器层翻译为对外响应
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 请求未通过校验（400）
    Validation,
    /// 资源不存在（404）
    NotFound,
    /// 领域规则拒绝，如非法状态迁移（409）
    DomainRule,
    /// 请求被取消（499）
    Cancelled,
    /// 其他（500）
    Internal,
}

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[source] DomainError),

    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("request cancelled")]
    Cancelled,

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: request={0}")]
    AlreadyRegistered(&'static str),

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AppError {
    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::TYPE,
            id: id.to_string(),
        }
    }

    /// 入参转换为值对象/实体失败：不变量违例作为校验失败返回，其余原样上抛
    pub fn invalid_input(err: DomainError) -> Self {
        if err.is_invariant_violation() {
            Self::ValidationFailed(vec![err.to_string()])
        } else {
            Self::from(err)
        }
    }

    /// 校验失败时的全部消息
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationFailed(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Domain(err) if err.is_invariant_violation() => ErrorKind::DomainRule,
            _ => ErrorKind::Internal,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity, id } => Self::NotFound { entity, id },
            DomainError::Cancelled => Self::Cancelled,
            other => Self::Domain(other),
        }
    }
}
