use bon::Builder;
use tokio_util::sync::CancellationToken;

/// 应用层上下文（Application Context）
///
/// 承载一次请求所需的横切信息：
/// - 关联追踪 `correlation_id`、执行者 `actor_id` 与幂等键 `idempotency_key`，
///   由 `LoggingBehavior` 写入每条 start/completion 事件；
/// - 取消令牌：仓储调用会观察它，领域/校验逻辑不阻塞因此总是执行完毕。
///
/// ```rust
/// use storefront_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .maybe_correlation_id(Some("cor-123".into()))
///     .maybe_actor_id(Some("u-1".into()))
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert!(!ctx.cancellation().is_cancelled());
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    actor_id: Option<String>,
    idempotency_key: Option<String>,
    #[builder(default)]
    cancellation: CancellationToken,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn idempotency_key(&self) -> Option<&str> {
        self.idempotency_key.as_deref()
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}
