use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::error::AppError;
use crate::pipeline::{Next, PipelineBehavior};
use crate::request::Request;

/// 日志行为
///
/// 每次调用恰好记录一条 `stage = "start"` 与一条 `stage = "completion"` 事件，
/// 无论内层成功与否；内层结果原样返回。两条事件都带上下文中的关联 id、
/// 执行者与幂等键（存在时）。
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBehavior;

#[async_trait]
impl<R: Request> PipelineBehavior<R> for LoggingBehavior {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: R,
        next: Next<'_, R>,
    ) -> Result<R::Response, AppError> {
        let started = Instant::now();
        info!(
            request = R::NAME,
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            idempotency_key = ctx.idempotency_key(),
            stage = "start",
            "handling request"
        );

        let result = next.run(ctx, request).await;

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &result {
            Ok(_) => info!(
                request = R::NAME,
                correlation_id = ctx.correlation_id(),
                actor_id = ctx.actor_id(),
                idempotency_key = ctx.idempotency_key(),
                stage = "completion",
                outcome = "ok",
                elapsed_ms,
                "request handled"
            ),
            Err(err) => warn!(
                request = R::NAME,
                correlation_id = ctx.correlation_id(),
                actor_id = ctx.actor_id(),
                idempotency_key = ctx.idempotency_key(),
                stage = "completion",
                outcome = "error",
                kind = ?err.kind(),
                error = %err,
                elapsed_ms,
                "request failed"
            ),
        }
        result
    }
}
