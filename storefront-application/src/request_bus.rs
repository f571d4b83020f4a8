use crate::{context::AppContext, error::AppError, request::Request};
use async_trait::async_trait;

/// 请求总线（Request Bus）
///
/// - 根据请求的具体类型路由到对应的管道；
/// - 命令与查询共用同一条总线，响应类型由 `Request::Response` 决定。
#[async_trait]
pub trait RequestBus: Send + Sync {
    /// 分发请求，经管道处理后返回响应
    async fn dispatch<R>(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError>
    where
        R: Request;
}
