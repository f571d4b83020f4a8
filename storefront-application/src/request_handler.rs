use crate::{context::AppContext, error::AppError, request::Request};
use async_trait::async_trait;

/// 请求处理器：每个请求类型对应一个处理器
#[async_trait]
pub trait RequestHandler<R>: Send + Sync
where
    R: Request,
{
    async fn handle(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError>;
}
