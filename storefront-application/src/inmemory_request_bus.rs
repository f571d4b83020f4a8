use crate::{
    context::AppContext, error::AppError, pipeline::Pipeline, request::Request,
    request_bus::RequestBus,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;

type AnyPipeline = Arc<dyn Any + Send + Sync>;

/// 基于内存的 RequestBus 实现
/// - 通过请求的 TypeId 注册对应的管道，启动时构建一次
/// - 以类型擦除方式存放，分发时还原为 `Pipeline<R>`
pub struct InMemoryRequestBus {
    pipelines: DashMap<TypeId, (&'static str, AnyPipeline)>,
}

impl Default for InMemoryRequestBus {
    fn default() -> Self {
        Self {
            pipelines: DashMap::new(),
        }
    }
}

impl InMemoryRequestBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册请求管道；同一请求类型只能注册一次
    pub fn register<R: Request>(&self, pipeline: Pipeline<R>) -> Result<(), AppError> {
        match self.pipelines.entry(TypeId::of::<R>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegistered(R::NAME)),
            Entry::Vacant(slot) => {
                slot.insert((R::NAME, Arc::new(pipeline) as AnyPipeline));
                Ok(())
            }
        }
    }

    /// 获取已注册的请求名列表（只读视图，按名称排序）
    pub fn registered_requests(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.pipelines.iter().map(|e| e.value().0).collect();
        names.sort_unstable();
        names
    }

    fn pipeline<R: Request>(&self) -> Result<Arc<Pipeline<R>>, AppError> {
        // 不跨 await 持有分片锁
        let Some(erased) = self
            .pipelines
            .get(&TypeId::of::<R>())
            .map(|e| e.value().1.clone())
        else {
            return Err(AppError::HandlerNotFound(R::NAME));
        };

        erased
            .downcast::<Pipeline<R>>()
            .map_err(|_| AppError::TypeMismatch {
                expected: type_name::<Pipeline<R>>(),
                found: R::NAME,
            })
    }
}

#[async_trait]
impl RequestBus for InMemoryRequestBus {
    async fn dispatch<R>(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError>
    where
        R: Request,
    {
        let pipeline = self.pipeline::<R>()?;
        pipeline.send(ctx, request).await
    }
}
