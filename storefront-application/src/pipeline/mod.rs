//! 请求管道（Pipeline）
//!
//! 在终端处理器外按声明顺序包裹一组行为（校验、日志等横切关注点）。
//! 每个请求类型在启动时构建一次管道，之后只读复用。
//!
mod logging_behavior;
mod validation_behavior;

pub use logging_behavior::LoggingBehavior;
pub use validation_behavior::ValidationBehavior;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::error::AppError;
use crate::request::Request;
use crate::request_handler::RequestHandler;

/// 管道行为：包裹下一阶段的调用
#[async_trait]
pub trait PipelineBehavior<R: Request>: Send + Sync {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: R,
        next: Next<'_, R>,
    ) -> Result<R::Response, AppError>;
}

/// 管道中剩余的阶段（其余行为 + 终端处理器）
pub struct Next<'a, R: Request> {
    behaviors: &'a [Arc<dyn PipelineBehavior<R>>],
    handler: &'a dyn RequestHandler<R>,
}

impl<'a, R: Request> Next<'a, R> {
    /// 执行剩余阶段；不调用即短路
    pub fn run(
        self,
        ctx: &'a AppContext,
        request: R,
    ) -> BoxFuture<'a, Result<R::Response, AppError>> {
        Box::pin(async move {
            match self.behaviors.split_first() {
                Some((behavior, rest)) => {
                    let next = Next {
                        behaviors: rest,
                        handler: self.handler,
                    };
                    behavior.handle(ctx, request, next).await
                }
                None => self.handler.handle(ctx, request).await,
            }
        })
    }
}

/// 日志与校验两个标准行为的嵌套顺序
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BehaviorOrder {
    /// 日志在外：校验失败同样记录 start/completion
    #[default]
    LoggingOutermost,
    /// 校验在外：未通过校验的请求不产生日志
    ValidationOutermost,
}

impl BehaviorOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            BehaviorOrder::LoggingOutermost => "logging-outermost",
            BehaviorOrder::ValidationOutermost => "validation-outermost",
        }
    }
}

impl fmt::Display for BehaviorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown behavior order '{0}', expected logging-outermost or validation-outermost")]
pub struct UnknownBehaviorOrder(pub String);

impl FromStr for BehaviorOrder {
    type Err = UnknownBehaviorOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "logging-outermost" => Ok(BehaviorOrder::LoggingOutermost),
            "validation-outermost" => Ok(BehaviorOrder::ValidationOutermost),
            _ => Err(UnknownBehaviorOrder(s.to_owned())),
        }
    }
}

/// 单个请求类型的管道：终端处理器 + 自外向内排列的行为
pub struct Pipeline<R: Request> {
    handler: Arc<dyn RequestHandler<R>>,
    behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
}

impl<R: Request> Pipeline<R> {
    pub fn new(handler: Arc<dyn RequestHandler<R>>) -> Self {
        Self {
            handler,
            behaviors: Vec::new(),
        }
    }

    /// 追加一个行为；先追加的位于外层
    pub fn with_behavior(mut self, behavior: Arc<dyn PipelineBehavior<R>>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    /// 标准管道：日志 + 校验，按 `order` 嵌套
    pub fn standard(
        handler: Arc<dyn RequestHandler<R>>,
        validation: ValidationBehavior<R>,
        order: BehaviorOrder,
    ) -> Self {
        let logging: Arc<dyn PipelineBehavior<R>> = Arc::new(LoggingBehavior);
        let validation: Arc<dyn PipelineBehavior<R>> = Arc::new(validation);
        let pipeline = Self::new(handler);
        match order {
            BehaviorOrder::LoggingOutermost => {
                pipeline.with_behavior(logging).with_behavior(validation)
            }
            BehaviorOrder::ValidationOutermost => {
                pipeline.with_behavior(validation).with_behavior(logging)
            }
        }
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    pub async fn send(&self, ctx: &AppContext, request: R) -> Result<R::Response, AppError> {
        let next = Next {
            behaviors: &self.behaviors,
            handler: self.handler.as_ref(),
        };
        next.run(ctx, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Echo(u32);

    impl Request for Echo {
        const NAME: &'static str = "test.echo";
        type Response = u32;
    }

    #[derive(Default)]
    struct Trace(Mutex<Vec<String>>);

    impl Trace {
        fn push(&self, entry: impl Into<String>) {
            self.0.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct EchoHandler(Arc<Trace>);

    #[async_trait]
    impl RequestHandler<Echo> for EchoHandler {
        async fn handle(&self, _ctx: &AppContext, request: Echo) -> Result<u32, AppError> {
            self.0.push("handler");
            Ok(request.0)
        }
    }

    struct Tag(&'static str, Arc<Trace>);

    #[async_trait]
    impl PipelineBehavior<Echo> for Tag {
        async fn handle(
            &self,
            ctx: &AppContext,
            request: Echo,
            next: Next<'_, Echo>,
        ) -> Result<u32, AppError> {
            self.1.push(format!("{}:before", self.0));
            let out = next.run(ctx, request).await;
            self.1.push(format!("{}:after", self.0));
            out
        }
    }

    struct Deny;

    #[async_trait]
    impl PipelineBehavior<Echo> for Deny {
        async fn handle(
            &self,
            _ctx: &AppContext,
            _request: Echo,
            _next: Next<'_, Echo>,
        ) -> Result<u32, AppError> {
            Err(AppError::ValidationFailed(vec!["denied".into()]))
        }
    }

    #[tokio::test]
    async fn behaviors_wrap_handler_in_declared_order() {
        let trace = Arc::new(Trace::default());
        let pipeline = Pipeline::new(Arc::new(EchoHandler(trace.clone())))
            .with_behavior(Arc::new(Tag("outer", trace.clone())))
            .with_behavior(Arc::new(Tag("inner", trace.clone())));

        let out = pipeline.send(&AppContext::default(), Echo(7)).await.unwrap();

        assert_eq!(out, 7);
        assert_eq!(
            trace.entries(),
            [
                "outer:before",
                "inner:before",
                "handler",
                "inner:after",
                "outer:after"
            ]
        );
    }

    #[tokio::test]
    async fn short_circuit_skips_remaining_stages() {
        let trace = Arc::new(Trace::default());
        let pipeline = Pipeline::new(Arc::new(EchoHandler(trace.clone())))
            .with_behavior(Arc::new(Tag("outer", trace.clone())))
            .with_behavior(Arc::new(Deny));

        let err = pipeline
            .send(&AppContext::default(), Echo(1))
            .await
            .unwrap_err();

        assert_eq!(err.validation_errors(), Some(&["denied".to_string()][..]));
        assert_eq!(trace.entries(), ["outer:before", "outer:after"]);
    }

    #[tokio::test]
    async fn empty_pipeline_calls_handler_directly() {
        let trace = Arc::new(Trace::default());
        let pipeline = Pipeline::new(Arc::new(EchoHandler(trace.clone())));
        assert_eq!(pipeline.behavior_count(), 0);
        assert_eq!(
            pipeline.send(&AppContext::default(), Echo(3)).await.unwrap(),
            3
        );
        assert_eq!(trace.entries(), ["handler"]);
    }

    #[test]
    fn behavior_order_parses_config_values() {
        assert_eq!(
            "Validation_Outermost".parse::<BehaviorOrder>().unwrap(),
            BehaviorOrder::ValidationOutermost
        );
        assert_eq!(
            " logging-outermost ".parse::<BehaviorOrder>().unwrap(),
            BehaviorOrder::LoggingOutermost
        );
        assert!("inside-out".parse::<BehaviorOrder>().is_err());
        assert_eq!(BehaviorOrder::default(), BehaviorOrder::LoggingOutermost);
    }
}
