use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::context::AppContext;
use crate::error::AppError;
use crate::pipeline::{Next, PipelineBehavior};
use crate::request::Request;
use crate::validation::{RequestValidator, ValidationResult};

/// 校验行为
///
/// 运行该请求类型注册的全部校验器并合并所有消息；任一失败即返回
/// `ValidationFailed`，不再调用下一阶段。没有校验器时直接放行。
pub struct ValidationBehavior<R> {
    validators: Vec<Arc<dyn RequestValidator<R>>>,
}

impl<R> Default for ValidationBehavior<R> {
    fn default() -> Self {
        Self {
            validators: Vec::new(),
        }
    }
}

impl<R: Request> ValidationBehavior<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, validator: impl RequestValidator<R> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// 合并全部校验器的结果（忽略空白消息）
    pub fn validate(&self, request: &R) -> ValidationResult {
        let errors = self
            .validators
            .iter()
            .flat_map(|v| v.validate(request).into_errors())
            .filter(|message| !message.trim().is_empty());
        ValidationResult::failure(errors)
    }
}

#[async_trait]
impl<R: Request> PipelineBehavior<R> for ValidationBehavior<R> {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: R,
        next: Next<'_, R>,
    ) -> Result<R::Response, AppError> {
        let result = self.validate(&request);
        if !result.is_valid() {
            debug!(
                request = R::NAME,
                errors = result.errors().len(),
                "request rejected by validation"
            );
            return Err(AppError::ValidationFailed(result.into_errors()));
        }
        next.run(ctx, request).await
    }
}
