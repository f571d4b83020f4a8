use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::persist::{OrderRepository, Paged};

use crate::context::AppContext;
use crate::error::AppError;
use crate::orders::OrderDto;
use crate::pagination::{paging_bounds, paging_rules};
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, ValidationResult};

/// 分页列出订单（`page` 从 0 开始）
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListOrders {
    pub page: i32,
    pub size: i32,
}

impl Request for ListOrders {
    const NAME: &'static str = "orders.list";
    type Response = Paged<OrderDto>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListOrdersValidator;

impl RequestValidator<ListOrders> for ListOrdersValidator {
    fn validate(&self, request: &ListOrders) -> ValidationResult {
        paging_rules(request.page, request.size)
    }
}

pub struct ListOrdersHandler {
    orders: Arc<dyn OrderRepository>,
}

impl ListOrdersHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl RequestHandler<ListOrders> for ListOrdersHandler {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: ListOrders,
    ) -> Result<Paged<OrderDto>, AppError> {
        let (page, size) = paging_bounds(request.page, request.size)?;
        let orders = self.orders.list(page, size, ctx.cancellation()).await?;
        Ok(orders.map(|order| OrderDto::from(&order)))
    }
}
