use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::order::{Order, OrderId, OrderStatus};
use storefront_domain::persist::OrderRepository;

use crate::context::AppContext;
use crate::error::AppError;
use crate::orders::{ID_MESSAGE, OrderDto, STATUS_MESSAGE, parse_status};
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

/// 更新订单状态；迁移规则由订单聚合裁决
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatus {
    pub id: OrderId,
    pub status: String,
}

impl Request for UpdateOrderStatus {
    const NAME: &'static str = "orders.update_status";
    type Response = OrderDto;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateOrderStatusValidator;

impl RequestValidator<UpdateOrderStatus> for UpdateOrderStatusValidator {
    fn validate(&self, request: &UpdateOrderStatus) -> ValidationResult {
        Rules::new()
            .non_nil(&request.id, ID_MESSAGE)
            .one_of::<OrderStatus>(&request.status, STATUS_MESSAGE)
            .finish()
    }
}

pub struct UpdateOrderStatusHandler {
    orders: Arc<dyn OrderRepository>,
}

impl UpdateOrderStatusHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl RequestHandler<UpdateOrderStatus> for UpdateOrderStatusHandler {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: UpdateOrderStatus,
    ) -> Result<OrderDto, AppError> {
        let target = parse_status(&request.status)?;
        let mut order = self
            .orders
            .find(request.id, ctx.cancellation())
            .await?
            .ok_or_else(|| AppError::not_found::<Order>(&request.id))?;

        order.update_status(target)?;

        let updated = self
            .orders
            .update_status(request.id, order.status(), ctx.cancellation())
            .await?;
        Ok(OrderDto::from(&updated))
    }
}
