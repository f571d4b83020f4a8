use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::customer::CustomerId;
use storefront_domain::order::Order;
use storefront_domain::persist::OrderRepository;
use storefront_domain::value_object::Money;

use crate::context::AppContext;
use crate::dto::MoneyDto;
use crate::error::AppError;
use crate::orders::OrderDto;
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

const TOTAL_MISSING: &str = "Total must be provided.";

/// 创建订单；初始状态固定为 `New`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub owner_id: CustomerId,
    pub total: Option<MoneyDto>,
}

impl Request for CreateOrder {
    const NAME: &'static str = "orders.create";
    type Response = OrderDto;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreateOrderValidator;

impl RequestValidator<CreateOrder> for CreateOrderValidator {
    fn validate(&self, request: &CreateOrder) -> ValidationResult {
        let rules = Rules::new().non_nil(&request.owner_id, "OwnerId must be a non-empty GUID.");
        let rules = match &request.total {
            Some(total) => rules.value_object(Money::create(total.amount, &total.currency)),
            None => rules.check(false, TOTAL_MISSING),
        };
        rules.finish()
    }
}

pub struct CreateOrderHandler {
    orders: Arc<dyn OrderRepository>,
}

impl CreateOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl RequestHandler<CreateOrder> for CreateOrderHandler {
    async fn handle(&self, ctx: &AppContext, request: CreateOrder) -> Result<OrderDto, AppError> {
        let total = request
            .total
            .as_ref()
            .ok_or_else(|| AppError::ValidationFailed(vec![TOTAL_MISSING.to_owned()]))?
            .to_domain()?;
        let order = Order::create(request.owner_id, total).map_err(AppError::invalid_input)?;
        let created = self.orders.add(order, ctx.cancellation()).await?;
        Ok(OrderDto::from(&created))
    }
}
