use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::order::{Order, OrderId};
use storefront_domain::persist::OrderRepository;

use crate::context::AppContext;
use crate::error::AppError;
use crate::orders::{ID_MESSAGE, OrderDto};
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

#[derive(Debug, Clone, Deserialize)]
pub struct GetOrder {
    pub id: OrderId,
}

impl Request for GetOrder {
    const NAME: &'static str = "orders.get";
    type Response = OrderDto;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GetOrderValidator;

impl RequestValidator<GetOrder> for GetOrderValidator {
    fn validate(&self, request: &GetOrder) -> ValidationResult {
        Rules::new().non_nil(&request.id, ID_MESSAGE).finish()
    }
}

pub struct GetOrderHandler {
    orders: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }
}

#[async_trait]
impl RequestHandler<GetOrder> for GetOrderHandler {
    async fn handle(&self, ctx: &AppContext, request: GetOrder) -> Result<OrderDto, AppError> {
        let order = self
            .orders
            .find(request.id, ctx.cancellation())
            .await?
            .ok_or_else(|| AppError::not_found::<Order>(&request.id))?;
        Ok(OrderDto::from(&order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_id_is_rejected() {
        let result = GetOrderValidator.validate(&GetOrder { id: OrderId::nil() });
        assert_eq!(result.errors(), [ID_MESSAGE]);
        assert!(
            GetOrderValidator
                .validate(&GetOrder {
                    id: OrderId::generate()
                })
                .is_valid()
        );
    }
}
