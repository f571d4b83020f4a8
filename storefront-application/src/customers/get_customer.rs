use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::customer::{Customer, CustomerId};
use storefront_domain::persist::CustomerRepository;

use crate::context::AppContext;
use crate::customers::{CustomerDto, ID_MESSAGE};
use crate::error::AppError;
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

#[derive(Debug, Clone, Deserialize)]
pub struct GetCustomer {
    pub id: CustomerId,
}

impl Request for GetCustomer {
    const NAME: &'static str = "customers.get";
    type Response = CustomerDto;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GetCustomerValidator;

impl RequestValidator<GetCustomer> for GetCustomerValidator {
    fn validate(&self, request: &GetCustomer) -> ValidationResult {
        Rules::new().non_nil(&request.id, ID_MESSAGE).finish()
    }
}

pub struct GetCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl GetCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl RequestHandler<GetCustomer> for GetCustomerHandler {
    async fn handle(&self, ctx: &AppContext, request: GetCustomer) -> Result<CustomerDto, AppError> {
        let customer = self
            .customers
            .find(request.id, ctx.cancellation())
            .await?
            .ok_or_else(|| AppError::not_found::<Customer>(&request.id))?;
        Ok(CustomerDto::from(&customer))
    }
}
