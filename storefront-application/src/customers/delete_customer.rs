use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::customer::CustomerId;
use storefront_domain::persist::CustomerRepository;

use crate::context::AppContext;
use crate::customers::ID_MESSAGE;
use crate::error::AppError;
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteCustomer {
    pub id: CustomerId,
}

impl Request for DeleteCustomer {
    const NAME: &'static str = "customers.delete";
    type Response = ();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DeleteCustomerValidator;

impl RequestValidator<DeleteCustomer> for DeleteCustomerValidator {
    fn validate(&self, request: &DeleteCustomer) -> ValidationResult {
        Rules::new().non_nil(&request.id, ID_MESSAGE).finish()
    }
}

pub struct DeleteCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl RequestHandler<DeleteCustomer> for DeleteCustomerHandler {
    async fn handle(&self, ctx: &AppContext, request: DeleteCustomer) -> Result<(), AppError> {
        self.customers.delete(request.id, ctx.cancellation()).await?;
        Ok(())
    }
}
