use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::customer::Customer;
use storefront_domain::persist::CustomerRepository;
use storefront_domain::value_object::Email;

use crate::context::AppContext;
use crate::customers::{CustomerDto, detail_rules};
use crate::error::AppError;
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
}

impl Request for CreateCustomer {
    const NAME: &'static str = "customers.create";
    type Response = CustomerDto;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreateCustomerValidator;

impl RequestValidator<CreateCustomer> for CreateCustomerValidator {
    fn validate(&self, request: &CreateCustomer) -> ValidationResult {
        detail_rules(Rules::new(), &request.name, &request.email).finish()
    }
}

pub struct CreateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl CreateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl RequestHandler<CreateCustomer> for CreateCustomerHandler {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: CreateCustomer,
    ) -> Result<CustomerDto, AppError> {
        let email = Email::create(&request.email).map_err(AppError::invalid_input)?;
        let customer = Customer::create(&request.name, email).map_err(AppError::invalid_input)?;
        let created = self.customers.add(customer, ctx.cancellation()).await?;
        Ok(CustomerDto::from(&created))
    }
}
