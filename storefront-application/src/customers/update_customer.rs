use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::customer::{CustomerId, normalize_name};
use storefront_domain::persist::CustomerRepository;
use storefront_domain::value_object::Email;

use crate::context::AppContext;
use crate::customers::{CustomerDto, ID_MESSAGE, detail_rules};
use crate::error::AppError;
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, Rules, ValidationResult};

/// 整体替换客户的名称与邮箱
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCustomer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Request for UpdateCustomer {
    const NAME: &'static str = "customers.update";
    type Response = CustomerDto;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateCustomerValidator;

impl RequestValidator<UpdateCustomer> for UpdateCustomerValidator {
    fn validate(&self, request: &UpdateCustomer) -> ValidationResult {
        let rules = Rules::new().non_nil(&request.id, ID_MESSAGE);
        detail_rules(rules, &request.name, &request.email).finish()
    }
}

pub struct UpdateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl RequestHandler<UpdateCustomer> for UpdateCustomerHandler {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: UpdateCustomer,
    ) -> Result<CustomerDto, AppError> {
        let name = normalize_name(&request.name).map_err(AppError::invalid_input)?;
        let email = Email::create(&request.email).map_err(AppError::invalid_input)?;
        let updated = self
            .customers
            .update_details(request.id, &name, email, ctx.cancellation())
            .await?;
        Ok(CustomerDto::from(&updated))
    }
}
