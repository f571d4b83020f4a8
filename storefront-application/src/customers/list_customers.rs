use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use storefront_domain::persist::{CustomerRepository, Paged};

use crate::context::AppContext;
use crate::customers::CustomerDto;
use crate::error::AppError;
use crate::pagination::{paging_bounds, paging_rules};
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::{RequestValidator, ValidationResult};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ListCustomers {
    pub page: i32,
    pub size: i32,
}

impl Request for ListCustomers {
    const NAME: &'static str = "customers.list";
    type Response = Paged<CustomerDto>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ListCustomersValidator;

impl RequestValidator<ListCustomers> for ListCustomersValidator {
    fn validate(&self, request: &ListCustomers) -> ValidationResult {
        paging_rules(request.page, request.size)
    }
}

pub struct ListCustomersHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl ListCustomersHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl RequestHandler<ListCustomers> for ListCustomersHandler {
    async fn handle(
        &self,
        ctx: &AppContext,
        request: ListCustomers,
    ) -> Result<Paged<CustomerDto>, AppError> {
        let (page, size) = paging_bounds(request.page, request.size)?;
        let customers = self.customers.list(page, size, ctx.cancellation()).await?;
        Ok(customers.map(|customer| CustomerDto::from(&customer)))
    }
}
