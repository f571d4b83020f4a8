use serde::{Deserialize, Serialize};
use storefront_domain::customer::Customer;
use storefront_domain::entity::Entity;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().into_inner(),
            name: customer.name().to_owned(),
            email: customer.email().value().to_owned(),
        }
    }
}
