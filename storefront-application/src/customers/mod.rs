//! 客户相关请求：增删改查与分页列表
//!
mod create_customer;
mod delete_customer;
mod dto;
mod get_customer;
mod list_customers;
mod update_customer;

pub use create_customer::{CreateCustomer, CreateCustomerHandler, CreateCustomerValidator};
pub use delete_customer::{DeleteCustomer, DeleteCustomerHandler, DeleteCustomerValidator};
pub use dto::CustomerDto;
pub use get_customer::{GetCustomer, GetCustomerHandler, GetCustomerValidator};
pub use list_customers::{ListCustomers, ListCustomersHandler, ListCustomersValidator};
pub use update_customer::{UpdateCustomer, UpdateCustomerHandler, UpdateCustomerValidator};

use storefront_domain::customer::MAX_NAME_LEN;

use crate::validation::Rules;

pub(crate) const ID_MESSAGE: &str = "Id must be a non-empty GUID.";

/// 名称与邮箱的共用规则（创建与更新）
pub(crate) fn detail_rules(rules: Rules, name: &str, email: &str) -> Rules {
    rules
        .non_blank(name, "Name must be provided.")
        .max_chars(
            name,
            MAX_NAME_LEN,
            &format!("Name must be at most {MAX_NAME_LEN} characters."),
        )
        .non_blank(email, "Email must be provided.")
        .email(email, "Email must be a valid email address.")
}
