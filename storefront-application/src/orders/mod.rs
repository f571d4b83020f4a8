//! 订单相关请求：创建、查询、分页列表、状态更新
//!
mod create_order;
mod dto;
mod get_order;
mod list_orders;
mod update_order_status;

pub use create_order::{CreateOrder, CreateOrderHandler, CreateOrderValidator};
pub use dto::OrderDto;
pub use get_order::{GetOrder, GetOrderHandler, GetOrderValidator};
pub use list_orders::{ListOrders, ListOrdersHandler, ListOrdersValidator};
pub use update_order_status::{
    UpdateOrderStatus, UpdateOrderStatusHandler, UpdateOrderStatusValidator,
};

use storefront_domain::order::OrderStatus;

use crate::error::AppError;

pub(crate) const ID_MESSAGE: &str = "Id must be a non-empty GUID.";
pub(crate) const STATUS_MESSAGE: &str = "Status must be one of: New, Paid, Shipped.";

/// 解析状态字符串；无法识别时作为校验失败返回
pub(crate) fn parse_status(value: &str) -> Result<OrderStatus, AppError> {
    value
        .parse::<OrderStatus>()
        .map_err(|err| AppError::ValidationFailed(vec![err.to_string()]))
}
