//! 启动装配：仓储与请求总线在进程启动时构建一次
//!
use std::sync::Arc;

use storefront_domain::persist::{CustomerRepository, OrderRepository};
use tracing::info;

use crate::config::AppConfig;
use crate::customers::{
    CreateCustomer, CreateCustomerHandler, CreateCustomerValidator, DeleteCustomer,
    DeleteCustomerHandler, DeleteCustomerValidator, GetCustomer, GetCustomerHandler,
    GetCustomerValidator, ListCustomers, ListCustomersHandler, ListCustomersValidator,
    UpdateCustomer, UpdateCustomerHandler, UpdateCustomerValidator,
};
use crate::error::AppError;
use crate::inmemory_repository::{InMemoryCustomerRepository, InMemoryOrderRepository};
use crate::inmemory_request_bus::InMemoryRequestBus;
use crate::orders::{
    CreateOrder, CreateOrderHandler, CreateOrderValidator, GetOrder, GetOrderHandler,
    GetOrderValidator, ListOrders, ListOrdersHandler, ListOrdersValidator, UpdateOrderStatus,
    UpdateOrderStatusHandler, UpdateOrderStatusValidator,
};
use crate::pipeline::{BehaviorOrder, Pipeline, ValidationBehavior};
use crate::request::Request;
use crate::request_handler::RequestHandler;
use crate::validation::RequestValidator;

/// 处理器依赖的仓储集合
#[derive(Clone)]
pub struct Repositories {
    pub orders: Arc<dyn OrderRepository>,
    pub customers: Arc<dyn CustomerRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            orders: Arc::new(InMemoryOrderRepository::new()),
            customers: Arc::new(InMemoryCustomerRepository::new()),
        }
    }
}

fn register<R, H, V>(
    bus: &InMemoryRequestBus,
    order: BehaviorOrder,
    handler: H,
    validator: V,
) -> Result<(), AppError>
where
    R: Request,
    H: RequestHandler<R> + 'static,
    V: RequestValidator<R> + 'static,
{
    let validation = ValidationBehavior::new().with(validator);
    bus.register(Pipeline::standard(Arc::new(handler), validation, order))
}

/// 为全部请求类型注册标准管道（日志 + 校验）
pub fn build_request_bus(
    repos: &Repositories,
    config: &AppConfig,
) -> Result<InMemoryRequestBus, AppError> {
    let bus = InMemoryRequestBus::new();
    let order = config.behavior_order;

    let orders = &repos.orders;
    register::<CreateOrder, _, _>(
        &bus,
        order,
        CreateOrderHandler::new(orders.clone()),
        CreateOrderValidator,
    )?;
    register::<GetOrder, _, _>(
        &bus,
        order,
        GetOrderHandler::new(orders.clone()),
        GetOrderValidator,
    )?;
    register::<ListOrders, _, _>(
        &bus,
        order,
        ListOrdersHandler::new(orders.clone()),
        ListOrdersValidator,
    )?;
    register::<UpdateOrderStatus, _, _>(
        &bus,
        order,
        UpdateOrderStatusHandler::new(orders.clone()),
        UpdateOrderStatusValidator,
    )?;

    let customers = &repos.customers;
    register::<CreateCustomer, _, _>(
        &bus,
        order,
        CreateCustomerHandler::new(customers.clone()),
        CreateCustomerValidator,
    )?;
    register::<GetCustomer, _, _>(
        &bus,
        order,
        GetCustomerHandler::new(customers.clone()),
        GetCustomerValidator,
    )?;
    register::<ListCustomers, _, _>(
        &bus,
        order,
        ListCustomersHandler::new(customers.clone()),
        ListCustomersValidator,
    )?;
    register::<UpdateCustomer, _, _>(
        &bus,
        order,
        UpdateCustomerHandler::new(customers.clone()),
        UpdateCustomerValidator,
    )?;
    register::<DeleteCustomer, _, _>(
        &bus,
        order,
        DeleteCustomerHandler::new(customers.clone()),
        DeleteCustomerValidator,
    )?;

    info!(
        requests = bus.registered_requests().len(),
        behavior_order = %order,
        "request bus ready"
    );
    Ok(bus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_request_once() {
        let bus = build_request_bus(&Repositories::in_memory(), &AppConfig::default()).unwrap();
        assert_eq!(
            bus.registered_requests(),
            [
                "customers.create",
                "customers.delete",
                "customers.get",
                "customers.list",
                "customers.update",
                "orders.create",
                "orders.get",
                "orders.list",
                "orders.update_status",
            ]
        );
    }
}
