//! storefront 领域层（storefront-domain）
//!
//! 不变量层：保证任何 `Order`、`Money`、`Email` 值都不会以非法或无意义的状态存在。
//! - 值对象（`value_object`）：`Money`、`Email`，只能经校验工厂创建
//! - 订单聚合（`order`）：受保护的状态机 New → Paid → Shipped
//! - 客户实体（`customer`）：名称与邮箱约束
//! - 仓储协议（`persist`）：由基础设施实现，领域层只声明接口
//!
//! 领域逻辑纯同步、仅占用 CPU；异步只出现在仓储边界。
//!
pub mod customer;
pub mod entity;
pub mod error;
pub mod order;
pub mod persist;
pub mod value_object;
