//! 订单聚合（Order）
//!
//! 聚合自身负责状态迁移规则：任何外部代码都只能通过 [`Order::update_status`]
//! 修改状态，非法迁移返回 `InvalidTransition` 且聚合保持不变。
//!
mod status;

pub use status::{OrderStatus, UnknownOrderStatus};

use serde::{Deserialize, Serialize};
use storefront_macros::entity_id;
use uuid::Uuid;

use crate::customer::CustomerId;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{Money, ValueObject};

#[entity_id]
pub struct OrderId(Uuid);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderRecord")]
pub struct Order {
    id: OrderId,
    owner_id: CustomerId,
    status: OrderStatus,
    total: Money,
}

// 反序列化入口，经由 `from_existing` 重新校验
#[derive(Deserialize)]
struct OrderRecord {
    id: OrderId,
    owner_id: CustomerId,
    status: OrderStatus,
    total: Money,
}

impl TryFrom<OrderRecord> for Order {
    type Error = DomainError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Order::from_existing(record.id, record.owner_id, record.status, record.total)
    }
}

impl Order {
    /// 新建订单：分配新标识，初始状态为 `New`
    ///
    /// # 示例
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use storefront_domain::customer::CustomerId;
    /// use storefront_domain::order::{Order, OrderStatus};
    /// use storefront_domain::value_object::Money;
    ///
    /// let total = Money::create(Decimal::new(1999, 2), "usd").unwrap();
    /// let mut order = Order::create(CustomerId::generate(), total).unwrap();
    /// assert_eq!(order.status(), OrderStatus::New);
    ///
    /// assert!(order.update_status(OrderStatus::Shipped).is_err());
    /// order.update_status(OrderStatus::Paid).unwrap();
    /// order.update_status(OrderStatus::Shipped).unwrap();
    /// ```
    pub fn create(owner_id: CustomerId, total: Money) -> DomainResult<Self> {
        ensure_owner(owner_id)?;
        Ok(Self {
            id: OrderId::generate(),
            owner_id,
            status: OrderStatus::New,
            total,
        })
    }

    /// 由仓储恢复已存储的订单，重新校验全部不变量
    pub fn from_existing(
        id: OrderId,
        owner_id: CustomerId,
        status: OrderStatus,
        total: Money,
    ) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::invalid_argument(
                "id",
                "Order id must be provided.",
            ));
        }
        ensure_owner(owner_id)?;
        total.validate()?;
        Ok(Self {
            id,
            owner_id,
            status,
            total,
        })
    }

    pub fn owner_id(&self) -> CustomerId {
        self.owner_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total(&self) -> &Money {
        &self.total
    }

    /// 状态迁移；每次调用都重新检查迁移规则
    pub fn update_status(&mut self, target: OrderStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(target) {
            return Err(DomainError::InvalidTransition {
                from: self.status.as_str(),
                to: target.as_str(),
            });
        }
        self.status = target;
        Ok(())
    }
}

fn ensure_owner(owner_id: CustomerId) -> DomainResult<()> {
    if owner_id.is_nil() {
        return Err(DomainError::invalid_argument(
            "owner_id",
            "Owner id must be provided.",
        ));
    }
    Ok(())
}

impl Entity for Order {
    const TYPE: &'static str = "Order";
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
