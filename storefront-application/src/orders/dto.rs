use serde::{Deserialize, Serialize};
use storefront_domain::entity::Entity;
use storefront_domain::order::{Order, OrderId};
use uuid::Uuid;

use crate::dto::MoneyDto;
use crate::error::AppError;
use crate::orders::parse_status;

/// 订单对外表示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub status: String,
    pub total: MoneyDto,
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().into_inner(),
            owner_id: order.owner_id().into_inner(),
            status: order.status().to_string(),
            total: MoneyDto::from(order.total()),
        }
    }
}

impl OrderDto {
    /// 还原为领域对象；字段非法时返回工厂给出的消息
    pub fn to_domain(&self) -> Result<Order, AppError> {
        let status = parse_status(&self.status)?;
        let total = self.total.to_domain()?;
        Order::from_existing(
            OrderId::from(self.id),
            self.owner_id.into(),
            status,
            total,
        )
        .map_err(AppError::invalid_input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_domain::customer::CustomerId;
    use storefront_domain::order::OrderStatus;
    use storefront_domain::value_object::Money;

    fn order() -> Order {
        let total = Money::create(Decimal::new(1999, 2), "usd").unwrap();
        Order::create(CustomerId::generate(), total).unwrap()
    }

    #[test]
    fn maps_entity_fields() {
        let order = order();
        let dto = OrderDto::from(&order);
        assert_eq!(dto.id, order.id().into_inner());
        assert_eq!(dto.status, "New");
        assert_eq!(dto.total, MoneyDto::new(Decimal::new(1999, 2), "USD"));
        assert_eq!(dto.to_domain().unwrap(), order);
    }

    #[test]
    fn serializes_as_plain_fields() {
        let dto = OrderDto::from(&order());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status"], "New");
        assert_eq!(json["total"]["currency"], "USD");
        assert_eq!(serde_json::from_value::<OrderDto>(json).unwrap(), dto);
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let mut dto = OrderDto::from(&order());
        dto.status = "Lost".into();
        assert_eq!(
            dto.to_domain().unwrap_err().validation_errors().unwrap(),
            ["Order status 'Lost' is not valid."]
        );
    }

    #[test]
    fn invalid_total_surfaces_money_message() {
        let mut dto = OrderDto::from(&order());
        dto.status = "paid".into();
        dto.total.currency = "??".into();
        assert_eq!(
            dto.to_domain().unwrap_err().validation_errors().unwrap(),
            ["Currency must be a three-letter code."]
        );

        dto.total.currency = "eur".into();
        assert_eq!(dto.to_domain().unwrap().status(), OrderStatus::Paid);
    }

    #[test]
    fn serializes_for_transport() {
        let dto = OrderDto::from(&order());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["status"], "New");
        assert_eq!(json["total"]["currency"], "USD");
    }
}
