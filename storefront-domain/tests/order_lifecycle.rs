use rust_decimal::Decimal;
use storefront_domain::customer::{Customer, CustomerId};
use storefront_domain::entity::Entity;
use storefront_domain::error::DomainError;
use storefront_domain::order::{Order, OrderId, OrderStatus};
use storefront_domain::value_object::{Email, Money, ValueObject};

fn usd(cents: i64) -> Money {
    Money::create(Decimal::new(cents, 2), "usd").unwrap()
}

#[test]
fn every_transition_pair_follows_the_guard() {
    let legal = [
        (OrderStatus::New, OrderStatus::New),
        (OrderStatus::New, OrderStatus::Paid),
        (OrderStatus::Paid, OrderStatus::Paid),
        (OrderStatus::Paid, OrderStatus::Shipped),
        (OrderStatus::Shipped, OrderStatus::Shipped),
    ];

    for from in OrderStatus::ALL {
        for to in OrderStatus::ALL {
            let mut order =
                Order::from_existing(OrderId::generate(), CustomerId::generate(), from, usd(500))
                    .unwrap();
            let before = order.clone();
            let result = order.update_status(to);

            if legal.contains(&(from, to)) {
                assert!(result.is_ok(), "{from} -> {to} should be allowed");
                assert_eq!(order.status(), to);
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    DomainError::InvalidTransition {
                        from: from.as_str(),
                        to: to.as_str()
                    }
                );
                assert_eq!(order, before, "{from} -> {to} must leave the order unchanged");
            }
        }
    }
}

#[test]
fn order_keeps_owner_and_total() {
    let ada = Customer::create("Ada", Email::create("ada@example.com").unwrap()).unwrap();
    let order = Order::create(*ada.id(), usd(1999)).unwrap();

    assert_eq!(order.owner_id(), *ada.id());
    assert_eq!(order.total().to_string(), "USD 19.99");
    assert!(order.total().validate().is_ok());
    assert!(!order.id().is_nil());
}

#[test]
fn money_arithmetic_never_goes_negative() {
    let ten = usd(1000);
    let three = usd(300);

    assert_eq!(ten.subtract(&three).unwrap().amount(), Decimal::new(700, 2));
    assert_eq!(three.subtract(&ten).unwrap_err(), DomainError::NegativeResult);
    assert_eq!(ten.subtract(&ten).unwrap().amount(), Decimal::ZERO);

    let euros = Money::create(Decimal::ONE, "EUR").unwrap();
    assert!(matches!(
        ten.add(&euros).unwrap_err(),
        DomainError::CurrencyMismatch { .. }
    ));
}

#[test]
fn stored_order_round_trips_through_serde() {
    let order = Order::create(CustomerId::generate(), usd(1999)).unwrap();
    let json = serde_json::to_string(&order).unwrap();
    let back: Order = serde_json::from_str(&json).unwrap();
    assert_eq!(back, order);

    let tampered = json.replace("USD", "usdollar");
    assert!(serde_json::from_str::<Order>(&tampered).is_err());
}
