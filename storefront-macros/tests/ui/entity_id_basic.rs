use storefront_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct OrderId(Uuid);

#[entity_id(debug = false)]
#[derive(PartialOrd)]
struct CustomerId(Uuid);

impl std::fmt::Debug for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CustomerId(..)")
    }
}

fn main() {
    let id = OrderId::generate();
    assert!(!id.is_nil());
    let _ = format!("{:?}", id);

    // 默认值即空标识
    assert!(OrderId::default().is_nil());
    assert_eq!(OrderId::nil(), OrderId::from(Uuid::nil()));

    // Display/FromStr 往返
    let parsed: OrderId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
    assert!("not-a-uuid".parse::<OrderId>().is_err());

    let raw: Uuid = id.into();
    assert_eq!(raw, id.into_inner());
    assert_eq!(OrderId::TYPE_NAME, "OrderId");

    // 手写 Debug 能编译，说明 debug = false 未重复派生
    let cid = CustomerId::generate();
    assert_eq!(format!("{:?}", cid), "CustomerId(..)");
    let _ = cid < CustomerId::generate() || true;
}
