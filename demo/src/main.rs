use anyhow::Result;
use rust_decimal::Decimal;
use storefront_application::bootstrap::{Repositories, build_request_bus};
use storefront_application::config::AppConfig;
use storefront_application::context::AppContext;
use storefront_application::customers::CreateCustomer;
use storefront_application::dto::MoneyDto;
use storefront_application::orders::{CreateOrder, ListOrders, OrderDto, UpdateOrderStatus};
use storefront_application::{InMemoryRequestBus, RequestBus};
use storefront_domain::customer::CustomerId;
use storefront_domain::order::OrderId;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.log_json {
        builder.json().try_init().map_err(anyhow::Error::msg)?;
    } else {
        builder.try_init().map_err(anyhow::Error::msg)?;
    }
    Ok(())
}

async fn set_status(
    bus: &InMemoryRequestBus,
    ctx: &AppContext,
    order: &OrderDto,
    status: &str,
) -> Option<OrderDto> {
    let request = UpdateOrderStatus {
        id: OrderId::from(order.id),
        status: status.to_string(),
    };
    match bus.dispatch(ctx, request).await {
        Ok(updated) => {
            info!(order = %updated.id, status = %updated.status, "status updated");
            Some(updated)
        }
        Err(err) => {
            warn!(
                order = %order.id,
                requested = status,
                kind = ?err.kind(),
                error = %err,
                "status rejected"
            );
            None
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    init_tracing(&config)?;

    let bus = build_request_bus(&Repositories::in_memory(), &config)?;
    let ctx = AppContext::builder()
        .correlation_id(uuid::Uuid::new_v4().to_string())
        .actor_id("demo".to_string())
        .build();

    let customer = bus
        .dispatch(
            &ctx,
            CreateCustomer {
                name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
            },
        )
        .await?;
    info!(customer = %customer.id, name = %customer.name, "customer created");

    if let Err(err) = bus
        .dispatch(
            &ctx,
            CreateOrder {
                owner_id: CustomerId::nil(),
                total: None,
            },
        )
        .await
    {
        warn!(error = %err, "invalid order rejected");
    }

    let order = bus
        .dispatch(
            &ctx,
            CreateOrder {
                owner_id: CustomerId::from(customer.id),
                total: Some(MoneyDto::new(Decimal::new(1999, 2), "usd")),
            },
        )
        .await?;
    info!(order = %order.id, status = %order.status, total = ?order.total, "order created");

    // New → Shipped 被拒绝，随后按顺序迁移
    set_status(&bus, &ctx, &order, "Shipped").await;
    set_status(&bus, &ctx, &order, "Paid").await;
    set_status(&bus, &ctx, &order, "Shipped").await;

    let page = bus.dispatch(&ctx, ListOrders { page: 0, size: 10 }).await?;
    for item in &page.items {
        info!(order = %item.id, status = %item.status, total = ?item.total, "listed");
    }
    info!(total = page.total, "done");
    Ok(())
}
