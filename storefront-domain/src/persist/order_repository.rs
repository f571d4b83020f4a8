use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::DomainResult;
use crate::order::{Order, OrderId, OrderStatus};
use crate::persist::Paged;

/// 订单仓储协议（订单没有删除操作）
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find(&self, id: OrderId, ct: &CancellationToken) -> DomainResult<Option<Order>>;

    async fn list(&self, page: u32, size: u32, ct: &CancellationToken)
    -> DomainResult<Paged<Order>>;

    async fn add(&self, order: Order, ct: &CancellationToken) -> DomainResult<Order>;

    /// 更新状态；不存在返回 `NotFound`，迁移规则由存储中的聚合再次检查
    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        ct: &CancellationToken,
    ) -> DomainResult<Order>;
}

#[async_trait]
impl<T> OrderRepository for Arc<T>
where
    T: OrderRepository + ?Sized,
{
    async fn find(&self, id: OrderId, ct: &CancellationToken) -> DomainResult<Option<Order>> {
        (**self).find(id, ct).await
    }

    async fn list(
        &self,
        page: u32,
        size: u32,
        ct: &CancellationToken,
    ) -> DomainResult<Paged<Order>> {
        (**self).list(page, size, ct).await
    }

    async fn add(&self, order: Order, ct: &CancellationToken) -> DomainResult<Order> {
        (**self).add(order, ct).await
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        ct: &CancellationToken,
    ) -> DomainResult<Order> {
        (**self).update_status(id, status, ct).await
    }
}
