//! 基于内存的仓储实现
//!
//! 每个存储一把 `tokio::sync::RwLock`，按插入顺序保存实体；分页为
//! `skip(page * size).take(size)`。取消令牌在改动任何状态之前检查。
//!
use async_trait::async_trait;
use storefront_domain::customer::{Customer, CustomerId};
use storefront_domain::entity::Entity;
use storefront_domain::error::{DomainError, DomainResult};
use storefront_domain::order::{Order, OrderId, OrderStatus};
use storefront_domain::persist::{CustomerRepository, OrderRepository, Paged};
use storefront_domain::value_object::Email;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

fn ensure_active(ct: &CancellationToken) -> DomainResult<()> {
    if ct.is_cancelled() {
        return Err(DomainError::Cancelled);
    }
    Ok(())
}

fn not_found<E: Entity>(id: &E::Id) -> DomainError {
    DomainError::NotFound {
        entity: E::TYPE,
        id: id.to_string(),
    }
}

/// 通用实体存储
pub struct InMemoryStore<E: Entity> {
    items: RwLock<Vec<E>>,
}

impl<E: Entity> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<E: Entity> InMemoryStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn find(&self, id: &E::Id, ct: &CancellationToken) -> DomainResult<Option<E>> {
        ensure_active(ct)?;
        let items = self.items.read().await;
        Ok(items.iter().find(|e| e.id() == id).cloned())
    }

    pub async fn list(&self, page: u32, size: u32, ct: &CancellationToken) -> DomainResult<Paged<E>> {
        ensure_active(ct)?;
        let items = self.items.read().await;
        Ok(Paged::slice(items.iter(), page, size))
    }

    /// 插入新实体；标识重复视为存储错误
    pub async fn insert(&self, entity: E, ct: &CancellationToken) -> DomainResult<E> {
        let mut items = self.items.write().await;
        ensure_active(ct)?;
        if items.iter().any(|e| e.id() == entity.id()) {
            return Err(DomainError::Repository {
                reason: format!("{} already exists: {}", E::TYPE, entity.id()),
            });
        }
        items.push(entity.clone());
        Ok(entity)
    }

    /// 在副本上应用修改，成功后才替换存储中的实体
    pub async fn modify<F>(&self, id: &E::Id, ct: &CancellationToken, f: F) -> DomainResult<E>
    where
        F: FnOnce(&mut E) -> DomainResult<()> + Send,
    {
        let mut items = self.items.write().await;
        ensure_active(ct)?;
        let Some(slot) = items.iter_mut().find(|e| e.id() == id) else {
            return Err(not_found::<E>(id));
        };
        let mut updated = slot.clone();
        f(&mut updated)?;
        *slot = updated.clone();
        Ok(updated)
    }

    pub async fn remove(&self, id: &E::Id, ct: &CancellationToken) -> DomainResult<()> {
        let mut items = self.items.write().await;
        ensure_active(ct)?;
        let Some(pos) = items.iter().position(|e| e.id() == id) else {
            return Err(not_found::<E>(id));
        };
        items.remove(pos);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    store: InMemoryStore<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find(&self, id: OrderId, ct: &CancellationToken) -> DomainResult<Option<Order>> {
        self.store.find(&id, ct).await
    }

    async fn list(
        &self,
        page: u32,
        size: u32,
        ct: &CancellationToken,
    ) -> DomainResult<Paged<Order>> {
        self.store.list(page, size, ct).await
    }

    async fn add(&self, order: Order, ct: &CancellationToken) -> DomainResult<Order> {
        let stored = Order::from_existing(
            *order.id(),
            order.owner_id(),
            order.status(),
            order.total().clone(),
        )?;
        self.store.insert(stored, ct).await
    }

    async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        ct: &CancellationToken,
    ) -> DomainResult<Order> {
        self.store
            .modify(&id, ct, |order| order.update_status(status))
            .await
    }
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    store: InMemoryStore<Customer>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find(
        &self,
        id: CustomerId,
        ct: &CancellationToken,
    ) -> DomainResult<Option<Customer>> {
        self.store.find(&id, ct).await
    }

    async fn list(
        &self,
        page: u32,
        size: u32,
        ct: &CancellationToken,
    ) -> DomainResult<Paged<Customer>> {
        self.store.list(page, size, ct).await
    }

    async fn add(&self, customer: Customer, ct: &CancellationToken) -> DomainResult<Customer> {
        let stored =
            Customer::from_existing(*customer.id(), customer.name(), customer.email().clone())?;
        self.store.insert(stored, ct).await
    }

    async fn update_details(
        &self,
        id: CustomerId,
        name: &str,
        email: Email,
        ct: &CancellationToken,
    ) -> DomainResult<Customer> {
        self.store
            .modify(&id, ct, |customer| {
                customer.rename(name)?;
                customer.change_email(email);
                Ok(())
            })
            .await
    }

    async fn delete(&self, id: CustomerId, ct: &CancellationToken) -> DomainResult<()> {
        self.store.remove(&id, ct).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use storefront_domain::value_object::Money;

    fn order() -> Order {
        let total = Money::create(Decimal::new(1999, 2), "usd").unwrap();
        Order::create(CustomerId::generate(), total).unwrap()
    }

    fn customer(name: &str) -> Customer {
        Customer::create(name, Email::create("ada@example.com").unwrap()).unwrap()
    }

    #[tokio::test]
    async fn add_then_find_returns_stored_order() {
        let repo = InMemoryOrderRepository::new();
        let ct = CancellationToken::new();
        let order = order();

        repo.add(order.clone(), &ct).await.unwrap();

        assert_eq!(repo.find(*order.id(), &ct).await.unwrap(), Some(order));
        assert_eq!(repo.find(OrderId::generate(), &ct).await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let repo = InMemoryOrderRepository::new();
        let ct = CancellationToken::new();
        let order = order();
        repo.add(order.clone(), &ct).await.unwrap();

        let err = repo.add(order, &ct).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository { .. }));
    }

    #[tokio::test]
    async fn update_status_reapplies_transition_guard() {
        let repo = InMemoryOrderRepository::new();
        let ct = CancellationToken::new();
        let order = order();
        let id = *order.id();
        repo.add(order, &ct).await.unwrap();

        let err = repo
            .update_status(id, OrderStatus::Shipped, &ct)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        let stored = repo.find(id, &ct).await.unwrap().unwrap();
        assert_eq!(stored.status(), OrderStatus::New);

        let paid = repo.update_status(id, OrderStatus::Paid, &ct).await.unwrap();
        assert_eq!(paid.status(), OrderStatus::Paid);
        let shipped = repo
            .update_status(id, OrderStatus::Shipped, &ct)
            .await
            .unwrap();
        assert_eq!(shipped.status(), OrderStatus::Shipped);
    }

    #[tokio::test]
    async fn update_status_of_missing_order_is_not_found() {
        let repo = InMemoryOrderRepository::new();
        let ct = CancellationToken::new();
        let id = OrderId::generate();

        let err = repo
            .update_status(id, OrderStatus::Paid, &ct)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFound {
                entity: "Order",
                id: id.to_string()
            }
        );
    }

    #[tokio::test]
    async fn list_pages_in_insertion_order() {
        let repo = InMemoryCustomerRepository::new();
        let ct = CancellationToken::new();
        for name in ["a", "b", "c", "d", "e"] {
            repo.add(customer(name), &ct).await.unwrap();
        }

        let page = repo.list(1, 2, &ct).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|c| c.name().to_owned()).collect();
        assert_eq!(names, ["c", "d"]);
        assert_eq!(page.total, 5);
    }

    #[tokio::test]
    async fn cancelled_token_leaves_store_untouched() {
        let repo = InMemoryOrderRepository::new();
        let ct = CancellationToken::new();
        ct.cancel();

        assert_eq!(repo.add(order(), &ct).await.unwrap_err(), DomainError::Cancelled);
        assert_eq!(
            repo.list(0, 10, &ct).await.unwrap_err(),
            DomainError::Cancelled
        );
        assert!(repo.store.is_empty().await);
    }

    #[tokio::test]
    async fn failed_customer_update_keeps_previous_details() {
        let repo = InMemoryCustomerRepository::new();
        let ct = CancellationToken::new();
        let ada = customer("Ada");
        let id = *ada.id();
        repo.add(ada, &ct).await.unwrap();

        let other = Email::create("other@example.com").unwrap();
        let err = repo
            .update_details(id, "   ", other.clone(), &ct)
            .await
            .unwrap_err();
        assert!(err.is_invariant_violation());
        let stored = repo.find(id, &ct).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Ada");
        assert_eq!(stored.email().value(), "ada@example.com");

        let updated = repo
            .update_details(id, " Grace ", other, &ct)
            .await
            .unwrap();
        assert_eq!(updated.name(), "Grace");
        assert_eq!(updated.email().value(), "other@example.com");
    }

    #[tokio::test]
    async fn delete_removes_customer() {
        let repo = InMemoryCustomerRepository::new();
        let ct = CancellationToken::new();
        let ada = customer("Ada");
        let id = *ada.id();
        repo.add(ada, &ct).await.unwrap();

        repo.delete(id, &ct).await.unwrap();
        assert_eq!(repo.store.len().await, 0);
        assert!(matches!(
            repo.delete(id, &ct).await.unwrap_err(),
            DomainError::NotFound { entity: "Customer", .. }
        ));
    }
}
