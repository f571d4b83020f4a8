use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::customer::{Customer, CustomerId};
use crate::error::DomainResult;
use crate::persist::Paged;
use crate::value_object::Email;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find(&self, id: CustomerId, ct: &CancellationToken)
    -> DomainResult<Option<Customer>>;

    async fn list(
        &self,
        page: u32,
        size: u32,
        ct: &CancellationToken,
    ) -> DomainResult<Paged<Customer>>;

    async fn add(&self, customer: Customer, ct: &CancellationToken) -> DomainResult<Customer>;

    /// 更新名称与邮箱；不存在返回 `NotFound`
    async fn update_details(
        &self,
        id: CustomerId,
        name: &str,
        email: Email,
        ct: &CancellationToken,
    ) -> DomainResult<Customer>;

    /// 删除客户；不存在返回 `NotFound`
    async fn delete(&self, id: CustomerId, ct: &CancellationToken) -> DomainResult<()>;
}

#[async_trait]
impl<T> CustomerRepository for Arc<T>
where
    T: CustomerRepository + ?Sized,
{
    async fn find(
        &self,
        id: CustomerId,
        ct: &CancellationToken,
    ) -> DomainResult<Option<Customer>> {
        (**self).find(id, ct).await
    }

    async fn list(
        &self,
        page: u32,
        size: u32,
        ct: &CancellationToken,
    ) -> DomainResult<Paged<Customer>> {
        (**self).list(page, size, ct).await
    }

    async fn add(&self, customer: Customer, ct: &CancellationToken) -> DomainResult<Customer> {
        (**self).add(customer, ct).await
    }

    async fn update_details(
        &self,
        id: CustomerId,
        name: &str,
        email: Email,
        ct: &CancellationToken,
    ) -> DomainResult<Customer> {
        (**self).update_details(id, name, email, ct).await
    }

    async fn delete(&self, id: CustomerId, ct: &CancellationToken) -> DomainResult<()> {
        (**self).delete(id, ct).await
    }
}
