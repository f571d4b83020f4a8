//! 持久化协议（persist）
//!
//! 只定义仓储接口与分页结果，具体存储后端由上层实现并注入。
//! 所有方法接收取消令牌：令牌已触发时实现必须在改动任何状态前返回
//! `DomainError::Cancelled`。
//!
//! 存储层负责并发安全（同一标识上的并发修改），领域层不提供该保证。
//!
mod customer_repository;
mod order_repository;
mod paged;

pub use customer_repository::CustomerRepository;
pub use order_repository::OrderRepository;
pub use paged::Paged;
