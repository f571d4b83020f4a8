//! storefront 应用层（storefront-application）
//!
//! 请求 → 管道（日志、校验）→ 处理器 → 仓储 → DTO。
//! - 每个请求类型在启动时构建一条 [`pipeline::Pipeline`]，注册到 [`InMemoryRequestBus`]；
//! - 校验在处理器之前运行，任一校验器失败则处理器不会被调用；
//! - 处理器只通过领域工厂构造实体，DTO → 值对象失败以校验错误返回。
//!
pub mod bootstrap;
pub mod config;
pub mod context;
pub mod customers;
pub mod dto;
pub mod error;
pub mod inmemory_repository;
pub mod inmemory_request_bus;
pub mod orders;
pub mod pagination;
pub mod pipeline;
pub mod request;
pub mod request_bus;
pub mod request_handler;
pub mod validation;

pub use inmemory_request_bus::InMemoryRequestBus;
pub use request_bus::RequestBus;
