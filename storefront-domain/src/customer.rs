//! 客户（Customer）实体
//!
//! 名称非空且已去除首尾空白，邮箱为已校验的 [`Email`]。
//!
use serde::{Deserialize, Serialize};
use storefront_macros::entity_id;
use uuid::Uuid;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{Email, ValueObject};

/// 客户名称允许的最大长度（字符数）
pub const MAX_NAME_LEN: usize = 200;

#[entity_id]
pub struct CustomerId(Uuid);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: Email,
}

// 反序列化入口：空标识与空白名称在这里被拒绝
#[derive(Deserialize)]
struct CustomerRecord {
    id: CustomerId,
    name: String,
    email: Email,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = DomainError;

    fn try_from(record: CustomerRecord) -> Result<Self, Self::Error> {
        Customer::from_existing(record.id, &record.name, record.email)
    }
}

impl Customer {
    /// 新建客户，分配新标识
    pub fn create(name: &str, email: Email) -> DomainResult<Self> {
        let name = normalize_name(name)?;
        Ok(Self {
            id: CustomerId::generate(),
            name,
            email,
        })
    }

    /// 由仓储恢复已存储的客户，重新校验全部不变量
    pub fn from_existing(id: CustomerId, name: &str, email: Email) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::invalid_argument(
                "id",
                "Customer id must be provided.",
            ));
        }
        email.validate()?;
        let name = normalize_name(name)?;
        Ok(Self { id, name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn rename(&mut self, name: &str) -> DomainResult<()> {
        self.name = normalize_name(name)?;
        Ok(())
    }

    pub fn change_email(&mut self, email: Email) {
        self.email = email;
    }
}

impl Entity for Customer {
    const TYPE: &'static str = "Customer";
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 名称规范化：去除首尾空白，拒绝空白与超长名称
pub fn normalize_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing("name", "Name must be provided."));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::out_of_range(
            "name",
            format!("Name must be at most {MAX_NAME_LEN} characters."),
        ));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> Email {
        Email::create("ada@example.com").unwrap()
    }

    #[test]
    fn create_trims_name_and_assigns_id() {
        let c = Customer::create("  Ada Lovelace ", email()).unwrap();
        assert_eq!(c.name(), "Ada Lovelace");
        assert!(!c.id().is_nil());
        assert_eq!(c.email().value(), "ada@example.com");
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = Customer::create("   ", email()).unwrap_err();
        assert!(matches!(err, DomainError::Missing { field: "name", .. }));
    }

    #[test]
    fn create_rejects_overlong_name() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = Customer::create(&long, email()).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange { field: "name", .. }));
        assert!(Customer::create(&"x".repeat(MAX_NAME_LEN), email()).is_ok());
    }

    #[test]
    fn from_existing_rejects_nil_id() {
        let err = Customer::from_existing(CustomerId::nil(), "Ada", email()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument { field: "id", .. }));
    }

    #[test]
    fn from_existing_keeps_id() {
        let id = CustomerId::generate();
        let c = Customer::from_existing(id, " Ada ", email()).unwrap();
        assert_eq!(*c.id(), id);
        assert_eq!(c.name(), "Ada");
    }

    #[test]
    fn deserialization_normalizes_and_rejects_invalid_records() {
        let id = CustomerId::generate();
        let loaded: Customer = serde_json::from_str(&format!(
            r#"{{"id":"{id}","name":"  Ada  ","email":"ada@example.com"}}"#
        ))
        .unwrap();
        assert_eq!(*loaded.id(), id);
        assert_eq!(loaded.name(), "Ada");

        let blank = format!(r#"{{"id":"{id}","name":"   ","email":"ada@example.com"}}"#);
        let err = serde_json::from_str::<Customer>(&blank).unwrap_err();
        assert!(err.to_string().contains("Name must be provided."));

        let nil = format!(
            r#"{{"id":"{}","name":"Ada","email":"ada@example.com"}}"#,
            Uuid::nil()
        );
        let err = serde_json::from_str::<Customer>(&nil).unwrap_err();
        assert!(err.to_string().contains("Customer id must be provided."));
    }

    #[test]
    fn failed_rename_leaves_customer_unchanged() {
        let mut c = Customer::create("Ada", email()).unwrap();
        assert!(c.rename(" ").is_err());
        assert_eq!(c.name(), "Ada");

        c.rename(" Grace ").unwrap();
        assert_eq!(c.name(), "Grace");
    }

    #[test]
    fn change_email_replaces_value() {
        let mut c = Customer::create("Ada", email()).unwrap();
        c.change_email(Email::create("grace@example.com").unwrap());
        assert_eq!(c.email().value(), "grace@example.com");
    }
}
