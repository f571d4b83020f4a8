use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use super::ValueObject;
use crate::error::{DomainError, DomainResult};

/// 经过校验的邮箱地址（去除首尾空白，保留原始大小写）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// 校验并创建邮箱
    ///
    /// - 空白返回 `Missing`
    /// - 不是单个合法邮箱地址返回 `InvalidFormat`
    pub fn create(value: &str) -> DomainResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::missing("email", "Email must be provided."));
        }

        if !is_valid_email(trimmed) {
            return Err(DomainError::invalid_format(
                "email",
                "Email is not in a valid format.",
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 单个邮箱地址语法：local-part@domain，域名至少包含一个点
///
/// 不做 trim，调用方决定是否先去除空白。
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    value.validate_email()
}

impl ValueObject for Email {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.trim() != self.0 || !is_valid_email(&self.0) {
            return Err(DomainError::invalid_format(
                "email",
                "Email is not in a valid format.",
            ));
        }
        Ok(())
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::create(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
