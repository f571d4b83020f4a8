//! 数据传输对象（DTO）
//!
//! 应用层的输入/输出载体，与领域模型解耦，避免直接暴露领域对象。
//!
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storefront_domain::value_object::Money;

use crate::error::AppError;

/// 金额载荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyDto {
    pub amount: Decimal,
    /// 三位字母币种代码
    pub currency: String,
}

impl MoneyDto {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// 转换为领域值对象；失败以校验错误返回，不做任何修正
    pub fn to_domain(&self) -> Result<Money, AppError> {
        Money::create(self.amount, &self.currency).map_err(AppError::invalid_input)
    }
}

impl From<&Money> for MoneyDto {
    fn from(money: &Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency().to_owned(),
        }
    }
}
