use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::ValueObject;
use crate::error::{DomainError, DomainResult};

/// 金额保留的小数位数
const DECIMAL_PLACES: u32 = 2;

/// 金额：非负、两位小数（四舍五入远离零）、三位字母币种（大写）
///
/// # 示例
///
/// ```
/// use rust_decimal::Decimal;
/// use storefront_domain::value_object::Money;
///
/// let m = Money::create(Decimal::new(10555, 3), "usd").unwrap();
/// assert_eq!(m.amount(), Decimal::new(1056, 2));
/// assert_eq!(m.currency(), "USD");
/// assert_eq!(m.to_string(), "USD 10.56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

// 反序列化入口，经由工厂重新校验
#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: String,
}

impl TryFrom<RawMoney> for Money {
    type Error = DomainError;

    fn try_from(raw: RawMoney) -> Result<Self, Self::Error> {
        Money::create(raw.amount, &raw.currency)
    }
}

impl Money {
    /// 校验并创建金额
    ///
    /// - `amount < 0` 返回 `OutOfRange`
    /// - 币种为空或规范化后不是三位字母返回 `InvalidFormat`
    pub fn create(amount: Decimal, currency: &str) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "amount",
                "Amount cannot be negative.",
            ));
        }

        let currency = normalize_currency(currency)?;
        let amount =
            amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

        Ok(Self::from_parts(amount, currency))
    }

    // 仅供内部在已满足不变量时使用；统一小数位，保证显示为两位
    fn from_parts(mut amount: Decimal, currency: String) -> Self {
        amount.rescale(DECIMAL_PLACES);
        Self { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// 币种是否相同（不区分大小写）
    pub fn has_same_currency(&self, other: &Money) -> bool {
        self.currency.to_lowercase() == other.currency.to_lowercase()
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::out_of_range("amount", "Amount is out of range."))?;
        Ok(Self::from_parts(sum, self.currency.clone()))
    }

    /// 相减；结果为负时返回 `NegativeResult`，余额永不为负
    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let diff = self.amount - other.amount;
        if diff < Decimal::ZERO {
            return Err(DomainError::NegativeResult);
        }
        Ok(Self::from_parts(diff, self.currency.clone()))
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.has_same_currency(other) {
            return Ok(());
        }
        Err(DomainError::CurrencyMismatch {
            left: self.currency.clone(),
            right: other.currency.clone(),
        })
    }
}

fn normalize_currency(currency: &str) -> DomainResult<String> {
    let trimmed = currency.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_format(
            "currency",
            "Currency must be provided.",
        ));
    }

    let normalized = trimmed.to_uppercase();
    if normalized.chars().count() != 3 || !normalized.chars().all(char::is_alphabetic) {
        return Err(DomainError::invalid_format(
            "currency",
            "Currency must be a three-letter code.",
        ));
    }

    Ok(normalized)
}

impl ValueObject for Money {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        let rebuilt = Money::create(self.amount, &self.currency)?;
        if rebuilt.amount != self.amount || rebuilt.currency != self.currency {
            return Err(DomainError::invalid_format(
                "total",
                "Money is not in canonical form.",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}
