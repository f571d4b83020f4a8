use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 订单状态，只能单步前进：New → Paid → Shipped
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum OrderStatus {
    #[default]
    New,
    Paid,
    Shipped,
}

impl OrderStatus {
    /// 全部状态（按生命周期顺序）
    pub const ALL: [OrderStatus; 3] = [OrderStatus::New, OrderStatus::Paid, OrderStatus::Shipped];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Paid => "Paid",
            Self::Shipped => "Shipped",
        }
    }

    /// 迁移规则：
    /// - 重复确认当前状态总是合法（幂等）
    /// - 只能前进到紧邻的下一状态，不可跳步、不可回退
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        matches!(
            (*self, target),
            (Self::New, Self::New)
                | (Self::New, Self::Paid)
                | (Self::Paid, Self::Paid)
                | (Self::Paid, Self::Shipped)
                | (Self::Shipped, Self::Shipped)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的状态名
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Order status '{0}' is not valid.")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    /// 不区分大小写，忽略首尾空白
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownOrderStatus(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderStatus::*;

    #[test]
    fn transition_table() {
        let legal = [
            (New, New),
            (New, Paid),
            (Paid, Paid),
            (Paid, Shipped),
            (Shipped, Shipped),
        ];
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert_eq!(
                    from.can_transition_to(to),
                    legal.contains(&(from, to)),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn legal_transitions_never_regress_or_skip() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                if from.can_transition_to(to) {
                    assert!(to >= from);
                    assert!((to as u8) - (from as u8) <= 1);
                }
            }
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("paid".parse::<OrderStatus>().unwrap(), Paid);
        assert_eq!(" SHIPPED ".parse::<OrderStatus>().unwrap(), Shipped);
        let err = "Cancelled".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Order status 'Cancelled' is not valid.");
    }

    #[test]
    fn default_is_new() {
        assert_eq!(OrderStatus::default(), New);
    }
}
