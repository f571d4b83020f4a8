//! 应用配置，从环境变量读取
//!
//! | 变量 | 字段 | 默认 |
//! | --- | --- | --- |
//! | `STOREFRONT_LOG` | `log_filter` | `info` |
//! | `STOREFRONT_LOG_JSON` | `log_json` | `false` |
//! | `STOREFRONT_BEHAVIOR_ORDER` | `behavior_order` | `logging-outermost` |
//!
//! 非法取值报错，不静默回退到默认值。
//!
use serde::Deserialize;

use crate::pipeline::BehaviorOrder;

pub const LOG_FILTER_VAR: &str = "STOREFRONT_LOG";
pub const LOG_JSON_VAR: &str = "STOREFRONT_LOG_JSON";
pub const BEHAVIOR_ORDER_VAR: &str = "STOREFRONT_BEHAVIOR_ORDER";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected true or false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` 指令
    pub log_filter: String,
    /// 输出 JSON 格式日志
    pub log_json: bool,
    pub behavior_order: BehaviorOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_json: false,
            behavior_order: BehaviorOrder::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意查找函数读取配置（便于测试，不修改进程环境）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(filter) = read(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }
        if let Some(value) = read(LOG_JSON_VAR) {
            config.log_json = parse_bool(LOG_JSON_VAR, &value)?;
        }
        if let Some(value) = read(BEHAVIOR_ORDER_VAR) {
            config.behavior_order =
                value
                    .parse::<BehaviorOrder>()
                    .map_err(|err| ConfigError::InvalidValue {
                        var: BEHAVIOR_ORDER_VAR,
                        reason: err.to_string(),
                    })?;
        }
        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
