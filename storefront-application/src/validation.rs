//! 请求校验
//!
//! 每个请求类型对应一个纯函数式校验器，返回结构化的通过/失败结果。
//! 同一请求上的多条规则失败会累积为一个结果，不会短路。
//!
use std::str::FromStr;

use storefront_domain::error::DomainResult;
use storefront_domain::value_object::is_valid_email;
use uuid::Uuid;

/// 校验结果：无错误即通过，错误按规则声明顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn failure<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// 追加另一结果的错误（保持顺序）
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }
}

/// 请求校验器
pub trait RequestValidator<R>: Send + Sync {
    fn validate(&self, request: &R) -> ValidationResult;
}

/// 以闭包充当校验器
pub struct FnValidator<F>(F);

pub fn validator_fn<R, F>(f: F) -> FnValidator<F>
where
    F: Fn(&R) -> ValidationResult + Send + Sync,
{
    FnValidator(f)
}

impl<R, F> RequestValidator<R> for FnValidator<F>
where
    F: Fn(&R) -> ValidationResult + Send + Sync,
{
    fn validate(&self, request: &R) -> ValidationResult {
        (self.0)(request)
    }
}

/// 声明式字段规则累加器
///
/// ```
/// use storefront_application::validation::Rules;
///
/// let result = Rules::new()
///     .non_blank("  ", "Name must be provided.")
///     .greater_than(0, 0, "Size must be greater than zero.")
///     .finish();
/// assert_eq!(result.errors().len(), 2);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct Rules {
    errors: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(mut self, ok: bool, message: &str) -> Self {
        if !ok {
            self.errors.push(message.to_owned());
        }
        self
    }

    /// 标识非空（非 nil UUID）
    pub fn non_nil(self, id: &impl AsRef<Uuid>, message: &str) -> Self {
        self.check(!id.as_ref().is_nil(), message)
    }

    pub fn non_blank(self, value: &str, message: &str) -> Self {
        self.check(!value.trim().is_empty(), message)
    }

    /// 去除首尾空白后的字符数上限
    pub fn max_chars(self, value: &str, max: usize, message: &str) -> Self {
        self.check(value.trim().chars().count() <= max, message)
    }

    pub fn at_least<T: PartialOrd>(self, value: T, min: T, message: &str) -> Self {
        self.check(value >= min, message)
    }

    pub fn greater_than<T: PartialOrd>(self, value: T, bound: T, message: &str) -> Self {
        self.check(value > bound, message)
    }

    /// 枚举成员：值能被解析为 `T`
    pub fn one_of<T: FromStr>(self, value: &str, message: &str) -> Self {
        self.check(value.parse::<T>().is_ok(), message)
    }

    /// 邮箱格式；空白交由 `non_blank` 报告，此处跳过
    pub fn email(self, value: &str, message: &str) -> Self {
        let trimmed = value.trim();
        self.check(trimmed.is_empty() || is_valid_email(trimmed), message)
    }

    /// 值对象工厂的结果；失败时记录工厂给出的消息
    pub fn value_object<T>(mut self, result: DomainResult<T>) -> Self {
        if let Err(err) = result {
            self.errors.push(err.to_string());
        }
        self
    }

    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            errors: self.errors,
        }
    }
}
