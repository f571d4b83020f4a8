//! 列表请求共用的分页规则
//!
use crate::error::AppError;
use crate::validation::{Rules, ValidationResult};

pub const PAGE_MESSAGE: &str = "Page must be zero or greater.";
pub const SIZE_MESSAGE: &str = "Size must be greater than zero.";

/// `page >= 0`，`size > 0`
pub fn paging_rules(page: i32, size: i32) -> ValidationResult {
    Rules::new()
        .at_least(page, 0, PAGE_MESSAGE)
        .greater_than(size, 0, SIZE_MESSAGE)
        .finish()
}

/// 转换为仓储使用的无符号分页参数
pub fn paging_bounds(page: i32, size: i32) -> Result<(u32, u32), AppError> {
    match (u32::try_from(page), u32::try_from(size)) {
        (Ok(page), Ok(size)) if size > 0 => Ok((page, size)),
        _ => Err(AppError::ValidationFailed(
            paging_rules(page, size).into_errors(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_page_and_empty_size() {
        assert_eq!(
            paging_rules(-1, 0).errors(),
            [PAGE_MESSAGE, SIZE_MESSAGE]
        );
        assert!(paging_rules(0, 1).is_valid());
    }

    #[test]
    fn bounds_mirror_rules() {
        assert_eq!(paging_bounds(2, 25).unwrap(), (2, 25));
        let err = paging_bounds(0, -5).unwrap_err();
        assert_eq!(err.validation_errors().unwrap(), [SIZE_MESSAGE]);
    }
}
