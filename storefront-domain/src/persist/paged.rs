use serde::{Deserialize, Serialize};

/// 分页结果
///
/// - `page` 从 0 开始
/// - `total` 为全部页的条目总数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Paged<T> {
    /// 从完整集合切出一页（`skip(page * size).take(size)`）
    pub fn slice<'a, I>(all: I, page: u32, size: u32) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: Clone + 'a,
    {
        let all: Vec<&T> = all.into_iter().collect();
        let skip = (page as usize).saturating_mul(size as usize);
        let items = all
            .iter()
            .skip(skip)
            .take(size as usize)
            .map(|item| (*item).clone())
            .collect();
        let total = all.len() as u64;
        Self {
            items,
            page,
            size,
            total,
        }
    }

    /// 逐项转换，分页信息保持不变
    pub fn map<U, F>(self, f: F) -> Paged<U>
    where
        F: FnMut(T) -> U,
    {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}
