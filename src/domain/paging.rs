//! Paging - 分页窗口计算
//!
//! 搜索结果按 page/size 切片，page 从 1 开始

use serde::Serialize;

/// 默认页码
pub const DEFAULT_PAGE: u32 = 1;
/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// 每页最大条数
pub const MAX_PAGE_SIZE: u32 = 100;

/// 分页请求
///
/// 不变量:
/// - page >= 1
/// - 1 <= size <= MAX_PAGE_SIZE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, &'static str> {
        if page < 1 {
            return Err("page must be at least 1");
        }
        if size < 1 {
            return Err("size must be at least 1");
        }
        if size > MAX_PAGE_SIZE {
            return Err("size must be at most 100");
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// 跳过的记录数 `(page - 1) * size`
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.size)
    }

    /// 根据总数生成分页元数据
    pub fn paging(&self, total_item: u64) -> Paging {
        Paging {
            page: self.page,
            total_item,
            total_page: total_item.div_ceil(u64::from(self.size)),
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// 分页元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    pub page: u32,
    pub total_item: u64,
    pub total_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.size(), 10);
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn test_total_page_rounds_up() {
        let request = PageRequest::new(1, 10).unwrap();
        assert_eq!(request.paging(15).total_page, 2);
        assert_eq!(request.paging(20).total_page, 2);
        assert_eq!(request.paging(21).total_page, 3);
        assert_eq!(request.paging(0).total_page, 0);
    }

    #[test]
    fn test_offset_for_later_pages() {
        let request = PageRequest::new(3, 25).unwrap();
        assert_eq!(request.offset(), 50);

        let paging = request.paging(60);
        assert_eq!(paging.page, 3);
        assert_eq!(paging.total_item, 60);
        assert_eq!(paging.total_page, 3);
    }

    #[test]
    fn test_out_of_range_page_keeps_metadata() {
        let request = PageRequest::new(5, 10).unwrap();
        let paging = request.paging(15);
        assert_eq!(paging.page, 5);
        assert_eq!(paging.total_page, 2);
        assert!(request.offset() >= 15);
    }

    #[test]
    fn test_rejects_bounds() {
        assert!(PageRequest::new(0, 10).is_err());
        assert!(PageRequest::new(1, 0).is_err());
        assert!(PageRequest::new(1, 101).is_err());
        assert!(PageRequest::new(1, 100).is_ok());
    }
}
