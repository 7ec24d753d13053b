//! Contact Queries

use crate::application::validation::{Rule, ValidationErrors, Validator, ID_RULES};
use crate::domain::{ContactFilter, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

const PAGE_RULES: &[Rule] = &[Rule::Min(1), Rule::Max(u32::MAX as i64)];
const SIZE_RULES: &[Rule] = &[Rule::Min(1), Rule::Max(MAX_PAGE_SIZE as i64)];

/// 获取联系人详情
#[derive(Debug, Clone)]
pub struct GetContact {
    pub contact_id: i64,
}

impl GetContact {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .integer("contact_id", Some(self.contact_id), ID_RULES)
            .finish()
    }
}

/// 分页搜索联系人
#[derive(Debug, Clone, Default)]
pub struct SearchContacts {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SearchContacts {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .integer("page", self.page, PAGE_RULES)
            .integer("size", self.size, SIZE_RULES)
            .finish()
    }

    /// 校验后拆分为过滤条件与分页请求
    pub(crate) fn into_parts(self) -> Result<(ContactFilter, PageRequest), ValidationErrors> {
        self.validate()?;

        let page = self.page.map_or(DEFAULT_PAGE, |p| p as u32);
        let size = self.size.map_or(DEFAULT_PAGE_SIZE, |s| s as u32);
        let request = PageRequest::new(page, size)
            .map_err(|message| ValidationErrors::single("page", message))?;

        Ok((ContactFilter::new(self.name, self.email, self.phone), request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let (filter, page) = SearchContacts::default().into_parts().unwrap();
        assert!(filter.is_empty());
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn test_rejects_out_of_range_paging() {
        let query = SearchContacts {
            page: Some(0),
            size: Some(101),
            ..Default::default()
        };
        let errors = query.validate().unwrap_err();
        assert!(errors.has_field("page"));
        assert!(errors.has_field("size"));
    }

    #[test]
    fn test_custom_paging() {
        let query = SearchContacts {
            page: Some(2),
            size: Some(5),
            name: Some("test 1".into()),
            ..Default::default()
        };
        let (filter, page) = query.into_parts().unwrap();
        assert_eq!(filter.name.as_deref(), Some("test 1"));
        assert_eq!(page.offset(), 5);
    }
}
