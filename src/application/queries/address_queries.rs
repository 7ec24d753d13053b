//! Address Queries

use crate::application::validation::{ValidationErrors, Validator, ID_RULES};

/// 获取地址详情
#[derive(Debug, Clone)]
pub struct GetAddress {
    pub contact_id: i64,
    pub address_id: i64,
}

impl GetAddress {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .integer("contact_id", Some(self.contact_id), ID_RULES)
            .integer("address_id", Some(self.address_id), ID_RULES)
            .finish()
    }
}

/// 列出联系人的全部地址
#[derive(Debug, Clone)]
pub struct ListAddresses {
    pub contact_id: i64,
}

impl ListAddresses {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .integer("contact_id", Some(self.contact_id), ID_RULES)
            .finish()
    }
}
