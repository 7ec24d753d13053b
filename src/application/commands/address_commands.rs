//! Address Commands

use crate::application::ports::AddressFields;
use crate::application::validation::{Rule, ValidationErrors, Validator, ID_RULES};

const STREET_RULES: &[Rule] = &[Rule::MaxLength(255)];
const CITY_RULES: &[Rule] = &[Rule::MaxLength(100)];
const PROVINCE_RULES: &[Rule] = &[Rule::MaxLength(100)];
const COUNTRY_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(100)];
const POSTAL_CODE_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(10)];

/// 地址请求字段（创建与更新共用）
#[derive(Debug, Clone, Default)]
pub struct AddressInput {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl AddressInput {
    fn check(&self, validator: &mut Validator) {
        validator
            .text("street", self.street.as_deref(), STREET_RULES)
            .text("city", self.city.as_deref(), CITY_RULES)
            .text("province", self.province.as_deref(), PROVINCE_RULES)
            .text("country", self.country.as_deref(), COUNTRY_RULES)
            .text("postal_code", self.postal_code.as_deref(), POSTAL_CODE_RULES);
    }

    pub(crate) fn into_fields(self) -> AddressFields {
        AddressFields {
            street: self.street,
            city: self.city,
            province: self.province,
            country: self.country.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
        }
    }
}

/// 创建地址命令
#[derive(Debug, Clone)]
pub struct CreateAddress {
    pub contact_id: i64,
    pub input: AddressInput,
}

impl CreateAddress {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator.integer("contact_id", Some(self.contact_id), ID_RULES);
        self.input.check(&mut validator);
        validator.finish()
    }
}

/// 更新地址命令
#[derive(Debug, Clone)]
pub struct UpdateAddress {
    pub contact_id: i64,
    pub address_id: i64,
    pub input: AddressInput,
}

impl UpdateAddress {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator
            .integer("contact_id", Some(self.contact_id), ID_RULES)
            .integer("address_id", Some(self.address_id), ID_RULES);
        self.input.check(&mut validator);
        validator.finish()
    }
}

/// 删除地址命令
#[derive(Debug, Clone)]
pub struct RemoveAddress {
    pub contact_id: i64,
    pub address_id: i64,
}

impl RemoveAddress {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .integer("contact_id", Some(self.contact_id), ID_RULES)
            .integer("address_id", Some(self.address_id), ID_RULES)
            .finish()
    }
}
