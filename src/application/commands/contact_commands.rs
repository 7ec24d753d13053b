//! Contact Commands

use crate::application::ports::ContactFields;
use crate::application::validation::{Rule, ValidationErrors, Validator, ID_RULES};

const FIRST_NAME_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(100)];
const LAST_NAME_RULES: &[Rule] = &[Rule::MaxLength(100)];
const EMAIL_RULES: &[Rule] = &[Rule::Email, Rule::MaxLength(100)];
const PHONE_RULES: &[Rule] = &[Rule::MaxLength(20)];

/// 联系人请求字段（创建与更新共用）
#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactInput {
    fn check(&self, validator: &mut Validator) {
        validator
            .text("first_name", self.first_name.as_deref(), FIRST_NAME_RULES)
            .text("last_name", self.last_name.as_deref(), LAST_NAME_RULES)
            .text("email", self.email.as_deref(), EMAIL_RULES)
            .text("phone", self.phone.as_deref(), PHONE_RULES);
    }

    /// 校验通过后转换为持久化字段
    pub(crate) fn into_fields(self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// 创建联系人命令
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub input: ContactInput,
}

impl CreateContact {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        self.input.check(&mut validator);
        validator.finish()
    }
}

/// 更新联系人命令（必填字段需全部重新提供）
#[derive(Debug, Clone)]
pub struct UpdateContact {
    pub contact_id: i64,
    pub input: ContactInput,
}

impl UpdateContact {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator.integer("contact_id", Some(self.contact_id), ID_RULES);
        self.input.check(&mut validator);
        validator.finish()
    }
}

/// 删除联系人命令
#[derive(Debug, Clone)]
pub struct RemoveContact {
    pub contact_id: i64,
}

impl RemoveContact {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .integer("contact_id", Some(self.contact_id), ID_RULES)
            .finish()
    }
}
