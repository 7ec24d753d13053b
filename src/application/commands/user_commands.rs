//! User Commands

use crate::application::validation::{Rule, ValidationErrors, Validator};

const USERNAME_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(100)];
const PASSWORD_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(100)];
const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MaxLength(100)];
const OPTIONAL_NAME_RULES: &[Rule] = &[Rule::MaxLength(100)];
const OPTIONAL_PASSWORD_RULES: &[Rule] = &[Rule::MaxLength(100)];

/// 注册用户命令
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

impl RegisterUser {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .text("username", self.username.as_deref(), USERNAME_RULES)
            .text("password", self.password.as_deref(), PASSWORD_RULES)
            .text("name", self.name.as_deref(), NAME_RULES)
            .finish()
    }
}

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginUser {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .text("username", self.username.as_deref(), USERNAME_RULES)
            .text("password", self.password.as_deref(), PASSWORD_RULES)
            .finish()
    }
}

/// 更新当前用户命令（姓名与密码可分别更新）
#[derive(Debug, Clone)]
pub struct UpdateCurrentUser {
    pub username: String,
    pub name: Option<String>,
    pub password: Option<String>,
}

impl UpdateCurrentUser {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .text("name", self.name.as_deref(), OPTIONAL_NAME_RULES)
            .text("password", self.password.as_deref(), OPTIONAL_PASSWORD_RULES)
            .finish()
    }
}

/// 登出命令
#[derive(Debug, Clone)]
pub struct LogoutUser {
    pub username: String,
}
