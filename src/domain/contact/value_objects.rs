//! Contact Context - Value Objects

/// 邮箱格式检查
///
/// 要求:
/// - 恰好一个 `@`
/// - 本地部分与域名均非空
/// - 域名至少包含一个 `.`，且不以 `.` 开头或结尾
/// - 不包含空白字符
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

/// 联系人搜索条件
///
/// 每个字段都是不区分大小写的子串匹配；为 None 的条件不参与查询
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// 匹配 first_name 或 last_name
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ContactFilter {
    /// 空字符串视为未提供
    pub fn new(name: Option<String>, email: Option<String>, phone: Option<String>) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            name: non_empty(name),
            email: non_empty(email),
            phone: non_empty(phone),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
