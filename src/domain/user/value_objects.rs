//! User Context - Value Objects

use uuid::Uuid;

/// 会话 token
///
/// 不透明字符串，直接存储在用户记录上；登出时清空
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// 生成新的随机 token
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 从 `Authorization` 头解析 token
    ///
    /// 同时接受裸 token 与 `Bearer <token>` 形式，空白值视为缺失
    pub fn from_header(value: &str) -> Option<Self> {
        let value = value.trim();
        let token = match value.strip_prefix("Bearer") {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
            _ => value,
        };

        if token.is_empty() {
            return None;
        }
        Some(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
