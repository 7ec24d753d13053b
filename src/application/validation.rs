//! Validation Rules - 请求校验
//!
//! 每个命令/查询以常量规则表声明字段约束，由 [`Validator`] 统一执行。
//! 所有字段的所有规则都会被检查，违规项一次性返回。

use serde::Serialize;
use std::fmt;

use crate::domain::is_valid_email;

/// 字段规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 必填（文本字段还要求非空串）
    Required,
    /// 最大字符数
    MaxLength(usize),
    /// 邮箱格式
    Email,
    /// 正整数 ID
    PositiveId,
    /// 数值下界（含）
    Min(i64),
    /// 数值上界（含）
    Max(i64),
}

/// 路径 ID 的通用规则
pub const ID_RULES: &[Rule] = &[Rule::Required, Rule::PositiveId];

/// 单个字段的违规信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// 校验失败，包含全部违规项（至少一项）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self(vec![FieldViolation::new(field, message)])
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }

    /// 是否存在指定字段的违规
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|v| v.message.as_str()).collect();
        write!(f, "{}", messages.join(". "))
    }
}

impl std::error::Error for ValidationErrors {}

/// 待校验的字段值
#[derive(Debug, Clone, Copy)]
enum FieldValue<'a> {
    Text(Option<&'a str>),
    Integer(Option<i64>),
}

/// 规则执行器
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验文本字段
    pub fn text(&mut self, field: &'static str, value: Option<&str>, rules: &[Rule]) -> &mut Self {
        self.check(field, FieldValue::Text(value), rules)
    }

    /// 校验整数字段
    pub fn integer(&mut self, field: &'static str, value: Option<i64>, rules: &[Rule]) -> &mut Self {
        self.check(field, FieldValue::Integer(value), rules)
    }

    /// 结束校验
    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        let errors = std::mem::take(&mut self.errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check(&mut self, field: &'static str, value: FieldValue<'_>, rules: &[Rule]) -> &mut Self {
        let missing = match value {
            FieldValue::Text(v) => v.map_or(true, str::is_empty),
            FieldValue::Integer(v) => v.is_none(),
        };

        if missing {
            // 可选字段缺失时跳过其余规则；显式传入空串仍视为违规
            if rules.contains(&Rule::Required) {
                self.errors
                    .push(FieldViolation::new(field, format!("{field} is required")));
            } else if let FieldValue::Text(Some(_)) = value {
                self.errors.push(FieldViolation::new(
                    field,
                    format!("{field} is not allowed to be empty"),
                ));
            }
            return self;
        }

        for rule in rules {
            if let Some(message) = apply_rule(field, *rule, value) {
                self.errors.push(FieldViolation::new(field, message));
            }
        }
        self
    }
}

/// 对单个已存在的值执行一条规则，返回违规信息
fn apply_rule(field: &str, rule: Rule, value: FieldValue<'_>) -> Option<String> {
    match (rule, value) {
        (Rule::Required, _) => None,
        (Rule::MaxLength(max), FieldValue::Text(Some(s))) => (s.chars().count() > max)
            .then(|| format!("{field} length must be less than or equal to {max} characters long")),
        (Rule::Email, FieldValue::Text(Some(s))) => {
            (!is_valid_email(s)).then(|| format!("{field} must be a valid email"))
        }
        (Rule::PositiveId, FieldValue::Integer(Some(n))) => {
            (n <= 0).then(|| format!("{field} must be a positive number"))
        }
        (Rule::Min(min), FieldValue::Integer(Some(n))) => {
            (n < min).then(|| format!("{field} must be greater than or equal to {min}"))
        }
        (Rule::Max(max), FieldValue::Integer(Some(n))) => {
            (n > max).then(|| format!("{field} must be less than or equal to {max}"))
        }
        _ => None,
    }
}

/// 解析路径或查询串中的整数；None 表示未提供
pub fn parse_integer(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, ValidationErrors> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ValidationErrors::single(field, format!("{field} must be a number"))),
    }
}

/// 解析路径 ID；路径段总是存在，空值按必填处理
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64, ValidationErrors> {
    parse_integer(field, Some(raw))?
        .ok_or_else(|| ValidationErrors::single(field, format!("{field} is required")))
}
