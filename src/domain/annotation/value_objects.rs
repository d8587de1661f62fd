//! Annotation Context - Value Objects

use serde::{Deserialize, Serialize};

use super::AnnotationError;

/// 加粗强度
///
/// 不变量: 取值只能是 1、2、3，越界值在构造时直接拒绝（不做截断）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Strength(u8);

impl Strength {
    pub const LIGHT: Strength = Strength(1);
    pub const MEDIUM: Strength = Strength(2);
    pub const STRONG: Strength = Strength(3);

    pub fn new(value: i64) -> Result<Self, AnnotationError> {
        match value {
            1..=3 => Ok(Self(value as u8)),
            other => Err(AnnotationError::InvalidStrength(other)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<i64> for Strength {
    type Error = AnnotationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength.0
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 段落处理模式（按段落二选一，不按词混用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptMode {
    /// 拉丁文模式：按空格切词
    Latin,
    /// 中日韩模式：按词边界（或逐字）切分
    Cjk,
}

impl ScriptMode {
    /// 片段之间的分隔符
    pub fn separator(self) -> &'static str {
        match self {
            ScriptMode::Latin => " ",
            ScriptMode::Cjk => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScriptMode::Latin => "latin",
            ScriptMode::Cjk => "cjk",
        }
    }
}
