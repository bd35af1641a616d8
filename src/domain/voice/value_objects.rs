//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::VoiceError;

/// 音色唯一标识（上游 API 的不透明字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VoiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VoiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 可过滤的分类维度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Category,
    Gender,
    Accent,
    Age,
    UseCase,
}

impl Facet {
    /// 所有维度，按界面展示顺序
    pub const ALL: [Facet; 5] = [
        Facet::Category,
        Facet::Gender,
        Facet::Accent,
        Facet::Age,
        Facet::UseCase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Gender => "gender",
            Self::Accent => "accent",
            Self::Age => "age",
            Self::UseCase => "use_case",
        }
    }

    /// 下拉框标签
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Gender => "Gender",
            Self::Accent => "Accent",
            Self::Age => "Age",
            Self::UseCase => "Use Case",
        }
    }
}

impl FromStr for Facet {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(Self::Category),
            "gender" => Ok(Self::Gender),
            "accent" => Ok(Self::Accent),
            "age" => Ok(Self::Age),
            "use_case" => Ok(Self::UseCase),
            other => Err(VoiceError::UnknownFacet(other.to_string())),
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
