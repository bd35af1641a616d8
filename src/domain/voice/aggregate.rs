//! Voice Context - Aggregate Root

use serde::{Deserialize, Deserializer, Serialize};

use super::{Facet, VoiceId};

/// 上游对缺失值有时省略字段，有时给 null，两者都按默认值处理
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 音色标签
///
/// 上游缺失或为 null 的标签按空字符串处理
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceLabels {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub use_case: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub accent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
}

/// Voice 聚合根
///
/// 不变量:
/// - 拉取后不可变，目录整体替换而不是原地修改
/// - 字段名与上游目录 API 保持一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub voice_id: VoiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: VoiceLabels,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview_url: String,
}

impl Voice {
    /// 读取某个维度的取值
    pub fn facet(&self, facet: Facet) -> &str {
        match facet {
            Facet::Category => &self.category,
            Facet::Gender => &self.labels.gender,
            Facet::Accent => &self.labels.accent,
            Facet::Age => &self.labels.age,
            Facet::UseCase => &self.labels.use_case,
        }
    }

    pub fn id(&self) -> &VoiceId {
        &self.voice_id
    }
}
