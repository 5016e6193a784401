//! Beast 实体
//!
//! 系统中唯一被管理的实体，代表一条神秘生物（cryptid）记录。
//! - `NewBeast`：创建时由调用方提供的字段（不含标识）；
//! - `BeastPatch`：更新时的字段集，仅覆盖显式出现的字段；
//! - `Beast::default()`：未命中时返回的占位记录（所有字段为零值）。
//!
use bon::Builder;
use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::Entity;
use crate::value_object::BeastId;

/// Beast 记录，JSON 形状与种子文件一致（camelCase）
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beast {
    #[serde(default)]
    #[builder(into)]
    id: BeastId,
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(into)]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(into)]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default)]
    other_names: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[builder(default, into)]
    image_url: String,
}

// 种子数据中的 null 与缺省等价
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Beast {
    /// 以已分配的标识和创建字段构造记录
    pub fn create(id: BeastId, new: NewBeast) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            other_names: new.other_names,
            image_url: new.image_url,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn other_names(&self) -> &[String] {
        &self.other_names
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// 逐字段应用更新：仅覆盖 `patch` 中出现的字段，`other_names` 为整体替换
    pub fn apply(&mut self, patch: BeastPatch) {
        let BeastPatch {
            name,
            description,
            other_names,
            image_url,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(other_names) = other_names {
            self.other_names = other_names;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
    }
}

impl Entity for Beast {
    type Id = BeastId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 创建 Beast 所需字段（标识由存储分配，调用方不可指定）
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBeast {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub description: String,
    #[builder(default)]
    pub other_names: Vec<String>,
    #[builder(default, into)]
    pub image_url: String,
}

/// 更新字段集：`None` 表示请求中未出现该字段，保持原值
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
pub struct BeastPatch {
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    pub other_names: Option<Vec<String>>,
    #[builder(into)]
    pub image_url: Option<String>,
}

impl BeastPatch {
    /// 是否不包含任何字段
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.other_names.is_none()
            && self.image_url.is_none()
    }
}
