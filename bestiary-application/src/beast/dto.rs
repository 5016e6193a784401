use crate::dto::Dto;
use bestiary_domain::Beast;
use bestiary_domain::entity::Entity;
use serde::Serialize;

/// Beast 的输出视图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeastDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub other_names: Vec<String>,
    pub image_url: String,
}

impl Dto for BeastDto {}

impl BeastDto {
    /// 未命中时返回的占位记录
    pub fn placeholder() -> Self {
        Self::default()
    }
}

impl From<Beast> for BeastDto {
    fn from(beast: Beast) -> Self {
        Self {
            id: beast.id().value(),
            name: beast.name().to_string(),
            description: beast.description().to_string(),
            other_names: beast.other_names().to_vec(),
            image_url: beast.image_url().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BeastListDto(pub Vec<BeastDto>);

impl Dto for BeastListDto {}

impl From<Vec<Beast>> for BeastListDto {
    fn from(beasts: Vec<Beast>) -> Self {
        Self(beasts.into_iter().map(BeastDto::from).collect())
    }
}
