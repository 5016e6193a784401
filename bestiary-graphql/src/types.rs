use async_graphql::SimpleObject;
use bestiary_application::beast::BeastDto;

/// GraphQL 中的 `Beast` 类型，字段名按 camelCase 暴露
#[derive(SimpleObject, Debug, Clone, Default, PartialEq, Eq)]
#[graphql(name = "Beast")]
pub struct BeastObject {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub other_names: Vec<String>,
    pub image_url: String,
}

impl From<BeastDto> for BeastObject {
    fn from(dto: BeastDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            other_names: dto.other_names,
            image_url: dto.image_url,
        }
    }
}
