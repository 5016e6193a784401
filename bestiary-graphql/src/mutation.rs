use crate::query::app_context;
use crate::types::BeastObject;
use async_graphql::{Context, Object, Result};
use bestiary_application::BeastServices;
use bestiary_application::beast::{AddBeast, UpdateBeast};
use bestiary_application::command_bus::CommandBus;
use bestiary_domain::BeastPatch;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct MutationRoot;

// 列表参数允许 null 元素，存储前剔除
fn compact(names: Vec<Option<String>>) -> Vec<String> {
    names.into_iter().flatten().collect()
}

// 可选参数缺省或显式为 null 时均视为未提供，对应字段保持不变
#[Object(name = "RootMutation")]
impl MutationRoot {
    /// add a new beast
    async fn add_beast(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        other_names: Option<Vec<Option<String>>>,
        image_url: Option<String>,
    ) -> Result<BeastObject> {
        let services = ctx.data::<Arc<BeastServices>>()?;
        let cmd = AddBeast {
            name,
            description,
            other_names: other_names.map(compact),
            image_url,
        };
        let dto = services
            .command_bus()
            .dispatch(&app_context(ctx), cmd)
            .await?;
        Ok(dto.into())
    }

    /// Update existing beast
    async fn update_beast(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: Option<String>,
        description: Option<String>,
        other_names: Option<Vec<Option<String>>>,
        image_url: Option<String>,
    ) -> Result<BeastObject> {
        let services = ctx.data::<Arc<BeastServices>>()?;
        let cmd = UpdateBeast {
            id,
            patch: BeastPatch {
                name,
                description,
                other_names: other_names.map(compact),
                image_url,
            },
        };
        let dto = services
            .command_bus()
            .dispatch(&app_context(ctx), cmd)
            .await?;
        Ok(dto.into())
    }
}
