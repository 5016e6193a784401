use crate::types::BeastObject;
use async_graphql::{Context, Object, Result};
use bestiary_application::BeastServices;
use bestiary_application::beast::{GetBeastByName, ListBeasts};
use bestiary_application::context::AppContext;
use bestiary_application::query_bus::QueryBus;
use std::sync::Arc;

/// 请求级上下文由宿主通过 `Request::data(AppContext)` 注入，缺省时为空
pub(crate) fn app_context(ctx: &Context<'_>) -> AppContext {
    ctx.data_opt::<AppContext>().cloned().unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    /// Get single beast
    async fn beast(&self, ctx: &Context<'_>, name: Option<String>) -> Result<BeastObject> {
        let services = ctx.data::<Arc<BeastServices>>()?;
        let dto = services
            .query_bus()
            .dispatch(&app_context(ctx), GetBeastByName { name })
            .await?;
        Ok(dto.into())
    }

    /// List of beasts
    async fn beast_list(&self, ctx: &Context<'_>) -> Result<Vec<BeastObject>> {
        let services = ctx.data::<Arc<BeastServices>>()?;
        let list = services
            .query_bus()
            .dispatch(&app_context(ctx), ListBeasts)
            .await?;
        Ok(list.0.into_iter().map(BeastObject::from).collect())
    }
}
