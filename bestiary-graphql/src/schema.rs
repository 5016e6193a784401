use crate::config::BestiaryConfig;
use crate::mutation::MutationRoot;
use crate::query::QueryRoot;
use async_graphql::{EmptySubscription, Schema};
use bestiary_application::BeastServices;
use bestiary_application::error::AppError;
use bestiary_domain::persist::{InMemoryBeastStore, SeedReport, SharedBeastRepository};
use std::sync::Arc;

pub type BestiarySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// 以已装配的应用服务构建 schema
pub fn build_schema(services: Arc<BeastServices>) -> BestiarySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

/// 播种存储、注册处理器并构建 schema
///
/// 播种失败不会中断启动：存储以空序列继续，结果通过 [`SeedReport`] 返回。
pub fn bootstrap(config: &BestiaryConfig) -> Result<(BestiarySchema, SeedReport), AppError> {
    let (store, report) = InMemoryBeastStore::seeded(&config.seed_path, config.initial_max_id);
    let repo: SharedBeastRepository = Arc::new(store);
    let services = Arc::new(BeastServices::new(repo)?);
    tracing::debug!(
        queries = ?services.query_bus().registered_queries(),
        commands = ?services.command_bus().registered_commands(),
        "registered beast handlers"
    );

    Ok((build_schema(services), report))
}
