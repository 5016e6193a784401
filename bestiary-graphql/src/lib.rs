//! Bestiary GraphQL 接口层
//!
//! 将应用层的 Beast 用例暴露为 GraphQL schema：
//! - [`BeastObject`]：`Beast` 类型描述（字段名与类型）
//! - [`QueryRoot`]：`beast(name)`、`beastList`
//! - [`MutationRoot`]：`addBeast`、`updateBeast`
//! - [`build_schema`] / [`bootstrap`]：装配 schema，后者负责播种存储
//!
//! HTTP 服务与调试界面不在本 crate 范围内，宿主拿到 [`BestiarySchema`] 后自行接入。

mod config;
mod mutation;
mod query;
mod schema;
mod types;

pub use config::{BestiaryConfig, ConfigError, DEFAULT_SEED_PATH};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{BestiarySchema, bootstrap, build_schema};
pub use types::BeastObject;
