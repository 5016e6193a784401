//! Bestiary 领域层（bestiary-domain）
//!
//! 提供围绕唯一实体 `Beast` 的领域构件：
//! - 实体（`entity`、`beast`）与值对象（`value_object`）建模
//! - 仓储端口与内存实现（`persist`），支持从 JSON 文件一次性播种
//! - 领域层统一错误（`error`）
//!
//! 本 crate 不依赖任何接口层（GraphQL/HTTP），仅定义领域模型与存储协议，
//! 由上层通过 `BeastRepository` 注入具体实现。
//!
//! 典型用法：
//! 1. 通过 `InMemoryBeastStore::seeded` 从种子文件构建存储；
//! 2. 以 `Arc<dyn BeastRepository>` 的形式交给应用层；
//! 3. 应用层的命令/查询处理器只通过仓储端口读写 `Beast`。
//!
pub mod beast;
pub mod entity;
pub mod error;
pub mod persist;
pub mod value_object;

pub use beast::{Beast, BeastPatch, NewBeast};
pub use value_object::BeastId;
