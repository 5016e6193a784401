//! 持久化（persist）
//!
//! 定义 Beast 仓储端口及其进程内实现：
//! - 仓储协议（`BeastRepository`）：追加、按名/按标识查找、按字段更新、标识分配；
//! - 内存实现（`InMemoryBeastStore`）：单一读写锁保护序列与计数器；
//! - 种子加载（`load_seed`/`parse_seed`）：启动时从 JSON 数组一次性读取。
//!
//! 存储仅存活于进程生命周期内，不做持久化。
//!
mod beast_repository;
mod inmemory_store;
mod seed;

pub use beast_repository::{BeastRepository, SharedBeastRepository};
pub use inmemory_store::{DEFAULT_INITIAL_MAX_ID, InMemoryBeastStore};
pub use seed::{SeedReport, load_seed, parse_seed};
