//! Beast 用例
//!
//! 查询：`GetBeastByName`、`ListBeasts`；命令：`AddBeast`、`UpdateBeast`。
//! 查找未命中时返回占位 DTO（所有字段为零值），而不是错误。
//!
mod commands;
mod dto;
mod queries;

pub use commands::{AddBeast, AddBeastHandler, UpdateBeast, UpdateBeastHandler};
pub use dto::{BeastDto, BeastListDto};
pub use queries::{GetBeastByName, GetBeastByNameHandler, ListBeasts, ListBeastsHandler};

use crate::{
    error::AppError, in_process_query_bus::InProcessQueryBus,
    inmemory_command_bus::InMemoryCommandBus,
};
use bestiary_domain::persist::SharedBeastRepository;
use std::sync::Arc;

/// 装配好的 Beast 应用服务：两条总线均已注册全部处理器
pub struct BeastServices {
    query_bus: InProcessQueryBus,
    command_bus: InMemoryCommandBus,
}

impl BeastServices {
    pub fn new(repo: SharedBeastRepository) -> Result<Self, AppError> {
        let query_bus = InProcessQueryBus::new();
        query_bus.register::<GetBeastByName, _>(Arc::new(GetBeastByNameHandler::new(
            repo.clone(),
        )))?;
        query_bus.register::<ListBeasts, _>(Arc::new(ListBeastsHandler::new(repo.clone())))?;

        let command_bus = InMemoryCommandBus::new();
        command_bus.register::<AddBeast, _>(Arc::new(AddBeastHandler::new(repo.clone())))?;
        command_bus.register::<UpdateBeast, _>(Arc::new(UpdateBeastHandler::new(repo)))?;

        Ok(Self {
            query_bus,
            command_bus,
        })
    }

    pub fn query_bus(&self) -> &InProcessQueryBus {
        &self.query_bus
    }

    pub fn command_bus(&self) -> &InMemoryCommandBus {
        &self.command_bus
    }
}
