use super::dto::{BeastDto, BeastListDto};
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;
use bestiary_domain::persist::{BeastRepository, SharedBeastRepository};

/// 按名称查找单个 Beast；`name` 缺省或未命中时返回占位记录
#[derive(Debug, Clone, Default)]
pub struct GetBeastByName {
    pub name: Option<String>,
}

impl Query for GetBeastByName {
    const NAME: &'static str = "GetBeastByName";
    type Dto = BeastDto;
}

pub struct GetBeastByNameHandler {
    repo: SharedBeastRepository,
}

impl GetBeastByNameHandler {
    pub fn new(repo: SharedBeastRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl QueryHandler<GetBeastByName> for GetBeastByNameHandler {
    async fn handle(&self, ctx: &AppContext, q: GetBeastByName) -> Result<BeastDto, AppError> {
        let Some(name) = q.name else {
            return Ok(BeastDto::placeholder());
        };

        match self.repo.find_by_name(&name).await? {
            Some(beast) => Ok(beast.into()),
            None => {
                tracing::debug!(request_id = ?ctx.request_id, %name, "beast not found by name");
                Ok(BeastDto::placeholder())
            }
        }
    }
}

/// 按插入顺序返回全部 Beast
#[derive(Debug, Clone, Copy, Default)]
pub struct ListBeasts;

impl Query for ListBeasts {
    const NAME: &'static str = "ListBeasts";
    type Dto = BeastListDto;
}

pub struct ListBeastsHandler {
    repo: SharedBeastRepository,
}

impl ListBeastsHandler {
    pub fn new(repo: SharedBeastRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl QueryHandler<ListBeasts> for ListBeastsHandler {
    async fn handle(&self, _ctx: &AppContext, _q: ListBeasts) -> Result<BeastListDto, AppError> {
        Ok(self.repo.list().await?.into())
    }
}
