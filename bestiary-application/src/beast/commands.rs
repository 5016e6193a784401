use super::dto::BeastDto;
use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
};
use async_trait::async_trait;
use bestiary_domain::entity::Entity;
use bestiary_domain::persist::{BeastRepository, SharedBeastRepository};
use bestiary_domain::{BeastId, BeastPatch, NewBeast};

/// 新建 Beast，标识由存储分配
#[derive(Debug, Clone)]
pub struct AddBeast {
    pub name: String,
    pub description: String,
    pub other_names: Option<Vec<String>>,
    pub image_url: Option<String>,
}

impl Command for AddBeast {
    const NAME: &'static str = "AddBeast";
    type Output = BeastDto;
}

pub struct AddBeastHandler {
    repo: SharedBeastRepository,
}

impl AddBeastHandler {
    pub fn new(repo: SharedBeastRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler<AddBeast> for AddBeastHandler {
    async fn handle(&self, ctx: &AppContext, cmd: AddBeast) -> Result<BeastDto, AppError> {
        let new = NewBeast::builder()
            .name(cmd.name)
            .description(cmd.description)
            .maybe_other_names(cmd.other_names)
            .maybe_image_url(cmd.image_url)
            .build();

        let beast = self.repo.insert_new(new).await?;
        tracing::info!(request_id = ?ctx.request_id, id = %beast.id(), "beast added");

        Ok(beast.into())
    }
}

/// 按标识更新 Beast，仅覆盖出现的字段；未命中时返回占位记录
#[derive(Debug, Clone)]
pub struct UpdateBeast {
    pub id: i32,
    pub patch: BeastPatch,
}

impl Command for UpdateBeast {
    const NAME: &'static str = "UpdateBeast";
    type Output = BeastDto;
}

pub struct UpdateBeastHandler {
    repo: SharedBeastRepository,
}

impl UpdateBeastHandler {
    pub fn new(repo: SharedBeastRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CommandHandler<UpdateBeast> for UpdateBeastHandler {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateBeast) -> Result<BeastDto, AppError> {
        let id = BeastId::from_value(cmd.id);
        if cmd.patch.is_empty() {
            tracing::debug!(request_id = ?ctx.request_id, %id, "empty patch, record left unchanged");
        }

        match self.repo.update_fields(id, cmd.patch).await? {
            Some(beast) => {
                tracing::info!(request_id = ?ctx.request_id, %id, "beast updated");
                Ok(beast.into())
            }
            None => {
                tracing::debug!(request_id = ?ctx.request_id, %id, "update target not found");
                Ok(BeastDto::placeholder())
            }
        }
    }
}
