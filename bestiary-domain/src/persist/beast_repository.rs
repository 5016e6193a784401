//! Beast 仓储端口
//!
use crate::beast::{Beast, BeastPatch, NewBeast};
use crate::error::DomainResult;
use crate::value_object::BeastId;
use async_trait::async_trait;
use std::sync::Arc;

/// 以共享指针注入的仓储
pub type SharedBeastRepository = Arc<dyn BeastRepository>;

#[async_trait]
pub trait BeastRepository: Send + Sync {
    /// 追加到序列末尾，不校验名称唯一性
    async fn append(&self, beast: Beast) -> DomainResult<()>;

    /// 分配下一个标识并追加新记录（同一临界区内完成）
    async fn insert_new(&self, new: NewBeast) -> DomainResult<Beast>;

    /// 按名称精确查找（区分大小写），返回序列中首个匹配
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Beast>>;

    /// 按标识查找，返回首个匹配的位置
    async fn find_by_id(&self, id: BeastId) -> DomainResult<Option<usize>>;

    /// 覆盖 `patch` 中出现的字段，返回更新后的记录；未命中返回 `None`
    async fn update_fields(&self, id: BeastId, patch: BeastPatch) -> DomainResult<Option<Beast>>;

    /// 返回 `counter + 1` 并推进计数器
    async fn next_id(&self) -> DomainResult<BeastId>;

    /// 当前序列快照（按插入顺序）
    async fn list(&self) -> DomainResult<Vec<Beast>>;
}

#[async_trait]
impl<T> BeastRepository for Arc<T>
where
    T: BeastRepository + ?Sized,
{
    async fn append(&self, beast: Beast) -> DomainResult<()> {
        (**self).append(beast).await
    }

    async fn insert_new(&self, new: NewBeast) -> DomainResult<Beast> {
        (**self).insert_new(new).await
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Beast>> {
        (**self).find_by_name(name).await
    }

    async fn find_by_id(&self, id: BeastId) -> DomainResult<Option<usize>> {
        (**self).find_by_id(id).await
    }

    async fn update_fields(&self, id: BeastId, patch: BeastPatch) -> DomainResult<Option<Beast>> {
        (**self).update_fields(id, patch).await
    }

    async fn next_id(&self) -> DomainResult<BeastId> {
        (**self).next_id().await
    }

    async fn list(&self) -> DomainResult<Vec<Beast>> {
        (**self).list().await
    }
}
