//! 内存 Beast 存储
//!
//! 序列与标识计数器置于同一把 `RwLock` 之后，所有写操作在一次加锁内
//! 完成“读取-修改-写回”，并发创建不会分配到重复标识。
//!
use crate::beast::{Beast, BeastPatch, NewBeast};
use crate::entity::{Entity, position_of};
use crate::error::DomainResult;
use crate::persist::BeastRepository;
use crate::persist::seed::{SeedReport, load_seed, parse_seed};
use crate::value_object::BeastId;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use tokio::sync::RwLock;

/// 计数器初始值：首个新建记录的标识为 6
pub const DEFAULT_INITIAL_MAX_ID: i32 = 5;

#[derive(Debug, Default)]
struct StoreState {
    beasts: Vec<Beast>,
    max_id: BeastId,
}

impl StoreState {
    fn next_id(&mut self) -> DomainResult<BeastId> {
        let id = self.max_id.next()?;
        self.max_id = id;
        Ok(id)
    }

    fn append(&mut self, beast: Beast) {
        self.beasts.push(beast);
    }

    // 标识须唯一：重复标识只保留首条，返回被丢弃的条数
    fn drop_duplicate_ids(&mut self) -> usize {
        let before = self.beasts.len();
        let mut seen = HashSet::new();
        self.beasts.retain(|b| {
            let fresh = seen.insert(*b.id());
            if !fresh {
                tracing::warn!(id = %b.id(), name = b.name(), "duplicate beast id in seed, record dropped");
            }
            fresh
        });
        before - self.beasts.len()
    }

    // 种子中的标识可能超过计数器初值，取两者最大值避免后续冲突
    fn reconcile_max_id(&mut self) {
        if let Some(max) = self.beasts.iter().map(|b| *b.id()).max()
            && max > self.max_id
        {
            tracing::debug!(from = %self.max_id, to = %max, "reconciled id counter with seed");
            self.max_id = max;
        }
    }
}

/// 基于内存的 `BeastRepository` 实现
#[derive(Debug)]
pub struct InMemoryBeastStore {
    state: RwLock<StoreState>,
}

impl Default for InMemoryBeastStore {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_MAX_ID)
    }
}

impl InMemoryBeastStore {
    /// 创建空存储，计数器从 `initial_max_id` 开始
    pub fn new(initial_max_id: i32) -> Self {
        Self::with_beasts(Vec::new(), initial_max_id)
    }

    /// 以给定序列创建存储；标识重复的记录只保留首条
    pub fn with_beasts(beasts: Vec<Beast>, initial_max_id: i32) -> Self {
        Self::build(beasts, initial_max_id).0
    }

    fn build(beasts: Vec<Beast>, initial_max_id: i32) -> (Self, usize) {
        let mut state = StoreState {
            beasts,
            max_id: BeastId::from_value(initial_max_id),
        };
        let skipped = state.drop_duplicate_ids();
        state.reconcile_max_id();

        (
            Self {
                state: RwLock::new(state),
            },
            skipped,
        )
    }

    /// 从种子文件构建存储；文件缺失或格式错误时记录日志并以空序列继续
    pub fn seeded(path: impl AsRef<Path>, initial_max_id: i32) -> (Self, SeedReport) {
        let path = path.as_ref();
        Self::from_seed_result(load_seed(path), initial_max_id, &path.display().to_string())
    }

    /// 从内存中的 JSON 文本构建存储，失败语义同 [`seeded`](Self::seeded)
    pub fn seed_from_str(json: &str, initial_max_id: i32) -> (Self, SeedReport) {
        Self::from_seed_result(parse_seed(json), initial_max_id, "<inline>")
    }

    fn from_seed_result(
        result: DomainResult<Vec<Beast>>,
        initial_max_id: i32,
        source: &str,
    ) -> (Self, SeedReport) {
        match result {
            Ok(beasts) => {
                let total = beasts.len();
                let (store, skipped) = Self::build(beasts, initial_max_id);
                let count = total - skipped;
                tracing::info!(source, count, skipped, "seeded beast store");
                (store, SeedReport::Loaded { count, skipped })
            }
            Err(e) => {
                tracing::warn!(source, error = %e, "failed to seed beast store, continuing empty");
                (
                    Self::new(initial_max_id),
                    SeedReport::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// 当前记录数
    pub async fn len(&self) -> usize {
        self.state.read().await.beasts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.beasts.is_empty()
    }
}

#[async_trait]
impl BeastRepository for InMemoryBeastStore {
    async fn append(&self, beast: Beast) -> DomainResult<()> {
        self.state.write().await.append(beast);
        Ok(())
    }

    async fn insert_new(&self, new: NewBeast) -> DomainResult<Beast> {
        let mut state = self.state.write().await;
        let id = state.next_id()?;
        let beast = Beast::create(id, new);
        state.append(beast.clone());
        tracing::debug!(%id, name = beast.name(), "inserted beast");
        Ok(beast)
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Beast>> {
        let state = self.state.read().await;
        Ok(state.beasts.iter().find(|b| b.name() == name).cloned())
    }

    async fn find_by_id(&self, id: BeastId) -> DomainResult<Option<usize>> {
        let state = self.state.read().await;
        Ok(position_of(&state.beasts, &id))
    }

    async fn update_fields(&self, id: BeastId, patch: BeastPatch) -> DomainResult<Option<Beast>> {
        let mut state = self.state.write().await;
        let Some(idx) = position_of(&state.beasts, &id) else {
            return Ok(None);
        };

        let beast = &mut state.beasts[idx];
        beast.apply(patch);
        Ok(Some(beast.clone()))
    }

    async fn next_id(&self) -> DomainResult<BeastId> {
        self.state.write().await.next_id()
    }

    async fn list(&self) -> DomainResult<Vec<Beast>> {
        Ok(self.state.read().await.beasts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::task::JoinSet;

    fn beast(id: i32, name: &str) -> Beast {
        Beast::builder()
            .id(id)
            .name(name)
            .description(format!("{name} description"))
            .build()
    }

    #[tokio::test]
    async fn next_id_starts_after_initial_max() {
        let store = InMemoryBeastStore::default();
        assert_eq!(store.next_id().await.unwrap().value(), 6);
        assert_eq!(store.next_id().await.unwrap().value(), 7);
    }

    #[tokio::test]
    async fn find_by_name_returns_first_match_case_sensitive() {
        let store = InMemoryBeastStore::with_beasts(
            vec![beast(1, "Yeti"), beast(2, "Yeti"), beast(3, "Mothman")],
            DEFAULT_INITIAL_MAX_ID,
        );

        let found = store.find_by_name("Yeti").await.unwrap().unwrap();
        assert_eq!(found.id().value(), 1);
        assert!(store.find_by_name("yeti").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_returns_position() {
        let store = InMemoryBeastStore::with_beasts(
            vec![beast(4, "Nessie"), beast(2, "Chupacabra")],
            DEFAULT_INITIAL_MAX_ID,
        );
        assert_eq!(store.find_by_id(BeastId::from_value(2)).await.unwrap(), Some(1));
        assert_eq!(store.find_by_id(BeastId::from_value(9)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn append_keeps_insertion_order_and_allows_duplicate_names() {
        let store = InMemoryBeastStore::default();
        store.append(beast(1, "Yeti")).await.unwrap();
        store.append(beast(2, "Yeti")).await.unwrap();

        let ids: Vec<i32> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|b| b.id().value())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn update_fields_miss_returns_none() {
        let store = InMemoryBeastStore::with_beasts(vec![beast(1, "Yeti")], 5);
        let out = store
            .update_fields(BeastId::from_value(99999), BeastPatch::builder().name("x").build())
            .await
            .unwrap();
        assert!(out.is_none());
        assert_eq!(store.list().await.unwrap()[0].name(), "Yeti");
    }

    #[tokio::test]
    async fn update_fields_persists_change() {
        let store = InMemoryBeastStore::with_beasts(vec![beast(3, "Yeti")], 5);
        let updated = store
            .update_fields(
                BeastId::from_value(3),
                BeastPatch::builder().image_url("yeti.png").build(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.image_url(), "yeti.png");
        assert_eq!(store.list().await.unwrap()[0], updated);
    }

    // 种子标识高于计数器初值时，新标识从种子最大值之后开始
    #[tokio::test]
    async fn seeded_ids_reconcile_counter() {
        let store =
            InMemoryBeastStore::with_beasts(vec![beast(3, "A"), beast(12, "B"), beast(7, "C")], 5);
        let created = store
            .insert_new(NewBeast::builder().name("D").description("d").build())
            .await
            .unwrap();
        assert_eq!(created.id().value(), 13);
    }

    #[tokio::test]
    async fn duplicate_seed_ids_keep_first_record() {
        let (store, report) =
            InMemoryBeastStore::seed_from_str(r#"[{"id":7,"name":"A"},{"id":7,"name":"B"}]"#, 5);
        assert_eq!(report, SeedReport::Loaded { count: 1, skipped: 1 });

        let updated = store
            .update_fields(BeastId::from_value(7), BeastPatch::builder().name("Z").build())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name(), "Z");

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        assert_eq!(names, vec!["Z"]);
        assert_eq!(store.next_id().await.unwrap().value(), 8);
    }

    #[tokio::test]
    async fn seed_from_str_malformed_continues_empty() {
        let (store, report) = InMemoryBeastStore::seed_from_str("[{not json", 5);
        assert!(matches!(report, SeedReport::Failed { .. }));
        assert!(store.is_empty().await);
        assert_eq!(store.next_id().await.unwrap().value(), 6);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_assign_unique_ids() {
        let store = Arc::new(InMemoryBeastStore::default());

        let mut set = JoinSet::new();
        for i in 0..100 {
            let store = store.clone();
            set.spawn(async move {
                store
                    .insert_new(
                        NewBeast::builder()
                            .name(format!("beast-{i}"))
                            .description("spawned")
                            .build(),
                    )
                    .await
                    .unwrap()
            });
        }

        let mut ids = Vec::new();
        while let Some(res) = set.join_next().await {
            ids.push(res.unwrap().id().value());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 100);
        assert_eq!(ids[0], 6);
        assert_eq!(ids[99], 105);
        assert_eq!(store.len().await, 100);
    }
}
