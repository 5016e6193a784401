use bestiary_domain::persist::DEFAULT_INITIAL_MAX_ID;
use bon::Builder;
use std::path::PathBuf;

/// 默认种子文件路径（相对于进程工作目录）
pub const DEFAULT_SEED_PATH: &str = "./beastData.json";

const SEED_PATH_ENV: &str = "BESTIARY_SEED_PATH";
const INITIAL_MAX_ID_ENV: &str = "BESTIARY_INITIAL_MAX_ID";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({source})")]
    InvalidNumber {
        key: &'static str,
        value: String,
        source: std::num::ParseIntError,
    },
}

/// 启动配置
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct BestiaryConfig {
    /// 种子文件路径
    #[builder(default = PathBuf::from(DEFAULT_SEED_PATH), into)]
    pub seed_path: PathBuf,
    /// 标识计数器初值，首个新建记录的标识为该值加一
    #[builder(default = DEFAULT_INITIAL_MAX_ID)]
    pub initial_max_id: i32,
}

impl Default for BestiaryConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BestiaryConfig {
    /// 从进程环境变量读取，未设置的项取默认值
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let initial_max_id = match lookup(INITIAL_MAX_ID_ENV) {
            Some(raw) => Some(raw.trim().parse::<i32>().map_err(|source| {
                ConfigError::InvalidNumber {
                    key: INITIAL_MAX_ID_ENV,
                    value: raw.clone(),
                    source,
                }
            })?),
            None => None,
        };

        Ok(Self::builder()
            .maybe_seed_path(lookup(SEED_PATH_ENV).map(PathBuf::from))
            .maybe_initial_max_id(initial_max_id)
            .build())
    }
}
