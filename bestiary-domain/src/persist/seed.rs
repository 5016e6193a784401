//! 种子数据加载
//!
//! 种子文件是一个 Beast 对象数组；读取或解析失败都不是致命错误，
//! 由调用方记录日志后以空序列继续。
//!
use crate::beast::Beast;
use crate::error::{DomainError, DomainResult};
use std::path::Path;

/// 一次播种的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReport {
    /// 成功加载的记录数，以及因标识重复被丢弃的记录数
    Loaded { count: usize, skipped: usize },
    /// 失败原因（存储以空序列继续）
    Failed { reason: String },
}

impl SeedReport {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SeedReport::Loaded { .. })
    }

    pub fn count(&self) -> usize {
        match self {
            SeedReport::Loaded { count, .. } => *count,
            SeedReport::Failed { .. } => 0,
        }
    }
}

/// 解析 JSON 数组形式的种子数据
pub fn parse_seed(json: &str) -> DomainResult<Vec<Beast>> {
    Ok(serde_json::from_str(json)?)
}

/// 读取并解析种子文件
pub fn load_seed(path: impl AsRef<Path>) -> DomainResult<Vec<Beast>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| DomainError::Seed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_seed(&content).map_err(|e| DomainError::Seed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    #[test]
    fn parse_seed_reads_array() {
        let beasts = parse_seed(
            r#"[{"id":1,"name":"Sasquatch","description":"...","otherNames":["Bigfoot"],"imageUrl":"..."}]"#,
        )
        .unwrap();
        assert_eq!(beasts.len(), 1);
        assert_eq!(beasts[0].id().value(), 1);
        assert_eq!(beasts[0].other_names(), ["Bigfoot".to_string()]);
    }

    #[test]
    fn parse_seed_rejects_non_array() {
        let err = parse_seed(r#"{"id":1}"#).unwrap_err();
        assert!(matches!(err, DomainError::Serde { .. }));
    }

    #[test]
    fn load_seed_missing_file_reports_path() {
        let err = load_seed("/definitely/not/here/beastData.json").unwrap_err();
        match err {
            DomainError::Seed { path, .. } => assert!(path.ends_with("beastData.json")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn report_count() {
        let loaded = SeedReport::Loaded {
            count: 3,
            skipped: 1,
        };
        assert_eq!(loaded.count(), 3);
        let failed = SeedReport::Failed {
            reason: "boom".into(),
        };
        assert_eq!(failed.count(), 0);
        assert!(!failed.is_loaded());
    }
}
