//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值。
//!

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Beast 标识
///
/// 由存储在创建时分配，一经分配不可变更。`BeastId::default()`（值为 0）
/// 仅出现在未命中查找时返回的占位记录上。
///
/// # 示例
///
/// ```
/// use bestiary_domain::value_object::BeastId;
///
/// let id = BeastId::from_value(5);
/// assert_eq!(id.next().unwrap().value(), 6);
/// assert_eq!(BeastId::default().value(), 0);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BeastId(i32);

impl BeastId {
    /// 从值创建标识
    pub const fn from_value(value: i32) -> Self {
        Self(value)
    }

    /// 获取下一个标识；到达 `i32::MAX` 时返回错误而不是回绕
    pub fn next(&self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or(DomainError::IdExhausted { last: self.0 })
    }

    /// 获取标识的值
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for BeastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BeastId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse::<i32>()?))
    }
}

impl From<i32> for BeastId {
    fn from(value: i32) -> Self {
        Self::from_value(value)
    }
}

impl From<BeastId> for i32 {
    fn from(id: BeastId) -> Self {
        id.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beast_id_next() {
        let id = BeastId::from_value(10);
        assert_eq!(id.next().unwrap().value(), 11);
        assert_eq!(id.value(), 10);
    }

    // 到达上限时不回绕
    #[test]
    fn test_beast_id_next_exhausted() {
        let err = BeastId::from_value(i32::MAX).next().unwrap_err();
        match err {
            DomainError::IdExhausted { last } => assert_eq!(last, i32::MAX),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_beast_id_parse() {
        let id: BeastId = " 42 ".parse().unwrap();
        assert_eq!(id, BeastId::from_value(42));
        assert!(matches!(
            "abc".parse::<BeastId>(),
            Err(DomainError::Parse { .. })
        ));
    }

    #[test]
    fn test_beast_id_serde_transparent() {
        let json = serde_json::to_string(&BeastId::from_value(7)).unwrap();
        assert_eq!(json, "7");
        let back: BeastId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), 7);
    }

    #[test]
    fn test_beast_id_display() {
        assert_eq!(format!("{}", BeastId::from_value(3)), "3");
        assert_eq!(BeastId::default().to_string(), "0");
    }
}
