//! 实体（Entity）基础抽象
//!
//! 为实体提供统一的标识（Id）能力，仓储的线性查找基于该抽象实现。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示、可比较与可克隆
    type Id: FromStr + Clone + Display + PartialEq;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}

/// 按标识线性查找实体在序列中的位置（首个匹配）
pub fn position_of<E: Entity>(items: &[E], id: &E::Id) -> Option<usize> {
    items.iter().position(|e| e.id() == id)
}
