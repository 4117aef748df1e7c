//! 边定义
//!
//! 无向边以规范形式 `(min, max)` 存储，每条边只有一种表示

use crate::error::{Error, Result};
use crate::graph::vertex::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 规范无向边
///
/// 不变式：`u < v`，因此不存在自环。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Vertex, Vertex)", into = "(Vertex, Vertex)")]
pub struct Edge {
    u: Vertex,
    v: Vertex,
}

impl Edge {
    /// 创建规范边，端点相同时返回自环错误
    pub fn new(a: impl Into<Vertex>, b: impl Into<Vertex>) -> Result<Self> {
        let (a, b) = (a.into(), b.into());
        if a == b {
            return Err(Error::SelfLoop(a.to_string()));
        }
        if a < b {
            Ok(Self { u: a, v: b })
        } else {
            Ok(Self { u: b, v: a })
        }
    }

    /// 较小的端点
    pub fn u(&self) -> &Vertex {
        &self.u
    }

    /// 较大的端点
    pub fn v(&self) -> &Vertex {
        &self.v
    }

    pub fn endpoints(&self) -> (&Vertex, &Vertex) {
        (&self.u, &self.v)
    }

    pub fn contains(&self, x: &str) -> bool {
        self.u == *x || self.v == *x
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, x: &str) -> Option<&Vertex> {
        if self.u == *x {
            Some(&self.v)
        } else if self.v == *x {
            Some(&self.u)
        } else {
            None
        }
    }
}

impl TryFrom<(Vertex, Vertex)> for Edge {
    type Error = Error;

    fn try_from((a, b): (Vertex, Vertex)) -> Result<Self> {
        Edge::new(a, b)
    }
}

impl From<Edge> for (Vertex, Vertex) {
    fn from(e: Edge) -> Self {
        (e.u, e.v)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.u, self.v)
    }
}
