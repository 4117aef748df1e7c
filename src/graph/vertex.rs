//! 顶点定义
//!
//! 顶点是一个不透明的字符串标签，按字典序全序排列

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// 顶点标签
///
/// 所有算法都按这个顺序遍历，保证结果可复现。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vertex(String);

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl From<&String> for Vertex {
    fn from(label: &String) -> Self {
        Self(label.clone())
    }
}

impl From<&Vertex> for Vertex {
    fn from(v: &Vertex) -> Self {
        v.clone()
    }
}

// 允许用 &str 直接查询 BTreeSet<Vertex> / BTreeMap<Vertex, _>
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Vertex {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Vertex {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_vertex_ordering() {
        let a = Vertex::from("A");
        let b = Vertex::from("B");
        assert!(a < b);
        assert_eq!(Vertex::new("10").cmp(&Vertex::new("2")), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_vertex_lookup_by_str() {
        let set: BTreeSet<Vertex> = ["A", "B"].into_iter().map(Vertex::from).collect();
        assert!(set.contains("A"));
        assert!(!set.contains("C"));
        assert_eq!(Vertex::from("A"), "A");
    }

    #[test]
    fn test_vertex_serialization() {
        let v = Vertex::from("A");
        assert_eq!(serde_json::to_string(&v).unwrap(), "\"A\"");
    }
}
