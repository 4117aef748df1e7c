//! 集合运算与结构变换
//!
//! 所有操作都返回新图，操作数保持不变。

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use std::collections::BTreeSet;

impl Graph {
    /// 并集：顶点集与边集分别取并
    pub fn union(&self, other: &Graph) -> Graph {
        let vertices = self.vertices().union(other.vertices()).cloned().collect();
        let edges = self.edges().union(other.edges()).cloned();
        Graph::from_parts(vertices, edges)
    }

    /// 交集：顶点取交，边取交后只保留两端都在交集顶点中的边
    pub fn intersection(&self, other: &Graph) -> Graph {
        let vertices: BTreeSet<Vertex> =
            self.vertices().intersection(other.vertices()).cloned().collect();
        let edges: Vec<Edge> = self
            .edges()
            .intersection(other.edges())
            .filter(|e| vertices.contains(e.u()) && vertices.contains(e.v()))
            .cloned()
            .collect();
        Graph::from_parts(vertices, edges)
    }

    /// 对称差：边取对称差，保留两侧的全部顶点
    pub fn symmetric_difference(&self, other: &Graph) -> Graph {
        let vertices = self.vertices().union(other.vertices()).cloned().collect();
        let edges = self.edges().symmetric_difference(other.edges()).cloned();
        // from_parts 会补上新出现的端点
        Graph::from_parts(vertices, edges)
    }

    /// 删除顶点及其关联的所有边
    pub fn without_vertex(&self, v: &str) -> Result<Graph> {
        self.ensure_vertex(v)?;
        let vertices = self
            .vertices()
            .iter()
            .filter(|x| x.as_str() != v)
            .cloned()
            .collect();
        let edges = self.edges().iter().filter(|e| !e.contains(v)).cloned();
        Ok(Graph::from_parts(vertices, edges))
    }

    /// 删除一条边，保留所有顶点
    pub fn without_edge(&self, u: &str, v: &str) -> Result<Graph> {
        let target = Edge::new(u, v)?;
        if !self.edges().contains(&target) {
            return Err(Error::EdgeNotFound(target.to_string()));
        }
        let edges = self.edges().iter().filter(|e| **e != target).cloned();
        Ok(Graph::from_parts(self.vertices().clone(), edges))
    }

    /// 将 `v2` 合并到 `v1`
    ///
    /// 所有指向 `v2` 的边改为指向 `v1`；改写后成为自环的边被丢弃，平行边自然折叠。
    pub fn merge_vertices(&self, v1: &str, v2: &str) -> Result<Graph> {
        let keep = self.ensure_vertex(v1)?;
        self.ensure_vertex(v2)?;
        if v1 == v2 {
            return Ok(self.clone());
        }

        let rename = |x: &Vertex| if x.as_str() == v2 { keep.clone() } else { x.clone() };
        let edges: Vec<Edge> = self
            .edges()
            .iter()
            .filter_map(|e| Edge::new(rename(e.u()), rename(e.v())).ok())
            .collect();
        let vertices = self
            .vertices()
            .iter()
            .filter(|x| x.as_str() != v2)
            .cloned()
            .collect();
        Ok(Graph::from_parts(vertices, edges))
    }
}
