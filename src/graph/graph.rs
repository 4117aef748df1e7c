//! 图数据结构
//!
//! 有限、简单、无向图：顶点集合、规范边集合和由边集合推导出的邻接表

use super::edge::Edge;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// 简单无向图
///
/// 构建阶段通过 `add_vertex` / `add_edge` 原地修改；
/// 构建完成后，所有变换（并集、删点、合并等）都返回新的 `Graph`，不会修改操作数。
///
/// 不变式：
/// - `adj` 恰好是 `edges` 的邻居展开，每条边在两个端点各贡献一个邻居
/// - 每条边的两个端点都在 `vertices` 中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphSnapshot", into = "GraphSnapshot")]
pub struct Graph {
    /// 顶点集合
    vertices: BTreeSet<Vertex>,
    /// 规范边集合
    edges: BTreeSet<Edge>,
    /// 邻接表（邻居按顶点顺序排列）
    adj: BTreeMap<Vertex, BTreeSet<Vertex>>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 从边对集合创建图
    pub fn from_edges<I, A, B>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<Vertex>,
        B: Into<Vertex>,
    {
        let mut graph = Self::new();
        for (u, v) in pairs {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// 从计算好的 `(V, E)` 构造新图，邻接表从头推导
    pub(crate) fn from_parts<I>(vertices: BTreeSet<Vertex>, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v);
        }
        for e in edges {
            graph.insert_edge(e);
        }
        graph
    }

    // ==================== 构建 ====================

    /// 添加顶点（已存在时无操作）
    pub fn add_vertex(&mut self, v: impl Into<Vertex>) {
        let v = v.into();
        if !self.vertices.contains(&v) {
            self.adj.insert(v.clone(), BTreeSet::new());
            self.vertices.insert(v);
        }
    }

    /// 添加无向边
    ///
    /// 端点相同返回 [`Error::SelfLoop`]；边已存在时无操作。
    pub fn add_edge(&mut self, u: impl Into<Vertex>, v: impl Into<Vertex>) -> Result<()> {
        let edge = Edge::new(u, v)?;
        self.insert_edge(edge);
        Ok(())
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge) {
        if self.edges.contains(&edge) {
            return;
        }
        let (u, v) = edge.endpoints();
        self.add_vertex(u);
        self.add_vertex(v);
        if let Some(neigh) = self.adj.get_mut(u) {
            neigh.insert(v.clone());
        }
        if let Some(neigh) = self.adj.get_mut(v) {
            neigh.insert(u.clone());
        }
        self.edges.insert(edge);
    }

    // ==================== 基本度量 ====================

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 顶点集合（升序）
    pub fn vertices(&self) -> &BTreeSet<Vertex> {
        &self.vertices
    }

    /// 边集合（按规范边字典序）
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, v: &str) -> bool {
        self.vertices.contains(v)
    }

    pub fn contains_edge(&self, u: &str, v: &str) -> bool {
        self.adj.get(u).is_some_and(|neigh| neigh.contains(v))
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的邻居（升序）
    pub fn neighbors(&self, v: &str) -> Result<Vec<Vertex>> {
        Ok(self.neighbor_set(v)?.iter().cloned().collect())
    }

    /// 获取顶点的度
    pub fn degree(&self, v: &str) -> Result<usize> {
        Ok(self.neighbor_set(v)?.len())
    }

    /// 判断两个顶点是否相邻
    pub fn are_adjacent(&self, u: &str, v: &str) -> Result<bool> {
        self.ensure_vertex(v)?;
        Ok(self.neighbor_set(u)?.contains(v))
    }

    /// 所有顶点的度
    pub fn degrees(&self) -> BTreeMap<Vertex, usize> {
        self.adj
            .iter()
            .map(|(v, neigh)| (v.clone(), neigh.len()))
            .collect()
    }

    /// 当前图的顶点集与边集是否都包含于 `other`
    pub fn is_subgraph_of(&self, other: &Graph) -> bool {
        self.vertices.is_subset(&other.vertices) && self.edges.is_subset(&other.edges)
    }

    // ==================== 内部辅助 ====================

    /// 返回图中存储的顶点引用，不存在时报错
    pub(crate) fn ensure_vertex(&self, v: &str) -> Result<&Vertex> {
        self.vertices
            .get(v)
            .ok_or_else(|| Error::VertexNotFound(v.to_string()))
    }

    pub(crate) fn neighbor_set(&self, v: &str) -> Result<&BTreeSet<Vertex>> {
        self.adj
            .get(v)
            .ok_or_else(|| Error::VertexNotFound(v.to_string()))
    }

    /// 已知存在的顶点的邻居；不存在时返回空迭代
    pub(crate) fn adjacent(&self, v: &Vertex) -> impl Iterator<Item = &Vertex> {
        self.adj.get(v).into_iter().flatten()
    }

    /// 度大于 0 的顶点（升序）
    pub(crate) fn non_isolated(&self) -> impl Iterator<Item = &Vertex> {
        self.adj
            .iter()
            .filter(|(_, neigh)| !neigh.is_empty())
            .map(|(v, _)| v)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertices: Vec<&str> = self.vertices.iter().map(Vertex::as_str).collect();
        let edges: Vec<String> = self.edges.iter().map(Edge::to_string).collect();
        write!(f, "Graph(V=[{}], E=[{}])", vertices.join(", "), edges.join(", "))
    }
}

/// 序列化用的图快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl From<Graph> for GraphSnapshot {
    fn from(g: Graph) -> Self {
        Self {
            vertices: g.vertices.into_iter().collect(),
            edges: g.edges.into_iter().collect(),
        }
    }
}

impl TryFrom<GraphSnapshot> for Graph {
    type Error = Error;

    fn try_from(s: GraphSnapshot) -> Result<Self> {
        // 边在反序列化时已校验过自环
        Ok(Graph::from_parts(s.vertices.into_iter().collect(), s.edges))
    }
}
