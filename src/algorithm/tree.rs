//! 树分析
//!
//! 树判定、中心（逐层剥叶）、离心率、半径、BFS 生成树与中心树

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// 剥叶算法使用的一次性工作区：度计数器，不复制整张图
struct LeafPruning<'a> {
    graph: &'a Graph,
    degree: BTreeMap<&'a Vertex, usize>,
    removed: BTreeSet<&'a Vertex>,
}

impl<'a> LeafPruning<'a> {
    fn new(graph: &'a Graph) -> Self {
        let degree = graph
            .vertices()
            .iter()
            .map(|v| (v, graph.adjacent(v).count()))
            .collect();
        Self {
            graph,
            degree,
            removed: BTreeSet::new(),
        }
    }

    fn leaves(&self) -> Vec<&'a Vertex> {
        self.degree
            .iter()
            .filter(|(_, d)| **d == 1)
            .map(|(v, _)| *v)
            .collect()
    }

    /// 剥掉一层叶子，返回新产生的叶子
    fn strip(&mut self, leaves: &[&'a Vertex]) -> Vec<&'a Vertex> {
        let graph = self.graph;
        self.removed.extend(leaves.iter().copied());
        let mut next = Vec::new();
        for &leaf in leaves {
            for nb in graph.adjacent(leaf) {
                if self.removed.contains(nb) {
                    continue;
                }
                if let Some(d) = self.degree.get_mut(nb) {
                    *d -= 1;
                    if *d == 1 {
                        next.push(nb);
                    }
                }
            }
        }
        next
    }
}

impl Graph {
    /// 是否为树：所有顶点连通且 `|E| == |V| - 1`；空图不是树
    pub fn is_tree(&self) -> bool {
        let n = self.vertex_count();
        n > 0 && self.edge_count() == n - 1 && self.is_fully_connected()
    }

    fn ensure_tree(&self) -> Result<()> {
        if self.is_tree() {
            Ok(())
        } else {
            Err(Error::NotATree)
        }
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.is_connected() {
            Ok(())
        } else {
            Err(Error::NotConnected)
        }
    }

    /// 树的中心（1 个或 2 个，升序）
    pub fn find_centers(&self) -> Result<Vec<Vertex>> {
        self.ensure_tree()?;
        if self.vertex_count() <= 2 {
            return Ok(self.vertices().iter().cloned().collect());
        }

        let mut pruning = LeafPruning::new(self);
        let mut leaves = pruning.leaves();
        let mut remaining = self.vertex_count();
        while remaining > 2 {
            remaining -= leaves.len();
            leaves = pruning.strip(&leaves);
        }

        let mut centers: Vec<Vertex> = leaves.into_iter().cloned().collect();
        centers.sort();
        Ok(centers)
    }

    /// 从 `root` 出发的 BFS 距离
    pub(crate) fn bfs_distances<'a>(&'a self, root: &'a Vertex) -> BTreeMap<&'a Vertex, usize> {
        let mut dist = BTreeMap::new();
        dist.insert(root, 0);
        let mut queue = VecDeque::from([root]);
        while let Some(u) = queue.pop_front() {
            let d = dist[u];
            for w in self.adjacent(u) {
                if !dist.contains_key(w) {
                    dist.insert(w, d + 1);
                    queue.push_back(w);
                }
            }
        }
        dist
    }

    fn eccentricity(&self, v: &Vertex) -> usize {
        self.bfs_distances(v).into_values().max().unwrap_or(0)
    }

    /// 每个顶点的离心率
    pub fn vertex_eccentricities(&self) -> Result<BTreeMap<Vertex, usize>> {
        self.ensure_tree()?;
        Ok(self
            .vertices()
            .iter()
            .map(|v| (v.clone(), self.eccentricity(v)))
            .collect())
    }

    /// 半径：最小离心率
    pub fn radius(&self) -> Result<usize> {
        let ecc = self.vertex_eccentricities()?;
        Ok(ecc.into_values().min().unwrap_or(0))
    }

    /// BFS 生成树
    ///
    /// `start` 缺省时取最小的非孤立顶点（无边时取最小顶点）。结果包含原图所有顶点。
    pub fn find_spanning_tree(&self, start: Option<&str>) -> Result<Graph> {
        self.ensure_connected()?;
        let root = match start {
            Some(s) => self.ensure_vertex(s)?,
            None => match self
                .non_isolated()
                .next()
                .or_else(|| self.vertices().iter().next())
            {
                Some(v) => v,
                None => return Ok(Graph::new()),
            },
        };
        Ok(self.bfs_tree(root))
    }

    fn bfs_tree(&self, root: &Vertex) -> Graph {
        let mut seen: BTreeSet<&Vertex> = BTreeSet::new();
        seen.insert(root);
        let mut queue = VecDeque::from([root]);
        let mut tree_edges = Vec::new();
        while let Some(u) = queue.pop_front() {
            for w in self.adjacent(u) {
                if seen.insert(w) {
                    // 邻接表中的两个顶点必然不同
                    if let Ok(e) = Edge::new(u, w) {
                        tree_edges.push(e);
                    }
                    queue.push_back(w);
                }
            }
        }
        Graph::from_parts(self.vertices().clone(), tree_edges)
    }

    /// 以图中心为根的 BFS 生成树（最小高度生成树）
    ///
    /// 离心率在整张连通图上计算（不要求是树），并列时取最小顶点。
    pub fn central_tree(&self) -> Result<Graph> {
        self.ensure_connected()?;
        let mut candidates: Vec<&Vertex> = self.non_isolated().collect();
        if candidates.is_empty() {
            candidates = self.vertices().iter().collect();
        }
        // min_by_key 在并列时返回第一个，即最小顶点
        let Some(root) = candidates.into_iter().min_by_key(|v| self.eccentricity(v)) else {
            return Ok(Graph::new());
        };
        Ok(self.bfs_tree(root))
    }

    /// 两棵子树之间的最少边数
    ///
    /// 以 `a1` 的所有顶点为源做多源 BFS，遇到 `a2` 的第一个顶点即停止；不可达返回 `None`。
    pub fn distance_between_trees(&self, a1: &Graph, a2: &Graph) -> Result<Option<usize>> {
        if !a1.is_subgraph_of(self) {
            return Err(Error::NotSubgraph("第一棵树不是当前图的子图".to_string()));
        }
        if !a2.is_subgraph_of(self) {
            return Err(Error::NotSubgraph("第二棵树不是当前图的子图".to_string()));
        }

        let mut dist: BTreeMap<&Vertex, usize> = BTreeMap::new();
        let mut queue = VecDeque::new();
        for v in a1.vertices() {
            if let Ok(v) = self.ensure_vertex(v.as_str()) {
                dist.insert(v, 0);
                queue.push_back(v);
            }
        }
        while let Some(u) = queue.pop_front() {
            let d = dist[u];
            if a2.contains_vertex(u.as_str()) {
                return Ok(Some(d));
            }
            for w in self.adjacent(u) {
                if !dist.contains_key(w) {
                    dist.insert(w, d + 1);
                    queue.push_back(w);
                }
            }
        }
        Ok(None)
    }

    /// `candidate` 是否为当前图的子图且是一棵树
    pub fn is_subgraph_tree(&self, candidate: &Graph) -> bool {
        candidate.is_tree() && candidate.is_subgraph_of(self)
    }

    /// `candidate` 是否为当前图的生成树（顶点集完全相同）
    pub fn is_spanning_tree(&self, candidate: &Graph) -> bool {
        self.is_subgraph_tree(candidate) && candidate.vertices() == self.vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(labels: &[&str]) -> Graph {
        Graph::from_edges(labels.windows(2).map(|w| (w[0], w[1]))).unwrap()
    }

    fn names(vs: &[Vertex]) -> Vec<&str> {
        vs.iter().map(Vertex::as_str).collect()
    }

    fn square() -> Graph {
        Graph::from_edges([("A", "B"), ("B", "D"), ("D", "C"), ("C", "A")]).unwrap()
    }

    #[test]
    fn test_is_tree() {
        assert!(path(&["A", "B", "C"]).is_tree());
        assert!(!square().is_tree());
        assert!(!Graph::new().is_tree());

        let mut single = Graph::new();
        single.add_vertex("A");
        assert!(single.is_tree());

        // 三角形加一个孤立点满足 |E| = |V| - 1，但不是树
        let mut g = Graph::from_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
        g.add_vertex("Z");
        assert!(!g.is_tree());
    }

    #[test]
    fn test_find_centers() {
        let odd = path(&["A", "B", "C", "D", "E"]);
        assert_eq!(names(&odd.find_centers().unwrap()), vec!["C"]);

        let even = path(&["A", "B", "C", "D"]);
        assert_eq!(names(&even.find_centers().unwrap()), vec!["B", "C"]);

        let pair = path(&["B", "A"]);
        assert_eq!(names(&pair.find_centers().unwrap()), vec!["A", "B"]);

        let star = Graph::from_edges([("H", "A"), ("H", "B"), ("H", "C"), ("H", "D")]).unwrap();
        assert_eq!(names(&star.find_centers().unwrap()), vec!["H"]);
    }

    #[test]
    fn test_find_centers_requires_tree() {
        assert!(matches!(square().find_centers(), Err(Error::NotATree)));
        assert!(matches!(square().vertex_eccentricities(), Err(Error::NotATree)));
        assert!(matches!(square().radius(), Err(Error::NotATree)));
    }

    #[test]
    fn test_eccentricities_and_radius() {
        let g = path(&["A", "B", "C", "D", "E"]);
        let ecc = g.vertex_eccentricities().unwrap();
        let values: Vec<usize> = ecc.values().copied().collect();
        assert_eq!(values, vec![4, 3, 2, 3, 4]);
        assert_eq!(g.radius().unwrap(), 2);
    }

    #[test]
    fn test_find_spanning_tree() {
        let g = Graph::from_edges([
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
            ("D", "E"),
        ])
        .unwrap();
        let tree = g.find_spanning_tree(None).unwrap();
        assert_eq!(tree.edge_count(), g.vertex_count() - 1);
        assert_eq!(tree.vertices(), g.vertices());
        assert!(tree.is_tree());
        assert!(g.is_spanning_tree(&tree));

        let expected: BTreeSet<Edge> = [("A", "B"), ("A", "C"), ("B", "D"), ("D", "E")]
            .into_iter()
            .map(|(u, v)| Edge::new(u, v).unwrap())
            .collect();
        assert_eq!(tree.edges(), &expected);

        let from_e = g.find_spanning_tree(Some("E")).unwrap();
        assert!(from_e.contains_edge("D", "E"));
        assert!(g.is_spanning_tree(&from_e));
    }

    #[test]
    fn test_spanning_tree_errors() {
        let g = Graph::from_edges([("A", "B"), ("C", "D")]).unwrap();
        assert!(matches!(g.find_spanning_tree(None), Err(Error::NotConnected)));
        assert!(matches!(g.central_tree(), Err(Error::NotConnected)));
        assert!(matches!(
            square().find_spanning_tree(Some("Z")),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_central_tree() {
        // 路径 A-B-C-D-E 加弦 A-C：中心是 C
        let mut g = path(&["A", "B", "C", "D", "E"]);
        g.add_edge("A", "C").unwrap();
        let tree = g.central_tree().unwrap();
        assert!(g.is_spanning_tree(&tree));
        for v in ["A", "B", "D"] {
            assert!(tree.contains_edge("C", v));
        }
        assert!(tree.contains_edge("D", "E"));
    }

    #[test]
    fn test_distance_between_trees() {
        let g = path(&["A", "B", "C", "D", "E"]);
        let a1 = path(&["A", "B"]);
        let a2 = path(&["D", "E"]);
        assert_eq!(g.distance_between_trees(&a1, &a2).unwrap(), Some(2));

        let overlap = path(&["B", "C"]);
        assert_eq!(g.distance_between_trees(&a1, &overlap).unwrap(), Some(0));

        let foreign = path(&["X", "Y"]);
        assert!(matches!(
            g.distance_between_trees(&a1, &foreign),
            Err(Error::NotSubgraph(_))
        ));

        let mut split = g.without_edge("C", "D").unwrap();
        split.add_vertex("Q");
        assert_eq!(split.distance_between_trees(&a1, &a2).unwrap(), None);
    }

    #[test]
    fn test_subgraph_tree_checks() {
        let g = square();
        let partial = path(&["A", "B", "D"]);
        assert!(g.is_subgraph_tree(&partial));
        assert!(!g.is_spanning_tree(&partial));

        let full = path(&["C", "A", "B", "D"]);
        assert!(g.is_spanning_tree(&full));
        assert!(!g.is_subgraph_tree(&g));
    }
}
