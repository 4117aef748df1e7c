//! 基本回路与生成树枚举
//!
//! 通过“加一条非树边、删去其基本回路上的另一条边”的交换，从一棵生成树出发
//! 广度优先地枚举不同的生成树。

use super::search::consecutive_pairs;
use crate::error::{Error, Result};
use crate::graph::{Edge, Graph, Vertex};
use std::collections::{BTreeSet, HashSet, VecDeque};
use tracing::debug;

impl Graph {
    /// 非树边 `edge` 加入当前生成树后闭合的唯一回路
    ///
    /// 返回闭合顶点序列；`edge` 已在树中时没有回路，返回 `None`。
    pub fn fundamental_cycle(&self, edge: &Edge) -> Option<Vec<Vertex>> {
        let mut with_edge = self.clone();
        with_edge.insert_edge(edge.clone());
        with_edge.find_cycle_from(edge.u())
    }

    /// 从 `base_tree` 出发，枚举至多 `k` 棵不同的生成树
    ///
    /// 结果的第一项是 `base_tree` 本身；候选树按边集去重。可交换的生成树不足 `k` 棵时，
    /// 返回已找到的全部树，不视为错误。
    ///
    /// `base_tree` 不是子图时返回 [`Error::NotSubgraph`]，是子图但不是生成树时返回 [`Error::NotATree`]。
    pub fn k_spanning_trees(&self, base_tree: &Graph, k: usize) -> Result<Vec<Graph>> {
        if !base_tree.is_subgraph_of(self) {
            return Err(Error::NotSubgraph("基础生成树不是当前图的子图".to_string()));
        }
        if !self.is_spanning_tree(base_tree) {
            return Err(Error::NotATree);
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        let mut seen: HashSet<BTreeSet<Edge>> = HashSet::new();
        seen.insert(base_tree.edges().clone());
        let mut found = vec![base_tree.clone()];
        let mut queue = VecDeque::from([base_tree.clone()]);

        while let Some(tree) = queue.pop_front() {
            if found.len() >= k {
                break;
            }
            for e in self.edges().difference(tree.edges()) {
                let Some(cycle) = tree.fundamental_cycle(e) else {
                    continue;
                };
                for (a, b) in consecutive_pairs(&cycle) {
                    let Ok(f) = Edge::new(a, b) else {
                        continue;
                    };
                    if &f == e {
                        continue;
                    }
                    let mut candidate = tree.edges().clone();
                    candidate.insert(e.clone());
                    candidate.remove(&f);
                    if !seen.insert(candidate.clone()) {
                        continue;
                    }

                    let next = Graph::from_parts(tree.vertices().clone(), candidate);
                    found.push(next.clone());
                    debug!(found = found.len(), added = %e, removed = %f, "新生成树");
                    if found.len() >= k {
                        return Ok(found);
                    }
                    queue.push_back(next);
                }
            }
        }

        debug!(found = found.len(), requested = k, "生成树枚举结束");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(u: &str, v: &str) -> Edge {
        Edge::new(u, v).unwrap()
    }

    fn square() -> Graph {
        Graph::from_edges([("A", "B"), ("B", "D"), ("D", "C"), ("C", "A")]).unwrap()
    }

    fn k4() -> Graph {
        Graph::from_edges([
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
            ("B", "C"),
            ("B", "D"),
            ("C", "D"),
        ])
        .unwrap()
    }

    #[test]
    fn test_fundamental_cycle() {
        let g = square();
        let tree = g.find_spanning_tree(None).unwrap();
        let non_tree: Vec<&Edge> = g.edges().difference(tree.edges()).collect();
        assert_eq!(non_tree.len(), 1);

        let cycle = tree.fundamental_cycle(non_tree[0]).unwrap();
        assert_eq!(cycle.len(), 5);
        assert_eq!(cycle.first(), cycle.last());
        let vertices: BTreeSet<&Vertex> = cycle.iter().collect();
        assert_eq!(vertices.len(), 4);
    }

    #[test]
    fn test_fundamental_cycle_of_tree_edge() {
        let tree = Graph::from_edges([("A", "B"), ("B", "C")]).unwrap();
        assert!(tree.fundamental_cycle(&edge("A", "B")).is_none());
    }

    #[test]
    fn test_k_spanning_trees_square() {
        // 4-环恰有 4 棵生成树
        let g = square();
        let base = g.find_spanning_tree(None).unwrap();
        let trees = g.k_spanning_trees(&base, 10).unwrap();
        assert_eq!(trees.len(), 4);
        assert_eq!(trees[0], base);

        let distinct: HashSet<BTreeSet<Edge>> = trees.iter().map(|t| t.edges().clone()).collect();
        assert_eq!(distinct.len(), 4);
        for t in &trees {
            assert!(g.is_spanning_tree(t));
        }
    }

    #[test]
    fn test_k_spanning_trees_limit() {
        let g = k4();
        let base = g.find_spanning_tree(None).unwrap();
        let trees = g.k_spanning_trees(&base, 5).unwrap();
        assert_eq!(trees.len(), 5);
        for t in &trees {
            assert!(g.is_spanning_tree(t));
        }

        // K4 共有 16 棵生成树
        assert_eq!(g.k_spanning_trees(&base, 100).unwrap().len(), 16);
        assert!(g.k_spanning_trees(&base, 0).unwrap().is_empty());
    }

    #[test]
    fn test_k_spanning_trees_of_tree() {
        let g = Graph::from_edges([("A", "B"), ("B", "C")]).unwrap();
        let trees = g.k_spanning_trees(&g, 3).unwrap();
        assert_eq!(trees, vec![g]);
    }

    #[test]
    fn test_k_spanning_trees_rejects_non_spanning_base() {
        let g = k4();
        // 含回路的 4-环 A-B-D-C
        let cyclic = Graph::from_edges([("A", "B"), ("B", "D"), ("D", "C"), ("C", "A")]).unwrap();
        assert!(matches!(g.k_spanning_trees(&cyclic, 5), Err(Error::NotATree)));

        // 不覆盖所有顶点的树
        let partial = Graph::from_edges([("A", "B")]).unwrap();
        assert!(matches!(g.k_spanning_trees(&partial, 5), Err(Error::NotATree)));
    }

    #[test]
    fn test_k_spanning_trees_rejects_foreign_base() {
        let g = square();
        let foreign = Graph::from_edges([("A", "D")]).unwrap();
        assert!(matches!(
            g.k_spanning_trees(&foreign, 3),
            Err(Error::NotSubgraph(_))
        ));
    }
}
