//! 深度优先搜索：简单路径与环
//!
//! 使用显式栈代替递归，兄弟节点按顶点升序访问，结果可复现。

use crate::error::Result;
use crate::graph::{Graph, Vertex};
use std::collections::{BTreeMap, BTreeSet};

impl Graph {
    /// 查找 `start` 到 `goal` 的一条简单路径
    ///
    /// 贪心地按升序探索邻居，遇到死路回溯；返回找到的第一条路径（不一定最短）。
    pub fn simple_path(&self, start: &str, goal: &str) -> Result<Option<Vec<Vertex>>> {
        let start = self.ensure_vertex(start)?;
        let goal = self.ensure_vertex(goal)?;

        if start == goal {
            return Ok(Some(vec![start.clone()]));
        }

        let mut visited: BTreeSet<&Vertex> = BTreeSet::new();
        visited.insert(start);
        // 栈中每一帧是路径上的一个顶点及其尚未尝试的邻居
        let mut stack = vec![(start, self.adjacent(start))];

        while let Some((_, neighbors)) = stack.last_mut() {
            match neighbors.next() {
                Some(w) if !visited.contains(w) => {
                    visited.insert(w);
                    if w == goal {
                        let mut path: Vec<Vertex> = stack.iter().map(|(v, _)| (*v).clone()).collect();
                        path.push(w.clone());
                        return Ok(Some(path));
                    }
                    stack.push((w, self.adjacent(w)));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                }
            }
        }

        Ok(None)
    }

    /// 在 `v` 所在连通分量中查找一个环
    ///
    /// 第一条回边（指向已访问的非父顶点）闭合一个环。返回闭合序列
    /// `[w, ..., u, w]`，`w` 为回边指向的顶点；分量无环时返回 `None`。
    pub fn cycle_containing(&self, v: &str) -> Result<Option<Vec<Vertex>>> {
        let v = self.ensure_vertex(v)?;
        Ok(self.find_cycle_from(v))
    }

    pub(crate) fn find_cycle_from(&self, root: &Vertex) -> Option<Vec<Vertex>> {
        let mut parent: BTreeMap<&Vertex, &Vertex> = BTreeMap::new();
        let mut visited: BTreeSet<&Vertex> = BTreeSet::new();
        visited.insert(root);
        let mut stack = vec![(root, self.adjacent(root))];

        while let Some((u, neighbors)) = stack.last_mut() {
            let u: &Vertex = *u;
            let Some(w) = neighbors.next() else {
                stack.pop();
                continue;
            };
            if parent.get(u) == Some(&w) {
                continue;
            }
            if visited.contains(w) {
                // 沿父指针从 u 回溯到 w
                let mut cycle = vec![w.clone(), u.clone()];
                let mut x = u;
                while x != w {
                    x = *parent.get(x)?;
                    cycle.push(x.clone());
                }
                cycle.reverse();
                return Some(cycle);
            }
            visited.insert(w);
            parent.insert(w, u);
            stack.push((w, self.adjacent(w)));
        }

        None
    }
}

/// 闭合顶点序列中相邻顶点构成的边对
pub(crate) fn consecutive_pairs(walk: &[Vertex]) -> impl Iterator<Item = (&Vertex, &Vertex)> {
    walk.windows(2).map(|w| (&w[0], &w[1]))
}
