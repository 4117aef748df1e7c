//! 全局性质：连通性、欧拉回路、哈密顿回路

use crate::graph::{Graph, Vertex};
use std::collections::BTreeSet;
use tracing::{debug, trace};

impl Graph {
    /// 从 `root` 出发可达的顶点集合（含 `root`），使用显式栈遍历
    pub(crate) fn reachable_from<'a>(&'a self, root: &'a Vertex) -> BTreeSet<&'a Vertex> {
        let mut seen = BTreeSet::new();
        seen.insert(root);
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for w in self.adjacent(u) {
                if seen.insert(w) {
                    stack.push(w);
                }
            }
        }
        seen
    }

    /// 是否连通
    ///
    /// 孤立顶点（度为 0）不参与判断：没有非孤立顶点时视为连通，
    /// 否则要求从任一非孤立顶点能到达所有非孤立顶点。
    pub fn is_connected(&self) -> bool {
        let active: BTreeSet<&Vertex> = self.non_isolated().collect();
        let Some(&root) = active.iter().next() else {
            return true;
        };
        self.reachable_from(root) == active
    }

    /// 所有顶点（含孤立顶点）是否互相可达
    pub(crate) fn is_fully_connected(&self) -> bool {
        match self.vertices().iter().next() {
            Some(root) => self.reachable_from(root).len() == self.vertex_count(),
            None => true,
        }
    }

    /// 连通分量（每个分量内顶点升序，分量按最小顶点排序）
    pub fn connected_components(&self) -> Vec<BTreeSet<Vertex>> {
        let mut assigned: BTreeSet<&Vertex> = BTreeSet::new();
        let mut components = Vec::new();
        for v in self.vertices() {
            if assigned.contains(v) {
                continue;
            }
            let component = self.reachable_from(v);
            assigned.extend(component.iter().copied());
            components.push(component.into_iter().cloned().collect());
        }
        components
    }

    /// 是否存在欧拉回路：连通且每个非孤立顶点度为偶数
    ///
    /// 不支持开放的欧拉路径。
    pub fn is_eulerian(&self) -> bool {
        self.is_connected() && self.degrees().values().all(|d| d % 2 == 0)
    }

    /// 回溯搜索哈密顿回路
    ///
    /// 从最小顶点出发，按升序尝试未访问的邻居；所有顶点用完且末顶点与起点相邻时接受。
    /// 返回以起点开始并结束的顶点序列。最坏情况指数复杂度，仅适用于小图。
    pub fn hamiltonian_cycle(&self) -> Option<Vec<Vertex>> {
        let n = self.vertex_count();
        if n < 3 {
            return None;
        }
        let start = self.vertices().iter().next()?;

        let mut path: Vec<&Vertex> = vec![start];
        let mut on_path: BTreeSet<&Vertex> = BTreeSet::new();
        on_path.insert(start);
        let mut stack = vec![self.adjacent(start)];
        let mut steps = 0usize;

        while let Some(neighbors) = stack.last_mut() {
            if path.len() == n {
                let last = path[n - 1];
                if self.contains_edge(last.as_str(), start.as_str()) {
                    let mut cycle: Vec<Vertex> = path.iter().map(|v| (*v).clone()).collect();
                    cycle.push(start.clone());
                    debug!(steps, "找到哈密顿回路");
                    return Some(cycle);
                }
                stack.pop();
                if let Some(v) = path.pop() {
                    on_path.remove(v);
                }
                continue;
            }

            match neighbors.next() {
                Some(w) if !on_path.contains(w) => {
                    steps += 1;
                    trace!(vertex = %w, depth = path.len(), "扩展路径");
                    on_path.insert(w);
                    path.push(w);
                    stack.push(self.adjacent(w));
                }
                Some(_) => {}
                None => {
                    stack.pop();
                    if let Some(v) = path.pop() {
                        on_path.remove(v);
                    }
                }
            }
        }

        debug!(steps, "不存在哈密顿回路");
        None
    }

    pub fn has_hamiltonian_cycle(&self) -> bool {
        self.hamiltonian_cycle().is_some()
    }
}
