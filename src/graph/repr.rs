//! 表示转换
//!
//! 邻接矩阵、关联矩阵、邻接表与内部模型之间的互相转换。
//! 所有输出都按顶点升序 / 规范边顺序排列，与插入顺序无关。

use super::edge::Edge;
use super::graph::Graph;
use super::vertex::Vertex;
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};

/// 0/1 矩阵
pub type Matrix = Vec<Vec<u8>>;

/// 默认顶点标签 `"0".."n-1"`
pub fn default_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

impl Graph {
    /// 邻接矩阵（n×n，行列按顶点升序）
    pub fn adjacency_matrix(&self) -> Matrix {
        let index = self.vertex_index();
        let n = self.vertex_count();
        let mut m = vec![vec![0u8; n]; n];
        for e in self.edges() {
            let (i, j) = (index[e.u()], index[e.v()]);
            m[i][j] = 1;
            m[j][i] = 1;
        }
        m
    }

    /// 从邻接矩阵构造图
    ///
    /// 只读取严格上三角（`i < j`），非零单元格即一条边。每个标签都成为顶点。
    pub fn from_adjacency_matrix<S: AsRef<str>>(m: &[Vec<u8>], labels: &[S]) -> Result<Self> {
        let n = m.len();
        if labels.len() != n {
            return Err(Error::SizeMismatch {
                expected: n,
                actual: labels.len(),
            });
        }
        if let Some((i, row)) = m.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(Error::FormatError(format!(
                "邻接矩阵必须是方阵: 第 {} 行有 {} 列, 期望 {}",
                i,
                row.len(),
                n
            )));
        }

        let mut graph = Graph::new();
        for label in labels {
            graph.add_vertex(label.as_ref());
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if m[i][j] != 0 {
                    graph.add_edge(labels[i].as_ref(), labels[j].as_ref())?;
                }
            }
        }
        Ok(graph)
    }

    /// 关联矩阵（n×m）
    ///
    /// 行按顶点升序，列按规范边字典序；每列恰有两个 1。
    pub fn incidence_matrix(&self) -> Matrix {
        let index = self.vertex_index();
        let mut m = vec![vec![0u8; self.edge_count()]; self.vertex_count()];
        for (col, e) in self.edges().iter().enumerate() {
            m[index[e.u()]][col] = 1;
            m[index[e.v()]][col] = 1;
        }
        m
    }

    /// 从关联矩阵构造图
    ///
    /// 每一列必须恰好有两行为 1，否则返回格式错误。
    pub fn from_incidence_matrix<S: AsRef<str>>(m: &[Vec<u8>], labels: &[S]) -> Result<Self> {
        let n = m.len();
        if labels.len() != n {
            return Err(Error::SizeMismatch {
                expected: n,
                actual: labels.len(),
            });
        }
        let cols = m.first().map_or(0, Vec::len);
        if m.iter().any(|row| row.len() != cols) {
            return Err(Error::FormatError("关联矩阵不是矩形".to_string()));
        }

        let mut graph = Graph::new();
        for label in labels {
            graph.add_vertex(label.as_ref());
        }
        for col in 0..cols {
            let rows: Vec<usize> = (0..n).filter(|&r| m[r][col] == 1).collect();
            if rows.len() != 2 {
                return Err(Error::FormatError(format!(
                    "关联矩阵第 {} 列有 {} 个 1, 简单图要求恰好 2 个",
                    col,
                    rows.len()
                )));
            }
            graph.add_edge(labels[rows[0]].as_ref(), labels[rows[1]].as_ref())?;
        }
        Ok(graph)
    }

    /// 邻接表（键与邻居均为升序）
    pub fn adjacency_list(&self) -> BTreeMap<Vertex, Vec<Vertex>> {
        self.vertices()
            .iter()
            .map(|v| (v.clone(), self.adjacent(v).cloned().collect()))
            .collect()
    }

    /// 从邻接表构造图
    ///
    /// 每个键都成为顶点；两个方向重复列出的边折叠为一条规范边。
    pub fn from_adjacency_list<I, K, N, V>(list: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<Vertex>,
        N: IntoIterator<Item = V>,
        V: Into<Vertex>,
    {
        let mut graph = Graph::new();
        for (u, neighbors) in list {
            let u = u.into();
            graph.add_vertex(&u);
            for v in neighbors {
                graph.add_edge(&u, v)?;
            }
        }
        Ok(graph)
    }

    /// 顶点到矩阵下标的映射
    fn vertex_index(&self) -> HashMap<&Vertex, usize> {
        self.vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect()
    }

    /// 按列顺序列出边，与 [`Graph::incidence_matrix`] 的列一一对应
    pub fn edge_columns(&self) -> Vec<&Edge> {
        self.edges().iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn square() -> Graph {
        Graph::from_edges([("A", "B"), ("B", "D"), ("D", "C"), ("C", "A")]).unwrap()
    }

    fn random_graph(rng: &mut StdRng, n: usize, p: f64) -> Graph {
        let labels: Vec<String> = (0..n).map(|i| format!("v{:02}", i)).collect();
        let mut g = Graph::new();
        for label in &labels {
            g.add_vertex(label);
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(p) {
                    g.add_edge(&labels[i], &labels[j]).unwrap();
                }
            }
        }
        g
    }

    fn sorted_labels(g: &Graph) -> Vec<String> {
        g.vertices().iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_adjacency_matrix() {
        let g = square();
        assert_eq!(
            g.adjacency_matrix(),
            vec![
                vec![0, 1, 1, 0],
                vec![1, 0, 0, 1],
                vec![1, 0, 0, 1],
                vec![0, 1, 1, 0],
            ]
        );
    }

    #[test]
    fn test_adjacency_matrix_roundtrip() {
        let g = square();
        let g2 = Graph::from_adjacency_matrix(&g.adjacency_matrix(), &sorted_labels(&g)).unwrap();
        assert_eq!(g2.edges(), g.edges());
        assert_eq!(g2.vertices(), g.vertices());
    }

    #[test]
    fn test_adjacency_matrix_size_mismatch() {
        let m = vec![vec![0, 1], vec![1, 0]];
        let err = Graph::from_adjacency_matrix(&m, &["A"]).unwrap_err();
        assert!(matches!(err, Error::SizeMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_adjacency_matrix_not_square() {
        let m = vec![vec![0, 1, 0], vec![1, 0]];
        let err = Graph::from_adjacency_matrix(&m, &["A", "B"]).unwrap_err();
        assert!(matches!(err, Error::FormatError(_)));
    }

    #[test]
    fn test_adjacency_matrix_reads_upper_triangle() {
        // 下三角与对角线被忽略
        let m = vec![vec![1, 1, 0], vec![0, 1, 0], vec![1, 0, 0]];
        let g = Graph::from_adjacency_matrix(&m, &["A", "B", "C"]).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains_edge("A", "B"));
        assert!(g.contains_vertex("C"));
    }

    #[test]
    fn test_incidence_matrix() {
        let g = square();
        // 列顺序: (A,B) (A,C) (B,D) (C,D)
        assert_eq!(
            g.incidence_matrix(),
            vec![
                vec![1, 1, 0, 0],
                vec![1, 0, 1, 0],
                vec![0, 1, 0, 1],
                vec![0, 0, 1, 1],
            ]
        );
        let cols: Vec<String> = g.edge_columns().iter().map(|e| e.to_string()).collect();
        assert_eq!(cols, vec!["(A, B)", "(A, C)", "(B, D)", "(C, D)"]);
    }

    #[test]
    fn test_incidence_matrix_roundtrip() {
        let g = square();
        let g2 = Graph::from_incidence_matrix(&g.incidence_matrix(), &sorted_labels(&g)).unwrap();
        assert_eq!(g2.edges(), g.edges());
        assert_eq!(g2.vertices(), g.vertices());
    }

    #[test]
    fn test_incidence_matrix_bad_column() {
        let m = vec![vec![1, 1], vec![1, 0], vec![1, 0]];
        let err = Graph::from_incidence_matrix(&m, &["A", "B", "C"]).unwrap_err();
        assert!(matches!(err, Error::FormatError(_)));

        let m = vec![vec![1], vec![0]];
        assert!(Graph::from_incidence_matrix(&m, &["A", "B"]).is_err());
    }

    #[test]
    fn test_incidence_matrix_errors_on_shape() {
        let m = vec![vec![1, 0], vec![1]];
        assert!(matches!(
            Graph::from_incidence_matrix(&m, &["A", "B"]),
            Err(Error::FormatError(_))
        ));
        let m = vec![vec![1], vec![1]];
        assert!(matches!(
            Graph::from_incidence_matrix(&m, &["A"]),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_adjacency_list_roundtrip() {
        let mut g = square();
        g.add_vertex("Z");
        let list = g.adjacency_list();
        assert_eq!(list[&Vertex::from("A")], vec![Vertex::from("B"), Vertex::from("C")]);
        assert!(list[&Vertex::from("Z")].is_empty());

        let g2 = Graph::from_adjacency_list(list).unwrap();
        assert_eq!(g2, g);
    }

    #[test]
    fn test_adjacency_list_collapses_duplicates() {
        let g = Graph::from_adjacency_list([
            ("A", vec!["B", "C"]),
            ("B", vec!["A"]),
            ("C", vec!["A"]),
        ])
        .unwrap();
        assert_eq!(g.edge_count(), 2);

        let err = Graph::from_adjacency_list([("A", vec!["A"])]).unwrap_err();
        assert!(matches!(err, Error::SelfLoop(_)));
    }

    #[test]
    fn test_output_independent_of_insertion_order() {
        let g1 = Graph::from_edges([("C", "A"), ("B", "C"), ("A", "B")]).unwrap();
        let g2 = Graph::from_edges([("A", "B"), ("A", "C"), ("C", "B")]).unwrap();
        assert_eq!(g1.adjacency_matrix(), g2.adjacency_matrix());
        assert_eq!(g1.incidence_matrix(), g2.incidence_matrix());
        assert_eq!(g1.adjacency_list(), g2.adjacency_list());
    }

    #[test]
    fn test_random_graph_properties() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.gen_range(0..12);
            let g = random_graph(&mut rng, n, 0.35);
            let labels = sorted_labels(&g);

            let adj = g.adjacency_matrix();
            for i in 0..n {
                assert_eq!(adj[i][i], 0);
                for j in 0..n {
                    assert_eq!(adj[i][j], adj[j][i]);
                }
            }

            let from_adj = Graph::from_adjacency_matrix(&adj, &labels).unwrap();
            assert_eq!(from_adj.edges(), g.edges());

            let from_inc = Graph::from_incidence_matrix(&g.incidence_matrix(), &labels).unwrap();
            assert_eq!(from_inc.edges(), g.edges());

            let from_list = Graph::from_adjacency_list(g.adjacency_list()).unwrap();
            assert_eq!(from_list.edges(), g.edges());

            let degree_sum: usize = g.degrees().values().sum();
            assert_eq!(degree_sum, 2 * g.edge_count());
            assert!(g.edges().iter().all(|e| e.u() < e.v()));

            if n > 0 && g.is_fully_connected() {
                let tree = g.find_spanning_tree(None).unwrap();
                assert_eq!(tree.edge_count(), n - 1);
                assert!(g.is_spanning_tree(&tree));
            }
        }
    }

    #[test]
    fn test_default_labels() {
        assert_eq!(default_labels(3), vec!["0", "1", "2"]);
    }
}
