//! 结果打印器
//!
//! 把矩阵、邻接表、度数和路径格式化为表格或单行文本

use crate::graph::{Edge, Graph, Matrix, Vertex};
use colored::Colorize;
use prettytable::{format, row, Cell, Row, Table};
use std::collections::BTreeMap;

/// 矩阵打印模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintMode {
    /// 带行列标签的表格
    Table,
    /// 每行一串 0/1，便于复制回 `matrix` 命令
    Plain,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 邻接矩阵，行列都按顶点升序
    pub fn adjacency_matrix(&self, graph: &Graph) -> String {
        let labels: Vec<String> = graph.vertices().iter().map(Vertex::to_string).collect();
        self.matrix(&labels, &labels, &graph.adjacency_matrix())
    }

    /// 关联矩阵，列按规范边顺序
    pub fn incidence_matrix(&self, graph: &Graph) -> String {
        let rows: Vec<String> = graph.vertices().iter().map(Vertex::to_string).collect();
        let cols: Vec<String> = graph.edge_columns().into_iter().map(Edge::to_string).collect();
        self.matrix(&rows, &cols, &graph.incidence_matrix())
    }

    fn matrix(&self, row_labels: &[String], col_labels: &[String], m: &Matrix) -> String {
        if m.is_empty() {
            return "(空矩阵)\n".to_string();
        }
        match self.mode {
            PrintMode::Plain => m
                .iter()
                .map(|r| {
                    let cells: Vec<String> = r.iter().map(u8::to_string).collect();
                    format!("{}\n", cells.join(" "))
                })
                .collect(),
            PrintMode::Table => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);

                let mut header = vec![Cell::new("")];
                header.extend(col_labels.iter().map(|c| Cell::new(c)));
                table.set_titles(Row::new(header));

                for (label, r) in row_labels.iter().zip(m) {
                    let mut cells = vec![Cell::new(label)];
                    cells.extend(r.iter().map(|x| Cell::new(&x.to_string())));
                    table.add_row(Row::new(cells));
                }
                table.to_string()
            }
        }
    }
}

/// 邻接表，每行 `v: n1, n2`
pub fn format_adjacency_list(list: &BTreeMap<Vertex, Vec<Vertex>>) -> String {
    list.iter()
        .map(|(v, neigh)| format!("{}: {}\n", v, join(neigh, ", ")))
        .collect()
}

/// |V|、|E| 与每个顶点的度
pub fn format_stats(graph: &Graph) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Vertex", "Degree"]);
    for (v, d) in graph.degrees() {
        table.add_row(row![v, d]);
    }
    format!(
        "|V| = {}\n|E| = {}\n{}",
        graph.vertex_count(),
        graph.edge_count(),
        table
    )
}

/// 路径或回路，形如 `A -> B -> C`
pub fn format_walk(walk: &[Vertex]) -> String {
    join(walk, " -> ")
}

/// 顶点列表，形如 `A, B, C`
pub fn format_vertices(vertices: &[Vertex]) -> String {
    join(vertices, ", ")
}

/// 边列表，形如 `(A, B), (B, C)`
pub fn format_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> String {
    let parts: Vec<String> = edges.into_iter().map(Edge::to_string).collect();
    if parts.is_empty() {
        "(无边)".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn yes_no(flag: bool) -> String {
    if flag {
        "是".green().bold().to_string()
    } else {
        "否".red().bold().to_string()
    }
}

fn join(items: &[Vertex], sep: &str) -> String {
    let parts: Vec<&str> = items.iter().map(Vertex::as_str).collect();
    parts.join(sep)
}

/// 帮助信息
pub fn help_text() -> String {
    r#"
═══════════════════════════════════════════════════════════════
                   GraphLab CLI 命令帮助
═══════════════════════════════════════════════════════════════

构建图:
  edges <u v, u v, ...>          由边列表创建图
                                 示例: edges A B, B D, D C, C A
  matrix <行/行/...> [: 标签]     由邻接矩阵创建图
                                 示例: matrix 0 1 1 / 1 0 0 / 1 0 0 : A B C
  incidence <行/行/...> [: 标签]  由关联矩阵创建图（每列恰有两个 1）
  file <adj|inc|list> <文件名>   从 CSV 文件加载
  files                          列出可用的 CSV 文件

查看:
  show [adj|inc|list]            显示表示形式（默认全部）
  mode [table|plain]             查看或设置矩阵打印模式
  stats                          |V|、|E| 和度数

查询:
  neighbors <v>                  邻居
  adjacent <u> <v>               是否相邻
  path <u> <v>                   简单路径
  cycle <v>                      v 所在分量中的一个回路
  subgraph <u v, ...>            与给定图比较子图关系

变换（结果替换当前图）:
  union | intersect | symdiff <u v, ...>
  remove-vertex <v>
  remove-edge <u> <v>
  merge <v1> <v2>

性质:
  connected                      连通性与连通分量
  euler                          欧拉回路判定
  hamilton                       哈密顿回路搜索

树:
  tree                           是否为树，树的中心与半径
  spanning [起点]                BFS 生成树
  central                        中心树
  ktrees <k>                     枚举至多 k 棵生成树及其与基础树的距离

导出:
  dot [spanning]                 Graphviz DOT（可高亮生成树）
  json                           JSON 快照

会话:
  help, h, ?                     显示帮助
  quit, exit, q                  退出

═══════════════════════════════════════════════════════════════
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        Graph::from_edges([("A", "B"), ("B", "C")]).unwrap()
    }

    #[test]
    fn test_plain_matrix() {
        let printer = Printer::new(PrintMode::Plain);
        assert_eq!(printer.adjacency_matrix(&path3()), "0 1 0\n1 0 1\n0 1 0\n");
        assert_eq!(printer.incidence_matrix(&path3()), "1 0\n1 1\n0 1\n");
    }

    #[test]
    fn test_table_matrix_has_labels() {
        let mut printer = Printer::default();
        let out = printer.incidence_matrix(&path3());
        assert!(out.contains("(A, B)"));
        assert!(out.contains("(B, C)"));

        printer.set_mode(PrintMode::Plain);
        assert_eq!(printer.mode(), PrintMode::Plain);
        assert_eq!(printer.adjacency_matrix(&Graph::new()), "(空矩阵)\n");
    }

    #[test]
    fn test_format_helpers() {
        let g = path3();
        assert_eq!(format_adjacency_list(&g.adjacency_list()), "A: B\nB: A, C\nC: B\n");
        let walk = g.simple_path("A", "C").unwrap().unwrap();
        assert_eq!(format_walk(&walk), "A -> B -> C");
        assert_eq!(format_edges(g.edges()), "(A, B), (B, C)");
        assert_eq!(format_edges(Graph::new().edges()), "(无边)");

        let stats = format_stats(&g);
        assert!(stats.starts_with("|V| = 3\n|E| = 2\n"));
    }
}
