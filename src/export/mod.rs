//! 图导出
//!
//! - Graphviz DOT：无向 `graph`，顶点与边按规范顺序输出，结果确定
//! - JSON 快照：`{ "vertices": [...], "edges": [[u, v], ...] }`

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use std::io::Write;

/// 将图以 DOT 格式写入 `writer`
///
/// `highlight` 中的边（例如一棵生成树）以红色粗线绘制。
pub fn write_dot<W: Write>(graph: &Graph, highlight: Option<&Graph>, writer: &mut W) -> Result<()> {
    writeln!(writer, "graph G {{")?;
    for v in graph.vertices() {
        writeln!(writer, "    {};", quote(v))?;
    }
    for e in graph.edges() {
        let marked = highlight.is_some_and(|h| h.edges().contains(e));
        if marked {
            writeln!(writer, "    {} -- {} [color=red, penwidth=2];", quote(e.u()), quote(e.v()))?;
        } else {
            writeln!(writer, "    {} -- {};", quote(e.u()), quote(e.v()))?;
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}

/// DOT 文本
pub fn to_dot(graph: &Graph) -> String {
    render(graph, None)
}

/// DOT 文本，`highlight` 的边高亮
pub fn to_dot_highlighted(graph: &Graph, highlight: &Graph) -> String {
    render(graph, Some(highlight))
}

fn render(graph: &Graph, highlight: Option<&Graph>) -> String {
    let mut buf = Vec::new();
    // 写入内存缓冲不会失败
    if write_dot(graph, highlight, &mut buf).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// DOT 标识符一律加引号
fn quote(v: &Vertex) -> String {
    let escaped = v.as_str().replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// 序列化为格式化的 JSON
pub fn to_json(graph: &Graph) -> Result<String> {
    serde_json::to_string_pretty(graph).map_err(|e| Error::SerializationError(e.to_string()))
}

/// 从 JSON 快照恢复图，边会重新校验
pub fn from_json(json: &str) -> Result<Graph> {
    serde_json::from_str(json).map_err(|e| Error::SerializationError(e.to_string()))
}
