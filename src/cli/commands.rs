//! 命令处理
//!
//! 一行一条命令；`Session` 保存当前图并把每条命令的输出作为字符串返回，
//! 不直接打印，方便单命令模式和测试复用。

use super::completer::COMMANDS;
use super::printer::{self, PrintMode, Printer};
use crate::error::{Error, Result};
use crate::export;
use crate::graph::{default_labels, Graph, Matrix};
use crate::import::CsvLoader;
use colored::Colorize;

/// 命令执行结果
#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行，无输出
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 交互会话
pub struct Session {
    graph: Option<Graph>,
    loader: CsvLoader,
    printer: Printer,
}

impl Session {
    pub fn new(loader: CsvLoader) -> Self {
        Self {
            graph: None,
            loader,
            printer: Printer::default(),
        }
    }

    /// 当前图
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn loader(&self) -> &CsvLoader {
        &self.loader
    }

    /// 解析并执行一条命令
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let input = input.trim();
        if input.is_empty() {
            return CommandResult::Continue;
        }
        let (cmd, args) = match input.split_once(char::is_whitespace) {
            Some((cmd, args)) => (cmd.to_lowercase(), args.trim()),
            None => (input.to_lowercase(), ""),
        };

        match self.dispatch(&cmd, args) {
            Ok(result) => result,
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    fn dispatch(&mut self, cmd: &str, args: &str) -> Result<CommandResult> {
        // 不需要当前图的命令
        match cmd {
            "quit" | "exit" | "q" => return Ok(CommandResult::Exit),
            "help" | "h" | "?" => return Ok(message(printer::help_text())),
            "edges" => {
                let graph = Graph::from_edges(parse_edge_list(args)?)?;
                return Ok(self.replace(graph, "已创建图"));
            }
            "matrix" => {
                let (m, labels) = parse_matrix(args)?;
                let graph = Graph::from_adjacency_matrix(&m, &labels)?;
                return Ok(self.replace(graph, "已由邻接矩阵创建图"));
            }
            "incidence" => {
                let (m, labels) = parse_matrix(args)?;
                let graph = Graph::from_incidence_matrix(&m, &labels)?;
                return Ok(self.replace(graph, "已由关联矩阵创建图"));
            }
            "file" => return self.load_file(args),
            "files" => {
                let files = self.loader.list_csv_files()?;
                if files.is_empty() {
                    return Ok(message(format!(
                        "{} 中没有 CSV 文件",
                        self.loader.base_dir().display()
                    )));
                }
                return Ok(message(files.join("\n")));
            }
            "mode" => {
                let mode = match args {
                    "" => {
                        let current = match self.printer.mode() {
                            PrintMode::Table => "table",
                            PrintMode::Plain => "plain",
                        };
                        return Ok(message(format!("矩阵打印模式: {}", current)));
                    }
                    "table" => PrintMode::Table,
                    "plain" => PrintMode::Plain,
                    _ => return Ok(usage("mode [table|plain]")),
                };
                self.printer.set_mode(mode);
                return Ok(message(format!("矩阵打印模式: {}", args)));
            }
            _ => {}
        }

        if !COMMANDS.contains(&cmd) {
            return Ok(CommandResult::Error(format!(
                "未知命令: {}。输入 'help' 查看帮助。",
                cmd
            )));
        }
        let Some(graph) = self.graph.as_ref() else {
            return Ok(CommandResult::Error(
                "尚未加载图，请先使用 edges / matrix / incidence / file".to_string(),
            ));
        };
        let words: Vec<&str> = args.split_whitespace().collect();

        let out = match cmd {
            "show" => {
                let adj = format!("{}\n{}", "邻接矩阵:".bold(), self.printer.adjacency_matrix(graph));
                let inc = format!("{}\n{}", "关联矩阵:".bold(), self.printer.incidence_matrix(graph));
                let list = format!(
                    "{}\n{}",
                    "邻接表:".bold(),
                    printer::format_adjacency_list(&graph.adjacency_list())
                );
                match args {
                    "" => format!("{}\n{}\n{}", adj, inc, list),
                    "adj" => adj,
                    "inc" => inc,
                    "list" => list,
                    _ => return Ok(usage("show [adj|inc|list]")),
                }
            }
            "stats" => printer::format_stats(graph),

            // ---------- 查询 ----------
            "neighbors" => {
                let [v] = words[..] else {
                    return Ok(usage("neighbors <v>"));
                };
                let neigh = graph.neighbors(v)?;
                if neigh.is_empty() {
                    format!("{} 没有邻居", v)
                } else {
                    format!("{} 的邻居: {}", v, printer::format_vertices(&neigh))
                }
            }
            "adjacent" => {
                let [u, v] = words[..] else {
                    return Ok(usage("adjacent <u> <v>"));
                };
                format!("{} 与 {} 相邻: {}", u, v, printer::yes_no(graph.are_adjacent(u, v)?))
            }
            "path" => {
                let [u, v] = words[..] else {
                    return Ok(usage("path <u> <v>"));
                };
                match graph.simple_path(u, v)? {
                    Some(path) => format!("路径: {}", printer::format_walk(&path)),
                    None => format!("{} 与 {} 之间不存在路径", u, v),
                }
            }
            "cycle" => {
                let [v] = words[..] else {
                    return Ok(usage("cycle <v>"));
                };
                match graph.cycle_containing(v)? {
                    Some(cycle) => format!("回路: {}", printer::format_walk(&cycle)),
                    None => format!("{} 所在的分量中没有回路", v),
                }
            }
            "subgraph" => {
                let other = Graph::from_edges(parse_edge_list(args)?)?;
                if other.is_subgraph_of(graph) {
                    "输入的图是当前图的子图".to_string()
                } else if graph.is_subgraph_of(&other) {
                    "当前图是输入的图的子图".to_string()
                } else {
                    "两者互不为子图".to_string()
                }
            }

            // ---------- 变换 ----------
            "union" | "intersect" | "symdiff" => {
                let other = Graph::from_edges(parse_edge_list(args)?)?;
                let next = match cmd {
                    "union" => graph.union(&other),
                    "intersect" => graph.intersection(&other),
                    _ => graph.symmetric_difference(&other),
                };
                return Ok(self.replace(next, "结果"));
            }
            "remove-vertex" => {
                let [v] = words[..] else {
                    return Ok(usage("remove-vertex <v>"));
                };
                let next = graph.without_vertex(v)?;
                return Ok(self.replace(next, "删除顶点后"));
            }
            "remove-edge" => {
                let [u, v] = words[..] else {
                    return Ok(usage("remove-edge <u> <v>"));
                };
                let next = graph.without_edge(u, v)?;
                return Ok(self.replace(next, "删除边后"));
            }
            "merge" => {
                let [u, v] = words[..] else {
                    return Ok(usage("merge <v1> <v2>"));
                };
                let next = graph.merge_vertices(u, v)?;
                return Ok(self.replace(next, "合并后"));
            }

            // ---------- 性质 ----------
            "connected" => {
                let mut out = format!("连通: {}", printer::yes_no(graph.is_connected()));
                for (i, component) in graph.connected_components().iter().enumerate() {
                    let names: Vec<&str> = component.iter().map(|v| v.as_str()).collect();
                    out.push_str(&format!("\n  分量 {}: {{{}}}", i + 1, names.join(", ")));
                }
                out
            }
            "euler" => format!("欧拉回路: {}", printer::yes_no(graph.is_eulerian())),
            "hamilton" => match graph.hamiltonian_cycle() {
                Some(cycle) => format!("哈密顿回路: {}", printer::format_walk(&cycle)),
                None => "不存在哈密顿回路".to_string(),
            },

            // ---------- 树 ----------
            "tree" => {
                if graph.is_tree() {
                    let centers = graph.find_centers()?;
                    format!(
                        "树: {}\n中心: {}\n半径: {}",
                        printer::yes_no(true),
                        printer::format_vertices(&centers),
                        graph.radius()?
                    )
                } else {
                    format!("树: {}", printer::yes_no(false))
                }
            }
            "spanning" => {
                let start = words.first().copied();
                let tree = graph.find_spanning_tree(start)?;
                format!("生成树: {}", printer::format_edges(tree.edges()))
            }
            "central" => {
                let tree = graph.central_tree()?;
                format!("中心树: {}", printer::format_edges(tree.edges()))
            }
            "ktrees" => {
                let k = match words[..] {
                    [k] => k
                        .parse::<usize>()
                        .map_err(|_| Error::FormatError(format!("k 必须是非负整数: {}", k)))?,
                    _ => return Ok(usage("ktrees <k>")),
                };
                let base = graph.find_spanning_tree(None)?;
                let trees = graph.k_spanning_trees(&base, k)?;
                let mut out = format!("找到 {} 棵生成树:", trees.len());
                for (i, t) in trees.iter().enumerate() {
                    let d = graph
                        .distance_between_trees(&base, t)?
                        .map_or_else(|| "-".to_string(), |d| d.to_string());
                    out.push_str(&format!("\n  {}. [d={}] {}", i + 1, d, printer::format_edges(t.edges())));
                }
                out
            }

            // ---------- 导出 ----------
            "dot" => match args {
                "" => export::to_dot(graph),
                "spanning" => export::to_dot_highlighted(graph, &graph.find_spanning_tree(None)?),
                _ => return Ok(usage("dot [spanning]")),
            },
            "json" => export::to_json(graph)?,

            _ => {
                return Ok(CommandResult::Error(format!(
                    "未知命令: {}。输入 'help' 查看帮助。",
                    cmd
                )))
            }
        };
        Ok(message(out))
    }

    fn load_file(&mut self, args: &str) -> Result<CommandResult> {
        let Some((kind, name)) = args.split_once(char::is_whitespace) else {
            return Ok(usage("file <adj|inc|list> <文件名>"));
        };
        let name = name.trim();
        let graph = match kind {
            "adj" => self.loader.load_adjacency_matrix(name)?,
            "inc" => self.loader.load_incidence_matrix(name)?,
            "list" => self.loader.load_adjacency_list(name)?,
            _ => return Ok(usage("file <adj|inc|list> <文件名>")),
        };
        Ok(self.replace(graph, &format!("已从 {} 加载图", name)))
    }

    fn replace(&mut self, graph: Graph, what: &str) -> CommandResult {
        let msg = format!("{}: {}", what, graph);
        self.graph = Some(graph);
        message(msg)
    }
}

fn message(s: impl Into<String>) -> CommandResult {
    CommandResult::Message(s.into())
}

fn usage(s: &str) -> CommandResult {
    CommandResult::Error(format!("用法: {}", s))
}

/// 解析 `u v, u v; ...` 形式的边列表
pub fn parse_edge_list(args: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for chunk in args.split([',', ';']) {
        let words: Vec<&str> = chunk.split_whitespace().collect();
        match words[..] {
            [] => continue,
            [u, v] => pairs.push((u.to_string(), v.to_string())),
            _ => {
                return Err(Error::FormatError(format!(
                    "每条边必须恰好包含两个顶点: '{}'",
                    chunk.trim()
                )))
            }
        }
    }
    if pairs.is_empty() {
        return Err(Error::FormatError("边列表为空".to_string()));
    }
    Ok(pairs)
}

/// 解析 `0 1 / 1 0 [: A B]` 形式的矩阵和可选标签
///
/// 未给出标签时使用 `"0".."n-1"`。
pub fn parse_matrix(args: &str) -> Result<(Matrix, Vec<String>)> {
    let (body, labels) = match args.split_once(':') {
        Some((body, labels)) => (body, Some(labels)),
        None => (args, None),
    };

    let mut matrix = Matrix::new();
    for row in body.split('/') {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        let values = row
            .split_whitespace()
            .map(|cell| match cell {
                "0" => Ok(0),
                "1" => Ok(1),
                other => Err(Error::FormatError(format!("非法值 '{}'，只允许 0 或 1", other))),
            })
            .collect::<Result<Vec<u8>>>()?;
        matrix.push(values);
    }
    if matrix.is_empty() {
        return Err(Error::FormatError("矩阵为空".to_string()));
    }

    let labels = match labels {
        Some(l) => l.split_whitespace().map(str::to_string).collect(),
        None => default_labels(matrix.len()),
    };
    Ok((matrix, labels))
}
