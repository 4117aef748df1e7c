//! GraphLab 演示程序
//!
//! 构建两个示例图，打印邻接表、欧拉/哈密顿性质以及两图的并、交、对称差。

use colored::Colorize;
use graphlab::cli::printer::{format_adjacency_list, format_edges, format_walk, yes_no};
use graphlab::Graph;
use tracing_subscriber::EnvFilter;

/// G1：六边形 A-B-C-D-E-F-A 加弦 C-F
const G1_ASCII: &str = r"
        A-----B
       /       \
      F---------C
       \       /
        E-----D
";

/// G2：四边形 C-G-H-F-C，E 同时连接 G 与 F
const G2_ASCII: &str = r"
        C-----G
        |    /|
        |   E |
        |  /  |
        F-----H
";

fn g1() -> graphlab::Result<Graph> {
    Graph::from_adjacency_list([
        ("A", vec!["B", "F"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["B", "D", "F"]),
        ("D", vec!["C", "E"]),
        ("E", vec!["D", "F"]),
        ("F", vec!["E", "A", "C"]),
    ])
}

fn g2() -> graphlab::Result<Graph> {
    Graph::from_adjacency_list([
        ("C", vec!["F", "G"]),
        ("F", vec!["C", "E", "H"]),
        ("E", vec!["F", "G"]),
        ("G", vec!["C", "E", "H"]),
        ("H", vec!["F", "G"]),
    ])
}

fn print_graph(title: &str, g: &Graph, ascii: Option<&str>) {
    println!("\n{}", format!("=== {} ===", title).bold());
    if let Some(art) = ascii {
        println!("{}", art);
    }
    println!("|V| = {}, |E| = {}", g.vertex_count(), g.edge_count());
    for line in format_adjacency_list(&g.adjacency_list()).lines() {
        println!("  {}", line);
    }
}

fn print_properties(name: &str, g: &Graph) -> graphlab::Result<()> {
    println!("\n{} 的性质:", name);
    println!("  欧拉回路  : {}", yes_no(g.is_eulerian()));
    match g.hamiltonian_cycle() {
        Some(cycle) => println!("  哈密顿回路: {} ({})", yes_no(true), format_walk(&cycle)),
        None => println!("  哈密顿回路: {}", yes_no(false)),
    }
    if g.is_connected() {
        let tree = g.find_spanning_tree(None)?;
        println!("  生成树    : {}", format_edges(tree.edges()));
        let central = g.central_tree()?;
        println!("  中心树    : {}", format_edges(central.edges()));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .compact()
        .init();

    let g1 = g1()?;
    let g2 = g2()?;

    print_graph("G1", &g1, Some(G1_ASCII));
    print_graph("G2", &g2, Some(G2_ASCII));

    print_properties("G1", &g1)?;
    print_properties("G2", &g2)?;

    print_graph("并集 G1 ∪ G2", &g1.union(&g2), None);
    print_graph("交集 G1 ∩ G2", &g1.intersection(&g2), None);
    print_graph("对称差 G1 △ G2", &g1.symmetric_difference(&g2), None);

    println!("\n演示结束。");
    Ok(())
}
