//! GraphLab - 简单无向图实验室
//!
//! 面向图论教学与实验的有限简单无向图引擎，支持：
//! - 邻接矩阵、关联矩阵、邻接表之间的相互转换
//! - 邻居、路径、回路等查询，以及并、交、对称差、删点、删边、合并顶点
//! - 连通性、欧拉回路、哈密顿回路判定
//! - 树的中心、中心树、生成树枚举和生成树之间的距离
//! - CSV 导入、Graphviz DOT 与 JSON 导出

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod export;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{default_labels, Edge, Graph, GraphSnapshot, Matrix, Vertex};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
