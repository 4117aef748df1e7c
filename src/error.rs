//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("简单图不允许自环: {0}")]
    SelfLoop(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("尺寸不匹配: 期望 {expected}, 实际 {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("格式错误: {0}")]
    FormatError(String),

    #[error("图不是树")]
    NotATree,

    #[error("图不连通")]
    NotConnected,

    #[error("不是子图: {0}")]
    NotSubgraph(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV 错误: {0}")]
    CsvError(#[from] csv::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
