//! 数据导入模块
//!
//! 从受限目录中的 CSV 文件读取邻接矩阵、关联矩阵或邻接表。
//! 分隔符在逗号与分号之间自动识别。

use crate::error::{Error, Result};
use crate::graph::{default_labels, Graph, Matrix};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 用于识别分隔符的样本字节数
const SNIFF_BYTES: usize = 1024;

/// 加载器配置
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// 唯一允许读取 CSV 的目录
    pub base_dir: PathBuf,
    /// `list_csv_files` 最多返回的文件数
    pub list_limit: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./files"),
            list_limit: 15,
        }
    }
}

/// CSV 图加载器
pub struct CsvLoader {
    base_dir: PathBuf,
    list_limit: usize,
}

impl CsvLoader {
    /// 创建加载器，目录不存在时自动创建
    pub fn new(config: LoaderConfig) -> Result<Self> {
        fs::create_dir_all(&config.base_dir)?;
        let base_dir = config.base_dir.canonicalize()?;
        debug!(base_dir = %base_dir.display(), "CSV 目录就绪");
        Ok(Self {
            base_dir,
            list_limit: config.list_limit,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 目录下的 `.csv` 文件名（字母序，至多 `list_limit` 个）
    pub fn list_csv_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            let is_csv = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if path.is_file() && is_csv {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        names.truncate(self.list_limit);
        Ok(names)
    }

    /// 解析文件名为目录内的安全路径，禁止路径穿越
    fn safe_path(&self, name: &str) -> Result<PathBuf> {
        let candidate = self.base_dir.join(name);
        if !candidate.is_file() {
            return Err(Error::NotFound(format!("文件 '{}' 不在 {}", name, self.base_dir.display())));
        }
        let resolved = candidate.canonicalize()?;
        if !resolved.starts_with(&self.base_dir) {
            return Err(Error::ImportError(format!(
                "不允许访问目录之外的路径: {}",
                name
            )));
        }
        Ok(resolved)
    }

    /// 读取并切分 CSV 记录，去掉空单元格和空行
    fn read_records(&self, name: &str) -> Result<Vec<Vec<String>>> {
        let path = self.safe_path(name)?;
        let content = fs::read_to_string(&path)?;
        let delimiter = detect_delimiter(&content);
        debug!(file = name, delimiter = %(delimiter as char), "读取 CSV");

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let cells: Vec<String> = record?
                .iter()
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        Ok(rows)
    }

    /// 读取 0/1 矩阵（邻接矩阵或关联矩阵）
    pub fn read_matrix(&self, name: &str) -> Result<Matrix> {
        let rows = self.read_records(name)?;
        let mut matrix = Matrix::with_capacity(rows.len());
        for row in rows {
            let mut values = Vec::with_capacity(row.len());
            for cell in row {
                match cell.as_str() {
                    "0" => values.push(0),
                    "1" => values.push(1),
                    other => {
                        return Err(Error::FormatError(format!(
                            "{} 中有非法值 '{}'，只允许 0 或 1",
                            name, other
                        )))
                    }
                }
            }
            matrix.push(values);
        }

        let Some(width) = matrix.first().map(Vec::len) else {
            return Err(Error::FormatError(format!("CSV 文件为空: {}", name)));
        };
        if matrix.iter().any(|r| r.len() != width) {
            return Err(Error::FormatError(format!("矩阵不是矩形: {}", name)));
        }
        Ok(matrix)
    }

    /// 读取邻接表：每行第一格为顶点，其余为邻居
    ///
    /// 保留文件中的行顺序；重复的邻居只保留首次出现，重复的顶点行报错。
    pub fn read_adj_list(&self, name: &str) -> Result<IndexMap<String, Vec<String>>> {
        let mut list = IndexMap::new();
        for row in self.read_records(name)? {
            let mut cells = row.into_iter();
            let Some(vertex) = cells.next() else {
                continue;
            };
            if list.contains_key(&vertex) {
                return Err(Error::ImportError(format!(
                    "顶点 '{}' 在 {} 中出现了多次",
                    vertex, name
                )));
            }
            let mut seen = HashSet::new();
            let neighbors: Vec<String> = cells.filter(|n| seen.insert(n.clone())).collect();
            list.insert(vertex, neighbors);
        }
        Ok(list)
    }

    /// 从邻接矩阵 CSV 构建图，标签为 `"0".."n-1"`
    pub fn load_adjacency_matrix(&self, name: &str) -> Result<Graph> {
        let m = self.read_matrix(name)?;
        Graph::from_adjacency_matrix(&m, &default_labels(m.len()))
    }

    /// 从关联矩阵 CSV 构建图，标签为 `"0".."n-1"`
    pub fn load_incidence_matrix(&self, name: &str) -> Result<Graph> {
        let m = self.read_matrix(name)?;
        Graph::from_incidence_matrix(&m, &default_labels(m.len()))
    }

    /// 从邻接表 CSV 构建图
    pub fn load_adjacency_list(&self, name: &str) -> Result<Graph> {
        Graph::from_adjacency_list(self.read_adj_list(name)?)
    }
}

/// 在逗号和分号之间选择出现次数更多的一个，平局取逗号
pub fn detect_delimiter(content: &str) -> u8 {
    let sample = &content.as_bytes()[..content.len().min(SNIFF_BYTES)];
    let commas = sample.iter().filter(|&&b| b == b',').count();
    let semis = sample.iter().filter(|&&b| b == b';').count();
    if semis > commas {
        b';'
    } else {
        b','
    }
}
