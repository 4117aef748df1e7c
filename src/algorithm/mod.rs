//! 图算法模块
//!
//! 以 `impl Graph` 的形式提供查询、集合运算、全局性质、树分析和生成树枚举

mod properties;
mod search;
mod set_ops;
mod spanning;
mod tree;
