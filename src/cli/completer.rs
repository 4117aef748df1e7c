//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全：命令名、表示形式关键字和 CSV 文件名

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 所有命令名
pub const COMMANDS: &[&str] = &[
    "edges", "matrix", "incidence", "file", "files",
    "show", "mode", "stats",
    "neighbors", "adjacent", "path", "cycle", "subgraph",
    "union", "intersect", "symdiff", "remove-vertex", "remove-edge", "merge",
    "connected", "euler", "hamilton",
    "tree", "spanning", "central", "ktrees",
    "dot", "json",
    "help", "quit", "exit",
];

/// 第一个参数的可选值
fn get_sub_commands(command: &str) -> Option<&'static [&'static str]> {
    match command {
        "file" | "show" => Some(&["adj", "inc", "list"]),
        "mode" => Some(&["table", "plain"]),
        "dot" => Some(&["spanning"]),
        _ => None,
    }
}

fn pairs<'a>(candidates: impl IntoIterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
    candidates
        .into_iter()
        .filter(|c| c.starts_with(prefix))
        .map(|c| Pair {
            display: c.to_string(),
            replacement: c.to_string(),
        })
        .collect()
}

/// GraphLab CLI 补全器
#[derive(Default)]
pub struct CommandCompleter {
    /// `file` 命令可补全的文件名
    files: Vec<String>,
}

impl CommandCompleter {
    pub fn new(files: Vec<String>) -> Self {
        Self { files }
    }

    pub fn set_files(&mut self, files: Vec<String>) {
        self.files = files;
    }

    /// 返回替换起点和候选项
    fn candidates(&self, line: &str) -> (usize, Vec<Pair>) {
        let words: Vec<&str> = line.split_whitespace().collect();
        let at_word_end = !line.is_empty() && !line.ends_with(' ');
        let current = if at_word_end { words.last().copied().unwrap_or("") } else { "" };
        let start = line.len() - current.len();
        // 当前单词之前已完成的单词数
        let done = if at_word_end { words.len().saturating_sub(1) } else { words.len() };

        match done {
            0 => (start, pairs(COMMANDS.iter().copied(), current)),
            1 => match get_sub_commands(words[0]) {
                Some(subs) => (start, pairs(subs.iter().copied(), current)),
                None => (start, Vec::new()),
            },
            2 if words[0] == "file" => (start, pairs(self.files.iter().map(String::as_str), current)),
            _ => (start, Vec::new()),
        }
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
