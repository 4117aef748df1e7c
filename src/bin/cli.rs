//! GraphLab CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use graphlab::cli::{CommandCompleter, CommandResult, Session};
use graphlab::import::{CsvLoader, LoaderConfig};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphlab-cli")]
#[command(about = "GraphLab 命令行工具：简单无向图的构建、查询与树分析")]
#[command(version)]
struct Args {
    /// CSV 文件目录
    #[arg(short, long, env = "GRAPHLAB_FILES_DIR", default_value = "./files")]
    files_dir: PathBuf,

    /// `files` 命令最多列出的文件数
    #[arg(long, default_value = "15")]
    list_limit: usize,

    /// 依次执行给定命令后退出（可重复）
    #[arg(short = 'e', long)]
    execute: Vec<String>,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,

    /// 不读写历史记录
    #[arg(long)]
    no_history: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".graphlab_history"))
}

/// 打印命令结果，返回是否应退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            println!("{}", msg);
            false
        }
        CommandResult::Error(msg) => {
            println!("{} {}", "错误:".red().bold(), msg);
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let loader = CsvLoader::new(LoaderConfig {
        base_dir: args.files_dir.clone(),
        list_limit: args.list_limit,
    })
    .with_context(|| format!("无法使用 CSV 目录 {}", args.files_dir.display()))?;
    let files = loader.list_csv_files().unwrap_or_default();
    let mut session = Session::new(loader);

    // 批处理模式：遇到第一个错误即以非零状态退出
    if !args.execute.is_empty() {
        for command in &args.execute {
            let result = session.execute(command);
            let failed = matches!(result, CommandResult::Error(_));
            if report(result) {
                break;
            }
            if failed {
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    println!("{}", "GraphLab CLI - 简单无向图实验室".bold());
    println!("===============================");
    println!("CSV 目录: {}", session.loader().base_dir().display());
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new(files)));

    let history = if args.no_history { None } else { history_path() };
    if let Some(path) = &history {
        if rl.load_history(path).is_err() {
            debug!(path = %path.display(), "没有历史记录");
        }
    }

    loop {
        match rl.readline("graphlab> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                let refresh = line.starts_with("files");
                if report(session.execute(line)) {
                    break;
                }
                if refresh {
                    if let (Some(helper), Ok(files)) =
                        (rl.helper_mut(), session.loader().list_csv_files())
                    {
                        helper.set_files(files);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            warn!(error = %e, "保存历史记录失败");
        }
    }

    println!("再见！");
    Ok(())
}
