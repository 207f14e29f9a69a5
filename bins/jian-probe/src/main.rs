//! jian-probe - 格式嗅探工具
//!
//! 读取文件开头的字节, 识别二进制格式并输出媒体类型.

mod input;
mod logging;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use jian_format::{DetectionResult, PROBE_READ_SIZE, Sniffer};

/// Jian 格式嗅探工具
#[derive(Parser, Debug)]
#[command(name = "jian-probe", version, about = "纯 Rust 二进制格式嗅探工具")]
struct Cli {
    /// 输入文件路径 ("-" 表示标准输入)
    inputs: Vec<PathBuf>,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 只输出媒体类型
    #[arg(long, conflicts_with = "json")]
    mime: bool,

    /// 按求值顺序列出支持的格式
    #[arg(long)]
    list: bool,

    /// 执行格式目录自检
    #[arg(long)]
    self_check: bool,

    /// 每个输入读取的字节数
    #[arg(long, default_value_t = PROBE_READ_SIZE)]
    read_size: usize,

    /// 日志文件目录 (不指定则不写文件)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// 日志级别 (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ============================================================
// 输出结构体
// ============================================================

/// 单个输入的嗅探结果
#[derive(Serialize)]
struct ProbeReport {
    input: String,
    bytes_read: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<FormatInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// 格式信息
#[derive(Serialize)]
struct FormatInfo {
    name: &'static str,
    mime_type: &'static str,
    extension: &'static str,
    category: &'static str,
}

impl From<DetectionResult> for FormatInfo {
    fn from(result: DetectionResult) -> Self {
        Self {
            name: result.name(),
            mime_type: result.mime_type,
            extension: result.extension,
            category: result.category().name(),
        }
    }
}

/// 目录条目
#[derive(Serialize)]
struct CatalogEntry {
    category: &'static str,
    name: &'static str,
    mime_type: &'static str,
    required_len: usize,
}

/// 退出码
const EXIT_OK: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_UNRECOGNIZED: i32 = 2;

// ============================================================
// 主逻辑
// ============================================================

fn main() {
    let cli = Cli::parse();

    let log_config = logging::LogConfig {
        file_prefix: "jian-probe".to_string(),
        verbosity: cli.verbose,
        directory: cli.log_dir.clone(),
    };
    if let Err(e) = logging::init(&log_config) {
        eprintln!("错误: {e:#}");
        process::exit(EXIT_FAILURE);
    }

    let sniffer = jian_format::sniffer();

    if cli.self_check {
        match sniffer.catalog().self_check() {
            Ok(()) => println!("格式目录自检通过: {} 个格式", sniffer.catalog().len()),
            Err(e) => {
                eprintln!("错误: {e}");
                process::exit(EXIT_FAILURE);
            }
        }
    }

    if cli.list {
        print_catalog(sniffer, cli.json);
    }

    if cli.inputs.is_empty() {
        if !cli.self_check && !cli.list {
            print_banner();
        }
        return;
    }

    let reports = probe_all(sniffer, &cli.inputs, cli.read_size);
    print_reports(&reports, &cli);
    process::exit(exit_code(&reports));
}

/// 并行嗅探所有输入, 结果保持输入顺序
fn probe_all(sniffer: &Sniffer, inputs: &[PathBuf], read_size: usize) -> Vec<ProbeReport> {
    tracing::debug!("嗅探 {} 个输入, 每个读取 {} 字节", inputs.len(), read_size);
    inputs
        .par_iter()
        .map(|path| probe_one(sniffer, path, read_size))
        .collect()
}

fn probe_one(sniffer: &Sniffer, path: &Path, read_size: usize) -> ProbeReport {
    let name = path.display().to_string();
    match input::read_input(path, read_size) {
        Ok(data) => {
            let format = sniffer.detect(&data).map(FormatInfo::from);
            match &format {
                Some(info) => tracing::info!("{name}: {}", info.mime_type),
                None => tracing::info!("{name}: 未识别"),
            }
            ProbeReport {
                input: name,
                bytes_read: data.len(),
                format,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!("{name}: {e:#}");
            ProbeReport {
                input: name,
                bytes_read: 0,
                format: None,
                error: Some(format!("{e:#}")),
            }
        }
    }
}

fn exit_code(reports: &[ProbeReport]) -> i32 {
    if reports.iter().any(|r| r.error.is_some()) {
        EXIT_FAILURE
    } else if reports.iter().any(|r| r.format.is_none()) {
        EXIT_UNRECOGNIZED
    } else {
        EXIT_OK
    }
}

fn print_reports(reports: &[ProbeReport], cli: &Cli) {
    if cli.json {
        match serde_json::to_string_pretty(reports) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("错误: JSON 序列化失败: {e}"),
        }
        return;
    }

    for report in reports {
        let line = match (&report.format, &report.error) {
            (_, Some(error)) => format!("错误: {error}"),
            (Some(info), None) if cli.mime => info.mime_type.to_string(),
            (Some(info), None) => format!("{} ({}, {})", info.mime_type, info.name, info.category),
            (None, None) if cli.mime => "application/octet-stream".to_string(),
            (None, None) => "未识别".to_string(),
        };
        if cli.inputs.len() > 1 || !cli.mime {
            println!("{}: {line}", report.input);
        } else {
            println!("{line}");
        }
    }
}

fn print_catalog(sniffer: &Sniffer, json: bool) {
    let entries: Vec<CatalogEntry> = sniffer
        .catalog()
        .iter()
        .map(|spec| CatalogEntry {
            category: spec.category().name(),
            name: spec.format().name(),
            mime_type: spec.format().mime_type(),
            required_len: spec.required_len(),
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("错误: JSON 序列化失败: {e}"),
        }
        return;
    }

    for entry in &entries {
        println!(
            "{:8} {:8} {:4}  {}",
            entry.category, entry.name, entry.required_len, entry.mime_type
        );
    }
}

fn print_banner() {
    println!(
        "jian-probe 版本 {} -- 纯 Rust 格式嗅探工具",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("用法: jian-probe [选项] <输入文件>...");
    println!();
    println!("选项:");
    println!("  --json            以 JSON 格式输出");
    println!("  --mime            只输出媒体类型");
    println!("  --list            列出支持的格式");
    println!("  --self-check      执行格式目录自检");
    println!("  --read-size <N>   每个输入读取的字节数 (默认 {PROBE_READ_SIZE})");
    println!("  --log-dir <DIR>   写入日志文件");
    println!("  -v, -vv           提高日志级别");
    println!();
    println!("使用 --help 查看完整用法.");
}
