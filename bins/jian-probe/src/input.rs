//! 输入读取.
//!
//! 只读取每个输入开头的有限字节, 交给嗅探器.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use jian_core::JianResult;

/// 表示标准输入的路径
pub const STDIN_PATH: &str = "-";

/// 从 reader 读取至多 `limit` 字节
pub fn read_prefix<R: Read>(reader: R, limit: usize) -> JianResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(limit.min(64 * 1024));
    reader.take(limit as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// 读取文件或标准输入的开头
pub fn read_input(path: &Path, limit: usize) -> Result<Vec<u8>> {
    if path.as_os_str() == STDIN_PATH {
        return read_prefix(io::stdin().lock(), limit).context("读取标准输入失败");
    }
    let file = File::open(path).with_context(|| format!("无法打开文件 '{}'", path.display()))?;
    read_prefix(file, limit).with_context(|| format!("读取文件失败 '{}'", path.display()))
}
